use std::collections::VecDeque;

use serenity::model::id::{ChannelId, MessageId};
use songbird::tracks::TrackHandle;
use tokio::sync::Mutex;
use tracing::info;

use super::embedded_messages::PlayerMessageData;
use super::library::Track;
use super::playback_queue::PlaybackQueue;
use super::player_state::{PlayerEvent, PlayerState};

/// The playback session for this process: the queue, the state machine, the
/// mode flags, and the play history, behind a single lock. Constructed once
/// in `main` and shared with every handler; torn down via [`reset`] when the
/// voice connection is released.
///
/// [`reset`]: PlayerSession::reset
pub struct PlayerSession {
    inner: Mutex<SessionInner>,
}

#[derive(Default)]
struct SessionInner {
    queue: PlaybackQueue,
    // Previously played tracks, most recent first
    history: VecDeque<Track>,
    state: PlayerState,
    looping: bool,
    shuffling: bool,
    current: Option<(TrackHandle, Track)>,
    controls_message: Option<(ChannelId, MessageId)>,
}

impl PlayerSession {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SessionInner::default()),
        }
    }

    /// Append tracks to the queue, preserving their order
    pub async fn enqueue_all(&self, tracks: Vec<Track>) {
        let mut inner = self.inner.lock().await;
        inner.queue.enqueue_all(tracks);
    }

    /// Drop the pending queue and replace it with a single track
    pub async fn replace_queue(&self, track: Track) {
        let mut inner = self.inner.lock().await;
        inner.queue.replace(track);
    }

    /// Append a track at the back of the queue (loop mode recycling)
    pub async fn requeue(&self, track: Track) {
        let mut inner = self.inner.lock().await;
        inner.queue.enqueue(track);
    }

    /// Reinsert a track at the head of the queue so it plays next
    pub async fn push_front(&self, track: Track) {
        let mut inner = self.inner.lock().await;
        inner.queue.push_front(track);
    }

    /// Remove and return the next track to play
    pub async fn dequeue_next(&self) -> Option<Track> {
        let mut inner = self.inner.lock().await;
        inner.queue.dequeue_next()
    }

    pub async fn queue_is_empty(&self) -> bool {
        let inner = self.inner.lock().await;
        inner.queue.is_empty()
    }

    pub async fn queue_len(&self) -> usize {
        let inner = self.inner.lock().await;
        inner.queue.len()
    }

    /// Record a track as playing and move the state machine along
    pub async fn begin_track(&self, handle: TrackHandle, track: Track) {
        let mut inner = self.inner.lock().await;
        inner.current = Some((handle, track));
        inner.state = inner.state.apply(PlayerEvent::TrackStarted);
    }

    /// Retire the current track into the history and apply the finish
    /// transition. Returns the finished track, if any.
    pub async fn finish_current(&self) -> Option<Track> {
        let mut inner = self.inner.lock().await;
        let finished = inner.current.take().map(|(_, track)| track);
        if let Some(track) = &finished {
            inner.history.push_front(track.clone());
        }
        let has_next = !inner.queue.is_empty();
        inner.state = inner.state.apply(PlayerEvent::TrackFinished { has_next });
        finished
    }

    /// The currently playing track and its handle
    pub async fn current(&self) -> Option<(TrackHandle, Track)> {
        let inner = self.inner.lock().await;
        inner.current.clone()
    }

    pub async fn state(&self) -> PlayerState {
        let inner = self.inner.lock().await;
        inner.state
    }

    /// Feed an event through the state machine
    pub async fn apply(&self, event: PlayerEvent) -> PlayerState {
        let mut inner = self.inner.lock().await;
        inner.state = inner.state.apply(event);
        inner.state
    }

    pub async fn is_looping(&self) -> bool {
        let inner = self.inner.lock().await;
        inner.looping
    }

    pub async fn toggle_loop(&self) -> bool {
        let mut inner = self.inner.lock().await;
        inner.looping = !inner.looping;
        info!("Loop mode: {}", inner.looping);
        inner.looping
    }

    pub async fn is_shuffling(&self) -> bool {
        let inner = self.inner.lock().await;
        inner.shuffling
    }

    /// Toggle shuffle mode. Enabling permutes the remaining queue once;
    /// disabling keeps the current order.
    pub async fn toggle_shuffle(&self) -> bool {
        let mut inner = self.inner.lock().await;
        inner.shuffling = !inner.shuffling;
        if inner.shuffling {
            inner.queue.shuffle(&mut rand::rng());
        }
        info!("Shuffle mode: {}", inner.shuffling);
        inner.shuffling
    }

    /// Pop the most recently played track off the history
    pub async fn pop_history(&self) -> Option<Track> {
        let mut inner = self.inner.lock().await;
        inner.history.pop_front()
    }

    pub async fn has_history(&self) -> bool {
        let inner = self.inner.lock().await;
        !inner.history.is_empty()
    }

    /// Remember where the controls message lives; returns the previous one
    /// so the caller can delete it.
    pub async fn set_controls_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Option<(ChannelId, MessageId)> {
        let mut inner = self.inner.lock().await;
        inner.controls_message.replace((channel_id, message_id))
    }

    /// Snapshot everything the controls message needs, under one lock
    pub async fn player_message_data(&self) -> PlayerMessageData {
        let inner = self.inner.lock().await;
        PlayerMessageData {
            current: inner.current.as_ref().map(|(_, track)| track.clone()),
            state: inner.state,
            queue: inner.queue.iter().cloned().collect(),
            looping: inner.looping,
            shuffling: inner.shuffling,
            has_history: !inner.history.is_empty(),
        }
    }

    /// Tear the session down after the voice connection is released
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.queue.clear();
        inner.history.clear();
        inner.current = None;
        inner.state = PlayerState::Idle;
        inner.looping = false;
        inner.shuffling = false;
        inner.controls_message = None;
    }
}

impl Default for PlayerSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn track(name: &str) -> Track {
        Track::from_path(PathBuf::from(name))
    }

    #[tokio::test]
    async fn replace_queue_swaps_pending_tracks() {
        let session = PlayerSession::new();
        session
            .enqueue_all(vec![track("a.mp3"), track("b.mp3")])
            .await;
        session.replace_queue(track("c.mp3")).await;

        assert_eq!(session.queue_len().await, 1);
        assert_eq!(session.dequeue_next().await, Some(track("c.mp3")));
    }

    #[tokio::test]
    async fn requeue_appends_behind_pending_tracks() {
        let session = PlayerSession::new();
        session.enqueue_all(vec![track("b.mp3")]).await;
        session.requeue(track("a.mp3")).await;

        assert_eq!(session.dequeue_next().await, Some(track("b.mp3")));
        assert_eq!(session.dequeue_next().await, Some(track("a.mp3")));
        assert_eq!(session.dequeue_next().await, None);
    }

    #[tokio::test]
    async fn empty_history_yields_nothing() {
        let session = PlayerSession::new();
        assert!(!session.has_history().await);
        assert_eq!(session.pop_history().await, None);
    }

    #[tokio::test]
    async fn toggle_shuffle_keeps_every_queued_track() {
        let session = PlayerSession::new();
        session
            .enqueue_all((0..16).map(|i| track(&format!("t{i:02}.mp3"))).collect())
            .await;

        assert!(session.toggle_shuffle().await);
        assert_eq!(session.queue_len().await, 16);
        assert!(!session.toggle_shuffle().await);
    }

    #[tokio::test]
    async fn reset_clears_queue_flags_and_state() {
        let session = PlayerSession::new();
        session.enqueue_all(vec![track("a.mp3")]).await;
        session.toggle_loop().await;
        session.toggle_shuffle().await;

        session.reset().await;

        assert!(session.queue_is_empty().await);
        assert!(!session.is_looping().await);
        assert!(!session.is_shuffling().await);
        assert_eq!(session.state().await, PlayerState::Idle);
    }
}

use std::sync::Arc;

use poise::serenity_prelude as serenity;
use serenity::all::CreateMessage;
use serenity::async_trait;
use songbird::input::File;
use songbird::tracks::PlayMode;
use songbird::{Event, EventContext, TrackEvent};
use tracing::{error, info, warn};

use crate::Error;
use crate::config::Config;

use super::embedded_messages;
use super::library::Track;
use super::music_manager::{MusicError, MusicManager};
use super::player_state::PlayerEvent;
use super::session::PlayerSession;

/// Event handler for when a song ends
pub struct SongEndNotifier {
    pub ctx: serenity::Context,
    pub session: Arc<PlayerSession>,
    pub config: Arc<Config>,
    pub call: Arc<serenity::prelude::Mutex<songbird::Call>>,
    pub track: Track,
}

#[async_trait]
impl songbird::EventHandler for SongEndNotifier {
    async fn act(&self, ctx: &EventContext<'_>) -> Option<Event> {
        if let EventContext::Track(track_list) = ctx {
            // Errored tracks are handled by TrackErrorNotifier and do not
            // advance the queue
            let finished = track_list
                .iter()
                .any(|(state, _)| matches!(&state.playing, PlayMode::End | PlayMode::Stop));
            if finished {
                self.handle_track_end().await;
            }
        }
        None
    }
}

impl SongEndNotifier {
    async fn handle_track_end(&self) {
        info!("Track ended: {}", self.track.title);

        if self.session.is_looping().await {
            self.session.requeue(self.track.clone()).await;
        }
        self.session.finish_current().await;

        let track_played =
            play_next_track(&self.ctx, &self.session, &self.config, self.call.clone())
                .await
                .unwrap_or_else(|e| {
                    error!("Failed to play next track: {}", e);
                    false
                });

        if !track_played {
            self.handle_empty_queue().await;
        }
    }

    async fn handle_empty_queue(&self) {
        info!("Queue is empty, stopping playback");

        if let Some(guild_id) = self.config.guild_id {
            if let Err(e) = MusicManager::leave_channel(&self.ctx, guild_id).await {
                warn!("Failed to leave voice channel: {}", e);
            }
        }
        self.session.reset().await;
    }
}

/// Logs playback failures. The queue does not advance past a failed track.
pub struct TrackErrorNotifier {
    pub track: Track,
}

#[async_trait]
impl songbird::EventHandler for TrackErrorNotifier {
    async fn act(&self, ctx: &EventContext<'_>) -> Option<Event> {
        if let EventContext::Track(track_list) = ctx {
            for (state, _handle) in *track_list {
                error!(
                    "Error playing {}: entered state {:?}",
                    self.track.title, state.playing
                );
            }
        }
        None
    }
}

/// Helper function to play the next track in the queue
/// Returns true if a track was played, false if the queue was empty
pub async fn play_next_track(
    ctx: &serenity::Context,
    session: &Arc<PlayerSession>,
    config: &Arc<Config>,
    call: Arc<serenity::prelude::Mutex<songbird::Call>>,
) -> Result<bool, Error> {
    let track = match session.dequeue_next().await {
        Some(track) => track,
        None => {
            info!("No more tracks in queue");
            return Ok(false);
        }
    };

    info!("Playing next track: {}", track.title);

    let input = File::new(track.path.clone());

    let track_handle = {
        let mut handler = call.lock().await;
        handler.play_input(input.into())
    };

    session.begin_track(track_handle.clone(), track.clone()).await;

    let _ = track_handle.add_event(
        Event::Track(TrackEvent::End),
        SongEndNotifier {
            ctx: ctx.clone(),
            session: Arc::clone(session),
            config: Arc::clone(config),
            call: call.clone(),
            track: track.clone(),
        },
    );
    let _ = track_handle.add_event(
        Event::Track(TrackEvent::Error),
        TrackErrorNotifier {
            track: track.clone(),
        },
    );

    announce_now_playing(ctx, config, &track).await;

    Ok(true)
}

/// Skip the current track, or start the queue when nothing is playing
pub async fn skip_to_next(
    ctx: &serenity::Context,
    session: &Arc<PlayerSession>,
    config: &Arc<Config>,
) -> Result<(), Error> {
    if let Some((handle, _)) = session.current().await {
        let has_next = !session.queue_is_empty().await;
        session.apply(PlayerEvent::Skip { has_next }).await;
        // Stopping fires the end-of-track event, which advances the queue
        handle.stop()?;
        return Ok(());
    }

    let guild_id = config
        .guild_id
        .ok_or(MusicError::ConfigMissing("GUILD_ID"))?;
    let call = MusicManager::get_call(ctx, guild_id).await?;
    play_next_track(ctx, session, config, call).await?;
    Ok(())
}

/// Announce the new track in the configured text channel
async fn announce_now_playing(ctx: &serenity::Context, config: &Arc<Config>, track: &Track) {
    let Some(channel_id) = config.text_channel_id else {
        warn!("TEXT_CHANNEL_ID is not set, skipping now-playing announcement");
        return;
    };

    let message = CreateMessage::new().embed(embedded_messages::now_playing(track));
    if let Err(e) = channel_id.send_message(&ctx.http, message).await {
        warn!("Failed to announce track in channel {}: {}", channel_id, e);
    }
}

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use super::library::Track;

/// FIFO queue of pending tracks. Insertion order is the play order; played
/// tracks leave the queue entirely (there is no cursor).
#[derive(Debug, Default)]
pub struct PlaybackQueue {
    tracks: VecDeque<Track>,
}

impl PlaybackQueue {
    pub fn new() -> Self {
        Self {
            tracks: VecDeque::new(),
        }
    }

    /// Append a track to the end of the queue
    pub fn enqueue(&mut self, track: Track) {
        self.tracks.push_back(track);
    }

    /// Append tracks to the end of the queue, preserving their order
    pub fn enqueue_all<I>(&mut self, tracks: I)
    where
        I: IntoIterator<Item = Track>,
    {
        self.tracks.extend(tracks);
    }

    /// Reinsert a track at the head of the queue so it plays next
    pub fn push_front(&mut self, track: Track) {
        self.tracks.push_front(track);
    }

    /// Drop everything queued and replace it with a single track
    pub fn replace(&mut self, track: Track) {
        self.tracks.clear();
        self.tracks.push_back(track);
    }

    /// Remove and return the next track to play
    pub fn dequeue_next(&mut self) -> Option<Track> {
        self.tracks.pop_front()
    }

    /// Permute the remaining queue in place (Fisher-Yates)
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.tracks.len() > 1 {
            self.tracks.make_contiguous().shuffle(rng);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;
    use std::path::PathBuf;

    fn track(name: &str) -> Track {
        Track::from_path(PathBuf::from(name))
    }

    fn titles(queue: &PlaybackQueue) -> Vec<String> {
        queue.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn dequeues_in_insertion_order() {
        let mut queue = PlaybackQueue::new();
        queue.enqueue_all(["a.mp3", "b.mp3", "c.mp3"].map(track));

        assert_eq!(queue.dequeue_next(), Some(track("a.mp3")));
        assert_eq!(titles(&queue), vec!["b.mp3", "c.mp3"]);
        assert_eq!(queue.dequeue_next(), Some(track("b.mp3")));
        assert_eq!(queue.dequeue_next(), Some(track("c.mp3")));
        assert!(queue.is_empty());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    fn any_dequeue_prefix_preserves_order(#[case] n: usize) {
        let names = ["a.mp3", "b.mp3", "c.mp3"];
        let mut queue = PlaybackQueue::new();
        queue.enqueue_all(names.map(track));

        for name in &names[..n] {
            assert_eq!(queue.dequeue_next(), Some(track(name)));
        }
        assert_eq!(queue.len(), names.len() - n);
    }

    #[test]
    fn dequeue_on_empty_returns_none() {
        let mut queue = PlaybackQueue::new();
        assert_eq!(queue.dequeue_next(), None);
    }

    #[test]
    fn replace_drops_pending_tracks() {
        let mut queue = PlaybackQueue::new();
        queue.enqueue_all(["a.mp3", "b.mp3"].map(track));
        queue.replace(track("c.mp3"));

        assert_eq!(titles(&queue), vec!["c.mp3"]);
    }

    #[test]
    fn push_front_plays_before_pending_tracks() {
        let mut queue = PlaybackQueue::new();
        queue.enqueue(track("b.mp3"));
        queue.push_front(track("a.mp3"));

        assert_eq!(queue.dequeue_next(), Some(track("a.mp3")));
        assert_eq!(queue.dequeue_next(), Some(track("b.mp3")));
    }

    #[test]
    fn shuffle_preserves_the_multiset() {
        let mut queue = PlaybackQueue::new();
        queue.enqueue_all((0..20).map(|i| track(&format!("t{i:02}.mp3"))));
        let mut expected = titles(&queue);
        expected.sort();

        queue.shuffle(&mut StdRng::seed_from_u64(7));

        assert_eq!(queue.len(), 20);
        let mut shuffled = titles(&queue);
        shuffled.sort();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn shuffle_reorders_the_queue() {
        let mut queue = PlaybackQueue::new();
        queue.enqueue_all((0..20).map(|i| track(&format!("t{i:02}.mp3"))));
        let before = titles(&queue);

        queue.shuffle(&mut StdRng::seed_from_u64(7));

        assert_ne!(titles(&queue), before);
    }
}

/// Playback lifecycle, driven by explicit events instead of ad-hoc flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Playing,
    Paused,
}

/// Events that move the player between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    TrackStarted,
    TrackFinished { has_next: bool },
    Pause,
    Resume,
    Skip { has_next: bool },
}

impl PlayerState {
    /// Transition function. Events that make no sense in the current state
    /// leave it unchanged.
    pub fn apply(self, event: PlayerEvent) -> PlayerState {
        use PlayerEvent::*;
        use PlayerState::*;

        match (self, event) {
            (_, TrackStarted) => Playing,
            (Playing | Paused, TrackFinished { has_next } | Skip { has_next }) => {
                if has_next { Playing } else { Idle }
            }
            (Playing, Pause) => Paused,
            (Paused, Resume) => Playing,
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(PlayerState::Idle, PlayerEvent::TrackStarted, PlayerState::Playing; "idle starts playing")]
    #[test_case(PlayerState::Paused, PlayerEvent::TrackStarted, PlayerState::Playing; "new track clears a pause")]
    #[test_case(PlayerState::Playing, PlayerEvent::Pause, PlayerState::Paused; "pause while playing")]
    #[test_case(PlayerState::Paused, PlayerEvent::Pause, PlayerState::Paused; "pause is idempotent")]
    #[test_case(PlayerState::Idle, PlayerEvent::Pause, PlayerState::Idle; "pause in idle is ignored")]
    #[test_case(PlayerState::Paused, PlayerEvent::Resume, PlayerState::Playing; "resume while paused")]
    #[test_case(PlayerState::Playing, PlayerEvent::Resume, PlayerState::Playing; "resume while playing is ignored")]
    #[test_case(PlayerState::Idle, PlayerEvent::Resume, PlayerState::Idle; "resume in idle is ignored")]
    #[test_case(PlayerState::Playing, PlayerEvent::TrackFinished { has_next: true }, PlayerState::Playing; "finished with next keeps playing")]
    #[test_case(PlayerState::Playing, PlayerEvent::TrackFinished { has_next: false }, PlayerState::Idle; "finished with empty queue goes idle")]
    #[test_case(PlayerState::Paused, PlayerEvent::TrackFinished { has_next: false }, PlayerState::Idle; "finished while paused goes idle")]
    #[test_case(PlayerState::Idle, PlayerEvent::TrackFinished { has_next: true }, PlayerState::Idle; "finished in idle is ignored")]
    #[test_case(PlayerState::Playing, PlayerEvent::Skip { has_next: true }, PlayerState::Playing; "skip with next keeps playing")]
    #[test_case(PlayerState::Playing, PlayerEvent::Skip { has_next: false }, PlayerState::Idle; "skip with empty queue goes idle")]
    #[test_case(PlayerState::Paused, PlayerEvent::Skip { has_next: true }, PlayerState::Playing; "skip while paused resumes playing")]
    #[test_case(PlayerState::Idle, PlayerEvent::Skip { has_next: true }, PlayerState::Idle; "skip in idle is ignored")]
    fn transitions(state: PlayerState, event: PlayerEvent, expected: PlayerState) {
        assert_eq!(state.apply(event), expected);
    }
}

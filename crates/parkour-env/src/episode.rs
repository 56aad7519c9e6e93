//! Episode lifecycle tracking.
//!
//! One episode runs from `begin` until a terminal or truncation signal.
//! The tracker owns the step counter and accumulated score; termination
//! itself is decided by the controllers.

// ---------------------------------------------------------------------------
// EpisodeState
// ---------------------------------------------------------------------------

/// Lifecycle state of an episode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EpisodeState {
    /// Before the first reset.
    #[default]
    Idle,
    /// Actively stepping.
    Running,
    /// Ended by a terminal condition (goal reached, fell off, killed).
    Done,
    /// Ended by the step limit.
    Truncated,
}

impl EpisodeState {
    /// Finished, either way.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Truncated)
    }

    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

// ---------------------------------------------------------------------------
// Episode
// ---------------------------------------------------------------------------

/// Step count, score, and lifecycle state of the current episode.
#[derive(Clone, Debug, Default)]
pub struct Episode {
    /// Current lifecycle state.
    pub state: EpisodeState,
    /// Steps taken this episode.
    pub steps: u32,
    /// Accumulated reward this episode.
    pub score: f32,
    /// Seed used for this episode (set on begin).
    pub seed: Option<u64>,
    /// Episodes started since construction.
    pub index: u32,
}

impl Episode {
    /// Start a fresh episode, entering `Running`.
    pub const fn begin(&mut self, seed: Option<u64>) {
        self.state = EpisodeState::Running;
        self.steps = 0;
        self.score = 0.0;
        self.seed = seed;
        self.index += 1;
    }

    /// Count one step and fold in its reward. Returns `false` when the
    /// episode is not running (the step is ignored).
    pub fn record(&mut self, reward: f32) -> bool {
        if self.state != EpisodeState::Running {
            return false;
        }
        self.steps += 1;
        self.score += reward;
        true
    }

    /// End by terminal condition.
    pub const fn terminate(&mut self) {
        self.state = EpisodeState::Done;
    }

    /// End by step limit.
    pub const fn truncate(&mut self) {
        self.state = EpisodeState::Truncated;
    }

    /// Whether the step limit has been reached. `0` means no limit.
    #[must_use]
    pub fn over_limit(&self, max_steps: u32) -> bool {
        max_steps > 0 && self.steps >= max_steps && self.state == EpisodeState::Running
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.is_running()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let ep = Episode::default();
        assert_eq!(ep.state, EpisodeState::Idle);
        assert_eq!(ep.steps, 0);
        assert!(ep.score.abs() < f32::EPSILON);
        assert!(ep.seed.is_none());
        assert_eq!(ep.index, 0);
    }

    #[test]
    fn begin_enters_running() {
        let mut ep = Episode::default();
        ep.begin(Some(42));
        assert!(ep.is_running());
        assert_eq!(ep.seed, Some(42));
        assert_eq!(ep.index, 1);
    }

    #[test]
    fn record_accumulates() {
        let mut ep = Episode::default();
        ep.begin(None);
        assert!(ep.record(1.5));
        assert!(ep.record(-0.5));
        assert_eq!(ep.steps, 2);
        assert!((ep.score - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn record_ignored_when_not_running() {
        let mut ep = Episode::default();
        assert!(!ep.record(1.0)); // Idle
        ep.begin(None);
        ep.terminate();
        assert!(!ep.record(1.0)); // Done
        assert_eq!(ep.steps, 0);
    }

    #[test]
    fn terminate_and_truncate() {
        let mut ep = Episode::default();
        ep.begin(None);
        ep.terminate();
        assert_eq!(ep.state, EpisodeState::Done);
        assert!(ep.is_done());

        ep.begin(None);
        ep.truncate();
        assert_eq!(ep.state, EpisodeState::Truncated);
        assert!(ep.is_done());
    }

    #[test]
    fn over_limit_at_max_steps() {
        let mut ep = Episode::default();
        ep.begin(None);
        for _ in 0..9 {
            ep.record(0.0);
        }
        assert!(!ep.over_limit(10));
        ep.record(0.0);
        assert!(ep.over_limit(10));
    }

    #[test]
    fn over_limit_zero_means_unlimited() {
        let mut ep = Episode::default();
        ep.begin(None);
        for _ in 0..5000 {
            ep.record(0.0);
        }
        assert!(!ep.over_limit(0));
    }

    #[test]
    fn begin_clears_previous_score() {
        let mut ep = Episode::default();
        ep.begin(None);
        ep.record(100.0);
        ep.begin(None);
        assert!(ep.score.abs() < f32::EPSILON);
        assert_eq!(ep.steps, 0);
        assert_eq!(ep.index, 2);
    }

    #[test]
    fn terminal_state_flags() {
        assert!(!EpisodeState::Idle.is_terminal());
        assert!(!EpisodeState::Running.is_terminal());
        assert!(EpisodeState::Done.is_terminal());
        assert!(EpisodeState::Truncated.is_terminal());
    }
}

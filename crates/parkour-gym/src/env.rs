//! Gymnasium-style environment wrapper.
//!
//! [`GymEnv`] drives a controller and world step-by-step, exposing the
//! standard `reset`/`step` API that training loops expect. Contact events
//! from the host's physics layer are queued with
//! [`push_contact`](GymEnv::push_contact) and folded into the next step.

use parkour_core::config::EnvConfig;
use parkour_core::seed::SeedTree;
use parkour_core::types::{
    ActionCommand, ActionSpace, ObservationSpace, ResetInfo, ResetResult, StepInfo, StepResult,
};
use parkour_env::body::HostBody;
use parkour_env::controller::Controller;
use parkour_env::episode::{Episode, EpisodeState};
use parkour_env::scene::ContactEvent;
use parkour_env::world::PlatformWorld;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ---------------------------------------------------------------------------
// GymEnv
// ---------------------------------------------------------------------------

/// Gymnasium-compatible environment around one controller and world.
///
/// Owns the [`PlatformWorld`] and [`Episode`] tracker. Each call to
/// [`step`](Self::step) applies an action through the controller, drains
/// any queued contact events, then reads the observation and episode
/// state.
pub struct GymEnv<C, B>
where
    C: Controller<B>,
    B: HostBody,
{
    world: PlatformWorld<B>,
    controller: C,
    episode: Episode,
    cfg: EnvConfig,
    seeds: SeedTree,
    pending_contacts: Vec<ContactEvent>,
}

impl<C, B> GymEnv<C, B>
where
    C: Controller<B>,
    B: HostBody,
{
    /// Create a new environment. Call [`reset`](Self::reset) before the
    /// first [`step`](Self::step).
    #[must_use]
    pub fn new(controller: C, body: B, cfg: EnvConfig) -> Self {
        let seeds = SeedTree::new(cfg.seed);
        Self {
            world: PlatformWorld::new(body),
            controller,
            episode: Episode::default(),
            cfg,
            seeds,
            pending_contacts: Vec::new(),
        }
    }

    /// Observation space descriptor: 8 unbounded floats.
    #[must_use]
    pub fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::Box {
            low: vec![f32::NEG_INFINITY; 8],
            high: vec![f32::INFINITY; 8],
        }
    }

    /// Action space descriptor. Continuous components are nominally
    /// `[-1, 1]`; the jump slot, when present, is `[0, 1]`.
    #[must_use]
    pub fn action_space(&self) -> ActionSpace {
        let dim = self.controller.action_dim();
        let mut low = vec![-1.0; dim];
        let high = vec![1.0; dim];
        if dim >= 3 {
            low[2] = 0.0;
        }
        ActionSpace::Box { low, high }
    }

    /// Start a new episode, optionally with an explicit seed.
    ///
    /// Without one, the seed is derived from the run seed and the episode
    /// index, so whole runs replay from a single root value. The seed
    /// actually used is reported in the result's info.
    pub fn reset(&mut self, seed: Option<u64>) -> ResetResult {
        let used = seed.unwrap_or_else(|| self.seeds.episode_seed(u64::from(self.episode.index)));
        self.episode.begin(Some(used));
        self.pending_contacts.clear();

        let mut rng = ChaCha8Rng::seed_from_u64(used);
        self.controller.reset(&mut self.world, &mut rng);

        tracing::debug!(
            episode = self.episode.index,
            seed = used,
            controller = self.controller.name(),
            "episode reset"
        );
        ResetResult {
            observation: self.controller.observe(&self.world),
            info: ResetInfo { seed: Some(used) },
        }
    }

    /// Take one step with the given action.
    ///
    /// Runs the controller, folds in queued contact events additively,
    /// then advances the episode tracker and checks the step limit.
    /// Stepping a finished episode is a no-op that re-reports the final
    /// flags.
    pub fn step(&mut self, action: &ActionCommand) -> StepResult {
        if !self.episode.is_running() {
            tracing::warn!(
                state = ?self.episode.state,
                "step called on a finished episode, call reset first"
            );
            return self.result(0.0);
        }

        let mut outcome = self.controller.step(&mut self.world, action);
        for event in std::mem::take(&mut self.pending_contacts) {
            let contact = self.controller.on_contact(&mut self.world, event);
            outcome.reward += contact.reward;
            outcome.terminated |= contact.terminated;
        }

        self.episode.record(outcome.reward);
        if outcome.terminated {
            self.episode.terminate();
        } else if self.episode.over_limit(self.cfg.max_episode_steps) {
            self.episode.truncate();
        }

        self.result(outcome.reward)
    }

    /// Queue a contact event for the next [`step`](Self::step).
    pub fn push_contact(&mut self, event: ContactEvent) {
        self.pending_contacts.push(event);
    }

    /// The current episode tracker.
    #[must_use]
    pub const fn episode(&self) -> &Episode {
        &self.episode
    }

    /// The environment configuration.
    #[must_use]
    pub const fn config(&self) -> &EnvConfig {
        &self.cfg
    }

    /// Read-only access to the world.
    #[must_use]
    pub const fn world(&self) -> &PlatformWorld<B> {
        &self.world
    }

    /// Mutable access to the world, for host-side body updates and
    /// entity spawning between steps.
    pub const fn world_mut(&mut self) -> &mut PlatformWorld<B> {
        &mut self.world
    }

    /// The wrapped controller.
    #[must_use]
    pub const fn controller(&self) -> &C {
        &self.controller
    }

    fn result(&self, reward: f32) -> StepResult {
        StepResult {
            observation: self.controller.observe(&self.world),
            reward,
            terminated: self.episode.state == EpisodeState::Done,
            truncated: self.episode.state == EpisodeState::Truncated,
            info: StepInfo {
                episode_length: self.episode.steps,
                episode_reward: self.episode.score,
                distance_to_goal: self.world.distance_to_goal(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

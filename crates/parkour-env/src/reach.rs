//! Goal-reach variant: free planar movement toward a randomized goal.
//!
//! The simplest of the two controllers. Both continuous action
//! components become force; the only rewards are the two terminal ones
//! (goal reached, fell off). No jump, no shaping, no contacts.

use glam::Vec2;
use parkour_core::config::EnvConfig;
use parkour_core::types::{ActionCommand, StepOutcome};
use rand_chacha::ChaCha8Rng;

use crate::body::HostBody;
use crate::controller::{Controller, check_terminal, place_agent_and_goal};
use crate::world::PlatformWorld;

/// Episode controller for the goal-reach variant.
#[derive(Debug, Clone)]
pub struct ReachAgent {
    cfg: EnvConfig,
}

impl ReachAgent {
    #[must_use]
    pub const fn new(cfg: EnvConfig) -> Self {
        Self { cfg }
    }

    #[must_use]
    pub const fn config(&self) -> &EnvConfig {
        &self.cfg
    }
}

impl<B: HostBody> Controller<B> for ReachAgent {
    fn reset(&mut self, world: &mut PlatformWorld<B>, rng: &mut ChaCha8Rng) {
        world.scene.clear();
        place_agent_and_goal(world, &self.cfg, rng);
    }

    fn step(&mut self, world: &mut PlatformWorld<B>, action: &ActionCommand) -> StepOutcome {
        world
            .agent
            .apply_force(Vec2::new(action.move_x, action.move_y) * self.cfg.move_speed);
        world.agent.integrate(self.cfg.dt);

        let mut outcome = StepOutcome::default();
        check_terminal(world, &self.cfg, &mut outcome);

        tracing::trace!(
            move_x = action.move_x,
            move_y = action.move_y,
            distance = world.distance_to_goal(),
            reward = outcome.reward,
            "reach step"
        );
        outcome
    }

    fn action_dim(&self) -> usize {
        2
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "ReachAgent"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! The episode controller seam.
//!
//! A [`Controller`] owns the per-episode scalar trackers (idle counter,
//! last position) and the reward/termination logic; all world mutation
//! goes through the [`PlatformWorld`] passed into each call. The host
//! driver invokes `step` once per tick and forwards contact events as
//! its physics layer delivers them.

use glam::{Vec2, Vec3};
use parkour_core::config::EnvConfig;
use parkour_core::types::{ActionCommand, Observation, StepOutcome};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::body::HostBody;
use crate::scene::ContactEvent;
use crate::world::PlatformWorld;

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// One platformer agent variant.
pub trait Controller<B: HostBody> {
    /// Reset world and internal trackers for a new episode.
    fn reset(&mut self, world: &mut PlatformWorld<B>, rng: &mut ChaCha8Rng);

    /// Produce the 8-float observation: agent position (3), goal
    /// position (3), agent velocity (2). Pure read, no side effects.
    fn observe(&self, world: &PlatformWorld<B>) -> Observation {
        let pos = world.agent.position();
        let goal = world.goal;
        let vel = world.agent.velocity();
        Observation::new(vec![
            pos.x, pos.y, pos.z, goal.x, goal.y, goal.z, vel.x, vel.y,
        ])
    }

    /// Apply one action, advance the body, and score the tick.
    fn step(&mut self, world: &mut PlatformWorld<B>, action: &ActionCommand) -> StepOutcome;

    /// Handle a contact event delivered by the host's physics layer.
    /// The default ignores contacts (the reach variant has none).
    fn on_contact(&mut self, world: &mut PlatformWorld<B>, event: ContactEvent) -> StepOutcome {
        let _ = (world, event);
        StepOutcome::default()
    }

    /// Flat action dimensionality at the policy boundary (2, or 3 with
    /// the jump slot).
    fn action_dim(&self) -> usize;

    /// Human-readable variant name.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Shared reset / termination logic
// ---------------------------------------------------------------------------

/// Place the agent at the spawn point with zero velocity and randomize
/// the goal uniformly within the configured range.
pub fn place_agent_and_goal<B: HostBody>(
    world: &mut PlatformWorld<B>,
    cfg: &EnvConfig,
    rng: &mut ChaCha8Rng,
) {
    world
        .agent
        .set_position(Vec3::from_array(cfg.spawn));
    world.agent.set_velocity(Vec2::ZERO);
    world.goal = Vec3::new(
        rng.gen_range(cfg.goal_range_x[0]..=cfg.goal_range_x[1]),
        cfg.goal_height,
        rng.gen_range(cfg.goal_range_z[0]..=cfg.goal_range_z[1]),
    );
}

/// Evaluate the two terminal conditions for this tick.
///
/// Both are checked every tick in a fixed order; when both fire at once
/// the fall reward overwrites the goal reward (last write wins) and the
/// tick is terminal.
pub fn check_terminal<B: HostBody>(
    world: &PlatformWorld<B>,
    cfg: &EnvConfig,
    outcome: &mut StepOutcome,
) {
    let distance = world.distance_to_goal();
    if distance < cfg.goal_radius {
        outcome.reward = 1.0;
        outcome.terminated = true;
        tracing::debug!(distance, "reached the goal, reward 1.0");
    }
    if world.agent.position().y < cfg.fall_height {
        outcome.reward = -1.0;
        outcome.terminated = true;
        tracing::debug!(y = world.agent.position().y, "fell off platform, penalty -1.0");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

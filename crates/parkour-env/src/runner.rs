//! Side-scroller variant: horizontal force, jump, progress shaping, and
//! enemy/token contacts.
//!
//! Extends the reach semantics with everything a platformer level needs:
//! only `move_x` becomes force, `jump` fires a vertical impulse when the
//! agent looks grounded, and per-tick shaping nudges the agent along +x.

use glam::Vec2;
use parkour_core::config::EnvConfig;
use parkour_core::types::{ActionCommand, StepOutcome};
use rand_chacha::ChaCha8Rng;

use crate::body::HostBody;
use crate::controller::{Controller, check_terminal, place_agent_and_goal};
use crate::scene::{ContactEvent, ContactPhase, EntityKind};
use crate::world::PlatformWorld;

/// Episode controller for the side-scroller variant.
#[derive(Debug, Clone)]
pub struct RunnerAgent {
    cfg: EnvConfig,
    last_x: f32,
    idle_ticks: u32,
}

impl RunnerAgent {
    #[must_use]
    pub const fn new(cfg: EnvConfig) -> Self {
        let spawn_x = cfg.spawn[0];
        Self {
            cfg,
            last_x: spawn_x,
            idle_ticks: 0,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &EnvConfig {
        &self.cfg
    }

    /// Whether the agent counts as grounded for the jump check.
    ///
    /// Known limitation, kept on purpose: this is a near-zero
    /// vertical-speed proxy, not contact sensing. An agent falling
    /// slowly may jump mid-air, and one pressed against a ceiling may
    /// pass the check while unable to leave the ground.
    fn looks_grounded<B: HostBody>(&self, world: &PlatformWorld<B>) -> bool {
        world.agent.velocity().y.abs() < self.cfg.ground_speed_epsilon
    }

    /// Progress/idle shaping for this tick, applied additively on top of
    /// whatever the terminal checks set.
    fn shape_progress(&mut self, x: f32, outcome: &mut StepOutcome) {
        if x < self.last_x {
            outcome.reward -= self.cfg.backward_penalty;
            self.idle_ticks = 0;
        } else if x > self.last_x {
            outcome.reward += self.cfg.forward_bonus;
            self.idle_ticks = 0;
        } else {
            self.idle_ticks += 1;
            if self.idle_ticks >= self.cfg.idle_limit {
                outcome.reward -= self.cfg.idle_penalty;
                self.idle_ticks = 0;
            }
        }
    }
}

impl<B: HostBody> Controller<B> for RunnerAgent {
    fn reset(&mut self, world: &mut PlatformWorld<B>, rng: &mut ChaCha8Rng) {
        world.scene.clear();
        place_agent_and_goal(world, &self.cfg, rng);
        self.last_x = self.cfg.spawn[0];
        self.idle_ticks = 0;
    }

    fn step(&mut self, world: &mut PlatformWorld<B>, action: &ActionCommand) -> StepOutcome {
        world
            .agent
            .apply_force(Vec2::new(action.move_x, 0.0) * self.cfg.move_speed);

        if action.jump && self.looks_grounded(world) {
            world
                .agent
                .apply_impulse(Vec2::new(0.0, self.cfg.jump_impulse));
        }

        world.agent.integrate(self.cfg.dt);

        let mut outcome = StepOutcome::default();
        check_terminal(world, &self.cfg, &mut outcome);

        let x = world.agent.position().x;
        self.shape_progress(x, &mut outcome);
        self.last_x = x;

        tracing::trace!(
            move_x = action.move_x,
            jump = action.jump,
            distance = world.distance_to_goal(),
            reward = outcome.reward,
            idle_ticks = self.idle_ticks,
            "runner step"
        );
        outcome
    }

    fn on_contact(&mut self, world: &mut PlatformWorld<B>, event: ContactEvent) -> StepOutcome {
        // Stale events for despawned entities carry no reward.
        if !world.scene.is_alive(event.entity) {
            return StepOutcome::default();
        }
        match (event.kind, event.phase) {
            (EntityKind::Enemy, ContactPhase::Solid) => {
                // The agent dies; the enemy stays in play.
                tracing::debug!(entity = event.entity.0, "hit an enemy, penalty -1.0");
                StepOutcome::terminal(-1.0)
            }
            (EntityKind::Enemy, ContactPhase::Trigger) => {
                // Landed on top: the enemy dies instead.
                world.scene.despawn(event.entity);
                tracing::debug!(entity = event.entity.0, "stomped an enemy, reward 0.5");
                StepOutcome::running(0.5)
            }
            (EntityKind::Token, _) => {
                world.scene.despawn(event.entity);
                tracing::debug!(entity = event.entity.0, "collected a token, reward 0.5");
                StepOutcome::running(0.5)
            }
        }
    }

    fn action_dim(&self) -> usize {
        3
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "RunnerAgent"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::PointMass;
    use glam::Vec3;
    use rand::SeedableRng;

    fn setup() -> (RunnerAgent, PlatformWorld<PointMass>, ChaCha8Rng) {
        let agent = RunnerAgent::new(EnvConfig::default());
        let world = PlatformWorld::new(PointMass::new());
        let rng = ChaCha8Rng::seed_from_u64(11);
        (agent, world, rng)
    }

    /// Reset and park the goal far away so termination stays out of the way.
    fn setup_running() -> (RunnerAgent, PlatformWorld<PointMass>) {
        let (mut agent, mut world, mut rng) = setup();
        agent.reset(&mut world, &mut rng);
        world.goal = Vec3::new(50.0, 1.0, 0.0);
        (agent, world)
    }

    // ---- movement ----

    #[test]
    fn force_is_horizontal_only() {
        let (mut agent, mut world) = setup_running();
        agent.step(&mut world, &ActionCommand::new(1.0, 1.0));
        let vel = world.agent.velocity();
        assert!(vel.x > 0.0);
        assert!(vel.y.abs() < f32::EPSILON);
    }

    // ---- jump ----

    #[test]
    fn jump_fires_when_grounded() {
        let (mut agent, mut world) = setup_running();
        agent.step(&mut world, &ActionCommand::ZERO.with_jump(true));
        assert!((world.agent.velocity().y - 6.0).abs() < f32::EPSILON);
    }

    #[test]
    fn jump_blocked_while_moving_vertically() {
        let (mut agent, mut world) = setup_running();
        agent.step(&mut world, &ActionCommand::ZERO.with_jump(true));
        let vy = world.agent.velocity().y;
        // Second request mid-flight is ignored.
        agent.step(&mut world, &ActionCommand::ZERO.with_jump(true));
        assert!((world.agent.velocity().y - vy).abs() < f32::EPSILON);
    }

    #[test]
    fn jump_allowed_when_falling_slowly() {
        // The documented ground-check misfire: slow fall passes the proxy.
        let (mut agent, mut world) = setup_running();
        world.agent.set_velocity(Vec2::new(0.0, -0.01));
        agent.step(&mut world, &ActionCommand::ZERO.with_jump(true));
        assert!(world.agent.velocity().y > 5.0);
    }

    // ---- shaping ----

    #[test]
    fn forward_movement_earns_bonus() {
        let (mut agent, mut world) = setup_running();
        world.agent.set_velocity(Vec2::new(1.0, 0.0));
        let outcome = agent.step(&mut world, &ActionCommand::ZERO);
        assert!(!outcome.terminated);
        assert!((outcome.reward - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn backward_movement_costs_penalty() {
        let (mut agent, mut world) = setup_running();
        world.agent.set_velocity(Vec2::new(-1.0, 0.0));
        let outcome = agent.step(&mut world, &ActionCommand::ZERO);
        assert!(!outcome.terminated);
        assert!((outcome.reward - (-0.1)).abs() < f32::EPSILON);
    }

    #[test]
    fn idle_penalty_on_third_tick_then_counter_restarts() {
        let (mut agent, mut world) = setup_running();

        let r1 = agent.step(&mut world, &ActionCommand::ZERO);
        let r2 = agent.step(&mut world, &ActionCommand::ZERO);
        let r3 = agent.step(&mut world, &ActionCommand::ZERO);
        assert!(r1.reward.abs() < f32::EPSILON);
        assert!(r2.reward.abs() < f32::EPSILON);
        assert!((r3.reward - (-0.2)).abs() < f32::EPSILON);

        // Counter reset: the fourth unchanged tick starts a new count.
        let r4 = agent.step(&mut world, &ActionCommand::ZERO);
        let r5 = agent.step(&mut world, &ActionCommand::ZERO);
        let r6 = agent.step(&mut world, &ActionCommand::ZERO);
        assert!(r4.reward.abs() < f32::EPSILON);
        assert!(r5.reward.abs() < f32::EPSILON);
        assert!((r6.reward - (-0.2)).abs() < f32::EPSILON);
    }

    #[test]
    fn movement_resets_idle_counter() {
        let (mut agent, mut world) = setup_running();
        agent.step(&mut world, &ActionCommand::ZERO);
        agent.step(&mut world, &ActionCommand::ZERO);
        // Move, clearing the two accumulated idle ticks.
        world.agent.set_velocity(Vec2::new(1.0, 0.0));
        agent.step(&mut world, &ActionCommand::ZERO);
        world.agent.set_velocity(Vec2::ZERO);
        // Two more idle ticks: still no penalty.
        let r1 = agent.step(&mut world, &ActionCommand::ZERO);
        let r2 = agent.step(&mut world, &ActionCommand::ZERO);
        assert!(r1.reward.abs() < f32::EPSILON);
        assert!(r2.reward.abs() < f32::EPSILON);
    }

    // ---- termination ----

    #[test]
    fn reaches_goal_running_forward() {
        let (mut agent, mut world, mut rng) = setup();
        agent.reset(&mut world, &mut rng);
        world.goal = Vec3::new(5.0, 1.0, 0.0);

        let mut terminal = None;
        for _ in 0..300 {
            let outcome = agent.step(&mut world, &ActionCommand::new(1.0, 0.0));
            if outcome.terminated {
                terminal = Some(outcome);
                break;
            }
        }
        let outcome = terminal.expect("goal should be reached within 300 steps");
        // Terminal +1.0 plus the forward shaping earned on the same tick.
        assert!((outcome.reward - 1.1).abs() < 1e-5);
    }

    #[test]
    fn fall_terminates_regardless_of_x_movement() {
        let (mut agent, mut world) = setup_running();
        world.agent.set_position(Vec3::new(0.0, -1.5, 0.0));
        world.agent.set_velocity(Vec2::new(1.0, 0.0));
        let outcome = agent.step(&mut world, &ActionCommand::ZERO);
        assert!(outcome.terminated);
        // -1.0 terminal, +0.1 forward shaping folded in additively.
        assert!((outcome.reward - (-0.9)).abs() < 1e-5);
    }

    #[test]
    fn fall_with_no_movement_is_exactly_minus_one() {
        let (mut agent, mut world) = setup_running();
        world.agent.set_position(Vec3::new(0.0, -1.5, 0.0));
        let outcome = agent.step(&mut world, &ActionCommand::ZERO);
        assert!(outcome.terminated);
        assert!((outcome.reward - (-1.0)).abs() < f32::EPSILON);
    }

    // ---- contacts ----

    #[test]
    fn enemy_solid_contact_kills_agent() {
        let (mut agent, mut world) = setup_running();
        let enemy = world.scene.spawn(EntityKind::Enemy, Vec3::new(1.0, 1.0, 0.0));

        let outcome = agent.on_contact(
            &mut world,
            ContactEvent::new(enemy, EntityKind::Enemy, ContactPhase::Solid),
        );
        assert!(outcome.terminated);
        assert!((outcome.reward - (-1.0)).abs() < f32::EPSILON);
        // The enemy survives; the agent is the one that died.
        assert!(world.scene.is_alive(enemy));
    }

    #[test]
    fn enemy_trigger_contact_stomps_enemy() {
        let (mut agent, mut world) = setup_running();
        let enemy = world.scene.spawn(EntityKind::Enemy, Vec3::new(1.0, 1.0, 0.0));

        let outcome = agent.on_contact(
            &mut world,
            ContactEvent::new(enemy, EntityKind::Enemy, ContactPhase::Trigger),
        );
        assert!(!outcome.terminated);
        assert!((outcome.reward - 0.5).abs() < f32::EPSILON);
        assert!(!world.scene.is_alive(enemy));
    }

    #[test]
    fn token_contact_collects_token() {
        let (mut agent, mut world) = setup_running();
        let token = world.scene.spawn(EntityKind::Token, Vec3::new(2.0, 1.0, 0.0));

        let outcome = agent.on_contact(
            &mut world,
            ContactEvent::new(token, EntityKind::Token, ContactPhase::Solid),
        );
        assert!(!outcome.terminated);
        assert!((outcome.reward - 0.5).abs() < f32::EPSILON);
        assert!(!world.scene.is_alive(token));
    }

    #[test]
    fn stale_contact_is_ignored() {
        let (mut agent, mut world) = setup_running();
        let token = world.scene.spawn(EntityKind::Token, Vec3::new(2.0, 1.0, 0.0));
        world.scene.despawn(token);

        let outcome = agent.on_contact(
            &mut world,
            ContactEvent::new(token, EntityKind::Token, ContactPhase::Solid),
        );
        assert!(!outcome.terminated);
        assert!(outcome.reward.abs() < f32::EPSILON);
    }

    // ---- reset ----

    #[test]
    fn reset_clears_trackers_and_scene() {
        let (mut agent, mut world, mut rng) = setup();
        agent.reset(&mut world, &mut rng);
        world.goal = Vec3::new(50.0, 1.0, 0.0);
        world.scene.spawn(EntityKind::Enemy, Vec3::ZERO);

        // Accumulate two idle ticks, then reset.
        agent.step(&mut world, &ActionCommand::ZERO);
        agent.step(&mut world, &ActionCommand::ZERO);
        agent.reset(&mut world, &mut rng);
        world.goal = Vec3::new(50.0, 1.0, 0.0);

        assert_eq!(world.scene.alive().count(), 0);
        // Fresh counter: two idle ticks must not charge a penalty.
        let r1 = agent.step(&mut world, &ActionCommand::ZERO);
        let r2 = agent.step(&mut world, &ActionCommand::ZERO);
        assert!(r1.reward.abs() < f32::EPSILON);
        assert!(r2.reward.abs() < f32::EPSILON);
    }

    #[test]
    fn action_dim_is_three() {
        let agent = RunnerAgent::new(EnvConfig::default());
        assert_eq!(Controller::<PointMass>::action_dim(&agent), 3);
        assert_eq!(Controller::<PointMass>::name(&agent), "RunnerAgent");
    }
}

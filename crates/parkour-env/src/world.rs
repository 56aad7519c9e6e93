//! Explicit environment state.
//!
//! [`PlatformWorld`] replaces global engine transform/physics access:
//! everything the controllers read or mutate lives here and is passed
//! by reference into `reset`/`observe`/`step`.

use glam::Vec3;

use crate::body::HostBody;
use crate::scene::Scene;

/// The complete mutable state of one platformer environment.
#[derive(Debug, Clone)]
pub struct PlatformWorld<B: HostBody> {
    /// The agent's physics body (host-owned integration).
    pub agent: B,
    /// Current goal position.
    pub goal: Vec3,
    /// Contactable entities (enemies, tokens).
    pub scene: Scene,
}

impl<B: HostBody> PlatformWorld<B> {
    /// Wrap a host body into a fresh world with the goal at the origin.
    pub fn new(agent: B) -> Self {
        Self {
            agent,
            goal: Vec3::ZERO,
            scene: Scene::new(),
        }
    }

    /// Euclidean distance from the agent to the goal.
    #[must_use]
    pub fn distance_to_goal(&self) -> f32 {
        self.agent.position().distance(self.goal)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

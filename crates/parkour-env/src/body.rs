//! The narrow physics seam between the controllers and a host engine.
//!
//! Controllers never touch global engine state. They read pose and
//! velocity through [`HostBody`] and push forces/impulses back through
//! it; whatever integrates those forces (a game engine's rigid body, or
//! the bundled [`PointMass`]) is the host's concern.

use glam::{Vec2, Vec3};

// ---------------------------------------------------------------------------
// HostBody
// ---------------------------------------------------------------------------

/// Read/write access to the agent's physics body.
///
/// Position is 3D (the world has a z axis for goal placement) while
/// velocity is planar (x, y), matching a 2D rigid body living in a 3D
/// transform hierarchy.
pub trait HostBody {
    /// Current world position.
    fn position(&self) -> Vec3;

    /// Current planar velocity.
    fn velocity(&self) -> Vec2;

    /// Teleport the body (episode reset).
    fn set_position(&mut self, pos: Vec3);

    /// Overwrite the velocity (episode reset).
    fn set_velocity(&mut self, vel: Vec2);

    /// Accumulate a force for the next integration step.
    fn apply_force(&mut self, force: Vec2);

    /// Apply an instantaneous velocity change.
    fn apply_impulse(&mut self, impulse: Vec2);

    /// Advance the body one timestep, consuming accumulated forces.
    fn integrate(&mut self, dt: f32);
}

// ---------------------------------------------------------------------------
// PointMass
// ---------------------------------------------------------------------------

/// Unit-mass reference body: semi-implicit Euler, optional gravity and
/// an idealized floor.
///
/// This is a stand-in for the host engine's rigid body so episodes can
/// be driven offline. It performs no collision resolution; the floor is
/// a plain height clamp that zeroes downward velocity on landing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pos: Vec3,
    vel: Vec2,
    force: Vec2,
    gravity: f32,
    floor: Option<f32>,
}

impl PointMass {
    /// Body at the origin with no gravity and no floor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pos: Vec3::ZERO,
            vel: Vec2::ZERO,
            force: Vec2::ZERO,
            gravity: 0.0,
            floor: None,
        }
    }

    /// Set a constant downward acceleration (negative pulls down).
    #[must_use]
    pub const fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Clamp the body at `height`, zeroing downward velocity on contact.
    #[must_use]
    pub const fn with_floor(mut self, height: f32) -> Self {
        self.floor = Some(height);
        self
    }
}

impl Default for PointMass {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBody for PointMass {
    fn position(&self) -> Vec3 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn set_position(&mut self, pos: Vec3) {
        self.pos = pos;
    }

    fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.vel += impulse;
    }

    fn integrate(&mut self, dt: f32) {
        self.vel += (self.force + Vec2::new(0.0, self.gravity)) * dt;
        self.pos.x += self.vel.x * dt;
        self.pos.y += self.vel.y * dt;
        self.force = Vec2::ZERO;

        if let Some(floor) = self.floor {
            if self.pos.y < floor {
                self.pos.y = floor;
                if self.vel.y < 0.0 {
                    self.vel.y = 0.0;
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

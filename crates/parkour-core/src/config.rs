use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_spawn() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}
const fn default_goal_range() -> [f32; 2] {
    [-5.0, 5.0]
}
const fn default_goal_height() -> f32 {
    1.0
}
const fn default_move_speed() -> f32 {
    10.0
}
const fn default_jump_impulse() -> f32 {
    6.0
}
const fn default_ground_speed_epsilon() -> f32 {
    0.05
}
const fn default_goal_radius() -> f32 {
    1.5
}
const fn default_fall_height() -> f32 {
    -1.0
}
const fn default_forward_bonus() -> f32 {
    0.1
}
const fn default_backward_penalty() -> f32 {
    0.1
}
const fn default_idle_penalty() -> f32 {
    0.2
}
const fn default_idle_limit() -> u32 {
    3
}
const fn default_max_episode_steps() -> u32 {
    1000
}
const fn default_dt() -> f32 {
    0.02
}
const fn default_gravity() -> f32 {
    -9.81
}

// ---------------------------------------------------------------------------
// EnvConfig
// ---------------------------------------------------------------------------

/// Environment configuration.
///
/// Every constant the controllers use lives here so the shaped-reward
/// scheme and termination thresholds can be tuned from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Agent spawn point (default: (0, 1, 0)).
    #[serde(default = "default_spawn")]
    pub spawn: [f32; 3],

    /// Uniform range for the goal's x coordinate (default: [-5, 5]).
    #[serde(default = "default_goal_range")]
    pub goal_range_x: [f32; 2],

    /// Uniform range for the goal's z coordinate (default: [-5, 5]).
    #[serde(default = "default_goal_range")]
    pub goal_range_z: [f32; 2],

    /// Fixed goal y coordinate (default: 1.0).
    #[serde(default = "default_goal_height")]
    pub goal_height: f32,

    /// Force scale applied to continuous action components (default: 10).
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,

    /// Vertical impulse magnitude for the runner variant's jump (default: 6).
    #[serde(default = "default_jump_impulse")]
    pub jump_impulse: f32,

    /// Vertical-speed threshold below which the agent counts as grounded.
    /// Crude ground-contact proxy; see `RunnerAgent` for the caveats.
    #[serde(default = "default_ground_speed_epsilon")]
    pub ground_speed_epsilon: f32,

    /// Distance below which the goal counts as reached (default: 1.5).
    #[serde(default = "default_goal_radius")]
    pub goal_radius: f32,

    /// Height below which the agent has fallen off (default: -1.0).
    #[serde(default = "default_fall_height")]
    pub fall_height: f32,

    /// Shaping reward for a strict x increase (default: +0.1).
    #[serde(default = "default_forward_bonus")]
    pub forward_bonus: f32,

    /// Shaping penalty magnitude for a strict x decrease (default: 0.1).
    #[serde(default = "default_backward_penalty")]
    pub backward_penalty: f32,

    /// Penalty magnitude charged after `idle_limit` unchanged-x ticks.
    #[serde(default = "default_idle_penalty")]
    pub idle_penalty: f32,

    /// Consecutive unchanged-x ticks before the idle penalty (default: 3).
    #[serde(default = "default_idle_limit")]
    pub idle_limit: u32,

    /// Maximum steps per episode; 0 means no limit (default: 1000).
    #[serde(default = "default_max_episode_steps")]
    pub max_episode_steps: u32,

    /// Simulation timestep for the reference host body (default: 0.02).
    #[serde(default = "default_dt")]
    pub dt: f32,

    /// Gravity for the reference host body (default: -9.81).
    #[serde(default = "default_gravity")]
    pub gravity: f32,

    /// Master random seed.
    #[serde(default)]
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            spawn: default_spawn(),
            goal_range_x: default_goal_range(),
            goal_range_z: default_goal_range(),
            goal_height: default_goal_height(),
            move_speed: default_move_speed(),
            jump_impulse: default_jump_impulse(),
            ground_speed_epsilon: default_ground_speed_epsilon(),
            goal_radius: default_goal_radius(),
            fall_height: default_fall_height(),
            forward_bonus: default_forward_bonus(),
            backward_penalty: default_backward_penalty(),
            idle_penalty: default_idle_penalty(),
            idle_limit: default_idle_limit(),
            max_episode_steps: default_max_episode_steps(),
            dt: default_dt(),
            gravity: default_gravity(),
            seed: 0,
        }
    }
}

impl EnvConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.move_speed <= 0.0 {
            return Err(ConfigError::InvalidMoveSpeed(self.move_speed));
        }
        if self.dt <= 0.0 {
            return Err(ConfigError::InvalidDt(self.dt));
        }
        if self.goal_range_x[0] > self.goal_range_x[1] {
            return Err(ConfigError::EmptyGoalRange {
                axis: 'x',
                low: self.goal_range_x[0],
                high: self.goal_range_x[1],
            });
        }
        if self.goal_range_z[0] > self.goal_range_z[1] {
            return Err(ConfigError::EmptyGoalRange {
                axis: 'z',
                low: self.goal_range_z[0],
                high: self.goal_range_z[1],
            });
        }
        if self.goal_radius <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "goal_radius",
                message: "must be > 0",
            });
        }
        if self.idle_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "idle_limit",
                message: "must be > 0",
            });
        }
        Ok(())
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

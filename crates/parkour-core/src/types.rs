use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Observation
// ---------------------------------------------------------------------------

/// Flat f32 vector representing environment state.
///
/// The platformer controllers produce a fixed 8-float layout: agent
/// position (3), goal position (3), agent velocity (2). Values are raw
/// world units, no normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    data: Vec<f32>,
}

impl Observation {
    pub const fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    pub const fn len(&self) -> usize {
        self.data.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

impl std::ops::Index<usize> for Observation {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        &self.data[i]
    }
}

impl From<Vec<f32>> for Observation {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}

// ---------------------------------------------------------------------------
// ActionCommand
// ---------------------------------------------------------------------------

/// Control command for one tick.
///
/// The continuous components are unconstrained floats; the host scales
/// them by the configured move speed when converting to forces. `jump`
/// is only meaningful to the runner variant and ignored elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionCommand {
    pub move_x: f32,
    pub move_y: f32,
    pub jump: bool,
}

impl ActionCommand {
    /// Continuous-only command with no jump request.
    #[must_use]
    pub const fn new(move_x: f32, move_y: f32) -> Self {
        Self {
            move_x,
            move_y,
            jump: false,
        }
    }

    /// All-zero command.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Set the discrete jump flag.
    #[must_use]
    pub const fn with_jump(mut self, jump: bool) -> Self {
        self.jump = jump;
        self
    }

    /// Decode a flat policy output.
    ///
    /// Two values are the continuous components; an optional third slot
    /// encodes the jump flag (`> 0.5` requests a jump). This is the only
    /// place action data is validated; the step path itself accepts any
    /// values unchecked.
    pub fn from_slice(values: &[f32]) -> Result<Self, ValidationError> {
        if values.len() != 2 && values.len() != 3 {
            return Err(ValidationError::ActionDimMismatch {
                expected: 2,
                got: values.len(),
            });
        }
        if values.iter().any(|v| v.is_nan()) {
            return Err(ValidationError::ActionContainsNan);
        }
        let jump = values.len() == 3 && values[2] > 0.5;
        Ok(Self {
            move_x: values[0],
            move_y: values[1],
            jump,
        })
    }

    /// Encode to a flat vector of `dim` slots (2 or 3).
    #[must_use]
    pub fn to_vec(&self, dim: usize) -> Vec<f32> {
        let mut out = vec![self.move_x, self.move_y];
        if dim >= 3 {
            out.push(if self.jump { 1.0 } else { 0.0 });
        }
        out
    }
}

impl Default for ActionCommand {
    fn default() -> Self {
        Self::ZERO
    }
}

// ---------------------------------------------------------------------------
// StepOutcome
// ---------------------------------------------------------------------------

/// Reward and terminal signal produced by one controller invocation.
///
/// At most the goal-reached and fell-off conditions may mark a tick
/// terminal; shaping rewards are folded in additively while the episode
/// keeps running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub reward: f32,
    pub terminated: bool,
}

impl StepOutcome {
    /// Non-terminal outcome carrying a shaping or event reward.
    #[must_use]
    pub const fn running(reward: f32) -> Self {
        Self {
            reward,
            terminated: false,
        }
    }

    /// Terminal outcome ending the episode.
    #[must_use]
    pub const fn terminal(reward: f32) -> Self {
        Self {
            reward,
            terminated: true,
        }
    }
}

impl Default for StepOutcome {
    fn default() -> Self {
        Self::running(0.0)
    }
}

// ---------------------------------------------------------------------------
// ObservationSpace
// ---------------------------------------------------------------------------

/// Shape and bounds of valid observations. Follows Gymnasium conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObservationSpace {
    Box { low: Vec<f32>, high: Vec<f32> },
    Discrete { n: usize },
}

impl ObservationSpace {
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Self::Box { low, .. } => vec![low.len()],
            Self::Discrete { .. } => vec![1],
        }
    }

    pub fn size(&self) -> usize {
        self.shape().iter().product()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn contains(&self, obs: &Observation) -> bool {
        match self {
            Self::Box { low, high } => {
                obs.len() == low.len()
                    && obs
                        .as_slice()
                        .iter()
                        .zip(low.iter().zip(high.iter()))
                        .all(|(v, (l, h))| v >= l && v <= h)
            }
            Self::Discrete { n } => obs.len() == 1 && (obs[0] as usize) < *n,
        }
    }
}

// ---------------------------------------------------------------------------
// ActionSpace
// ---------------------------------------------------------------------------

/// Shape and bounds of valid actions. Follows Gymnasium conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionSpace {
    Box { low: Vec<f32>, high: Vec<f32> },
    Discrete { n: usize },
}

impl ActionSpace {
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Self::Box { low, .. } => vec![low.len()],
            Self::Discrete { .. } => vec![1],
        }
    }

    pub fn size(&self) -> usize {
        self.shape().iter().product()
    }

    /// Sample a random flat action. Takes `&mut impl Rng` for determinism.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, rng: &mut impl rand::Rng) -> Vec<f32> {
        match self {
            Self::Box { low, high } => low
                .iter()
                .zip(high.iter())
                .map(|(l, h)| rng.gen_range(*l..=*h))
                .collect(),
            Self::Discrete { n } => vec![rng.gen_range(0..*n) as f32],
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn contains(&self, values: &[f32]) -> bool {
        match self {
            Self::Box { low, high } => {
                values.len() == low.len()
                    && values
                        .iter()
                        .zip(low.iter().zip(high.iter()))
                        .all(|(v, (l, h))| v >= l && v <= h)
            }
            Self::Discrete { n } => values.len() == 1 && (values[0] as usize) < *n,
        }
    }
}

// ---------------------------------------------------------------------------
// StepResult / ResetResult
// ---------------------------------------------------------------------------

/// Result of `env.step(action)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f32,
    /// Episode ended due to task success/failure.
    pub terminated: bool,
    /// Episode ended due to the step limit.
    pub truncated: bool,
    pub info: StepInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepInfo {
    pub episode_length: u32,
    pub episode_reward: f32,
    /// Distance from agent to goal after this tick.
    pub distance_to_goal: f32,
}

/// Result of `env.reset()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResult {
    pub observation: Observation,
    pub info: ResetInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetInfo {
    pub seed: Option<u64>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Baseline policy implementations.
//!
//! Zero, constant, scripted, and random policies for smoke-testing an
//! environment without a trained model, plus [`TeleopPolicy`] which
//! sources actions from buffered manual input.

use parkour_core::types::{ActionCommand, ActionSpace, Observation};
use parkour_teleop::{HeuristicSource, TeleopCommander};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Maps observations to actions.
pub trait Policy {
    /// Select the action for the current observation.
    fn action(&mut self, obs: &Observation) -> ActionCommand;

    /// Human-readable policy name.
    fn name(&self) -> &str;

    /// Whether the same observation always yields the same action.
    fn is_deterministic(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// ZeroPolicy
// ---------------------------------------------------------------------------

/// Always returns the all-zero action.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroPolicy;

impl Policy for ZeroPolicy {
    fn action(&mut self, _obs: &Observation) -> ActionCommand {
        ActionCommand::ZERO
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "ZeroPolicy"
    }
}

// ---------------------------------------------------------------------------
// ConstantPolicy
// ---------------------------------------------------------------------------

/// Always returns the same fixed action.
#[derive(Debug, Clone, Copy)]
pub struct ConstantPolicy {
    command: ActionCommand,
}

impl ConstantPolicy {
    #[must_use]
    pub const fn new(command: ActionCommand) -> Self {
        Self { command }
    }
}

impl Policy for ConstantPolicy {
    fn action(&mut self, _obs: &Observation) -> ActionCommand {
        self.command
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "ConstantPolicy"
    }
}

// ---------------------------------------------------------------------------
// ScriptedPolicy
// ---------------------------------------------------------------------------

/// Replays a fixed sequence of actions, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedPolicy {
    commands: Vec<ActionCommand>,
    index: usize,
}

impl ScriptedPolicy {
    /// Create a scripted policy from a sequence of actions.
    ///
    /// # Panics
    ///
    /// Panics if `commands` is empty.
    #[must_use]
    pub fn new(commands: Vec<ActionCommand>) -> Self {
        assert!(
            !commands.is_empty(),
            "ScriptedPolicy requires at least one action"
        );
        Self { commands, index: 0 }
    }
}

impl Policy for ScriptedPolicy {
    fn action(&mut self, _obs: &Observation) -> ActionCommand {
        let command = self.commands[self.index];
        self.index = (self.index + 1) % self.commands.len();
        command
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "ScriptedPolicy"
    }
}

// ---------------------------------------------------------------------------
// RandomPolicy
// ---------------------------------------------------------------------------

/// Samples uniform random actions from the action space.
///
/// Seeded for determinism across runs with the same seed.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    space: ActionSpace,
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    /// Create a random policy for the given action space and seed.
    #[must_use]
    pub fn new(space: ActionSpace, seed: u64) -> Self {
        Self {
            space,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn action(&mut self, _obs: &Observation) -> ActionCommand {
        let values = self.space.sample(&mut self.rng);
        // Samples from a well-formed space always decode.
        ActionCommand::from_slice(&values).unwrap_or_default()
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "RandomPolicy"
    }

    fn is_deterministic(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// TeleopPolicy
// ---------------------------------------------------------------------------

/// Sources actions from manual input instead of the observation.
///
/// The host writes raw channel values into the commander between steps;
/// each [`action`](Policy::action) call maps the current buffer through
/// the configured [`HeuristicSource`].
#[derive(Debug, Clone, Default)]
pub struct TeleopPolicy {
    commander: TeleopCommander,
    source: HeuristicSource,
}

impl TeleopPolicy {
    #[must_use]
    pub fn new(source: HeuristicSource) -> Self {
        Self {
            commander: TeleopCommander::new(),
            source,
        }
    }

    /// Write access to the input buffer.
    pub fn commander_mut(&mut self) -> &mut TeleopCommander {
        &mut self.commander
    }
}

impl Policy for TeleopPolicy {
    fn action(&mut self, _obs: &Observation) -> ActionCommand {
        self.source.action(&self.commander)
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "TeleopPolicy"
    }

    fn is_deterministic(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

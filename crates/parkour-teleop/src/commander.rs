//! Teleop command buffer.
//!
//! [`TeleopCommander`] stores raw input values from any input source.
//! External code (keyboard handlers, gamepad readers, scripted drivers)
//! writes values here; a [`HeuristicSource`](crate::mapping::HeuristicSource)
//! reads them back out as actions each tick.

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// TeleopCommander
// ---------------------------------------------------------------------------

/// Buffers raw input values by channel name.
///
/// # Example
///
/// ```
/// use parkour_teleop::TeleopCommander;
///
/// let mut commander = TeleopCommander::new();
/// commander.set("horizontal", 0.5);
/// commander.set("jump", 1.0);
///
/// assert!((commander.get("horizontal") - 0.5).abs() < f32::EPSILON);
/// assert!((commander.get("missing")).abs() < f32::EPSILON);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TeleopCommander {
    values: HashMap<String, f32>,
}

impl TeleopCommander {
    /// Create an empty commander.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw input value for a named channel.
    pub fn set(&mut self, channel: impl Into<String>, value: f32) {
        self.values.insert(channel.into(), value);
    }

    /// Get the current value for a channel (0.0 if unset).
    #[must_use]
    pub fn get(&self, channel: &str) -> f32 {
        self.values.get(channel).copied().unwrap_or(0.0)
    }

    /// Whether a channel reads as a pressed button (value above 0.5).
    #[must_use]
    pub fn pressed(&self, channel: &str) -> bool {
        self.get(channel) > 0.5
    }

    /// Clear all input values to zero.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of active channels.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.values.len()
    }

    /// Iterator over all (channel, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Input-to-action mapping.
//!
//! [`AxisMapping`] scales a named channel with an optional dead zone;
//! [`HeuristicSource`] combines the axis mappings with a jump button to
//! produce an [`ActionCommand`] from the current commander state, taking
//! the place of a learned policy during manual control.

use parkour_core::types::ActionCommand;

use crate::commander::TeleopCommander;

// ---------------------------------------------------------------------------
// AxisMapping
// ---------------------------------------------------------------------------

/// Maps a named input channel to one continuous action component.
#[derive(Clone, Debug)]
pub struct AxisMapping {
    /// Source channel name.
    pub channel: String,
    /// Scale factor applied to the raw input value.
    pub scale: f32,
    /// Values below this threshold are treated as zero.
    pub dead_zone: f32,
}

impl AxisMapping {
    /// Create a mapping with default scale (1.0) and no dead zone.
    #[must_use]
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            scale: 1.0,
            dead_zone: 0.0,
        }
    }

    /// Set the scale factor.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the dead zone threshold.
    #[must_use]
    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    /// Apply dead zone and scaling to a raw input value.
    #[must_use]
    pub fn apply(&self, raw: f32) -> f32 {
        if raw.abs() < self.dead_zone {
            0.0
        } else {
            raw * self.scale
        }
    }

    /// Read, dead-zone, and scale this mapping's channel.
    #[must_use]
    pub fn read(&self, commander: &TeleopCommander) -> f32 {
        self.apply(commander.get(&self.channel))
    }
}

// ---------------------------------------------------------------------------
// HeuristicSource
// ---------------------------------------------------------------------------

/// Builds actions from buffered input, standing in for a policy.
#[derive(Clone, Debug)]
pub struct HeuristicSource {
    /// Mapping for the first continuous component.
    pub move_x: AxisMapping,
    /// Mapping for the second continuous component.
    pub move_y: AxisMapping,
    /// Button channel for the jump flag.
    pub jump_channel: String,
}

impl HeuristicSource {
    /// Conventional channels: `"horizontal"`, `"vertical"`, `"jump"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            move_x: AxisMapping::new("horizontal"),
            move_y: AxisMapping::new("vertical"),
            jump_channel: "jump".to_string(),
        }
    }

    #[must_use]
    pub fn with_move_x(mut self, mapping: AxisMapping) -> Self {
        self.move_x = mapping;
        self
    }

    #[must_use]
    pub fn with_move_y(mut self, mapping: AxisMapping) -> Self {
        self.move_y = mapping;
        self
    }

    #[must_use]
    pub fn with_jump_channel(mut self, channel: impl Into<String>) -> Self {
        self.jump_channel = channel.into();
        self
    }

    /// Produce the action for the current commander state.
    #[must_use]
    pub fn action(&self, commander: &TeleopCommander) -> ActionCommand {
        let action = ActionCommand::new(
            self.move_x.read(commander),
            self.move_y.read(commander),
        )
        .with_jump(commander.pressed(&self.jump_channel));
        tracing::trace!(
            move_x = action.move_x,
            move_y = action.move_y,
            jump = action.jump,
            "heuristic action"
        );
        action
    }
}

impl Default for HeuristicSource {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_mapping_default_scale() {
        let mapping = AxisMapping::new("horizontal");
        assert!((mapping.scale - 1.0).abs() < f32::EPSILON);
        assert!((mapping.dead_zone - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn axis_mapping_apply_no_dead_zone() {
        let mapping = AxisMapping::new("horizontal").with_scale(2.0);
        assert!((mapping.apply(0.5) - 1.0).abs() < f32::EPSILON);
        assert!((mapping.apply(-0.5) - (-1.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn axis_mapping_apply_with_dead_zone() {
        let mapping = AxisMapping::new("horizontal").with_dead_zone(0.1);
        assert!((mapping.apply(0.05)).abs() < f32::EPSILON);
        assert!((mapping.apply(0.5) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn axis_mapping_dead_zone_negative_input() {
        let mapping = AxisMapping::new("horizontal").with_dead_zone(0.2);
        assert!((mapping.apply(-0.1)).abs() < f32::EPSILON);
        assert!((mapping.apply(-0.5) - (-0.5)).abs() < f32::EPSILON);
    }

    #[test]
    fn heuristic_reads_conventional_channels() {
        let mut commander = TeleopCommander::new();
        commander.set("horizontal", 0.8);
        commander.set("vertical", -0.3);
        commander.set("jump", 1.0);

        let action = HeuristicSource::new().action(&commander);
        assert!((action.move_x - 0.8).abs() < f32::EPSILON);
        assert!((action.move_y - (-0.3)).abs() < f32::EPSILON);
        assert!(action.jump);
    }

    #[test]
    fn heuristic_unset_channels_are_zero() {
        let commander = TeleopCommander::new();
        let action = HeuristicSource::new().action(&commander);
        assert!(action.move_x.abs() < f32::EPSILON);
        assert!(action.move_y.abs() < f32::EPSILON);
        assert!(!action.jump);
    }

    #[test]
    fn heuristic_custom_mappings() {
        let mut commander = TeleopCommander::new();
        commander.set("stick_x", 0.5);
        commander.set("button_a", 0.9);

        let source = HeuristicSource::new()
            .with_move_x(AxisMapping::new("stick_x").with_scale(2.0))
            .with_jump_channel("button_a");
        let action = source.action(&commander);
        assert!((action.move_x - 1.0).abs() < f32::EPSILON);
        assert!(action.jump);
    }

    #[test]
    fn heuristic_dead_zone_filters_noise() {
        let mut commander = TeleopCommander::new();
        commander.set("horizontal", 0.05);

        let source =
            HeuristicSource::new().with_move_x(AxisMapping::new("horizontal").with_dead_zone(0.1));
        let action = source.action(&commander);
        assert!(action.move_x.abs() < f32::EPSILON);
    }
}

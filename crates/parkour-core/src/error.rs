use thiserror::Error;

/// Top-level error type for parkour-core.
#[derive(Debug, Error)]
pub enum ParkourError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid move_speed: {0} (must be > 0)")]
    InvalidMoveSpeed(f32),

    #[error("Invalid dt: {0} (must be > 0)")]
    InvalidDt(f32),

    #[error("Invalid goal range on {axis}: low {low} > high {high}")]
    EmptyGoalRange { axis: char, low: f32, high: f32 },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: &'static str,
    },
}

/// Policy-boundary decode errors.
///
/// The step path itself never validates action values (any float is
/// accepted); these only guard the flat vector exchanged with an
/// external policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Action dimension mismatch: expected {expected} (+1 optional jump slot), got {got}")]
    ActionDimMismatch { expected: usize, got: usize },

    #[error("Action contains NaN")]
    ActionContainsNan,
}

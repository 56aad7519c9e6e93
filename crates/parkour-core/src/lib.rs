// parkour-core: Types, spaces, config, seeding, errors for the parkour platformer harness.

pub mod config;
pub mod error;
pub mod seed;
pub mod types;

pub mod prelude {
    pub use crate::config::EnvConfig;
    pub use crate::error::{ConfigError, ParkourError, ValidationError};
    pub use crate::seed::SeedTree;
    pub use crate::types::{
        ActionCommand, ActionSpace, Observation, ObservationSpace, ResetInfo, ResetResult,
        StepInfo, StepOutcome, StepResult,
    };
}

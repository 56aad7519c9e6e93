// parkour-teleop: Manual control input buffering and action mapping.

pub mod commander;
pub mod mapping;

pub use crate::commander::TeleopCommander;
pub use crate::mapping::{AxisMapping, HeuristicSource};

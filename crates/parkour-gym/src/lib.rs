// parkour-gym: Gymnasium-style environment wrapper and baseline policies.

pub mod env;
pub mod policies;

pub use crate::env::GymEnv;
pub use crate::policies::{
    ConstantPolicy, Policy, RandomPolicy, ScriptedPolicy, TeleopPolicy, ZeroPolicy,
};

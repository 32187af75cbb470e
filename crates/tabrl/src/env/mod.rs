//! Environment traits and wrappers.
//!
//! Provides the core `DiscreteEnv` trait that all environments must
//! implement, plus a wrapper for episode statistics.

mod traits;
mod wrappers;

pub use traits::{DiscreteEnv, EnvInfo, StepResult};
pub use wrappers::EpisodeStats;

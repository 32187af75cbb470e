//! # tabrl
//!
//! Tabular reinforcement learning in Rust.
//!
//! ## Overview
//!
//! tabrl provides:
//! - A minimal environment abstraction for discrete state/action spaces
//!   with the `DiscreteEnv` trait
//! - An epsilon-greedy multi-armed bandit agent with sample-average updates
//! - A tabular Q-learning agent
//! - Composable metric logging for training progress
//!
//! All randomness flows through caller-supplied, seedable RNGs, so training
//! and prediction replay deterministically under a fixed seed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tabrl::prelude::*;
//! use tabrl_envs::SlotMachines;
//! use rand::SeedableRng;
//!
//! let mut env = SlotMachines::with_payouts(vec![1.0, 0.0], 0.0);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let mut agent = BanditAgent::default();
//! let out = agent.fit(&mut env, &mut rng, 1000, 10).unwrap();
//! let episode = agent.predict(&mut env, &out.state_action_values, &mut rng).unwrap();
//! ```

pub mod agent;
pub mod env;
pub mod log;
pub mod spaces;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::agent::{
        BanditAgent, BanditConfig, FitOutput, QLearning, QLearningConfig, Trajectory,
    };
    pub use crate::env::{DiscreteEnv, EnvInfo, EpisodeStats, StepResult};
    pub use crate::log::{CompositeLogger, ConsoleLogger, MetricLogger, NoOpLogger};
    pub use crate::spaces::{Discrete, Space};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Environment error: {0}")]
    Env(String),
}

pub type Result<T> = std::result::Result<T, Error>;

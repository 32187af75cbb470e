//! Core environment trait definitions.

use crate::spaces::Discrete;

/// Information returned from environment steps
#[derive(Clone, Debug, Default)]
pub struct EnvInfo {
    /// Episode return (if done)
    pub episode_return: Option<f32>,
    /// Episode length (if done)
    pub episode_length: Option<f32>,
    /// Custom metrics (kept minimal for performance)
    pub extra: smallvec::SmallVec<[(&'static str, f32); 4]>,
}

impl EnvInfo {
    /// Create empty info
    pub fn new() -> Self {
        Self::default()
    }

    /// Add episode stats
    pub fn with_episode_stats(mut self, ret: f32, len: u32) -> Self {
        self.episode_return = Some(ret);
        self.episode_length = Some(len as f32);
        self
    }

    /// Add a custom metric (use rarely)
    pub fn with_extra(mut self, key: &'static str, value: f32) -> Self {
        self.extra.push((key, value));
        self
    }

    /// Get a value by key (including defaults)
    pub fn get(&self, key: &str) -> Option<f32> {
        match key {
            "episode_return" => self.episode_return,
            "episode_length" => self.episode_length,
            _ => self.extra.iter().find(|(k, _)| k == &key).map(|(_, v)| *v),
        }
    }
}

/// Result from a single environment step
#[derive(Clone, Debug)]
pub struct StepResult {
    /// State after the step, in `[0, observation_space().n)`
    pub next_state: usize,
    /// Reward received
    pub reward: f32,
    /// Whether episode terminated (goal reached, failure, etc.)
    pub terminated: bool,
    /// Whether episode truncated (time limit, etc.)
    pub truncated: bool,
    /// Additional info
    pub info: EnvInfo,
}

impl StepResult {
    /// Check if episode is done (terminated or truncated)
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Core trait for tabrl environments.
///
/// Environments expose finite state and action spaces; states are opaque
/// indices in `[0, S)` and actions indices in `[0, A)`. Agents never sample
/// through the environment's own RNG, so `reset(Some(seed))` is the only
/// way randomized environment dynamics are reseeded.
///
/// # Example
///
/// ```rust,ignore
/// use tabrl::env::{DiscreteEnv, EnvInfo, StepResult};
/// use tabrl::spaces::Discrete;
///
/// struct CoinFlip;
///
/// impl DiscreteEnv for CoinFlip {
///     fn observation_space(&self) -> Discrete {
///         Discrete::new(1)
///     }
///
///     fn action_space(&self) -> Discrete {
///         Discrete::new(2)
///     }
///
///     fn reset(&mut self, _seed: Option<u64>) -> (usize, EnvInfo) {
///         (0, EnvInfo::new())
///     }
///
///     fn step(&mut self, action: usize) -> StepResult {
///         // ... implement step logic
///     }
/// }
/// ```
pub trait DiscreteEnv: Send {
    /// Get the observation space
    fn observation_space(&self) -> Discrete;

    /// Get the action space
    fn action_space(&self) -> Discrete;

    /// Reset the environment to initial state
    ///
    /// # Arguments
    /// * `seed` - Optional random seed for reproducibility
    ///
    /// # Returns
    /// Tuple of (initial state, info)
    fn reset(&mut self, seed: Option<u64>) -> (usize, EnvInfo);

    /// Take a single step in the environment
    ///
    /// # Arguments
    /// * `action` - Action index to execute, in `[0, action_space().n)`
    ///
    /// # Returns
    /// StepResult containing next state, reward, done flags, and info
    fn step(&mut self, action: usize) -> StepResult;

    /// Optional: Render the environment
    fn render(&self) -> Option<String> {
        None
    }

    /// Optional: Close the environment and free resources
    fn close(&mut self) {}
}

//! Environment wrappers for common functionality.

use super::{DiscreteEnv, EnvInfo, StepResult};
use crate::spaces::Discrete;

/// Wrapper that tracks episode statistics (return and length).
///
/// Adds `episode_return` and `episode_length` to info on episode completion.
pub struct EpisodeStats<E: DiscreteEnv> {
    env: E,
    episode_return: f32,
    episode_length: u32,
}

impl<E: DiscreteEnv> EpisodeStats<E> {
    /// Wrap an environment with episode statistics tracking
    pub fn new(env: E) -> Self {
        Self {
            env,
            episode_return: 0.0,
            episode_length: 0,
        }
    }

    /// Get a reference to the inner environment
    pub fn inner(&self) -> &E {
        &self.env
    }

    /// Get a mutable reference to the inner environment
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }
}

impl<E: DiscreteEnv> DiscreteEnv for EpisodeStats<E> {
    fn observation_space(&self) -> Discrete {
        self.env.observation_space()
    }

    fn action_space(&self) -> Discrete {
        self.env.action_space()
    }

    fn reset(&mut self, seed: Option<u64>) -> (usize, EnvInfo) {
        self.episode_return = 0.0;
        self.episode_length = 0;
        self.env.reset(seed)
    }

    fn step(&mut self, action: usize) -> StepResult {
        let mut result = self.env.step(action);

        self.episode_return += result.reward;
        self.episode_length += 1;

        if result.done() {
            result.info = result
                .info
                .with_episode_stats(self.episode_return, self.episode_length);

            // Reset internal counters (env will be reset externally)
            self.episode_return = 0.0;
            self.episode_length = 0;
        }

        result
    }

    fn render(&self) -> Option<String> {
        self.env.render()
    }

    fn close(&mut self) {
        self.env.close()
    }
}

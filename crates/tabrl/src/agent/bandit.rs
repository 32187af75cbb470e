//! Epsilon-greedy multi-armed bandit agent.

use super::{check_positive, check_unit_interval, greedy_action, greedy_rollout};
use super::{FitOutput, Trajectory};
use crate::env::DiscreteEnv;
use crate::log::{log_reward_bins, MetricLogger, NoOpLogger};
use crate::spaces::Space;
use crate::utils::{abbreviate, bin_size, binned_means};
use crate::Result;
use ndarray::{aview1, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Hyperparameters for [`BanditAgent`]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BanditConfig {
    /// Probability of exploring (uniform random action) instead of
    /// exploiting the best estimate, in [0, 1]
    pub exploration_rate: f32,
}

impl Default for BanditConfig {
    fn default() -> Self {
        Self {
            exploration_rate: 0.1,
        }
    }
}

/// Tabular epsilon-greedy bandit agent with sample-average updates.
///
/// The agent treats all environment states as equivalent: it keeps one
/// visit count and one running value estimate per action, updated with
/// step size `1/N` so each estimate is the exact mean of the rewards
/// observed for that action (Sutton & Barto, ch. 2).
///
/// Estimates are mutated only by [`fit`](Self::fit); prediction is a pure
/// greedy rollout over a caller-provided value table.
pub struct BanditAgent {
    config: BanditConfig,
    /// Pulls per action, parallel to `value_estimates`
    visit_counts: Vec<u64>,
    /// Running mean reward per action
    value_estimates: Vec<f32>,
    logger: Box<dyn MetricLogger>,
}

impl Default for BanditAgent {
    fn default() -> Self {
        Self {
            config: BanditConfig::default(),
            visit_counts: Vec::new(),
            value_estimates: Vec::new(),
            logger: Box::new(NoOpLogger),
        }
    }
}

impl BanditAgent {
    /// Create an agent from a config, validating hyperparameters
    pub fn new(config: BanditConfig) -> Result<Self> {
        check_unit_interval("exploration_rate", config.exploration_rate)?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Attach a metric logger for per-bin reward reporting
    pub fn with_logger(mut self, logger: Box<dyn MetricLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Exploration probability
    pub fn exploration_rate(&self) -> f32 {
        self.config.exploration_rate
    }

    /// Pulls per action from the most recent fit
    pub fn visit_counts(&self) -> &[u64] {
        &self.visit_counts
    }

    /// Mean observed reward per action from the most recent fit
    pub fn value_estimates(&self) -> &[f32] {
        &self.value_estimates
    }

    /// Train for exactly `steps` environment transitions.
    ///
    /// Per step: with probability `exploration_rate` a uniform random
    /// action is drawn through the agent's own RNG (never the
    /// environment's sampler); otherwise the highest-estimate action wins
    /// with random tie-break. Finished episodes reset the environment and
    /// the returned initial state is discarded, since the policy is
    /// state-agnostic.
    ///
    /// Returns the learned values replicated across all `S` states (every
    /// row of `state_action_values` is identical) together with
    /// `num_bins` binned reward means for learning-curve reporting.
    pub fn fit<E: DiscreteEnv, R: Rng>(
        &mut self,
        env: &mut E,
        rng: &mut R,
        steps: usize,
        num_bins: usize,
    ) -> Result<FitOutput> {
        check_positive("steps", steps)?;
        check_positive("num_bins", num_bins)?;

        let action_space = env.action_space();
        let n_states = env.observation_space().n;
        let n_actions = action_space.n;

        self.visit_counts = vec![0; n_actions];
        self.value_estimates = vec![0.0; n_actions];
        let mut rewards = Vec::with_capacity(steps);

        env.reset(None);

        for _ in 0..steps {
            let action = if rng.gen::<f32>() < self.config.exploration_rate {
                action_space.sample(rng)
            } else {
                greedy_action(aview1(&self.value_estimates), rng)
            };

            let result = env.step(action);

            self.visit_counts[action] += 1;
            if result.done() {
                env.reset(None);
            }

            // Sample-average update: step size 1/N with the post-increment count
            let n = self.visit_counts[action] as f32;
            self.value_estimates[action] += (result.reward - self.value_estimates[action]) / n;

            rewards.push(result.reward);
        }

        let reward_bins = binned_means(&rewards, num_bins);
        log_reward_bins(self.logger.as_ref(), &reward_bins, bin_size(steps, num_bins));
        tracing::debug!(
            steps = %abbreviate(steps as u64),
            arms = n_actions,
            "bandit fit complete"
        );

        let state_action_values =
            Array2::from_shape_fn((n_states, n_actions), |(_, a)| self.value_estimates[a]);

        Ok(FitOutput {
            state_action_values,
            reward_bins,
        })
    }

    /// Run exactly one greedy episode; no learning, no exploration.
    ///
    /// Neither the agent's vectors nor the provided table are touched.
    pub fn predict<E: DiscreteEnv, R: Rng>(
        &self,
        env: &mut E,
        state_action_values: &Array2<f32>,
        rng: &mut R,
    ) -> Result<Trajectory> {
        greedy_rollout(env, state_action_values, rng)
    }
}

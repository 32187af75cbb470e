//! Tabular Q-learning agent.

use super::{check_positive, check_unit_interval, greedy_action, greedy_rollout};
use super::{FitOutput, Trajectory};
use crate::env::DiscreteEnv;
use crate::log::{log_reward_bins, MetricLogger, NoOpLogger};
use crate::spaces::Space;
use crate::utils::{abbreviate, bin_size, binned_means};
use crate::Result;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Hyperparameters for [`QLearning`]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QLearningConfig {
    /// Probability of exploring instead of exploiting, in [0, 1]
    pub epsilon: f32,
    /// Learning rate: weight given to the current TD target, in [0, 1]
    pub alpha: f32,
    /// Discount: weight given to expected future value, in [0, 1]
    pub gamma: f32,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.2,
            alpha: 0.5,
            gamma: 0.5,
        }
    }
}

/// Tabular Q-learning agent (Sutton & Barto, ch. 6).
///
/// Unlike [`BanditAgent`](super::BanditAgent), Q-learning maintains a full
/// S x A value table and bootstraps each update from the best estimate of
/// the successor state, so credit flows backwards across states. Action
/// selection is the same epsilon-greedy rule with random tie-break.
///
/// The learned table lives in the returned [`FitOutput`]; the agent itself
/// carries only hyperparameters and a logger.
pub struct QLearning {
    config: QLearningConfig,
    logger: Box<dyn MetricLogger>,
}

impl Default for QLearning {
    fn default() -> Self {
        Self {
            config: QLearningConfig::default(),
            logger: Box::new(NoOpLogger),
        }
    }
}

impl QLearning {
    /// Create an agent from a config, validating hyperparameters
    pub fn new(config: QLearningConfig) -> Result<Self> {
        check_unit_interval("epsilon", config.epsilon)?;
        check_unit_interval("alpha", config.alpha)?;
        check_unit_interval("gamma", config.gamma)?;
        Ok(Self {
            config,
            logger: Box::new(NoOpLogger),
        })
    }

    /// Attach a metric logger for per-bin reward reporting
    pub fn with_logger(mut self, logger: Box<dyn MetricLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Train for exactly `steps` environment transitions.
    ///
    /// Per step: epsilon-greedy over the current state's row, then the
    /// one-step TD update
    /// `q[s][a] += alpha * (r + gamma * max_a' q[s'][a'] - q[s][a])`
    /// where `s'` is the state returned by the step. Finished episodes
    /// reset the environment and continue from the returned initial state.
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

        let mut q = Array2::<f32>::zeros((n_states, n_actions));
        let mut rewards = Vec::with_capacity(steps);

        let (mut state, _) = env.reset(None);

        for _ in 0..steps {
            let action = if rng.gen::<f32>() < self.config.epsilon {
                action_space.sample(rng)
            } else {
                greedy_action(q.row(state), rng)
            };

            let result = env.step(action);
            rewards.push(result.reward);

            // Bootstrap from the step's returned state, terminal or not
            let max_next = q
                .row(result.next_state)
                .iter()
                .copied()
                .fold(f32::NEG_INFINITY, f32::max);
            let target = result.reward + self.config.gamma * max_next;
            q[[state, action]] += self.config.alpha * (target - q[[state, action]]);

            state = if result.done() {
                env.reset(None).0
            } else {
                result.next_state
            };
        }

        let reward_bins = binned_means(&rewards, num_bins);
        log_reward_bins(self.logger.as_ref(), &reward_bins, bin_size(steps, num_bins));
        tracing::debug!(
            steps = %abbreviate(steps as u64),
            states = n_states,
            actions = n_actions,
            "q-learning fit complete"
        );

        Ok(FitOutput {
            state_action_values: q,
            reward_bins,
        })
    }

    /// Run exactly one greedy episode; no learning, no exploration.
    pub fn predict<E: DiscreteEnv, R: Rng>(
        &self,
        env: &mut E,
        state_action_values: &Array2<f32>,
        rng: &mut R,
    ) -> Result<Trajectory> {
        greedy_rollout(env, state_action_values, rng)
    }
}

//! Tabular agents and shared action-selection machinery.
//!
//! Both agents select greedily through [`greedy_action`], which breaks
//! ties among maximal estimates uniformly at random instead of favoring
//! the lowest index. Deterministic argmax would lock early estimates in
//! and is treated as a correctness bug, not a style choice.

mod bandit;
mod q_learning;

pub use bandit::{BanditAgent, BanditConfig};
pub use q_learning::{QLearning, QLearningConfig};

use crate::env::DiscreteEnv;
use crate::{Error, Result};
use ndarray::{Array2, ArrayView1};
use rand::Rng;

/// Output of a training run.
#[derive(Clone, Debug)]
pub struct FitOutput {
    /// S x A table of learned values, one row per state
    pub state_action_values: Array2<f32>,
    /// Mean reward per contiguous slice of the step sequence
    pub reward_bins: Vec<f32>,
}

/// One episode's worth of states, actions, and rewards, aligned by step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    /// State after each step (the initial reset state is not included)
    pub states: Vec<usize>,
    /// Action taken at each step
    pub actions: Vec<usize>,
    /// Reward received at each step
    pub rewards: Vec<f32>,
}

impl Trajectory {
    /// Number of steps taken in the episode
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the episode ended without taking any step
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Undiscounted episode return
    pub fn total_reward(&self) -> f32 {
        self.rewards.iter().sum()
    }
}

/// Select the action with the highest estimate, breaking ties uniformly
/// at random among all indices that hold the exact maximum.
pub fn greedy_action<R: Rng>(values: ArrayView1<'_, f32>, rng: &mut R) -> usize {
    debug_assert!(!values.is_empty());

    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let tied: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v == max)
        .map(|(i, _)| i)
        .collect();

    tied[rng.gen_range(0..tied.len())]
}

/// Check that `value` is a probability-like hyperparameter in `[0, 1]`.
pub(crate) fn check_unit_interval(name: &str, value: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::InvalidArgument(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

/// Check that a count-like argument is strictly positive.
pub(crate) fn check_positive(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidArgument(format!(
            "{} must be positive",
            name
        )));
    }
    Ok(())
}

/// Check that a value table matches the environment's declared S x A shape.
pub(crate) fn check_table_shape<E: DiscreteEnv>(
    env: &E,
    state_action_values: &Array2<f32>,
) -> Result<()> {
    let expected = vec![env.observation_space().n, env.action_space().n];
    if state_action_values.shape() != expected {
        return Err(Error::ShapeMismatch {
            expected,
            actual: state_action_values.shape().to_vec(),
        });
    }
    Ok(())
}

/// Run one greedy episode against `env` using a fixed value table.
///
/// No exploration and no learning: every action maximizes the current
/// state's row (random tie-break), and the loop exits the instant a step
/// reports terminated-or-truncated.
pub(crate) fn greedy_rollout<E: DiscreteEnv, R: Rng>(
    env: &mut E,
    state_action_values: &Array2<f32>,
    rng: &mut R,
) -> Result<Trajectory> {
    check_table_shape(env, state_action_values)?;

    let (mut state, _) = env.reset(None);
    let mut trajectory = Trajectory::default();

    loop {
        let action = greedy_action(state_action_values.row(state), rng);
        let result = env.step(action);

        trajectory.states.push(result.next_state);
        trajectory.actions.push(action);
        trajectory.rewards.push(result.reward);

        state = result.next_state;
        if result.done() {
            break;
        }
    }

    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::aview1;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_greedy_action_unique_max() {
        let mut rng = StdRng::seed_from_u64(0);
        let values = [0.0, 2.0, 1.0];

        for _ in 0..50 {
            assert_eq!(greedy_action(aview1(&values), &mut rng), 1);
        }
    }

    #[test]
    fn test_greedy_action_tie_break_is_uniform() {
        let mut rng = StdRng::seed_from_u64(3);
        // Actions 1, 2, and 4 tie at the maximum
        let values = [1.0, 5.0, 5.0, 2.0, 5.0];
        let mut counts = [0u32; 5];

        let draws = 3000;
        for _ in 0..draws {
            counts[greedy_action(aview1(&values), &mut rng)] += 1;
        }

        assert_eq!(counts[0], 0);
        assert_eq!(counts[3], 0);
        for &arm in &[1usize, 2, 4] {
            // Expected 1000 each; allow generous slack around 1/3
            assert!(
                (880..=1120).contains(&counts[arm]),
                "arm {} drawn {} times",
                arm,
                counts[arm]
            );
        }
    }

    #[test]
    fn test_greedy_action_negative_values() {
        let mut rng = StdRng::seed_from_u64(1);
        let values = [-3.0, -1.0, -2.0];
        assert_eq!(greedy_action(aview1(&values), &mut rng), 1);
    }

    #[test]
    fn test_check_unit_interval() {
        assert!(check_unit_interval("epsilon", 0.0).is_ok());
        assert!(check_unit_interval("epsilon", 1.0).is_ok());
        assert!(check_unit_interval("epsilon", -0.1).is_err());
        assert!(check_unit_interval("epsilon", 1.5).is_err());
        assert!(check_unit_interval("epsilon", f32::NAN).is_err());
    }

    #[test]
    fn test_trajectory_accessors() {
        let traj = Trajectory {
            states: vec![1, 2],
            actions: vec![0, 1],
            rewards: vec![0.5, 1.5],
        };
        assert_eq!(traj.len(), 2);
        assert!(!traj.is_empty());
        assert_eq!(traj.total_reward(), 2.0);
    }
}

//! Multi-armed slot machine environment.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tabrl::env::{DiscreteEnv, EnvInfo, StepResult};
use tabrl::spaces::Discrete;

/// Bank of slot machines, one state, one pull per episode.
///
/// Each arm pays its fixed mean payout plus optional uniform noise. The
/// agent must learn which machine pays best. With `new`, payouts are
/// determined by a fixed seed so all instances share the same best arm.
pub struct SlotMachines {
    /// Mean payout per arm
    payouts: Vec<f32>,
    /// Payout noise half-width
    reward_noise: f32,
    /// RNG for noise
    rng: ChaCha8Rng,
}

impl SlotMachines {
    /// Create `num_machines` arms: one winning arm paying 1, the rest 0.
    /// The winning arm is drawn from a fixed seed.
    pub fn new(num_machines: usize) -> Self {
        let mut seed_rng = StdRng::seed_from_u64(42);
        let winner = seed_rng.gen_range(0..num_machines);

        let mut payouts = vec![0.0; num_machines];
        payouts[winner] = 1.0;
        Self::with_payouts(payouts, 0.0)
    }

    /// Create with explicit per-arm mean payouts and noise half-width
    pub fn with_payouts(payouts: Vec<f32>, reward_noise: f32) -> Self {
        assert!(!payouts.is_empty(), "need at least one machine");
        Self {
            payouts,
            reward_noise,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Index of the best arm
    pub fn best_arm(&self) -> usize {
        let mut best = 0;
        for (i, &p) in self.payouts.iter().enumerate() {
            if p > self.payouts[best] {
                best = i;
            }
        }
        best
    }
}

impl DiscreteEnv for SlotMachines {
    fn observation_space(&self) -> Discrete {
        Discrete::new(1)
    }

    fn action_space(&self) -> Discrete {
        Discrete::new(self.payouts.len())
    }

    fn reset(&mut self, seed: Option<u64>) -> (usize, EnvInfo) {
        if let Some(s) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(s);
        }
        (0, EnvInfo::new())
    }

    fn step(&mut self, action: usize) -> StepResult {
        assert!(action < self.payouts.len());

        let mut reward = self.payouts[action];
        if self.reward_noise > 0.0 {
            let noise: f32 = self.rng.gen::<f32>() * 2.0 - 1.0;
            reward += noise * self.reward_noise;
        }

        // One pull per episode
        StepResult {
            next_state: 0,
            reward,
            terminated: true,
            truncated: false,
            info: EnvInfo::new().with_extra("payout", self.payouts[action]),
        }
    }

    fn render(&self) -> Option<String> {
        Some(format!("SlotMachines: best arm = {}", self.best_arm()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_without_noise_is_exact() {
        let mut env = SlotMachines::with_payouts(vec![0.2, 0.8], 0.0);
        env.reset(Some(1));

        let result = env.step(1);
        assert_eq!(result.reward, 0.8);
        assert!(result.terminated);
        assert_eq!(result.info.get("payout"), Some(0.8));
    }

    #[test]
    fn test_noise_stays_within_half_width() {
        let mut env = SlotMachines::with_payouts(vec![0.5], 0.1);
        env.reset(Some(7));

        for _ in 0..100 {
            let result = env.step(0);
            assert!(result.reward >= 0.4 && result.reward <= 0.6);
        }
    }

    #[test]
    fn test_seed_consistency() {
        let mut env1 = SlotMachines::with_payouts(vec![0.5, 0.1], 0.2);
        let mut env2 = SlotMachines::with_payouts(vec![0.5, 0.1], 0.2);

        env1.reset(Some(123));
        env2.reset(Some(123));

        for _ in 0..10 {
            assert_eq!(env1.step(0).reward, env2.step(0).reward);
        }
    }

    #[test]
    fn test_new_has_a_single_winner() {
        let env = SlotMachines::new(10);
        let winner = env.best_arm();
        assert_eq!(env.payouts[winner], 1.0);
        assert_eq!(env.payouts.iter().filter(|&&p| p == 1.0).count(), 1);
    }
}

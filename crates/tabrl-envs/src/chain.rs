//! Chain walk environment.

use tabrl::env::{DiscreteEnv, EnvInfo, StepResult};
use tabrl::spaces::Discrete;

/// Deterministic chain of `length` cells.
///
/// The agent starts at the left end; action 1 moves right, action 0 moves
/// left (clamped at the wall). Reaching the rightmost cell pays 1 and
/// terminates. Episodes truncate after `max_steps` moves, so a wandering
/// policy still ends.
///
/// Delayed reward plus multiple states makes this a minimal test of
/// credit assignment: a bandit agent sees the same mean reward everywhere,
/// while Q-learning propagates value back along the chain.
pub struct ChainWalk {
    length: usize,
    max_steps: u32,
    position: usize,
    steps: u32,
}

impl ChainWalk {
    /// Create a chain of `length` cells with a step limit of `4 * length`
    pub fn new(length: usize) -> Self {
        assert!(length >= 2, "chain needs at least two cells");
        Self::with_max_steps(length, 4 * length as u32)
    }

    /// Create with an explicit truncation limit
    pub fn with_max_steps(length: usize, max_steps: u32) -> Self {
        assert!(length >= 2, "chain needs at least two cells");
        Self {
            length,
            max_steps,
            position: 0,
            steps: 0,
        }
    }
}

impl DiscreteEnv for ChainWalk {
    fn observation_space(&self) -> Discrete {
        Discrete::new(self.length)
    }

    fn action_space(&self) -> Discrete {
        Discrete::new(2)
    }

    fn reset(&mut self, _seed: Option<u64>) -> (usize, EnvInfo) {
        self.position = 0;
        self.steps = 0;
        (0, EnvInfo::new())
    }

    fn step(&mut self, action: usize) -> StepResult {
        assert!(action < 2);

        self.position = match action {
            1 => (self.position + 1).min(self.length - 1),
            _ => self.position.saturating_sub(1),
        };
        self.steps += 1;

        let terminated = self.position == self.length - 1;
        let reward = if terminated { 1.0 } else { 0.0 };
        let truncated = !terminated && self.steps >= self.max_steps;

        StepResult {
            next_state: self.position,
            reward,
            terminated,
            truncated,
            info: EnvInfo::new(),
        }
    }

    fn render(&self) -> Option<String> {
        let cells: String = (0..self.length)
            .map(|i| if i == self.position { 'A' } else { '.' })
            .collect();
        Some(cells)
    }
}

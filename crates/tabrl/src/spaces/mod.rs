//! Observation and action space types.
//!
//! Provides Gymnasium-compatible space definitions for tabular
//! reinforcement learning. Sampling always draws from a caller-supplied
//! RNG so that training runs replay deterministically.

mod discrete;

pub use discrete::Discrete;

use rand::Rng;

/// Trait for observation and action spaces
pub trait Space: Clone + Send + Sync {
    /// The type of samples from this space
    type Sample;

    /// Sample a random element from this space
    fn sample<R: Rng>(&self, rng: &mut R) -> Self::Sample;

    /// Check if a value is contained in this space
    fn contains(&self, value: &Self::Sample) -> bool;

    /// Number of distinct values, if the space is finite
    fn cardinality(&self) -> Option<usize>;
}

//! Built-in environments for tabrl.
//!
//! Provides simple discrete environments for testing and benchmarking:
//! - `SlotMachines` - Multi-armed bandit with fixed per-arm payouts
//! - `ChainWalk` - Deterministic chain MDP with delayed reward

mod chain;
mod slot_machines;

pub use chain::ChainWalk;
pub use slot_machines::SlotMachines;

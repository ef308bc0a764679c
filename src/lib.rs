//! Simulated-annealing solver for the 0/1 knapsack problem.
//!
//! Given an item list, a capacity, and a cooling schedule, the solver
//! searches bit-vector packings for a near-optimal selection:
//!
//! - **Evaluation** ([`evaluate`]): sums value and size of a packing and
//!   zeroes the value of any packing over capacity.
//! - **Neighbor move** ([`neighbor`]): flips one uniformly chosen item,
//!   returning a fresh packing.
//! - **Annealing loop** ([`AnnealRunner`]): Metropolis acceptance over a
//!   geometrically cooled, floor-clamped temperature, bounded by a fixed
//!   iteration budget.
//!
//! Randomness is an injected capability: every solver entry point is
//! generic over [`rand::Rng`], and the seeded convenience path makes a
//! full run reproducible from a single `u64`.
//!
//! # Examples
//!
//! ```
//! use knapsack_anneal::{evaluate, AnnealConfig, AnnealRunner, Instance};
//!
//! let instance = Instance::from_parallel(
//!     &[79.0, 32.0, 47.0, 18.0, 26.0, 85.0, 33.0, 40.0, 45.0, 59.0],
//!     &[85.0, 26.0, 48.0, 21.0, 22.0, 95.0, 43.0, 45.0, 55.0, 52.0],
//!     101.0,
//! )?;
//! let config = AnnealConfig::default()
//!     .with_max_iterations(1000)
//!     .with_start_temperature(10_000.0)
//!     .with_cooling_factor(0.98)
//!     .with_seed(42);
//!
//! let result = AnnealRunner::run(&instance, &config)?;
//! let best = evaluate(&result.best, &instance);
//! assert!(best.total_size <= 101.0);
//! # Ok::<(), knapsack_anneal::ConfigError>(())
//! ```
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

pub mod config;
pub mod evaluate;
pub mod neighbor;
pub mod runner;
pub mod types;

pub use config::{AnnealConfig, ConfigError};
pub use evaluate::evaluate;
pub use neighbor::neighbor;
pub use runner::{AnnealResult, AnnealRunner, Progress};
pub use types::{Evaluation, Instance, Item, Packing};

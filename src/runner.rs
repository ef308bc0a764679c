//! Annealing execution loop.
//!
//! # Algorithm
//!
//! 1. Start from the packing with every item included
//! 2. At each iteration:
//!    a. Flip one random item to get a candidate packing
//!    b. Evaluate the candidate (over-capacity packings score 0)
//!    c. Accept improvements unconditionally; accept worsening moves with
//!       probability `exp(delta / T)` (Metropolis criterion)
//!    d. Cool geometrically, clamped at the configured floor
//! 3. Terminate after exactly `max_iterations` iterations
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{AnnealConfig, ConfigError};
use crate::evaluate::evaluate;
use crate::neighbor::neighbor;
use crate::types::{Instance, Packing};

/// One progress observation, emitted at the configured cadence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Iteration index the observation was taken at.
    pub iteration: usize,
    /// Value of the current packing after this iteration's accept decision.
    pub value: f64,
    /// Temperature used by this iteration (before cooling).
    pub temperature: f64,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The packing held when the iteration budget ran out. Late worsening
    /// moves can still be accepted, so this is not necessarily [`Self::best`].
    pub packing: Packing,

    /// Value of [`Self::packing`].
    pub value: f64,

    /// The highest-value packing observed at any point of the run.
    pub best: Packing,

    /// Value of [`Self::best`].
    pub best_value: f64,

    /// Total iterations executed (always `config.max_iterations`).
    pub iterations: usize,

    /// Temperature after the final cooling step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Progress sampled at the report cadence.
    pub history: Vec<Progress>,
}

/// Executes the simulated-annealing search.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the solver with an RNG seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapsack_anneal::{AnnealConfig, AnnealRunner, Instance};
    ///
    /// let instance = Instance::from_parallel(
    ///     &[60.0, 100.0, 120.0],
    ///     &[10.0, 20.0, 30.0],
    ///     50.0,
    /// )
    /// .unwrap();
    /// let config = AnnealConfig::default().with_seed(42);
    ///
    /// let result = AnnealRunner::run(&instance, &config).unwrap();
    /// assert_eq!(result.packing.len(), 3);
    /// ```
    pub fn run(instance: &Instance, config: &AnnealConfig) -> Result<AnnealResult, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs the solver with a caller-supplied random source.
    ///
    /// Identical instance + config + RNG state reproduce the identical
    /// sequence of visited packings and the identical result.
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult, ConfigError> {
        Self::run_observed(instance, config, rng, |_| {})
    }

    /// Runs the solver, invoking `observer` at the report cadence.
    ///
    /// The observer sees the same entries that end up in
    /// [`AnnealResult::history`]; it cannot affect solver state.
    pub fn run_observed<R, F>(
        instance: &Instance,
        config: &AnnealConfig,
        rng: &mut R,
        mut observer: F,
    ) -> Result<AnnealResult, ConfigError>
    where
        R: Rng,
        F: FnMut(&Progress),
    {
        config.validate()?;

        let mut current = Packing::all_included(instance.len());
        let mut current_value = evaluate(&current, instance).total_value;
        let mut best = current.clone();
        let mut best_value = current_value;

        let mut temperature = config.start_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let interval = config.effective_interval();
        let mut history = Vec::with_capacity(config.max_iterations / interval + 1);

        for iteration in 0..config.max_iterations {
            let candidate = neighbor(&current, rng);
            let candidate_value = evaluate(&candidate, instance).total_value;

            if candidate_value > current_value {
                current = candidate;
                current_value = candidate_value;
                accepted_moves += 1;
                improving_moves += 1;
            } else {
                let accept_probability =
                    acceptance_probability(candidate_value, current_value, temperature);
                if rng.random_range(0.0..1.0) < accept_probability {
                    current = candidate;
                    current_value = candidate_value;
                    accepted_moves += 1;
                }
            }

            if current_value > best_value {
                best = current.clone();
                best_value = current_value;
            }

            if iteration % interval == 0 {
                let progress = Progress {
                    iteration,
                    value: current_value,
                    temperature,
                };
                observer(&progress);
                history.push(progress);
            }

            temperature = (temperature * config.cooling_factor).max(config.min_temperature);
        }

        Ok(AnnealResult {
            value: current_value,
            packing: current,
            best,
            best_value,
            iterations: config.max_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            history,
        })
    }
}

/// Metropolis acceptance probability for a non-improving candidate.
///
/// The value gap is <= 0 and the temperature is clamped positive, so the
/// result is in (0, 1] — exactly 1 for an equal-value candidate, and
/// saturating to 0.0 only when the exponent underflows f64.
fn acceptance_probability(candidate_value: f64, current_value: f64, temperature: f64) -> f64 {
    ((candidate_value - current_value) / temperature).exp()
}

//! Solver configuration and validation.

use thiserror::Error;

/// Rejected configuration or instance input.
///
/// All variants are detected during validation, before the annealing loop
/// starts; there is no partial or degraded mode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_iterations must be positive")]
    ZeroIterations,

    #[error("start_temperature must be positive and finite, got {0}")]
    BadStartTemperature(f64),

    #[error("cooling_factor must be in (0, 1), got {0}")]
    BadCoolingFactor(f64),

    #[error("min_temperature must be in (0, start_temperature), got {0}")]
    BadTemperatureFloor(f64),

    #[error("parallel arrays disagree: {values} values but {sizes} sizes")]
    LengthMismatch { values: usize, sizes: usize },
}

/// Configuration for the annealing solver.
///
/// Cooling is geometric: `T_{k+1} = cooling_factor * T_k`, clamped at
/// `min_temperature` so the acceptance-probability division never sees a
/// zero or subnormal temperature, no matter how large `max_iterations` is
/// relative to the cooling rate.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_max_iterations(1000)
///     .with_start_temperature(10_000.0)
///     .with_cooling_factor(0.98)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Total number of loop iterations. The iteration bound is the only
    /// termination condition.
    pub max_iterations: usize,

    /// Initial temperature. Higher values accept more worsening moves early.
    pub start_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_factor: f64,

    /// Positive floor the temperature is clamped to once cooling reaches it.
    pub min_temperature: f64,

    /// Progress-report cadence in iterations. `0` means automatic:
    /// `max_iterations / 10`.
    pub report_interval: usize,

    /// Random seed for reproducibility. `None` draws a seed from the
    /// process RNG.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            start_temperature: 10_000.0,
            cooling_factor: 0.98,
            min_temperature: 1e-12,
            report_interval: 0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_start_temperature(mut self, t: f64) -> Self {
        self.start_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_report_interval(mut self, n: usize) -> Self {
        self.report_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !(self.start_temperature > 0.0 && self.start_temperature.is_finite()) {
            return Err(ConfigError::BadStartTemperature(self.start_temperature));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(ConfigError::BadCoolingFactor(self.cooling_factor));
        }
        if !(self.min_temperature > 0.0 && self.min_temperature < self.start_temperature) {
            return Err(ConfigError::BadTemperatureFloor(self.min_temperature));
        }
        Ok(())
    }

    /// Effective progress-report cadence, never zero.
    pub(crate) fn effective_interval(&self) -> usize {
        if self.report_interval > 0 {
            self.report_interval
        } else {
            (self.max_iterations / 10).max(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = AnnealConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_iterations, 1000);
        assert!((config.cooling_factor - 0.98).abs() < 1e-12);
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = AnnealConfig::default().with_max_iterations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroIterations));
    }

    #[test]
    fn test_validate_bad_start_temperature() {
        for t in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let config = AnnealConfig::default().with_start_temperature(t);
            assert!(config.validate().is_err(), "start_temperature {t} accepted");
        }
    }

    #[test]
    fn test_validate_cooling_factor_bounds() {
        for factor in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
            let config = AnnealConfig::default().with_cooling_factor(factor);
            assert!(config.validate().is_err(), "cooling_factor {factor} accepted");
        }
        assert_eq!(
            AnnealConfig::default().with_cooling_factor(1.5).validate(),
            Err(ConfigError::BadCoolingFactor(1.5))
        );
        assert!(AnnealConfig::default()
            .with_cooling_factor(0.5)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_floor_above_start() {
        let config = AnnealConfig::default()
            .with_start_temperature(10.0)
            .with_min_temperature(20.0);
        assert_eq!(config.validate(), Err(ConfigError::BadTemperatureFloor(20.0)));
    }

    #[test]
    fn test_validate_nonpositive_floor() {
        let config = AnnealConfig::default().with_min_temperature(0.0);
        assert_eq!(config.validate(), Err(ConfigError::BadTemperatureFloor(0.0)));
    }

    #[test]
    fn test_effective_interval() {
        assert_eq!(
            AnnealConfig::default()
                .with_max_iterations(1000)
                .effective_interval(),
            100
        );
        assert_eq!(
            AnnealConfig::default()
                .with_max_iterations(5)
                .effective_interval(),
            1
        );
        assert_eq!(
            AnnealConfig::default()
                .with_report_interval(25)
                .effective_interval(),
            25
        );
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::BadCoolingFactor(1.5);
        assert_eq!(err.to_string(), "cooling_factor must be in (0, 1), got 1.5");
    }
}

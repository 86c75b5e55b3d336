//! Stock [`DisruptionModel`] implementations.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};

use super::{DisruptionConfig, DisruptionModel};
use crate::{ConfigurationError, Leg};

/// Draws accident and traffic probabilities uniformly from configured ranges.
///
/// Construct with [`UniformDisruptionModel::seeded`] for reproducible runs.
/// [`UniformDisruptionModel::from_entropy`] seeds from the operating system,
/// so costs differ between runs.
#[derive(Debug, Clone)]
pub struct UniformDisruptionModel {
    weather: f64,
    accident: Uniform<f64>,
    traffic: Uniform<f64>,
    rng: ChaCha8Rng,
}

impl UniformDisruptionModel {
    /// Build a model whose draws are fully determined by `seed`.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] when `config` fails validation.
    ///
    /// # Examples
    /// ```
    /// use robust_route_core::{DisruptionConfig, DisruptionModel, Leg, UniformDisruptionModel};
    ///
    /// # fn main() -> Result<(), robust_route_core::ConfigurationError> {
    /// let config = DisruptionConfig::default();
    /// let mut first = UniformDisruptionModel::seeded(&config, 7)?;
    /// let mut second = UniformDisruptionModel::seeded(&config, 7)?;
    /// let leg = Leg::new("A", "PV1");
    /// assert_eq!(first.accident(&leg).to_bits(), second.accident(&leg).to_bits());
    /// # Ok(())
    /// # }
    /// ```
    pub fn seeded(config: &DisruptionConfig, seed: u64) -> Result<Self, ConfigurationError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Build a model seeded from operating-system entropy.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] when `config` fails validation.
    pub fn from_entropy(config: &DisruptionConfig) -> Result<Self, ConfigurationError> {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    fn with_rng(config: &DisruptionConfig, rng: ChaCha8Rng) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            weather: config.weather,
            accident: Uniform::new_inclusive(config.accident.low, config.accident.high),
            traffic: Uniform::new_inclusive(config.traffic.low, config.traffic.high),
            rng,
        })
    }
}

impl DisruptionModel for UniformDisruptionModel {
    fn weather(&self) -> f64 {
        self.weather
    }

    fn accident(&mut self, _leg: &Leg) -> f64 {
        self.accident.sample(&mut self.rng)
    }

    fn traffic(&mut self, _leg: &Leg) -> f64 {
        self.traffic.sample(&mut self.rng)
    }
}

/// Deterministic stub returning the same probabilities for every leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDisruptionModel {
    /// Global weather probability.
    pub weather: f64,
    /// Accident probability returned for every leg.
    pub accident: f64,
    /// Traffic probability returned for every leg.
    pub traffic: f64,
}

impl FixedDisruptionModel {
    /// Construct a stub from constant probabilities.
    #[must_use]
    pub const fn new(weather: f64, accident: f64, traffic: f64) -> Self {
        Self {
            weather,
            accident,
            traffic,
        }
    }
}

impl DisruptionModel for FixedDisruptionModel {
    fn weather(&self) -> f64 {
        self.weather
    }

    fn accident(&mut self, _leg: &Leg) -> f64 {
        self.accident
    }

    fn traffic(&mut self, _leg: &Leg) -> f64 {
        self.traffic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProbabilityRange;
    use rstest::rstest;

    #[rstest]
    fn draws_stay_inside_configured_ranges() {
        let config = DisruptionConfig {
            weather: 0.2,
            accident: ProbabilityRange::new(0.01, 0.02),
            traffic: ProbabilityRange::new(0.3, 0.4),
        };
        let mut model = UniformDisruptionModel::seeded(&config, 11).expect("valid config");
        let leg = Leg::new("A", "PV1");
        for _ in 0..200 {
            assert!(config.accident.contains(model.accident(&leg)));
            assert!(config.traffic.contains(model.traffic(&leg)));
        }
        assert_eq!(model.weather().to_bits(), 0.2_f64.to_bits());
    }

    #[rstest]
    fn degenerate_range_always_returns_its_bound() {
        let config = DisruptionConfig {
            accident: ProbabilityRange::new(0.1, 0.1),
            ..DisruptionConfig::default()
        };
        let mut model = UniformDisruptionModel::seeded(&config, 3).expect("valid config");
        let leg = Leg::new("PV1", "A");
        assert_eq!(model.accident(&leg).to_bits(), 0.1_f64.to_bits());
    }

    #[rstest]
    fn same_seed_reproduces_the_sequence() {
        let config = DisruptionConfig::default();
        let mut lhs = UniformDisruptionModel::seeded(&config, 42).expect("valid config");
        let mut rhs = UniformDisruptionModel::seeded(&config, 42).expect("valid config");
        let leg = Leg::new("A", "PV2");
        let left: Vec<u64> = (0..16).map(|_| lhs.traffic(&leg).to_bits()).collect();
        let right: Vec<u64> = (0..16).map(|_| rhs.traffic(&leg).to_bits()).collect();
        assert_eq!(left, right);
    }

    #[rstest]
    fn invalid_config_is_rejected() {
        let config = DisruptionConfig {
            weather: 1.5,
            ..DisruptionConfig::default()
        };
        assert!(UniformDisruptionModel::seeded(&config, 1).is_err());
    }
}

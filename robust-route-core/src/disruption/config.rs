//! Parameters of the uniform disruption model.

use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// Inclusive `[low, high]` range a per-leg probability is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityRange {
    /// Smallest value that may be drawn.
    pub low: f64,
    /// Largest value that may be drawn.
    pub high: f64,
}

impl ProbabilityRange {
    /// Construct a range without validation.
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `value` lies within the range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Check the bounds satisfy `0 <= low <= high <= 1`.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidProbabilityRange`] naming `name`
    /// when the bounds are non-finite, inverted or outside `[0, 1]`.
    pub fn validate(&self, name: &'static str) -> Result<(), ConfigurationError> {
        let ordered = self.low.is_finite()
            && self.high.is_finite()
            && 0.0 <= self.low
            && self.low <= self.high
            && self.high <= 1.0;
        if ordered {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidProbabilityRange {
                name,
                low: self.low,
                high: self.high,
            })
        }
    }
}

/// Weather probability and per-leg draw ranges.
///
/// Missing fields deserialise to their defaults: `weather = 0.1` and both
/// ranges `[0.05, 0.15]`.
///
/// # Examples
/// ```
/// use robust_route_core::DisruptionConfig;
///
/// let config = DisruptionConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.weather, 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisruptionConfig {
    /// Global weather-disruption probability in `[0, 1)`.
    pub weather: f64,
    /// Range for accident-disruption draws.
    pub accident: ProbabilityRange,
    /// Range for traffic-disruption draws.
    pub traffic: ProbabilityRange,
}

impl Default for DisruptionConfig {
    fn default() -> Self {
        Self {
            weather: 0.1,
            accident: ProbabilityRange::new(0.05, 0.15),
            traffic: ProbabilityRange::new(0.05, 0.15),
        }
    }
}

impl DisruptionConfig {
    /// Validate every parameter.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidWeather`] or
    /// [`ConfigurationError::InvalidProbabilityRange`].
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(0.0..1.0).contains(&self.weather) {
            return Err(ConfigurationError::InvalidWeather {
                value: self.weather,
            });
        }
        self.accident.validate("accident")?;
        self.traffic.validate("traffic")
    }
}

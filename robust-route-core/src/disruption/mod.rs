//! Disruption probabilities feeding the cost model.
//!
//! The [`DisruptionModel`] trait is the only source of randomness in route
//! selection. Costs are reproducible whenever the injected model is: use
//! [`UniformDisruptionModel::seeded`] for repeatable stochastic runs or
//! [`FixedDisruptionModel`] for exact, constant probabilities.

mod config;
mod model;

pub use config::{DisruptionConfig, ProbabilityRange};
pub use model::{FixedDisruptionModel, UniformDisruptionModel};

use crate::Leg;

/// Supplies per-leg disruption probabilities.
///
/// `weather` is one global value shared by every leg. `accident` and
/// `traffic` are drawn afresh on every call, so a leg evaluated for two
/// different candidates may receive different values.
///
/// # Examples
/// ```
/// use robust_route_core::{DisruptionModel, FixedDisruptionModel, Leg};
///
/// let mut model = FixedDisruptionModel::new(0.1, 0.05, 0.07);
/// let leg = Leg::new("A", "PV1");
/// assert_eq!(model.weather(), 0.1);
/// assert_eq!(model.accident(&leg), 0.05);
/// assert_eq!(model.traffic(&leg), 0.07);
/// ```
pub trait DisruptionModel {
    /// Global weather-disruption probability.
    fn weather(&self) -> f64;

    /// Accident-disruption probability for one evaluation of `leg`.
    fn accident(&mut self, leg: &Leg) -> f64;

    /// Traffic-disruption probability for one evaluation of `leg`.
    fn traffic(&mut self, leg: &Leg) -> f64;
}

impl<M: DisruptionModel + ?Sized> DisruptionModel for &mut M {
    fn weather(&self) -> f64 {
        (**self).weather()
    }

    fn accident(&mut self, leg: &Leg) -> f64 {
        (**self).accident(leg)
    }

    fn traffic(&mut self, leg: &Leg) -> f64 {
        (**self).traffic(leg)
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigurationError, Demand, DisruptionModel, Leg, PathOption, SelectionError, Tour};

/// Parameters for one selection run.
///
/// # Examples
/// ```rust
/// use robust_route_core::SelectionRequest;
///
/// let request = SelectionRequest { capacity: 5 };
/// assert!(request.validate().is_ok());
/// assert!(SelectionRequest { capacity: 0 }.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Vehicle capacity `CT`; a candidate is feasible when its total demand
    /// does not exceed it.
    pub capacity: Demand,
}

impl SelectionRequest {
    /// Check the request before any enumeration starts.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::ZeroCapacity`] for a zero capacity.
    pub const fn validate(&self) -> Result<(), ConfigurationError> {
        if self.capacity == 0 {
            Err(ConfigurationError::ZeroCapacity)
        } else {
            Ok(())
        }
    }
}

/// How candidates are held while searching for the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Choose by candidate volume: materialise small runs, stream large ones.
    #[default]
    Auto,
    /// Always collect every evaluated candidate before selecting.
    Materialise,
    /// Always keep only the best feasible candidate seen so far.
    Stream,
}

impl EvaluationMode {
    /// Resolve to a concrete strategy for a run of `volume` candidates.
    ///
    /// # Examples
    /// ```rust
    /// use robust_route_core::{EvaluationMode, EvaluationStrategy};
    ///
    /// assert_eq!(EvaluationMode::Auto.resolve(10, 100), EvaluationStrategy::Materialise);
    /// assert_eq!(EvaluationMode::Auto.resolve(101, 100), EvaluationStrategy::Stream);
    /// assert_eq!(EvaluationMode::Stream.resolve(1, 100), EvaluationStrategy::Stream);
    /// ```
    #[must_use]
    pub const fn resolve(self, volume: u64, materialise_limit: u64) -> EvaluationStrategy {
        match self {
            Self::Materialise => EvaluationStrategy::Materialise,
            Self::Stream => EvaluationStrategy::Stream,
            Self::Auto if volume <= materialise_limit => EvaluationStrategy::Materialise,
            Self::Auto => EvaluationStrategy::Stream,
        }
    }
}

/// The strategy a run actually used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStrategy {
    /// Every candidate was kept in memory.
    Materialise,
    /// Candidates were discarded after evaluation.
    Stream,
}

/// Cost terms of a single leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegCost {
    /// Length-weighted share of the planned path shared with the deviation
    /// path, in `[0, 1]`.
    pub overlap_ratio: f64,
    /// Accident-disruption probability drawn for this leg.
    pub accident: f64,
    /// Traffic-disruption probability drawn for this leg.
    pub traffic: f64,
    /// Global weather-disruption probability.
    pub weather: f64,
    /// `(1 - overlap_ratio) + accident + traffic + weather`.
    pub total: f64,
}

/// One leg of the winning route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedLeg {
    /// The leg travelled.
    pub leg: Leg,
    /// Index of the chosen path in the leg's planned list.
    pub planned_index: usize,
    /// The chosen planned path.
    pub path: PathOption,
    /// Cost breakdown for the leg.
    pub cost: LegCost,
}

/// The winning tour and its path choices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedRoute {
    /// Visit order, depot first and last.
    pub tour: Tour,
    /// Chosen path and cost for each leg, in travel order.
    pub legs: Vec<SelectedLeg>,
    /// Sum of leg costs.
    pub total_cost: f64,
    /// Sum of stop demands along the tour.
    pub total_demand: Demand,
}

/// Diagnostic information about a selection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Wall-clock time spent enumerating, evaluating and selecting.
    pub solve_time: Duration,
    /// Tours produced by the enumerator.
    pub tours_enumerated: u64,
    /// Route candidates evaluated.
    pub candidates_evaluated: u64,
    /// Candidates whose demand fits the capacity.
    pub feasible_candidates: u64,
    /// Strategy used to hold candidates.
    pub strategy: EvaluationStrategy,
}

/// Response from a successful selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionResponse {
    /// The minimum-cost feasible route.
    pub route: SelectedRoute,
    /// Run statistics.
    pub diagnostics: Diagnostics,
}

/// Choose exactly one route candidate minimising expected cost within
/// capacity.
///
/// Implementations return [`SelectionError`] for structural input problems
/// and never return a partial result. All randomness comes from
/// `disruption`, so a deterministic model yields deterministic results.
pub trait RouteSelector: Send + Sync {
    /// Run a selection using `disruption` for per-leg probabilities.
    fn select(
        &self,
        request: &SelectionRequest,
        disruption: &mut dyn DisruptionModel,
    ) -> Result<SelectionResponse, SelectionError>;
}

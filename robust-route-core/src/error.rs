//! Error taxonomy shared by every stage of route selection.
//!
//! All errors are terminal for a run: they describe structural problems with
//! the inputs rather than transient faults, so nothing here is retried.

use thiserror::Error;

use crate::{Demand, Leg, StopId, Tour};

/// The stop set, request or disruption parameters are unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The designated depot is not among the registered stops.
    #[error("depot {depot} is not a registered stop")]
    MissingDepot {
        /// Requested depot identifier.
        depot: StopId,
    },
    /// A stop identifier was registered more than once.
    #[error("stop {stop} is registered more than once")]
    DuplicateStop {
        /// Identifier seen twice.
        stop: StopId,
    },
    /// The depot was registered with a non-zero demand.
    #[error("depot {depot} must have zero demand, found {demand}")]
    DepotDemand {
        /// Depot identifier.
        depot: StopId,
        /// Demand supplied for the depot.
        demand: Demand,
    },
    /// No customer stops were supplied.
    #[error("at least one customer stop is required")]
    NoCustomers,
    /// More customers were supplied than the enumeration bound allows.
    #[error("{count} customers exceed the enumeration limit of {limit}")]
    TooManyCustomers {
        /// Number of customers supplied.
        count: usize,
        /// Configured upper bound.
        limit: usize,
    },
    /// A tour referenced a stop missing from the registry.
    #[error("stop {stop} is not registered")]
    UnknownStop {
        /// Unregistered identifier.
        stop: StopId,
    },
    /// Summing the demands of a tour overflowed.
    #[error("total demand of tour {tour} overflows")]
    DemandOverflow {
        /// Tour whose demand could not be represented.
        tour: Tour,
    },
    /// Vehicle capacity was zero.
    #[error("vehicle capacity must be positive")]
    ZeroCapacity,
    /// The global weather probability was outside `[0, 1)`.
    #[error("weather disruption probability {value} must lie in [0, 1)")]
    InvalidWeather {
        /// Supplied probability.
        value: f64,
    },
    /// A per-leg probability range was empty or outside `[0, 1]`.
    #[error("{name} probability range [{low}, {high}] must satisfy 0 <= low <= high <= 1")]
    InvalidProbabilityRange {
        /// Which disruption source the range belongs to.
        name: &'static str,
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },
}

/// The catalogue holds no path data for a leg a tour needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no path data for leg {leg} required by tour {tour}")]
pub struct MissingPathDataError {
    /// Leg without catalogue coverage.
    pub leg: Leg,
    /// Tour that required the leg.
    pub tour: Tour,
}

/// No route candidate satisfies the vehicle capacity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "no route candidate fits capacity {capacity}: the lightest of {candidates} candidates demands {min_demand}"
)]
pub struct InfeasibleError {
    /// Vehicle capacity that every candidate exceeded.
    pub capacity: Demand,
    /// Smallest total demand observed across all candidates.
    pub min_demand: Demand,
    /// Number of candidates considered.
    pub candidates: u64,
}

/// Errors returned by [`RouteSelector::select`](crate::RouteSelector::select).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// Inputs or request parameters were invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The path catalogue does not cover a required leg.
    #[error(transparent)]
    MissingPathData(#[from] MissingPathDataError),
    /// Every candidate exceeds the vehicle capacity.
    #[error(transparent)]
    Infeasible(#[from] InfeasibleError),
}

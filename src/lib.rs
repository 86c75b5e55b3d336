//! Facade crate for the robust route selection engine.
//!
//! This crate re-exports the core domain types and the exhaustive selector,
//! and exposes the file formats behind the `data` feature.

#![forbid(unsafe_code)]

pub use robust_route_core::{
    AlternativePathSet, ConfigurationError, Demand, Diagnostics, DisruptionConfig,
    DisruptionModel, EvaluationMode, EvaluationStrategy, FixedDisruptionModel, Leg, LegCost,
    PathCatalogue, PathOption, RouteSelector, SelectedLeg, SelectedRoute, SelectionError,
    SelectionRequest, SelectionResponse, StopId, StopRegistry, Tour, UniformDisruptionModel,
};
pub use robust_route_solver::{RobustRouteSolver, SolverConfig};

#[cfg(feature = "data")]
pub use robust_route_data::{Scenario, load_catalogue, load_ranked_catalogue, load_scenario};

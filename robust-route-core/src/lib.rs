//! Core domain types for the robust route selection engine.
//!
//! The crate models the inputs of a single-vehicle, single-shot route
//! selection: a [`StopRegistry`] of depot and customers, a [`PathCatalogue`]
//! of planned and deviation paths per directed [`Leg`], and the
//! [`DisruptionModel`] supplying accident, traffic and weather probabilities.
//! It also defines the [`RouteSelector`] boundary that solvers implement and
//! the error taxonomy they report through.
//!
//! Constructors validate their input and return `Result` so malformed stop
//! sets or path data surface before any enumeration begins.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalogue;
mod disruption;
mod error;
mod path;
mod selector;
mod stop;
mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalogue::{CatalogueEntry, Leg, PathCatalogue};
pub use disruption::{
    DisruptionConfig, DisruptionModel, FixedDisruptionModel, ProbabilityRange,
    UniformDisruptionModel,
};
pub use error::{ConfigurationError, InfeasibleError, MissingPathDataError, SelectionError};
pub use path::{AlternativePathSet, DirectedArc, NodeId, PathDataError, PathOption};
pub use selector::{
    Diagnostics, EvaluationMode, EvaluationStrategy, LegCost, RouteSelector, SelectedLeg,
    SelectedRoute, SelectionRequest, SelectionResponse,
};
pub use stop::{Demand, Stop, StopId, StopRegistry, StopRole};
pub use tour::{RouteCandidate, Tour};

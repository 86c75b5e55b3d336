//! Exhaustive robust route selection.
//!
//! This crate provides [`RobustRouteSolver`], the implementation of the
//! [`RouteSelector`](robust_route_core::RouteSelector) trait. A run enumerates
//! every depot-to-depot tour over the registered customers, expands each tour
//! into every combination of planned paths from the catalogue, costs each
//! candidate with the disruption-aware model, and keeps the cheapest one whose
//! tour demand fits the vehicle capacity.
//!
//! The building blocks are public so callers can reuse them on their own:
//! [`enumerate_tours`], [`assemble_routes`], [`CostEvaluator`],
//! [`tour_demand`], and the two selection strategies
//! [`select_materialised`] and [`BestSoFar`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod assemble;
mod cost;
mod demand;
mod enumerate;
mod select;
mod solver;

pub use assemble::{assemble_routes, candidate_count};
pub use cost::{CandidateCost, CostEvaluator, overlap_ratio};
pub use demand::tour_demand;
pub use enumerate::enumerate_tours;
pub use select::{BestSoFar, EvaluatedCandidate, SelectionOutcome, select_materialised};
pub use solver::{CandidateVolume, RobustRouteSolver, SolverConfig};

//! File formats and adapters for the robust route engine.
//!
//! Responsibilities:
//! - Read and write path catalogues as JSON.
//! - Read scenario files describing stops, demands and capacity.
//! - Turn shortest-first ranked path lists into planned and deviation paths.
//!
//! Boundaries:
//! - Do not encode selection rules (live in `robust-route-solver`).
//! - Do not compute road paths; rankings arrive precomputed.

#![forbid(unsafe_code)]

mod catalogue_file;
mod ranked;
mod scenario;

pub use catalogue_file::{
    CatalogueFileError, load_catalogue, load_ranked_catalogue, write_catalogue,
};
pub use ranked::{RankedCatalogue, RankedPaths, catalogue_from_ranked};
pub use scenario::{Scenario, ScenarioFileError, StopRecord, load_scenario};

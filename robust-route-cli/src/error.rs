//! Error types emitted by the robust route CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use robust_route_core::{ConfigurationError, Leg, SelectionError};
use robust_route_data::{CatalogueFileError, ScenarioFileError};
use thiserror::Error;

/// Errors emitted by the robust route CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The scenario file could not be read.
    #[error(transparent)]
    Scenario(#[from] ScenarioFileError),
    /// The catalogue file could not be read.
    #[error(transparent)]
    Catalogue(#[from] CatalogueFileError),
    /// The scenario decoded but describes an unusable problem.
    #[error("scenario in {path:?} is invalid: {source}")]
    InvalidScenario {
        path: Utf8PathBuf,
        #[source]
        source: ConfigurationError,
    },
    /// The catalogue has no paths between some ordered pairs of stops.
    #[error("catalogue {path:?} has no paths for {}", list_legs(missing))]
    IncompleteCatalogue {
        path: Utf8PathBuf,
        missing: Vec<Leg>,
    },
    /// The selector rejected the scenario.
    #[error("selection failed: {source}")]
    Select { source: SelectionError },
    /// Serialising the selection response failed.
    #[error("failed to serialise selection response: {0}")]
    SerialiseSelectResponse(#[source] serde_json::Error),
    /// Writing the selection output failed.
    #[error("failed to write selection output: {0}")]
    WriteSelectOutput(#[source] std::io::Error),
}

fn list_legs(legs: &[Leg]) -> String {
    legs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

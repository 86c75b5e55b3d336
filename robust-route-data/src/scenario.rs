//! Scenario files: stops, demands, capacity and disruption parameters.

use std::io::{self, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use robust_route_core::{
    ConfigurationError, Demand, DisruptionConfig, SelectionRequest, StopId, StopRegistry,
};
use robust_route_fs::open_utf8_file;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One stop and its demand as written in a scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRecord {
    /// Stop identifier.
    pub id: StopId,
    /// Units demanded at the stop.
    #[serde(default)]
    pub demand: Demand,
}

/// A single selection problem as stored on disk.
///
/// ```json
/// {
///   "depot": "A",
///   "stops": [{"id": "A"}, {"id": "PV1", "demand": 2}],
///   "capacity": 5,
///   "disruption": {"weather": 0.1}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Stop where every tour starts and ends.
    pub depot: StopId,
    /// Stops in registration order; this order fixes tour enumeration order.
    pub stops: Vec<StopRecord>,
    /// Vehicle capacity.
    pub capacity: Demand,
    /// Disruption parameters; defaults apply when omitted.
    #[serde(default)]
    pub disruption: DisruptionConfig,
}

impl Scenario {
    /// Build the validated stop registry.
    ///
    /// A depot missing from `stops` is registered first with zero demand.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] for duplicate stops or depot demand.
    pub fn registry(&self) -> Result<StopRegistry, ConfigurationError> {
        let depot_listed = self.stops.iter().any(|stop| stop.id == self.depot);
        let implicit_depot = (!depot_listed).then(|| (self.depot.clone(), 0));
        let listed = self
            .stops
            .iter()
            .map(|stop| (stop.id.clone(), stop.demand));
        StopRegistry::new(self.depot.clone(), implicit_depot.into_iter().chain(listed))
    }

    /// The selection request for this scenario, optionally overriding its
    /// capacity.
    #[must_use]
    pub fn request(&self, capacity: Option<Demand>) -> SelectionRequest {
        SelectionRequest {
            capacity: capacity.unwrap_or(self.capacity),
        }
    }
}

/// Errors raised while reading scenario files.
#[derive(Debug, Error)]
pub enum ScenarioFileError {
    /// The file could not be opened.
    #[error("failed to open scenario file at {path}")]
    Open {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// File that was requested.
        path: Utf8PathBuf,
    },
    /// The file is not a valid scenario document.
    #[error("failed to parse scenario file at {path}")]
    Parse {
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
        /// File that was read.
        path: Utf8PathBuf,
    },
}

/// Load a scenario file.
///
/// # Errors
/// Returns [`ScenarioFileError::Open`] when the file cannot be opened and
/// [`ScenarioFileError::Parse`] for malformed JSON.
pub fn load_scenario(path: &Utf8Path) -> Result<Scenario, ScenarioFileError> {
    let file = open_utf8_file(path).map_err(|source| ScenarioFileError::Open {
        source,
        path: path.to_path_buf(),
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ScenarioFileError::Parse {
        source,
        path: path.to_path_buf(),
    })
}

//! Test helpers for writing scenario and catalogue fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use robust_route_core::test_support::{complete_catalogue, medellin_registry};
use robust_route_core::{Demand, DisruptionConfig, PathCatalogue};
use robust_route_data::{RankedPaths, Scenario, StopRecord, write_catalogue};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

pub(super) fn medellin_scenario(capacity: Demand) -> Scenario {
    let stops = [("A", 0), ("PV1", 2), ("PV2", 1), ("PV3", 2)]
        .into_iter()
        .map(|(id, demand)| StopRecord {
            id: id.into(),
            demand,
        })
        .collect();
    Scenario {
        depot: "A".into(),
        stops,
        capacity,
        disruption: DisruptionConfig::default(),
    }
}

/// Temporary directory holding `scenario.json` and `catalogue.json`.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    /// Workspace with the Medellín scenario and a two-path catalogue.
    pub(super) fn medellin() -> Self {
        let workspace = Self::new();
        workspace.write_scenario(&medellin_scenario(5));
        write_catalogue(&workspace.catalogue_path(), &medellin_catalogue())
            .expect("write catalogue");
        workspace
    }

    pub(super) fn scenario_path(&self) -> Utf8PathBuf {
        self.root.join("scenario.json")
    }

    pub(super) fn catalogue_path(&self) -> Utf8PathBuf {
        self.root.join("catalogue.json")
    }

    pub(super) fn write_scenario(&self, scenario: &Scenario) {
        let payload = serde_json::to_vec_pretty(scenario).expect("encode scenario");
        write_utf8(&self.scenario_path(), &payload);
    }

    /// Write the Medellín catalogue as shortest-first rankings.
    pub(super) fn write_ranked(&self, path: &Utf8Path) {
        let ranked: Vec<RankedPaths> = medellin_catalogue()
            .iter()
            .map(|(leg, set)| {
                let mut paths = set.planned().to_vec();
                paths.push(set.deviation().clone());
                RankedPaths {
                    origin: leg.origin.clone(),
                    destination: leg.destination.clone(),
                    paths,
                }
            })
            .collect();
        let payload = serde_json::to_vec(&ranked).expect("encode ranked paths");
        write_utf8(path, &payload);
    }
}

pub(super) fn medellin_catalogue() -> PathCatalogue {
    complete_catalogue(&medellin_registry(), 2)
}

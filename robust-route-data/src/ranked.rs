//! Build a catalogue from shortest-first ranked path lists.

use log::warn;
use robust_route_core::{AlternativePathSet, Leg, PathCatalogue, PathOption, StopId};
use serde::{Deserialize, Serialize};

/// Paths found for one ordered stop pair, shortest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPaths {
    /// Stop the paths leave from.
    pub origin: StopId,
    /// Stop the paths arrive at.
    pub destination: StopId,
    /// Candidate paths ordered by increasing length.
    pub paths: Vec<PathOption>,
}

impl RankedPaths {
    /// The leg these paths serve.
    #[must_use]
    pub fn leg(&self) -> Leg {
        Leg::new(self.origin.clone(), self.destination.clone())
    }
}

/// A catalogue built from ranked paths plus the pairs that were dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedCatalogue {
    /// Legs with at least one path.
    pub catalogue: PathCatalogue,
    /// Legs whose ranking was empty, in input order.
    pub skipped: Vec<Leg>,
}

/// Split every ranking into planned and deviation paths.
///
/// The longest path of a ranking becomes the deviation path and the rest are
/// planned; a single path serves as both. Pairs without any path are logged
/// and reported in [`RankedCatalogue::skipped`] instead of failing the batch.
///
/// # Examples
/// ```
/// use robust_route_core::{Leg, PathOption};
/// use robust_route_data::{RankedPaths, catalogue_from_ranked};
///
/// let ranked = vec![
///     RankedPaths {
///         origin: "A".into(),
///         destination: "PV1".into(),
///         paths: vec![PathOption::single(1), PathOption::single(2)],
///     },
///     RankedPaths {
///         origin: "PV1".into(),
///         destination: "A".into(),
///         paths: Vec::new(),
///     },
/// ];
/// let built = catalogue_from_ranked(ranked);
/// assert_eq!(built.catalogue.len(), 1);
/// assert_eq!(built.skipped, vec![Leg::new("PV1", "A")]);
/// ```
pub fn catalogue_from_ranked<I>(ranked: I) -> RankedCatalogue
where
    I: IntoIterator<Item = RankedPaths>,
{
    let mut built = RankedCatalogue::default();
    for entry in ranked {
        let leg = entry.leg();
        match AlternativePathSet::from_ranked(entry.paths) {
            Some(paths) => {
                built.catalogue.insert(leg, paths);
            }
            None => {
                warn!("No paths found for leg {leg}; skipping it");
                built.skipped.push(leg);
            }
        }
    }
    built
}

//! Directed legs and the read-only catalogue of alternative paths.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AlternativePathSet, PathDataError, PathOption, StopId, StopRegistry};

/// An ordered origin → destination pair of stops.
///
/// Legs are directional: `A -> PV1` and `PV1 -> A` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Leg {
    /// Stop the leg departs from.
    pub origin: StopId,
    /// Stop the leg arrives at.
    pub destination: StopId,
}

impl Leg {
    /// Construct a leg.
    pub fn new(origin: impl Into<StopId>, destination: impl Into<StopId>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// Serialised form of one catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    /// Origin stop of the leg.
    pub origin: StopId,
    /// Destination stop of the leg.
    pub destination: StopId,
    /// Planned candidates, in catalogue order.
    pub planned: Vec<PathOption>,
    /// Designated deviation path.
    pub deviation: PathOption,
}

/// Per-leg alternative paths, loaded once and read-only afterwards.
///
/// Serialises as a list of [`CatalogueEntry`] values sorted by leg. When a
/// list names the same leg twice the later entry wins.
///
/// # Examples
/// ```
/// use robust_route_core::{AlternativePathSet, Leg, PathCatalogue, PathOption};
///
/// let mut catalogue = PathCatalogue::default();
/// let set = AlternativePathSet::from_ranked(vec![PathOption::single(1)]).expect("one path");
/// catalogue.insert(Leg::new("A", "PV1"), set);
/// assert!(catalogue.get(&Leg::new("A", "PV1")).is_some());
/// assert!(catalogue.get(&Leg::new("PV1", "A")).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CatalogueEntry>", into = "Vec<CatalogueEntry>")]
pub struct PathCatalogue {
    entries: HashMap<Leg, AlternativePathSet>,
}

impl PathCatalogue {
    /// Register the alternatives for `leg`, returning any previous entry.
    pub fn insert(&mut self, leg: Leg, paths: AlternativePathSet) -> Option<AlternativePathSet> {
        self.entries.insert(leg, paths)
    }

    /// Alternatives registered for `leg`.
    #[must_use]
    pub fn get(&self, leg: &Leg) -> Option<&AlternativePathSet> {
        self.entries.get(leg)
    }

    /// Number of legs covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no legs are covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate covered legs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Leg, &AlternativePathSet)> + '_ {
        self.entries.iter()
    }

    /// Ordered pairs of distinct registered stops with no catalogue entry.
    ///
    /// Pairs follow the registry order, origin-major.
    #[must_use]
    pub fn missing_legs(&self, registry: &StopRegistry) -> Vec<Leg> {
        let stops = registry.stops();
        stops
            .iter()
            .flat_map(|origin| {
                stops
                    .iter()
                    .filter(move |destination| destination.id != origin.id)
                    .map(move |destination| Leg::new(origin.id.clone(), destination.id.clone()))
            })
            .filter(|leg| !self.entries.contains_key(leg))
            .collect()
    }
}

impl FromIterator<(Leg, AlternativePathSet)> for PathCatalogue {
    fn from_iter<I: IntoIterator<Item = (Leg, AlternativePathSet)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<Vec<CatalogueEntry>> for PathCatalogue {
    type Error = PathDataError;

    fn try_from(entries: Vec<CatalogueEntry>) -> Result<Self, Self::Error> {
        entries
            .into_iter()
            .map(|entry| {
                let paths = AlternativePathSet::new(entry.planned, entry.deviation)?;
                Ok((Leg::new(entry.origin, entry.destination), paths))
            })
            .collect()
    }
}

impl From<PathCatalogue> for Vec<CatalogueEntry> {
    fn from(catalogue: PathCatalogue) -> Self {
        let mut entries: Self = catalogue
            .entries
            .into_iter()
            .map(|(leg, paths)| CatalogueEntry {
                origin: leg.origin,
                destination: leg.destination,
                planned: paths.planned().to_vec(),
                deviation: paths.deviation().clone(),
            })
            .collect();
        entries.sort_by(|lhs, rhs| {
            (&lhs.origin, &lhs.destination).cmp(&(&rhs.origin, &rhs.destination))
        });
        entries
    }
}

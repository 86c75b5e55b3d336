//! Test-only fixtures shared by unit and behavioural tests.
//!
//! Available under `cfg(test)` and behind the `test-support` feature.

use crate::{AlternativePathSet, Demand, Leg, NodeId, PathCatalogue, PathOption, StopId, StopRegistry};

/// Registry with depot `A` and customers `PV1:2`, `PV2:1`, `PV3:2`.
///
/// Every tour over these stops demands 5.
#[must_use]
pub fn medellin_registry() -> StopRegistry {
    registry(&[("A", 0), ("PV1", 2), ("PV2", 1), ("PV3", 2)])
}

/// Build a registry whose depot is the first entry.
///
/// # Panics
/// Panics when the entries do not form a valid registry.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixtures fail loudly")]
pub fn registry(entries: &[(&str, Demand)]) -> StopRegistry {
    let depot = entries
        .first()
        .map(|(id, _)| StopId::new(*id))
        .expect("at least one entry");
    StopRegistry::new(
        depot,
        entries.iter().map(|(id, demand)| (StopId::new(*id), *demand)),
    )
    .expect("valid registry")
}

/// A path over `nodes` where every arc has length 1.
///
/// # Panics
/// Panics when `nodes` is empty.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixtures fail loudly")]
pub fn unit_path(nodes: &[NodeId]) -> PathOption {
    let lengths = vec![1.0; nodes.len().saturating_sub(1)];
    PathOption::new(nodes.to_vec(), lengths).expect("non-empty node list")
}

/// Catalogue covering every ordered pair of registered stops.
///
/// Each leg gets `planned_per_leg` two-arc planned paths through distinct
/// middle nodes. The deviation path shares the first arc of planned path 0
/// and nothing with the others, so path 0 always has overlap `0.5` and the
/// rest overlap `0`.
///
/// # Panics
/// Panics when `planned_per_leg` is zero.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixtures fail loudly")]
pub fn complete_catalogue(registry: &StopRegistry, planned_per_leg: usize) -> PathCatalogue {
    let stops = registry.stops();
    let mut catalogue = PathCatalogue::default();
    for (origin_index, origin) in (1_u64..).zip(stops) {
        for (destination_index, destination) in (1_u64..).zip(stops) {
            if origin.id == destination.id {
                continue;
            }
            let base = (origin_index * 100 + destination_index) * 1_000;
            let planned: Vec<PathOption> = (0_u64..)
                .take(planned_per_leg)
                .map(|offset| unit_path(&[origin_index, base + offset, destination_index]))
                .collect();
            let deviation = unit_path(&[origin_index, base, base + 999, destination_index]);
            let paths = AlternativePathSet::new(planned, deviation).expect("planned paths");
            catalogue.insert(Leg::new(origin.id.clone(), destination.id.clone()), paths);
        }
    }
    catalogue
}

/// Arc lengths in metres, cycled through by [`metric_catalogue`].
const METRE_LENGTHS: [f64; 7] = [12.345, 87.91, 5.002, 143.6, 41.27, 9.83, 230.125];

/// Catalogue shaped like [`complete_catalogue`] but with uneven metre lengths.
///
/// Planned path 0 of every leg shares its first arc with the deviation path,
/// so its overlap ratio is a non-dyadic fraction that differs between legs.
///
/// # Panics
/// Panics when `planned_per_leg` is zero.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixtures fail loudly")]
pub fn metric_catalogue(registry: &StopRegistry, planned_per_leg: usize) -> PathCatalogue {
    let mut lengths = METRE_LENGTHS.iter().copied().cycle();
    let mut next_length = move || lengths.next().expect("cycle never ends");
    let stops = registry.stops();
    let mut catalogue = PathCatalogue::default();
    for (origin_index, origin) in (1_u64..).zip(stops) {
        for (destination_index, destination) in (1_u64..).zip(stops) {
            if origin.id == destination.id {
                continue;
            }
            let base = (origin_index * 100 + destination_index) * 1_000;
            let planned: Vec<PathOption> = (0_u64..)
                .take(planned_per_leg)
                .map(|offset| {
                    PathOption::new(
                        vec![origin_index, base + offset, destination_index],
                        vec![next_length(), next_length()],
                    )
                    .expect("two arcs")
                })
                .collect();
            let deviation = PathOption::new(
                vec![origin_index, base, base + 999, destination_index],
                vec![next_length(), next_length(), next_length()],
            )
            .expect("three arcs");
            let paths = AlternativePathSet::new(planned, deviation).expect("planned paths");
            catalogue.insert(Leg::new(origin.id.clone(), destination.id.clone()), paths);
        }
    }
    catalogue
}

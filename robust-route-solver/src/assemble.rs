//! Route assembly: expand a tour into every planned-path combination.

use std::sync::Arc;

use itertools::Itertools;
use robust_route_core::{
    AlternativePathSet, MissingPathDataError, PathCatalogue, RouteCandidate, Tour,
};

/// Number of planned candidates for each leg of `tour`, in travel order.
fn planned_sizes(tour: &Tour, catalogue: &PathCatalogue) -> Result<Vec<usize>, MissingPathDataError> {
    tour.legs()
        .map(|leg| {
            catalogue
                .get(&leg)
                .map(AlternativePathSet::planned_len)
                .ok_or_else(|| MissingPathDataError {
                    leg: leg.clone(),
                    tour: tour.clone(),
                })
        })
        .collect()
}

/// Yield one [`RouteCandidate`] per combination of planned paths.
///
/// Every leg is resolved against the catalogue before anything is yielded,
/// so a missing leg fails the whole tour. Combinations are produced in
/// lexicographic order of path indices with the last leg varying fastest.
///
/// # Errors
/// Returns [`MissingPathDataError`] naming the first uncovered leg.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use robust_route_core::test_support::{complete_catalogue, medellin_registry};
/// use robust_route_core::{StopId, Tour};
/// use robust_route_solver::assemble_routes;
///
/// let registry = medellin_registry();
/// let catalogue = complete_catalogue(&registry, 2);
/// let tour = Tour::closed(
///     registry.depot_id(),
///     ["PV1", "PV2", "PV3"].map(StopId::new),
/// );
/// let candidates: Vec<_> = assemble_routes(Arc::new(tour), &catalogue)
///     .expect("complete catalogue")
///     .collect();
/// assert_eq!(candidates.len(), 16);
/// assert_eq!(candidates[0].choices(), &[0, 0, 0, 0]);
/// assert_eq!(candidates[1].choices(), &[0, 0, 0, 1]);
/// ```
pub fn assemble_routes(
    tour: Arc<Tour>,
    catalogue: &PathCatalogue,
) -> Result<impl Iterator<Item = RouteCandidate> + use<>, MissingPathDataError> {
    let sizes = planned_sizes(&tour, catalogue)?;
    Ok(sizes
        .into_iter()
        .map(|size| 0..size)
        .multi_cartesian_product()
        .map(move |choices| RouteCandidate::new(Arc::clone(&tour), choices)))
}

/// Count the candidates [`assemble_routes`] would yield for `tour`.
///
/// The product saturates at `u64::MAX`.
///
/// # Errors
/// Returns [`MissingPathDataError`] naming the first uncovered leg.
pub fn candidate_count(tour: &Tour, catalogue: &PathCatalogue) -> Result<u64, MissingPathDataError> {
    let sizes = planned_sizes(tour, catalogue)?;
    Ok(sizes.into_iter().fold(1_u64, |product, size| {
        product.saturating_mul(u64::try_from(size).unwrap_or(u64::MAX))
    }))
}

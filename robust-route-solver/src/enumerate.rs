//! Tour enumeration: every customer permutation closed at the depot.

use itertools::Itertools;
use robust_route_core::{ConfigurationError, StopRegistry, Tour};

/// Lazily yield all `n!` tours over the registry's customers.
///
/// Tours follow the lexicographic order of customer registration positions,
/// so the first tour visits customers in registration order. No pruning or
/// deduplication takes place.
///
/// # Errors
/// Returns [`ConfigurationError::NoCustomers`] when the registry has no
/// customers and [`ConfigurationError::TooManyCustomers`] when it has more
/// than `max_customers`.
///
/// # Examples
/// ```
/// use robust_route_core::{StopId, StopRegistry};
/// use robust_route_solver::enumerate_tours;
///
/// # fn main() -> Result<(), robust_route_core::ConfigurationError> {
/// let registry = StopRegistry::new(
///     StopId::new("A"),
///     [("A".into(), 0), ("PV1".into(), 2), ("PV2".into(), 1), ("PV3".into(), 2)],
/// )?;
/// let tours: Vec<_> = enumerate_tours(&registry, 8)?.collect();
/// assert_eq!(tours.len(), 6);
/// assert_eq!(tours[0].to_string(), "A -> PV1 -> PV2 -> PV3 -> A");
/// # Ok(())
/// # }
/// ```
pub fn enumerate_tours(
    registry: &StopRegistry,
    max_customers: usize,
) -> Result<impl Iterator<Item = Tour> + '_, ConfigurationError> {
    let count = registry.customer_count();
    if count == 0 {
        return Err(ConfigurationError::NoCustomers);
    }
    if count > max_customers {
        return Err(ConfigurationError::TooManyCustomers {
            count,
            limit: max_customers,
        });
    }
    let depot = registry.depot_id();
    Ok(registry
        .customers()
        .map(|stop| stop.id.clone())
        .permutations(count)
        .map(move |order| Tour::closed(depot, order)))
}

//! Demand aggregation over a tour's stops.

use robust_route_core::{ConfigurationError, Demand, StopRegistry, Tour};

/// Sum the registered demand of every stop on `tour`.
///
/// The depot contributes nothing because it is registered with zero demand.
/// The result depends only on the tour, never on path choices.
///
/// # Errors
/// Returns [`ConfigurationError::UnknownStop`] for a stop missing from the
/// registry and [`ConfigurationError::DemandOverflow`] when the sum does not
/// fit in a [`Demand`].
///
/// # Examples
/// ```
/// use robust_route_core::test_support::medellin_registry;
/// use robust_route_core::{StopId, Tour};
/// use robust_route_solver::tour_demand;
///
/// let registry = medellin_registry();
/// let tour = Tour::closed(registry.depot_id(), ["PV2", "PV1", "PV3"].map(StopId::new));
/// assert_eq!(tour_demand(&tour, &registry), Ok(5));
/// ```
pub fn tour_demand(tour: &Tour, registry: &StopRegistry) -> Result<Demand, ConfigurationError> {
    tour.stops().iter().try_fold(0, |total: Demand, stop| {
        let demand = registry
            .demand(stop)
            .ok_or_else(|| ConfigurationError::UnknownStop { stop: stop.clone() })?;
        total
            .checked_add(demand)
            .ok_or_else(|| ConfigurationError::DemandOverflow { tour: tour.clone() })
    })
}

//! Tours and route candidates.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::{Leg, StopId};

/// A depot-to-depot visiting order of every customer.
///
/// A tour over `n` customers holds `n + 2` stops and `n + 1` legs.
///
/// # Examples
/// ```
/// use robust_route_core::{Leg, StopId, Tour};
///
/// let tour = Tour::closed(&StopId::new("A"), [StopId::new("PV1"), StopId::new("PV2")]);
/// assert_eq!(tour.to_string(), "A -> PV1 -> PV2 -> A");
/// assert_eq!(tour.leg_count(), 3);
/// assert_eq!(tour.legs().next(), Some(Leg::new("A", "PV1")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tour {
    stops: Vec<StopId>,
}

impl Tour {
    /// Wrap a customer order with the depot at both ends.
    pub fn closed<I>(depot: &StopId, customers: I) -> Self
    where
        I: IntoIterator<Item = StopId>,
    {
        let mut stops = vec![depot.clone()];
        stops.extend(customers);
        stops.push(depot.clone());
        Self { stops }
    }

    /// Stops in visit order, depot first and last.
    #[must_use]
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    /// Customers in visit order, without the depot.
    #[must_use]
    pub fn customers(&self) -> &[StopId] {
        let end = self.stops.len().saturating_sub(1);
        self.stops.get(1..end).unwrap_or_default()
    }

    /// Number of legs: one fewer than the number of stops.
    #[must_use]
    pub fn leg_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Legs in travel order.
    pub fn legs(&self) -> impl Iterator<Item = Leg> + '_ {
        self.stops.windows(2).filter_map(|pair| match pair {
            [origin, destination] => Some(Leg::new(origin.clone(), destination.clone())),
            _ => None,
        })
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stops = self.stops.iter();
        if let Some(first) = stops.next() {
            write!(f, "{first}")?;
        }
        for stop in stops {
            write!(f, " -> {stop}")?;
        }
        Ok(())
    }
}

/// A tour plus one planned-path choice per leg.
///
/// Choices are indices into each leg's planned list in the
/// [`PathCatalogue`](crate::PathCatalogue); the candidate holds no path data
/// itself. Candidates of the same tour share it through an [`Arc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCandidate {
    tour: Arc<Tour>,
    choices: Vec<usize>,
}

impl RouteCandidate {
    /// Pair a tour with one planned-path index per leg.
    ///
    /// Callers are responsible for supplying exactly
    /// [`Tour::leg_count`] in-range indices.
    #[must_use]
    pub fn new(tour: Arc<Tour>, choices: Vec<usize>) -> Self {
        debug_assert_eq!(
            tour.leg_count(),
            choices.len(),
            "one path choice is required per leg"
        );
        Self { tour, choices }
    }

    /// The candidate's tour.
    #[must_use]
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Shared handle to the tour.
    #[must_use]
    pub const fn shared_tour(&self) -> &Arc<Tour> {
        &self.tour
    }

    /// Planned-path index chosen for each leg.
    #[must_use]
    pub fn choices(&self) -> &[usize] {
        &self.choices
    }

    /// Legs paired with their chosen planned-path index.
    pub fn legs(&self) -> impl Iterator<Item = (Leg, usize)> + '_ {
        self.tour.legs().zip(self.choices.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tour(customers: &[&str]) -> Tour {
        Tour::closed(
            &StopId::new("A"),
            customers.iter().map(|id| StopId::new(*id)),
        )
    }

    #[rstest]
    #[case(&["PV1"], 3)]
    #[case(&["PV1", "PV2", "PV3"], 5)]
    fn tour_has_customers_plus_two_stops(#[case] customers: &[&str], #[case] stops: usize) {
        let tour = tour(customers);
        assert_eq!(tour.stops().len(), stops);
        assert_eq!(tour.leg_count(), customers.len() + 1);
        assert_eq!(tour.legs().count(), customers.len() + 1);
        let visited: Vec<&str> = tour.customers().iter().map(StopId::as_str).collect();
        assert_eq!(visited, customers);
    }

    #[rstest]
    fn candidate_pairs_legs_with_choices() {
        let shared = Arc::new(tour(&["PV1"]));
        let candidate = RouteCandidate::new(Arc::clone(&shared), vec![2, 0]);
        let legs: Vec<_> = candidate.legs().collect();
        assert_eq!(
            legs,
            vec![(Leg::new("A", "PV1"), 2), (Leg::new("PV1", "A"), 0)]
        );
        assert!(Arc::ptr_eq(candidate.shared_tour(), &shared));
    }
}

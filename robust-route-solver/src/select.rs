//! Exactly-one selection under the capacity constraint.
//!
//! The selection problem minimises `Σ cost·x` subject to `Σ x = 1` and
//! `Σ demand·x ≤ capacity`. With a single inequality and a single binary
//! choice its optimum is the cheapest candidate whose demand fits, so both
//! strategies below run a direct minimum search. Ties keep the candidate
//! seen first.

use std::cmp::Ordering;

use robust_route_core::{Demand, InfeasibleError, RouteCandidate};

use crate::CandidateCost;

/// A candidate with its evaluated cost and tour demand.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedCandidate {
    /// The tour and path choices.
    pub candidate: RouteCandidate,
    /// Cost of the candidate.
    pub cost: CandidateCost,
    /// Total demand of the candidate's tour.
    pub demand: Demand,
}

/// The winner of a selection together with run counts.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome {
    /// Cheapest candidate within capacity.
    pub best: EvaluatedCandidate,
    /// Candidates considered.
    pub evaluated: u64,
    /// Candidates whose demand fits the capacity.
    pub feasible: u64,
}

/// Pick the cheapest feasible candidate from a fully evaluated list.
///
/// # Errors
/// Returns [`InfeasibleError`] when no candidate fits `capacity`.
pub fn select_materialised(
    candidates: Vec<EvaluatedCandidate>,
    capacity: Demand,
) -> Result<SelectionOutcome, InfeasibleError> {
    let evaluated = u64::try_from(candidates.len()).unwrap_or(u64::MAX);
    let min_demand = candidates
        .iter()
        .map(|entry| entry.demand)
        .min()
        .unwrap_or_default();
    let feasible: Vec<EvaluatedCandidate> = candidates
        .into_iter()
        .filter(|entry| entry.demand <= capacity)
        .collect();
    let feasible_count = u64::try_from(feasible.len()).unwrap_or(u64::MAX);
    feasible
        .into_iter()
        .min_by(|lhs, rhs| lhs.cost.total.total_cmp(&rhs.cost.total))
        .map(|best| SelectionOutcome {
            best,
            evaluated,
            feasible: feasible_count,
        })
        .ok_or(InfeasibleError {
            capacity,
            min_demand,
            candidates: evaluated,
        })
}

/// Streaming tracker that retains only the best feasible candidate.
///
/// # Examples
/// ```
/// use robust_route_solver::BestSoFar;
///
/// let tracker = BestSoFar::new(4);
/// let err = tracker.finish().expect_err("nothing offered");
/// assert_eq!(err.candidates, 0);
/// ```
#[derive(Debug, Clone)]
pub struct BestSoFar {
    capacity: Demand,
    best: Option<EvaluatedCandidate>,
    evaluated: u64,
    feasible: u64,
    min_demand: Option<Demand>,
}

impl BestSoFar {
    /// Start tracking for a vehicle of `capacity`.
    #[must_use]
    pub const fn new(capacity: Demand) -> Self {
        Self {
            capacity,
            best: None,
            evaluated: 0,
            feasible: 0,
            min_demand: None,
        }
    }

    /// Consider one candidate, keeping it only when it fits and is strictly
    /// cheaper than the current best.
    pub fn offer(&mut self, entry: EvaluatedCandidate) {
        self.evaluated = self.evaluated.saturating_add(1);
        self.min_demand = Some(
            self.min_demand
                .map_or(entry.demand, |current| current.min(entry.demand)),
        );
        if entry.demand > self.capacity {
            return;
        }
        self.feasible = self.feasible.saturating_add(1);
        let improves = self.best.as_ref().is_none_or(|best| {
            entry.cost.total.total_cmp(&best.cost.total) == Ordering::Less
        });
        if improves {
            self.best = Some(entry);
        }
    }

    /// Finish the search.
    ///
    /// # Errors
    /// Returns [`InfeasibleError`] when no offered candidate fits.
    pub fn finish(self) -> Result<SelectionOutcome, InfeasibleError> {
        let Self {
            capacity,
            best,
            evaluated,
            feasible,
            min_demand,
        } = self;
        best.map(|winner| SelectionOutcome {
            best: winner,
            evaluated,
            feasible,
        })
        .ok_or(InfeasibleError {
            capacity,
            min_demand: min_demand.unwrap_or_default(),
            candidates: evaluated,
        })
    }
}

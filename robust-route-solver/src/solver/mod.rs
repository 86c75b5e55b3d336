//! `RobustRouteSolver`: exhaustive enumerate, evaluate and select.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use robust_route_core::{
    Demand, Diagnostics, DisruptionModel, EvaluationMode, EvaluationStrategy, MissingPathDataError,
    PathCatalogue, RouteSelector, SelectedLeg, SelectedRoute, SelectionError, SelectionRequest,
    SelectionResponse, StopRegistry,
};

use crate::{
    BestSoFar, CostEvaluator, EvaluatedCandidate, SelectionOutcome, assemble_routes,
    candidate_count, enumerate_tours, select_materialised, tour_demand,
};

/// Configuration for [`RobustRouteSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// How evaluated candidates are held while searching.
    pub mode: EvaluationMode,
    /// Largest candidate volume [`EvaluationMode::Auto`] still materialises.
    pub materialise_limit: u64,
    /// Largest customer count accepted for enumeration.
    pub max_customers: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mode: EvaluationMode::Auto,
            materialise_limit: 100_000,
            max_customers: 8,
        }
    }
}

/// Size of the search space for one solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateVolume {
    /// Number of tours, `n!` for `n` customers.
    pub tours: u64,
    /// Route candidates summed over all tours, saturating at `u64::MAX`.
    pub candidates: u64,
}

/// Exhaustive route selector over a stop registry and path catalogue.
///
/// Every tour and every planned-path combination is evaluated exactly once;
/// nothing is pruned. The catalogue is checked for every required leg
/// before the first candidate is costed.
#[derive(Debug, Clone)]
pub struct RobustRouteSolver {
    registry: StopRegistry,
    catalogue: PathCatalogue,
    config: SolverConfig,
}

impl RobustRouteSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new(registry: StopRegistry, catalogue: PathCatalogue) -> Self {
        Self::with_config(registry, catalogue, SolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(
        registry: StopRegistry,
        catalogue: PathCatalogue,
        config: SolverConfig,
    ) -> Self {
        Self {
            registry,
            catalogue,
            config,
        }
    }

    /// Stops the solver plans over.
    #[must_use]
    pub const fn registry(&self) -> &StopRegistry {
        &self.registry
    }

    /// Path data the solver selects from.
    #[must_use]
    pub const fn catalogue(&self) -> &PathCatalogue {
        &self.catalogue
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Count the tours and candidates a selection would evaluate.
    ///
    /// Walks every tour once, so it also proves catalogue coverage.
    ///
    /// # Errors
    /// Returns [`SelectionError::Configuration`] for an unusable stop set and
    /// [`SelectionError::MissingPathData`] for the first uncovered leg.
    pub fn candidate_volume(&self) -> Result<CandidateVolume, SelectionError> {
        let mut volume = CandidateVolume {
            tours: 0,
            candidates: 0,
        };
        for tour in enumerate_tours(&self.registry, self.config.max_customers)? {
            volume.tours = volume.tours.saturating_add(1);
            volume.candidates = volume
                .candidates
                .saturating_add(candidate_count(&tour, &self.catalogue)?);
        }
        Ok(volume)
    }

    fn evaluate_all<F>(
        &self,
        disruption: &mut dyn DisruptionModel,
        mut visit: F,
    ) -> Result<(), SelectionError>
    where
        F: FnMut(EvaluatedCandidate),
    {
        let evaluator = CostEvaluator::new(&self.catalogue);
        for tour in enumerate_tours(&self.registry, self.config.max_customers)? {
            let demand = tour_demand(&tour, &self.registry)?;
            for candidate in assemble_routes(Arc::new(tour), &self.catalogue)? {
                let cost = evaluator.evaluate(&candidate, disruption)?;
                visit(EvaluatedCandidate {
                    candidate,
                    cost,
                    demand,
                });
            }
        }
        Ok(())
    }

    fn run_strategy(
        &self,
        strategy: EvaluationStrategy,
        capacity: Demand,
        disruption: &mut dyn DisruptionModel,
    ) -> Result<SelectionOutcome, SelectionError> {
        match strategy {
            EvaluationStrategy::Materialise => {
                let mut evaluated = Vec::new();
                self.evaluate_all(disruption, |entry| evaluated.push(entry))?;
                Ok(select_materialised(evaluated, capacity)?)
            }
            EvaluationStrategy::Stream => {
                let mut tracker = BestSoFar::new(capacity);
                self.evaluate_all(disruption, |entry| tracker.offer(entry))?;
                Ok(tracker.finish()?)
            }
        }
    }

    fn build_route(&self, best: EvaluatedCandidate) -> Result<SelectedRoute, MissingPathDataError> {
        let EvaluatedCandidate {
            candidate,
            cost,
            demand,
        } = best;
        let mut legs = Vec::with_capacity(cost.legs.len());
        for ((leg, planned_index), leg_cost) in candidate.legs().zip(cost.legs) {
            let Some(path) = self
                .catalogue
                .get(&leg)
                .and_then(|paths| paths.planned_path(planned_index))
            else {
                return Err(MissingPathDataError {
                    leg,
                    tour: candidate.tour().clone(),
                });
            };
            legs.push(SelectedLeg {
                leg,
                planned_index,
                path: path.clone(),
                cost: leg_cost,
            });
        }
        Ok(SelectedRoute {
            tour: candidate.tour().clone(),
            legs,
            total_cost: cost.total,
            total_demand: demand,
        })
    }
}

impl RouteSelector for RobustRouteSolver {
    fn select(
        &self,
        request: &SelectionRequest,
        disruption: &mut dyn DisruptionModel,
    ) -> Result<SelectionResponse, SelectionError> {
        request.validate()?;
        let started_at = Instant::now();

        let volume = self.candidate_volume()?;
        let strategy = self
            .config
            .mode
            .resolve(volume.candidates, self.config.materialise_limit);
        debug!(
            "Evaluating {} candidates over {} tours with {strategy:?} strategy (mode {:?})",
            volume.candidates, volume.tours, self.config.mode
        );

        let outcome = self.run_strategy(strategy, request.capacity, disruption)?;
        let SelectionOutcome {
            best,
            evaluated,
            feasible,
        } = outcome;
        let route = self.build_route(best)?;
        info!(
            "Selected {} with cost {:.4} and demand {} of capacity {}",
            route.tour, route.total_cost, route.total_demand, request.capacity
        );

        Ok(SelectionResponse {
            route,
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                tours_enumerated: volume.tours,
                candidates_evaluated: evaluated,
                feasible_candidates: feasible,
                strategy,
            },
        })
    }
}

//! Disruption-aware cost model.
//!
//! Each leg costs `(1 - overlap) + Pa + Pt + Pw`, where the overlap measures
//! how much of the chosen planned path the deviation path already covers.

use std::collections::HashSet;

use robust_route_core::{
    DirectedArc, DisruptionModel, LegCost, MissingPathDataError, PathCatalogue, PathOption,
    RouteCandidate,
};

/// Length-weighted share of `planned` whose arcs also appear in `deviation`.
///
/// Arcs are compared as sets of directed node pairs and weighed by the
/// planned path's arc lengths; an arc repeated in `planned` counts once.
/// The ratio is `0` when `planned` has no arcs or zero total length, and is
/// always within `[0, 1]`.
///
/// # Examples
/// ```
/// use robust_route_core::PathOption;
/// use robust_route_solver::overlap_ratio;
///
/// # fn main() -> Result<(), robust_route_core::PathDataError> {
/// let planned = PathOption::new(vec![1, 2, 3], vec![3.0, 1.0])?;
/// let deviation = PathOption::new(vec![1, 2, 9, 3], vec![3.0, 4.0, 4.0])?;
/// assert!((overlap_ratio(&planned, &deviation) - 0.75).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "overlap is a ratio of summed arc lengths"
)]
pub fn overlap_ratio(planned: &PathOption, deviation: &PathOption) -> f64 {
    let deviation_arcs: HashSet<DirectedArc> = deviation.arcs().map(|(arc, _)| arc).collect();
    let mut seen: HashSet<DirectedArc> = HashSet::new();
    let mut total = 0.0;
    let mut shared = 0.0;
    // Sums follow travel order; the set only filters repeats.
    for (arc, length) in planned.arcs() {
        if seen.insert(arc) {
            total += length;
            if deviation_arcs.contains(&arc) {
                shared += length;
            }
        }
    }
    if total <= 0.0 {
        return 0.0;
    }
    (shared / total).clamp(0.0, 1.0)
}

/// Total cost of one candidate with its per-leg breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateCost {
    /// Sum of leg totals.
    pub total: f64,
    /// Cost terms for each leg in travel order.
    pub legs: Vec<LegCost>,
}

/// Scores [`RouteCandidate`]s against a [`PathCatalogue`].
#[derive(Debug, Clone, Copy)]
pub struct CostEvaluator<'a> {
    catalogue: &'a PathCatalogue,
}

impl<'a> CostEvaluator<'a> {
    /// Evaluate candidates whose choices index into `catalogue`.
    #[must_use]
    pub const fn new(catalogue: &'a PathCatalogue) -> Self {
        Self { catalogue }
    }

    /// Cost `candidate`, drawing accident then traffic for each leg in
    /// travel order.
    ///
    /// # Errors
    /// Returns [`MissingPathDataError`] when a leg is absent from the
    /// catalogue or its chosen index has no planned path.
    #[expect(
        clippy::float_arithmetic,
        reason = "leg costs add overlap and probability terms"
    )]
    pub fn evaluate(
        &self,
        candidate: &RouteCandidate,
        disruption: &mut dyn DisruptionModel,
    ) -> Result<CandidateCost, MissingPathDataError> {
        let weather = disruption.weather();
        let mut legs = Vec::with_capacity(candidate.choices().len());
        let mut total = 0.0;
        for (leg, choice) in candidate.legs() {
            let Some((planned, deviation)) = self
                .catalogue
                .get(&leg)
                .and_then(|paths| Some((paths.planned_path(choice)?, paths.deviation())))
            else {
                return Err(MissingPathDataError {
                    leg,
                    tour: candidate.tour().clone(),
                });
            };
            let overlap = overlap_ratio(planned, deviation);
            let accident = disruption.accident(&leg);
            let traffic = disruption.traffic(&leg);
            let leg_total = (1.0 - overlap) + accident + traffic + weather;
            total += leg_total;
            legs.push(LegCost {
                overlap_ratio: overlap,
                accident,
                traffic,
                weather,
                total: leg_total,
            });
        }
        Ok(CandidateCost { total, legs })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use robust_route_core::test_support::{
        complete_catalogue, medellin_registry, metric_catalogue, unit_path,
    };
    use robust_route_core::{FixedDisruptionModel, Leg, StopId, Tour};
    use rstest::rstest;

    fn path(nodes: &[u64], lengths: &[f64]) -> PathOption {
        PathOption::new(nodes.to_vec(), lengths.to_vec()).expect("valid path")
    }

    #[rstest]
    #[case::identical(path(&[1, 2, 3], &[1.0, 1.0]), path(&[1, 2, 3], &[1.0, 1.0]), 1.0)]
    #[case::disjoint(path(&[1, 2, 3], &[1.0, 1.0]), path(&[1, 4, 3], &[1.0, 1.0]), 0.0)]
    #[case::weighted(path(&[1, 2, 3], &[3.0, 1.0]), path(&[1, 2, 5], &[9.0, 9.0]), 0.75)]
    #[case::reversed_arcs_differ(path(&[1, 2], &[1.0]), path(&[2, 1], &[1.0]), 0.0)]
    #[case::subset_of_longer(path(&[2, 3], &[2.0]), path(&[1, 2, 3, 4], &[1.0, 1.0, 1.0]), 1.0)]
    #[case::no_arcs(PathOption::single(7), PathOption::single(7), 0.0)]
    #[case::zero_length(path(&[1, 2], &[0.0]), path(&[1, 2], &[0.0]), 0.0)]
    #[expect(clippy::float_arithmetic, reason = "assertions compare float costs")]
    fn overlap_matches_shared_length(
        #[case] planned: PathOption,
        #[case] deviation: PathOption,
        #[case] expected: f64,
    ) {
        let ratio = overlap_ratio(&planned, &deviation);
        assert!((ratio - expected).abs() < 1e-12, "ratio {ratio} != {expected}");
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "assertions compare float costs")]
    fn repeated_planned_arcs_count_once() {
        let planned = path(&[1, 2, 1, 2, 3], &[1.0, 1.0, 1.0, 1.0]);
        let deviation = path(&[1, 2], &[1.0]);
        let ratio = overlap_ratio(&planned, &deviation);
        assert!((ratio - 1.0 / 3.0).abs() < 1e-12);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "expected ratio is summed by hand")]
    fn uneven_lengths_sum_in_travel_order() {
        let lengths = [12.345, 87.91, 5.002, 143.6, 41.27, 9.83, 230.125, 0.7, 18.06, 3.3];
        let nodes: Vec<u64> = (1..=11).collect();
        let planned = path(&nodes, &lengths);
        // Shares every planned arc except 3 -> 4 and 7 -> 8.
        let deviation = path(
            &[1, 2, 3, 50, 4, 5, 6, 7, 60, 8, 9, 10, 11],
            &[1.0; 12],
        );

        let mut total = 0.0;
        let mut shared = 0.0;
        for (index, length) in lengths.iter().enumerate() {
            total += length;
            if index != 2 && index != 6 {
                shared += length;
            }
        }
        let expected = shared / total;

        for _ in 0..500 {
            assert_eq!(
                overlap_ratio(&planned, &deviation).to_bits(),
                expected.to_bits()
            );
        }
    }

    #[rstest]
    fn fixed_model_costs_are_bit_identical_across_calls() {
        let registry = medellin_registry();
        let catalogue = metric_catalogue(&registry, 2);
        let tour = Arc::new(Tour::closed(
            registry.depot_id(),
            ["PV1", "PV2", "PV3"].map(StopId::new),
        ));
        let candidate = RouteCandidate::new(tour, vec![0, 1, 0, 0]);
        let evaluator = CostEvaluator::new(&catalogue);
        let mut model = FixedDisruptionModel::new(0.1, 0.1, 0.1);

        let first = evaluator
            .evaluate(&candidate, &mut model)
            .expect("covered legs");
        for _ in 0..200 {
            let again = evaluator
                .evaluate(&candidate, &mut model)
                .expect("covered legs");
            assert_eq!(again.total.to_bits(), first.total.to_bits());
        }
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "assertions compare float costs")]
    fn leg_costs_add_overlap_and_disruption_terms() {
        let registry = medellin_registry();
        let catalogue = complete_catalogue(&registry, 2);
        let tour = Arc::new(Tour::closed(
            registry.depot_id(),
            ["PV1", "PV2", "PV3"].map(StopId::new),
        ));
        let candidate = RouteCandidate::new(tour, vec![0, 1, 0, 1]);
        let mut model = FixedDisruptionModel::new(0.1, 0.05, 0.15);

        let cost = CostEvaluator::new(&catalogue)
            .evaluate(&candidate, &mut model)
            .expect("covered legs");

        let totals: Vec<f64> = cost.legs.iter().map(|leg| leg.total).collect();
        let expected = [0.8, 1.3, 0.8, 1.3];
        for (total, want) in totals.iter().zip(expected) {
            assert!((total - want).abs() < 1e-12, "leg total {total} != {want}");
        }
        assert!((cost.total - 4.2).abs() < 1e-12);
    }

    #[rstest]
    fn out_of_range_choice_is_missing_path_data() {
        let registry = medellin_registry();
        let catalogue = complete_catalogue(&registry, 1);
        let tour = Arc::new(Tour::closed(
            registry.depot_id(),
            ["PV1", "PV2", "PV3"].map(StopId::new),
        ));
        let candidate = RouteCandidate::new(tour, vec![0, 3, 0, 0]);
        let mut model = FixedDisruptionModel::new(0.1, 0.1, 0.1);

        let err = CostEvaluator::new(&catalogue)
            .evaluate(&candidate, &mut model)
            .expect_err("index 3 does not exist");
        assert_eq!(err.leg, Leg::new("PV1", "PV2"));
    }

    #[rstest]
    fn disruption_is_drawn_per_leg_in_travel_order() {
        struct Recording(Vec<String>);

        impl DisruptionModel for Recording {
            fn weather(&self) -> f64 {
                0.0
            }

            fn accident(&mut self, leg: &Leg) -> f64 {
                self.0.push(format!("accident {leg}"));
                0.0
            }

            fn traffic(&mut self, leg: &Leg) -> f64 {
                self.0.push(format!("traffic {leg}"));
                0.0
            }
        }

        let mut catalogue = PathCatalogue::default();
        for (origin, destination) in [("A", "PV1"), ("PV1", "A")] {
            let paths = robust_route_core::AlternativePathSet::new(
                vec![unit_path(&[1, 2])],
                unit_path(&[1, 2]),
            )
            .expect("planned paths");
            catalogue.insert(Leg::new(origin, destination), paths);
        }
        let tour = Arc::new(Tour::closed(&StopId::new("A"), [StopId::new("PV1")]));
        let candidate = RouteCandidate::new(tour, vec![0, 0]);
        let mut model = Recording(Vec::new());

        CostEvaluator::new(&catalogue)
            .evaluate(&candidate, &mut model)
            .expect("covered legs");
        assert_eq!(
            model.0,
            [
                "accident A -> PV1",
                "traffic A -> PV1",
                "accident PV1 -> A",
                "traffic PV1 -> A",
            ]
        );
    }
}

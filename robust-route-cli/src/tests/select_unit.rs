//! Focused unit tests covering select configuration and execution.

use super::helpers::{Workspace, medellin_catalogue, medellin_scenario, write_utf8};
use super::*;
use crate::select::{
    CatalogueFormat, DEFAULT_CATALOGUE_FILE, ModeArg, SelectConfig, config_from_layers_for_test,
    execute_select, run_select_with,
};
use camino::Utf8PathBuf;
use robust_route_core::{EvaluationMode, EvaluationStrategy, Leg, PathCatalogue, SelectionError};
use robust_route_data::write_catalogue;
use robust_route_solver::SolverConfig;
use rstest::rstest;

fn config_for(workspace: &Workspace) -> SelectConfig {
    SelectConfig {
        scenario: workspace.scenario_path(),
        catalogue: workspace.catalogue_path(),
        catalogue_format: CatalogueFormat::Paths,
        capacity: None,
        solver: SolverConfig::default(),
        seed: Some(7),
    }
}

#[rstest]
fn converting_select_without_scenario_errors() {
    let err = SelectConfig::try_from(SelectArgs::default()).expect_err("missing scenario");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SCENARIO);
            assert_eq!(env, ENV_SCENARIO);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn select_config_defaults_catalogue_beside_scenario() {
    let args = SelectArgs {
        scenario: Some(Utf8PathBuf::from("runs/medellin/scenario.json")),
        ..SelectArgs::default()
    };

    let config = SelectConfig::try_from(args).expect("config should build");
    assert_eq!(
        config.catalogue,
        Utf8PathBuf::from("runs/medellin").join(DEFAULT_CATALOGUE_FILE)
    );
    assert_eq!(config.catalogue_format, CatalogueFormat::Paths);
    assert_eq!(config.solver, SolverConfig::default());
    assert_eq!(config.capacity, None);
    assert_eq!(config.seed, None);
}

#[rstest]
fn select_config_applies_solver_overrides() {
    let args = SelectArgs {
        scenario: Some(Utf8PathBuf::from("scenario.json")),
        catalogue: Some(Utf8PathBuf::from("paths.json")),
        catalogue_format: Some(CatalogueFormat::Ranked),
        capacity: Some(4),
        mode: Some(ModeArg::Stream),
        materialise_limit: Some(10),
        max_customers: Some(5),
        seed: Some(42),
    };

    let config = SelectConfig::try_from(args).expect("config should build");
    assert_eq!(config.catalogue, Utf8PathBuf::from("paths.json"));
    assert_eq!(config.catalogue_format, CatalogueFormat::Ranked);
    assert_eq!(config.capacity, Some(4));
    assert_eq!(
        config.solver,
        SolverConfig {
            mode: EvaluationMode::Stream,
            materialise_limit: 10,
            max_customers: 5,
        }
    );
    assert_eq!(config.seed, Some(42));
}

#[rstest]
#[case::missing_scenario(ARG_SCENARIO)]
#[case::missing_catalogue(ARG_CATALOGUE)]
fn validate_sources_reports_missing_inputs(#[case] missing: &'static str) {
    let workspace = Workspace::new();
    if missing != ARG_SCENARIO {
        write_utf8(&workspace.scenario_path(), b"{}");
    }
    if missing != ARG_CATALOGUE {
        write_utf8(&workspace.catalogue_path(), b"[]");
    }

    let err = config_for(&workspace)
        .validate_sources()
        .expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, missing),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    let scenario = workspace.scenario_path();
    std::fs::create_dir(&scenario).expect("scenario directory");

    let err = config_for(&workspace)
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_SCENARIO);
            assert_eq!(path, scenario);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn invalid_layer_maps_to_configuration_error() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "scenario": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected Configuration, found {other:?}"),
    }
}

#[rstest]
fn layers_merge_with_cli_taking_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalogue": "from-file/catalogue.json",
            "seed": 1,
            "mode": "materialise",
        }),
        None,
    );
    composer.push_environment(json!({
        "scenario": "from-env/scenario.json",
        "seed": 2,
    }));
    composer.push_cli(json!({
        "seed": 3,
        "mode": "stream",
    }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.scenario, Utf8PathBuf::from("from-env/scenario.json"));
    assert_eq!(config.catalogue, Utf8PathBuf::from("from-file/catalogue.json"));
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.solver.mode, EvaluationMode::Stream);
}

#[rstest]
#[case::materialise(EvaluationMode::Materialise, EvaluationStrategy::Materialise)]
#[case::stream(EvaluationMode::Stream, EvaluationStrategy::Stream)]
fn execute_select_finds_feasible_route(
    #[case] mode: EvaluationMode,
    #[case] expected: EvaluationStrategy,
) {
    let workspace = Workspace::medellin();
    let config = SelectConfig {
        solver: SolverConfig {
            mode,
            ..SolverConfig::default()
        },
        ..config_for(&workspace)
    };

    let response = execute_select(&config).expect("selection succeeds");
    assert_eq!(response.route.total_demand, 5);
    assert_eq!(response.route.legs.len(), 4);
    assert_eq!(response.diagnostics.tours_enumerated, 6);
    assert_eq!(response.diagnostics.candidates_evaluated, 96);
    assert_eq!(response.diagnostics.strategy, expected);
}

#[rstest]
fn seeded_runs_repeat_across_modes() {
    let workspace = Workspace::medellin();
    let with_mode = |mode| SelectConfig {
        solver: SolverConfig {
            mode,
            ..SolverConfig::default()
        },
        ..config_for(&workspace)
    };

    let materialised =
        execute_select(&with_mode(EvaluationMode::Materialise)).expect("materialised run");
    let streamed = execute_select(&with_mode(EvaluationMode::Stream)).expect("streamed run");
    assert_eq!(materialised.route, streamed.route);
}

#[rstest]
fn capacity_override_can_make_scenario_infeasible() {
    let workspace = Workspace::medellin();
    let config = SelectConfig {
        capacity: Some(4),
        ..config_for(&workspace)
    };

    let err = execute_select(&config).expect_err("capacity 4 is below every tour's demand");
    match err {
        CliError::Select {
            source: SelectionError::Infeasible(infeasible),
        } => {
            assert_eq!(infeasible.capacity, 4);
            assert_eq!(infeasible.min_demand, 5);
            assert_eq!(infeasible.candidates, 96);
        }
        other => panic!("expected infeasible selection, found {other:?}"),
    }
}

#[rstest]
fn invalid_scenario_reports_its_path() {
    let workspace = Workspace::medellin();
    let mut scenario = medellin_scenario(5);
    if let Some(depot) = scenario.stops.first_mut() {
        depot.demand = 3;
    }
    workspace.write_scenario(&scenario);

    let err = execute_select(&config_for(&workspace)).expect_err("depot demand is rejected");
    match err {
        CliError::InvalidScenario { path, .. } => assert_eq!(path, workspace.scenario_path()),
        other => panic!("expected InvalidScenario, found {other:?}"),
    }
}

#[rstest]
fn uncovered_legs_are_reported_before_selection() {
    let workspace = Workspace::medellin();
    let dropped = [Leg::new("PV1", "A"), Leg::new("PV2", "PV3")];
    let catalogue: PathCatalogue = medellin_catalogue()
        .iter()
        .filter(|(leg, _)| !dropped.contains(leg))
        .map(|(leg, paths)| (leg.clone(), paths.clone()))
        .collect();
    write_catalogue(&workspace.catalogue_path(), &catalogue).expect("write catalogue");

    let err = execute_select(&config_for(&workspace)).expect_err("catalogue has gaps");
    match err {
        CliError::IncompleteCatalogue { path, missing } => {
            assert_eq!(path, workspace.catalogue_path());
            assert_eq!(missing, dropped);
        }
        other => panic!("expected IncompleteCatalogue, found {other:?}"),
    }
}

#[rstest]
fn ranked_catalogue_selects_like_explicit_catalogue() {
    let workspace = Workspace::medellin();
    let ranked_path = workspace.root.join("ranked.json");
    workspace.write_ranked(&ranked_path);

    let explicit = execute_select(&config_for(&workspace)).expect("explicit run");
    let ranked = execute_select(&SelectConfig {
        catalogue: ranked_path,
        catalogue_format: CatalogueFormat::Ranked,
        ..config_for(&workspace)
    })
    .expect("ranked run");
    assert_eq!(ranked.route, explicit.route);
}

#[rstest]
fn run_select_with_writes_pretty_json() {
    let workspace = Workspace::medellin();
    let args = SelectArgs {
        scenario: Some(workspace.scenario_path()),
        seed: Some(2024),
        ..SelectArgs::default()
    };

    let mut buffer = Vec::new();
    run_select_with(args, &mut buffer).expect("select command succeeds");

    let text = String::from_utf8(buffer).expect("utf-8 output");
    assert!(text.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).expect("JSON output");
    let tour = value
        .pointer("/route/tour")
        .and_then(serde_json::Value::as_array)
        .expect("tour array");
    assert_eq!(tour.first(), Some(&serde_json::json!("A")));
    assert_eq!(tour.last(), Some(&serde_json::json!("A")));
    assert_eq!(tour.len(), 5);
    assert_eq!(
        value.pointer("/diagnostics/candidates_evaluated"),
        Some(&serde_json::json!(96))
    );
}

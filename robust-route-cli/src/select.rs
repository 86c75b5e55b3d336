//! Select command implementation for the robust route CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use robust_route_core::{
    ConfigurationError, Demand, DisruptionConfig, EvaluationMode, PathCatalogue, RouteSelector,
    SelectionRequest, SelectionResponse, UniformDisruptionModel,
};
use robust_route_data::{Scenario, load_catalogue, load_ranked_catalogue, load_scenario};
use robust_route_solver::{RobustRouteSolver, SolverConfig};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CAPACITY, ARG_CATALOGUE, ARG_CATALOGUE_FORMAT, ARG_MATERIALISE_LIMIT, ARG_MAX_CUSTOMERS,
    ARG_MODE, ARG_SCENARIO, ARG_SEED, CliError, ENV_SCENARIO,
};

/// File name looked up next to the scenario when no catalogue is given.
pub(crate) const DEFAULT_CATALOGUE_FILE: &str = "catalogue.json";

/// Layout of the catalogue file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum CatalogueFormat {
    /// Explicit planned and deviation paths per leg.
    #[default]
    Paths,
    /// Shortest-first path rankings; the longest becomes the deviation.
    Ranked,
}

/// Candidate holding strategy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ModeArg {
    /// Pick by candidate volume.
    Auto,
    /// Keep every evaluated candidate.
    Materialise,
    /// Keep only the best candidate so far.
    Stream,
}

impl From<ModeArg> for EvaluationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Auto => Self::Auto,
            ModeArg::Materialise => Self::Materialise,
            ModeArg::Stream => Self::Stream,
        }
    }
}

/// CLI arguments for the `select` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Select the route whose planned paths are least exposed to \
                 disruption. The scenario lists stops, demands and vehicle \
                 capacity; the catalogue holds the alternative paths for \
                 every ordered pair of stops.",
    about = "Select a robust delivery route"
)]
#[ortho_config(prefix = "ROBUST_ROUTE")]
pub(crate) struct SelectArgs {
    /// Path to a JSON scenario file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) scenario: Option<Utf8PathBuf>,
    /// Path catalogue; defaults to `catalogue.json` beside the scenario.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Layout of the catalogue file.
    #[arg(long = ARG_CATALOGUE_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) catalogue_format: Option<CatalogueFormat>,
    /// Override the vehicle capacity from the scenario.
    #[arg(long = ARG_CAPACITY, value_name = "units")]
    #[serde(default)]
    pub(crate) capacity: Option<Demand>,
    /// How evaluated candidates are held in memory.
    #[arg(long = ARG_MODE, value_enum, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<ModeArg>,
    /// Largest candidate volume `auto` still materialises.
    #[arg(long = ARG_MATERIALISE_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) materialise_limit: Option<u64>,
    /// Largest customer count accepted for enumeration.
    #[arg(long = ARG_MAX_CUSTOMERS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_customers: Option<usize>,
    /// Seed for disruption draws; omitted means a fresh random seed.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl SelectArgs {
    pub(crate) fn into_config(self) -> Result<SelectConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SelectConfig::try_from(merged)
    }
}

/// Resolved `select` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectConfig {
    /// Path to the scenario file.
    pub(crate) scenario: Utf8PathBuf,
    /// Path to the catalogue file.
    pub(crate) catalogue: Utf8PathBuf,
    /// Layout of the catalogue file.
    pub(crate) catalogue_format: CatalogueFormat,
    /// Capacity override, if any.
    pub(crate) capacity: Option<Demand>,
    /// Solver tuning.
    pub(crate) solver: SolverConfig,
    /// Seed for the disruption model.
    pub(crate) seed: Option<u64>,
}

impl SelectConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.scenario, ARG_SCENARIO)?;
        Self::require_existing(&self.catalogue, ARG_CATALOGUE)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match robust_route_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SelectArgs> for SelectConfig {
    type Error = CliError;

    fn try_from(args: SelectArgs) -> Result<Self, Self::Error> {
        let scenario = args.scenario.ok_or(CliError::MissingArgument {
            field: ARG_SCENARIO,
            env: ENV_SCENARIO,
        })?;
        let catalogue = args
            .catalogue
            .unwrap_or_else(|| default_catalogue_path(&scenario));

        let defaults = SolverConfig::default();
        let solver = SolverConfig {
            mode: args.mode.map_or(defaults.mode, EvaluationMode::from),
            materialise_limit: args
                .materialise_limit
                .unwrap_or(defaults.materialise_limit),
            max_customers: args.max_customers.unwrap_or(defaults.max_customers),
        };

        Ok(Self {
            scenario,
            catalogue,
            catalogue_format: args.catalogue_format.unwrap_or_default(),
            capacity: args.capacity,
            solver,
            seed: args.seed,
        })
    }
}

fn default_catalogue_path(scenario: &Utf8Path) -> Utf8PathBuf {
    scenario.parent().map_or_else(
        || Utf8PathBuf::from(DEFAULT_CATALOGUE_FILE),
        |dir| dir.join(DEFAULT_CATALOGUE_FILE),
    )
}

pub(super) fn run_select(args: SelectArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_select_with(args, &mut stdout)
}

pub(super) fn run_select_with(args: SelectArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_select_config(args)?;
    let response = execute_select(&config)?;
    write_select_response(writer, &response)
}

fn resolve_select_config(args: SelectArgs) -> Result<SelectConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_select(config: &SelectConfig) -> Result<SelectionResponse, CliError> {
    let scenario = load_scenario(&config.scenario)?;
    let invalid = |source| CliError::InvalidScenario {
        path: config.scenario.clone(),
        source,
    };
    let registry = scenario.registry().map_err(invalid)?;
    let catalogue = load_path_catalogue(&config.catalogue, config.catalogue_format)?;
    let missing = catalogue.missing_legs(&registry);
    if !missing.is_empty() {
        return Err(CliError::IncompleteCatalogue {
            path: config.catalogue.clone(),
            missing,
        });
    }
    let mut disruption = disruption_model(&scenario.disruption, config.seed).map_err(invalid)?;
    info!(
        "Selecting over {} customers with {} catalogued legs",
        registry.customer_count(),
        catalogue.len()
    );

    let request = request_for(&scenario, config.capacity);
    let solver = RobustRouteSolver::with_config(registry, catalogue, config.solver);
    solver
        .select(&request, &mut disruption)
        .map_err(|source| CliError::Select { source })
}

fn request_for(scenario: &Scenario, capacity: Option<Demand>) -> SelectionRequest {
    if let Some(value) = capacity {
        debug!("Overriding scenario capacity {} with {value}", scenario.capacity);
    }
    scenario.request(capacity)
}

fn load_path_catalogue(
    path: &Utf8Path,
    format: CatalogueFormat,
) -> Result<PathCatalogue, CliError> {
    match format {
        CatalogueFormat::Paths => Ok(load_catalogue(path)?),
        CatalogueFormat::Ranked => {
            let ranked = load_ranked_catalogue(path)?;
            if !ranked.skipped.is_empty() {
                info!(
                    "Ranked catalogue {path} had {} legs without paths",
                    ranked.skipped.len()
                );
            }
            Ok(ranked.catalogue)
        }
    }
}

fn disruption_model(
    config: &DisruptionConfig,
    seed: Option<u64>,
) -> Result<UniformDisruptionModel, ConfigurationError> {
    match seed {
        Some(value) => {
            debug!("Seeding disruption draws with {value}");
            UniformDisruptionModel::seeded(config, value)
        }
        None => UniformDisruptionModel::from_entropy(config),
    }
}

fn write_select_response(
    writer: &mut dyn Write,
    response: &SelectionResponse,
) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerialiseSelectResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteSelectOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteSelectOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SelectConfig, CliError> {
    let merged = SelectArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SelectConfig::try_from(merged)
}

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::parameters::{ParameterError, SimulationParameters};

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read scenario file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse scenario file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid scenario parameters: {0}")]
    Invalid(#[from] ParameterError),
}

/// On-disk scenario; any field left out keeps the console default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioRecord {
    name: Option<String>,
    seed: Option<u64>,
    initial_backlog: Option<u32>,
    agent_count: Option<u32>,
    avg_handling_time: Option<f64>,
    arrival_rate: Option<u32>,
    horizon_hours: Option<u32>,
    sla_threshold_hours: Option<f64>,
    trial_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub seed: Option<u64>,
    pub parameters: SimulationParameters,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            seed: None,
            parameters: SimulationParameters::default(),
        }
    }
}

/// Per-field values from the command line that win over the scenario file.
#[derive(Debug, Default, Clone)]
pub struct ParameterOverrides {
    pub initial_backlog: Option<u32>,
    pub agent_count: Option<u32>,
    pub avg_handling_time: Option<f64>,
    pub arrival_rate: Option<u32>,
    pub horizon_hours: Option<u32>,
    pub sla_threshold_hours: Option<f64>,
    pub trial_count: Option<usize>,
    pub seed: Option<u64>,
}

impl Scenario {
    pub fn apply(mut self, overrides: &ParameterOverrides) -> Self {
        let p = &mut self.parameters;
        if let Some(value) = overrides.initial_backlog {
            p.initial_backlog = value;
        }
        if let Some(value) = overrides.agent_count {
            p.agent_count = value;
        }
        if let Some(value) = overrides.avg_handling_time {
            p.avg_handling_time = value;
        }
        if let Some(value) = overrides.arrival_rate {
            p.arrival_rate = value;
        }
        if let Some(value) = overrides.horizon_hours {
            p.horizon_hours = value;
        }
        if let Some(value) = overrides.sla_threshold_hours {
            p.sla_threshold_hours = value;
        }
        if let Some(value) = overrides.trial_count {
            p.trial_count = value;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }
}

pub fn parse_scenario_yaml_str(yaml: &str, path: &Path) -> Result<Scenario, ScenarioError> {
    let record: ScenarioRecord = if yaml.trim().is_empty() {
        ScenarioRecord::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|source| ScenarioError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    };

    let defaults = SimulationParameters::default();
    let name = record.name.unwrap_or_else(|| {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("default")
            .to_string()
    });
    Ok(Scenario {
        name,
        seed: record.seed,
        parameters: SimulationParameters {
            initial_backlog: record.initial_backlog.unwrap_or(defaults.initial_backlog),
            agent_count: record.agent_count.unwrap_or(defaults.agent_count),
            avg_handling_time: record.avg_handling_time.unwrap_or(defaults.avg_handling_time),
            arrival_rate: record.arrival_rate.unwrap_or(defaults.arrival_rate),
            horizon_hours: record.horizon_hours.unwrap_or(defaults.horizon_hours),
            sla_threshold_hours: record
                .sla_threshold_hours
                .unwrap_or(defaults.sla_threshold_hours),
            trial_count: record.trial_count.unwrap_or(defaults.trial_count),
        },
    })
}

pub fn load_scenario_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Scenario, ScenarioError> {
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path).map_err(|source| ScenarioError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scenario_yaml_str(&yaml, path)
}

/// Loads the optional scenario file, layers the overrides on top and checks
/// the ranges the simulator depends on.
pub fn resolve_scenario(
    path: Option<&str>,
    overrides: &ParameterOverrides,
) -> Result<Scenario, ScenarioError> {
    let scenario = match path {
        Some(path) => load_scenario_from_yaml_file(path)?,
        None => Scenario::default(),
    };
    let scenario = scenario.apply(overrides);
    scenario.parameters.validate()?;
    Ok(scenario)
}

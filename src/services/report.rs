use chrono::{DateTime, Duration, FixedOffset};
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use crate::domain::parameters::SimulationParameters;
use crate::domain::risk::RiskBand;
use crate::services::queue_simulation::hourly_capacity;
use crate::services::simulation_types::{round_to, BacklogPercentiles, SimulationRun};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to serialize report as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Serialize, Debug, Clone)]
pub struct ForecastWindow {
    pub start: String,
    pub end: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct SimulationReport {
    pub scenario: String,
    pub window: ForecastWindow,
    pub seed: u64,
    pub parameters: SimulationParameters,
    pub capacity_per_hour: f64,
    pub breach_probability_pct: f64,
    pub breach_std_dev_pct: f64,
    pub expected_backlog: f64,
    pub backlog_percentiles: BacklogPercentiles,
    pub risk: RiskBand,
    pub recommendation: String,
}

impl SimulationReport {
    pub fn new(
        scenario: &str,
        params: &SimulationParameters,
        seed: u64,
        start: DateTime<FixedOffset>,
        run: &SimulationRun,
    ) -> Self {
        let end = start + Duration::hours(i64::from(params.horizon_hours));
        let risk = RiskBand::classify(run.result.breach_probability_pct);
        Self {
            scenario: scenario.to_string(),
            window: ForecastWindow {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            },
            seed,
            parameters: params.clone(),
            capacity_per_hour: round_to(hourly_capacity(params), 2),
            breach_probability_pct: run.result.breach_probability_pct,
            breach_std_dev_pct: run.breach_std_dev_pct(),
            expected_backlog: run.result.expected_backlog,
            backlog_percentiles: run.backlog_percentiles(),
            risk,
            recommendation: risk.recommendation().to_string(),
        }
    }

    pub fn to_string_as(&self, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::Yaml => Ok(serde_yaml::to_string(self)?),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    pub fn write_to_file(&self, path: &str, format: ReportFormat) -> Result<(), ReportError> {
        let contents = self.to_string_as(format)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::services::report::ReportFormat;
use crate::services::scenario_yaml::ParameterOverrides;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

/// Scenario inputs shared by every forecasting command. Flags override the
/// scenario file, which overrides the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ScenarioArgs {
    /// Scenario YAML file
    #[arg(short, long)]
    pub config: Option<String>,
    /// Cases currently waiting
    #[arg(short, long)]
    pub backlog: Option<u32>,
    /// Active agents
    #[arg(short, long)]
    pub agents: Option<u32>,
    /// Incoming cases per hour
    #[arg(short = 'r', long)]
    pub arrival_rate: Option<u32>,
    /// Average hours spent on one case
    #[arg(short = 't', long)]
    pub handling_time: Option<f64>,
    /// SLA threshold in hours
    #[arg(short, long)]
    pub sla: Option<f64>,
    /// Forecast window in hours
    #[arg(short = 'w', long)]
    pub horizon: Option<u32>,
    /// Number of simulated trials
    #[arg(short = 'n', long)]
    pub trials: Option<usize>,
    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ScenarioArgs {
    pub fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            initial_backlog: self.backlog,
            agent_count: self.agents,
            avg_handling_time: self.handling_time,
            arrival_rate: self.arrival_rate,
            horizon_hours: self.horizon,
            sla_threshold_hours: self.sla,
            trial_count: self.trials,
            seed: self.seed,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast SLA breach probability and ending backlog
    Simulate {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Start of the forecast window (RFC 3339), defaults to now
        #[arg(long)]
        start: Option<String>,
        /// Output report file
        #[arg(short, long)]
        output: Option<String>,
        /// Output report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Yaml)]
        format: ReportFormat,
        /// Optional PNG histogram of ending backlog
        #[arg(long)]
        histogram: Option<String>,
        /// Run trials on the current thread instead of the worker pool
        #[arg(long)]
        sequential: bool,
    },
    /// Compare the scenario against staffing and arrival-rate alternatives
    WhatIf {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Agent counts to try, comma separated
        #[arg(long, value_delimiter = ',')]
        agents_list: Vec<u32>,
        /// Arrival rates to try, comma separated
        #[arg(long, value_delimiter = ',')]
        arrival_rates: Vec<u32>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

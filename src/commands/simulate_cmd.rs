use std::process::ExitCode;

use chrono::{DateTime, FixedOffset, Local};
use tracing::{debug, info};

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_simulation_report;
use crate::services::histogram::write_backlog_histogram_png;
use crate::services::parallel_runner::{simulate_parallel, simulate_streams};
use crate::services::report::SimulationReport;
use crate::services::scenario_yaml::resolve_scenario;

pub fn simulate_command(cmd: Commands) -> ExitCode {
    let Commands::Simulate {
        scenario,
        start,
        output,
        format,
        histogram,
        sequential,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let resolved = match resolve_scenario(scenario.config.as_deref(), &scenario.overrides()) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Failed to load scenario: {e}");
            return ExitCode::FAILURE;
        }
    };
    let start = match parse_start(start.as_deref()) {
        Ok(start) => start,
        Err(value) => {
            eprintln!("Failed to parse start time: {value} (expected RFC 3339)");
            return ExitCode::FAILURE;
        }
    };
    let seed = resolved.seed.unwrap_or_else(rand::random);
    info!(scenario = %resolved.name, seed, sequential, "running forecast");

    let run = if sequential {
        simulate_streams(&resolved.parameters, seed)
    } else {
        simulate_parallel(&resolved.parameters, seed)
    };
    let report = SimulationReport::new(&resolved.name, &resolved.parameters, seed, start, &run);
    println!("{}", format_simulation_report(&report));

    if let Some(path) = histogram {
        if let Err(e) = write_backlog_histogram_png(&path, &run.ending_backlogs()) {
            eprintln!("Failed to write backlog histogram: {e}");
            return ExitCode::FAILURE;
        }
        println!("Backlog histogram written to {path}");
    }

    if let Some(path) = output {
        debug!(path = %path, ?format, "writing report");
        if let Err(e) = report.write_to_file(&path, format) {
            eprintln!("Failed to write simulation report: {e}");
            return ExitCode::FAILURE;
        }
        println!("Simulation report written to {path}");
    }
    ExitCode::SUCCESS
}

fn parse_start(value: Option<&str>) -> Result<DateTime<FixedOffset>, String> {
    match value {
        Some(value) => DateTime::parse_from_rfc3339(value).map_err(|_| value.to_string()),
        None => Ok(Local::now().fixed_offset()),
    }
}

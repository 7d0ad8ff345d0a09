use std::process::ExitCode;

use tracing::info;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_what_if_table;
use crate::services::scenario_yaml::resolve_scenario;
use crate::services::what_if::{run_what_if, Variation};

pub fn what_if_command(cmd: Commands) -> ExitCode {
    let Commands::WhatIf {
        scenario,
        agents_list,
        arrival_rates,
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

    let variations = default_variations(resolved.parameters.agent_count, &agents_list, &arrival_rates);
    let seed = resolved.seed.unwrap_or_else(rand::random);
    info!(scenario = %resolved.name, seed, variations = variations.len(), "running what-if sweep");

    let rows = match run_what_if(&resolved.parameters, &variations, seed) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Failed to run what-if variation: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("What-if analysis for {} (seed {seed})", resolved.name);
    println!("{}", format_what_if_table(&rows));
    ExitCode::SUCCESS
}

/// Without explicit levers, tries two and four extra agents.
fn default_variations(agent_count: u32, agents_list: &[u32], arrival_rates: &[u32]) -> Vec<Variation> {
    if agents_list.is_empty() && arrival_rates.is_empty() {
        return vec![
            Variation::Agents(agent_count.saturating_add(2)),
            Variation::Agents(agent_count.saturating_add(4)),
        ];
    }
    agents_list
        .iter()
        .map(|&count| Variation::Agents(count))
        .chain(arrival_rates.iter().map(|&rate| Variation::ArrivalRate(rate)))
        .collect()
}

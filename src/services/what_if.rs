use serde::Serialize;
use tracing::debug;

use crate::domain::parameters::{ParameterError, SimulationParameters};
use crate::domain::risk::RiskBand;
use crate::services::parallel_runner::simulate_streams;
use crate::services::simulation_types::SimulationResult;

/// One lever an operator can pull against the base scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variation {
    Agents(u32),
    ArrivalRate(u32),
}

impl Variation {
    pub fn label(&self) -> String {
        match self {
            Variation::Agents(count) => format!("agents = {count}"),
            Variation::ArrivalRate(rate) => format!("arrival rate = {rate}/h"),
        }
    }

    fn apply(&self, base: &SimulationParameters) -> SimulationParameters {
        let mut params = base.clone();
        match *self {
            Variation::Agents(count) => params.agent_count = count,
            Variation::ArrivalRate(rate) => params.arrival_rate = rate,
        }
        params
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct WhatIfRow {
    pub label: String,
    pub agent_count: u32,
    pub arrival_rate: u32,
    #[serde(flatten)]
    pub result: SimulationResult,
    pub risk: RiskBand,
}

/// Runs the base scenario followed by each distinct variation, in the order
/// first given. Rows use the same per-trial streams as the `simulate` command
/// for `seed`, so the baseline matches a plain forecast and rows differ only by
/// the lever that was pulled.
///
/// # Errors
/// Returns the first variation whose parameters fail validation, before any
/// row is simulated.
pub fn run_what_if(
    base: &SimulationParameters,
    variations: &[Variation],
    seed: u64,
) -> Result<Vec<WhatIfRow>, ParameterError> {
    let mut distinct: Vec<Variation> = Vec::with_capacity(variations.len());
    for variation in variations {
        if !distinct.contains(variation) {
            distinct.push(*variation);
        }
    }
    if distinct.len() < variations.len() {
        debug!(
            dropped = variations.len() - distinct.len(),
            "ignoring repeated what-if variations"
        );
    }

    let variants = distinct
        .iter()
        .map(|variation| -> Result<(String, SimulationParameters), ParameterError> {
            let params = variation.apply(base);
            params.validate()?;
            Ok((variation.label(), params))
        })
        .collect::<Result<Vec<_>, ParameterError>>()?;

    let mut rows = vec![row("baseline".to_string(), base, seed)];
    rows.extend(
        variants
            .iter()
            .map(|(label, params)| row(label.clone(), params, seed)),
    );
    Ok(rows)
}

fn row(label: String, params: &SimulationParameters, seed: u64) -> WhatIfRow {
    let result = simulate_streams(params, seed).result;
    WhatIfRow {
        label,
        agent_count: params.agent_count,
        arrival_rate: params.arrival_rate,
        risk: RiskBand::classify(result.breach_probability_pct),
        result,
    }
}

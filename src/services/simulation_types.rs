use serde::Serialize;

use crate::services::percentiles::value_f64_sorted;

/// Statistics of one simulated trajectory.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    /// Share of completions that finished after the SLA threshold, 0 when
    /// nothing completed.
    pub breach_fraction: f64,
    pub ending_backlog: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    pub breach_probability_pct: f64,
    pub expected_backlog: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BacklogPercentiles {
    pub p50: f64,
    pub p85: f64,
    pub p95: f64,
    pub p100: f64,
}

/// The aggregated result together with every trial it was computed from,
/// in trial order.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub result: SimulationResult,
    pub outcomes: Vec<TrialOutcome>,
}

impl SimulationRun {
    pub fn from_outcomes(outcomes: Vec<TrialOutcome>) -> Self {
        let result = aggregate(&outcomes);
        Self { result, outcomes }
    }

    pub fn ending_backlogs(&self) -> Vec<f64> {
        self.outcomes.iter().map(|o| o.ending_backlog).collect()
    }

    pub fn backlog_percentiles(&self) -> BacklogPercentiles {
        let mut backlogs = self.ending_backlogs();
        backlogs.sort_by(f64::total_cmp);
        BacklogPercentiles {
            p50: round_to(value_f64_sorted(&backlogs, 50.0), 1),
            p85: round_to(value_f64_sorted(&backlogs, 85.0), 1),
            p95: round_to(value_f64_sorted(&backlogs, 95.0), 1),
            p100: round_to(value_f64_sorted(&backlogs, 100.0), 1),
        }
    }

    /// Population standard deviation of the per-trial breach fractions, in percent.
    pub fn breach_std_dev_pct(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        let n = self.outcomes.len() as f64;
        let mean = self.outcomes.iter().map(|o| o.breach_fraction).sum::<f64>() / n;
        let variance = self
            .outcomes
            .iter()
            .map(|o| (o.breach_fraction - mean).powi(2))
            .sum::<f64>()
            / n;
        round_to(variance.sqrt() * 100.0, 2)
    }
}

/// Means over trials; the sums run in trial order so equal outcome lists
/// always aggregate to identical bits.
pub fn aggregate(outcomes: &[TrialOutcome]) -> SimulationResult {
    if outcomes.is_empty() {
        return SimulationResult {
            breach_probability_pct: 0.0,
            expected_backlog: 0.0,
        };
    }
    let n = outcomes.len() as f64;
    let mean_breach = outcomes.iter().map(|o| o.breach_fraction).sum::<f64>() / n;
    let mean_backlog = outcomes.iter().map(|o| o.ending_backlog).sum::<f64>() / n;
    SimulationResult {
        breach_probability_pct: round_to(mean_breach * 100.0, 2),
        expected_backlog: round_to(mean_backlog, 1),
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

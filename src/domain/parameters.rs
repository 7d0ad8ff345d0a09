use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TRIAL_COUNT: usize = 500;

#[derive(Error, Debug, PartialEq)]
pub enum ParameterError {
    #[error("agent count must be at least 1")]
    NoAgents,
    #[error("average handling time must be a positive number of hours, got {0}")]
    InvalidHandlingTime(f64),
    #[error("SLA threshold must be a positive number of hours, got {0}")]
    InvalidSlaThreshold(f64),
    #[error("forecast horizon must be at least 1 hour")]
    EmptyHorizon,
    #[error("trial count must be greater than zero")]
    NoTrials,
}

/// Inputs of one forecast: the current state of the queue and the staffing
/// that works it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    /// Cases currently waiting.
    pub initial_backlog: u32,
    pub agent_count: u32,
    /// Hours an agent spends on one case.
    pub avg_handling_time: f64,
    /// Nominal incoming cases per hour.
    pub arrival_rate: u32,
    pub horizon_hours: u32,
    pub sla_threshold_hours: f64,
    pub trial_count: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_backlog: 120,
            agent_count: 10,
            avg_handling_time: 0.6,
            arrival_rate: 18,
            horizon_hours: 8,
            sla_threshold_hours: 6.0,
            trial_count: DEFAULT_TRIAL_COUNT,
        }
    }
}

impl SimulationParameters {
    /// Range checks the simulator relies on but never performs itself.
    ///
    /// A zero backlog or a zero arrival rate is valid.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.agent_count == 0 {
            return Err(ParameterError::NoAgents);
        }
        if !(self.avg_handling_time.is_finite() && self.avg_handling_time > 0.0) {
            return Err(ParameterError::InvalidHandlingTime(self.avg_handling_time));
        }
        if !(self.sla_threshold_hours.is_finite() && self.sla_threshold_hours > 0.0) {
            return Err(ParameterError::InvalidSlaThreshold(self.sla_threshold_hours));
        }
        if self.horizon_hours == 0 {
            return Err(ParameterError::EmptyHorizon);
        }
        if self.trial_count == 0 {
            return Err(ParameterError::NoTrials);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_operator_console() {
        let params = SimulationParameters::default();
        assert_eq!(params.initial_backlog, 120);
        assert_eq!(params.agent_count, 10);
        assert_eq!(params.arrival_rate, 18);
        assert_eq!(params.horizon_hours, 8);
        assert_eq!(params.trial_count, 500);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validate_accepts_empty_queue_and_no_arrivals() {
        let params = SimulationParameters {
            initial_backlog: 0,
            arrival_rate: 0,
            ..SimulationParameters::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let base = SimulationParameters::default();

        let params = SimulationParameters { agent_count: 0, ..base.clone() };
        assert_eq!(params.validate(), Err(ParameterError::NoAgents));

        let params = SimulationParameters { avg_handling_time: 0.0, ..base.clone() };
        assert_eq!(params.validate(), Err(ParameterError::InvalidHandlingTime(0.0)));

        let params = SimulationParameters { avg_handling_time: f64::NAN, ..base.clone() };
        assert!(matches!(
            params.validate(),
            Err(ParameterError::InvalidHandlingTime(_))
        ));

        let params = SimulationParameters { sla_threshold_hours: -1.0, ..base.clone() };
        assert_eq!(params.validate(), Err(ParameterError::InvalidSlaThreshold(-1.0)));

        let params = SimulationParameters { horizon_hours: 0, ..base.clone() };
        assert_eq!(params.validate(), Err(ParameterError::EmptyHorizon));

        let params = SimulationParameters { trial_count: 0, ..base };
        assert_eq!(params.validate(), Err(ParameterError::NoTrials));
    }
}

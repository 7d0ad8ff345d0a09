use crate::domain::parameters::SimulationParameters;

/// The operator-console defaults: 120 waiting cases, 10 agents at 0.6h per
/// case, 18 arrivals per hour, a 6h SLA over an 8h window, 500 trials.
pub fn golden_scenario() -> SimulationParameters {
    SimulationParameters::default()
}

pub fn params_with(adjust: impl FnOnce(&mut SimulationParameters)) -> SimulationParameters {
    let mut params = golden_scenario();
    adjust(&mut params);
    params
}

pub fn fixed_start() -> chrono::DateTime<chrono::FixedOffset> {
    chrono::DateTime::parse_from_rfc3339("2026-03-02T08:00:00+01:00").unwrap()
}

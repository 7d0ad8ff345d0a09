use rand::Rng;
use rand_distr::{Distribution, Uniform};
use tracing::{debug, warn};

use crate::domain::parameters::SimulationParameters;
use crate::services::simulation_types::{SimulationResult, SimulationRun, TrialOutcome};

/// Shortest time an agent spends on any single case.
pub const MIN_COMPLETION_OFFSET_HOURS: f64 = 0.2;

/// Half-width of the band of arrival counts drawn around the nominal rate.
pub const ARRIVAL_NOISE: u32 = 3;

/// Cases the whole staff can finish in one hour.
pub fn hourly_capacity(params: &SimulationParameters) -> f64 {
    params.agent_count as f64 / params.avg_handling_time
}

/// Per-step quantities derived once from the parameters and shared by every
/// trial of a run.
#[derive(Debug, Clone)]
pub struct QueueModel {
    capacity: f64,
    arrivals: Option<(u32, u32)>,
    completion_offset: Uniform<f64>,
}

impl QueueModel {
    pub fn new(params: &SimulationParameters) -> Self {
        // A zero nominal rate means an idle inbox, not noise around nothing.
        let arrivals = (params.arrival_rate > 0).then(|| {
            (
                params.arrival_rate.saturating_sub(ARRIVAL_NOISE),
                params.arrival_rate.saturating_add(ARRIVAL_NOISE),
            )
        });
        // Below the minimum the range inverts; draw between the two bounds.
        let low = MIN_COMPLETION_OFFSET_HOURS.min(params.avg_handling_time);
        let high = MIN_COMPLETION_OFFSET_HOURS.max(params.avg_handling_time);
        Self {
            capacity: hourly_capacity(params),
            arrivals,
            completion_offset: Uniform::new_inclusive(low, high),
        }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    fn draw_arrivals<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        match self.arrivals {
            Some((low, high)) => rng.gen_range(low..=high),
            None => 0,
        }
    }
}

/// State of one trial while it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub queue_length: f64,
    pub elapsed_hours: u32,
    /// Hours since the start of the window at which each case finished.
    pub completions: Vec<f64>,
}

impl Trajectory {
    pub fn new(initial_backlog: u32) -> Self {
        Self {
            queue_length: initial_backlog as f64,
            elapsed_hours: 0,
            completions: Vec::new(),
        }
    }

    /// Advances the queue by one hour.
    ///
    /// The full `processed` amount drains the queue, but only its whole part
    /// produces completion timestamps.
    pub fn step<R: Rng + ?Sized>(&mut self, model: &QueueModel, rng: &mut R) {
        self.queue_length += model.draw_arrivals(rng) as f64;

        let processed = self.queue_length.min(model.capacity);
        self.queue_length -= processed;

        let start = self.elapsed_hours as f64;
        for _ in 0..processed.floor() as usize {
            self.completions
                .push(start + model.completion_offset.sample(rng));
        }
        self.elapsed_hours += 1;
    }

    pub fn outcome(&self, sla_threshold_hours: f64) -> TrialOutcome {
        let breaches = self
            .completions
            .iter()
            .filter(|&&finished| finished > sla_threshold_hours)
            .count();
        TrialOutcome {
            breach_fraction: breaches as f64 / self.completions.len().max(1) as f64,
            ending_backlog: self.queue_length,
        }
    }
}

pub fn simulate_trial<R: Rng + ?Sized>(
    params: &SimulationParameters,
    model: &QueueModel,
    rng: &mut R,
) -> TrialOutcome {
    let mut trajectory = Trajectory::new(params.initial_backlog);
    while trajectory.elapsed_hours < params.horizon_hours {
        trajectory.step(model, rng);
    }
    trajectory.outcome(params.sla_threshold_hours)
}

/// Runs `trial_count` trials one after another, all drawing from `rng`.
///
/// Parameters are expected to have passed [`SimulationParameters::validate`].
pub fn simulate<R: Rng + ?Sized>(params: &SimulationParameters, rng: &mut R) -> SimulationResult {
    simulate_with_outcomes(params, rng).result
}

pub fn simulate_with_outcomes<R: Rng + ?Sized>(
    params: &SimulationParameters,
    rng: &mut R,
) -> SimulationRun {
    let model = prepare_model(params);
    let outcomes = (0..params.trial_count)
        .map(|_| simulate_trial(params, &model, rng))
        .collect();
    SimulationRun::from_outcomes(outcomes)
}

pub(crate) fn prepare_model(params: &SimulationParameters) -> QueueModel {
    if params.avg_handling_time < MIN_COMPLETION_OFFSET_HOURS {
        warn!(
            avg_handling_time = params.avg_handling_time,
            min = MIN_COMPLETION_OFFSET_HOURS,
            "handling time below minimum case duration, completion offsets drawn from [{}, {}]",
            params.avg_handling_time,
            MIN_COMPLETION_OFFSET_HOURS
        );
    }
    let model = QueueModel::new(params);
    debug!(
        capacity = model.capacity(),
        trials = params.trial_count,
        horizon = params.horizon_hours,
        "prepared queue model"
    );
    model
}

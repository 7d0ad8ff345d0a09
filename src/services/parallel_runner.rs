use rand_chacha::ChaCha8Rng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::info;

use crate::domain::parameters::SimulationParameters;
use crate::services::queue_simulation::{prepare_model, simulate_trial, QueueModel};
use crate::services::simulation_types::{SimulationRun, TrialOutcome};

/// Generator for trial `index`: every trial owns an independent ChaCha stream
/// derived from the run seed.
pub fn trial_rng(seed: u64, index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index as u64);
    rng
}

/// Runs the trials across the rayon pool.
///
/// Outcomes are collected in trial order before averaging, so the result is
/// the same bits as [`simulate_streams`] for the same seed.
pub fn simulate_parallel(params: &SimulationParameters, seed: u64) -> SimulationRun {
    let model = prepare_model(params);
    let outcomes: Vec<TrialOutcome> = (0..params.trial_count)
        .into_par_iter()
        .map(|index| run_trial(params, &model, seed, index))
        .collect();
    log_run(params, seed, SimulationRun::from_outcomes(outcomes))
}

/// Sequential counterpart of [`simulate_parallel`].
pub fn simulate_streams(params: &SimulationParameters, seed: u64) -> SimulationRun {
    let model = prepare_model(params);
    let outcomes: Vec<TrialOutcome> = (0..params.trial_count)
        .map(|index| run_trial(params, &model, seed, index))
        .collect();
    log_run(params, seed, SimulationRun::from_outcomes(outcomes))
}

fn run_trial(
    params: &SimulationParameters,
    model: &QueueModel,
    seed: u64,
    index: usize,
) -> TrialOutcome {
    let mut rng = trial_rng(seed, index);
    simulate_trial(params, model, &mut rng)
}

fn log_run(params: &SimulationParameters, seed: u64, run: SimulationRun) -> SimulationRun {
    info!(
        seed,
        trials = params.trial_count,
        breach_probability_pct = run.result.breach_probability_pct,
        expected_backlog = run.result.expected_backlog,
        "simulation finished"
    );
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::simulation_types::SimulationResult;
    use crate::test_support::{golden_scenario, params_with};

    #[test]
    fn parallel_and_sequential_streams_agree_bit_for_bit() {
        let params = params_with(|p| p.trial_count = 2_000);
        let parallel = simulate_parallel(&params, 42);
        let sequential = simulate_streams(&params, 42);
        assert_eq!(parallel, sequential);
        assert_eq!(
            parallel.result.expected_backlog.to_bits(),
            sequential.result.expected_backlog.to_bits()
        );
    }

    #[test]
    fn repeated_parallel_runs_are_reproducible() {
        let params = golden_scenario();
        assert_eq!(simulate_parallel(&params, 9), simulate_parallel(&params, 9));
    }

    #[test]
    fn trials_draw_from_distinct_streams() {
        let params = golden_scenario();
        let run = simulate_streams(&params, 3);
        assert_eq!(run.outcomes.len(), params.trial_count);
        let first = run.outcomes[0].ending_backlog;
        assert!(run.outcomes.iter().any(|o| o.ending_backlog != first));
    }

    #[test]
    fn golden_scenario_pair_on_trial_streams() {
        let expected = SimulationResult {
            breach_probability_pct: 25.0,
            expected_backlog: 130.6,
        };
        assert_eq!(simulate_streams(&golden_scenario(), 20_260_101).result, expected);
        assert_eq!(simulate_parallel(&golden_scenario(), 20_260_101).result, expected);
    }

    #[test]
    fn golden_scenario_pair_for_second_seed() {
        let run = simulate_parallel(&golden_scenario(), 2026);
        assert_eq!(
            run.result,
            SimulationResult {
                breach_probability_pct: 25.0,
                expected_backlog: 130.1,
            }
        );
    }
}

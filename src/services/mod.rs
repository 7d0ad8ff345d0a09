pub mod histogram;
pub mod parallel_runner;
pub mod percentiles;
pub mod queue_simulation;
pub mod report;
pub mod scenario_yaml;
pub mod simulation_types;
pub mod what_if;

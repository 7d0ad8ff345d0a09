//! Forecasts the chance that a service-desk queue breaches its SLA over a
//! window of hours, by simulating the backlog many times over.
//!
//! [`services::queue_simulation::simulate`] is the core; everything else loads
//! scenarios, runs trials in parallel and reports the results.

pub mod commands;
pub mod domain;
pub mod services;
#[cfg(test)]
mod test_support;

use crate::services::report::SimulationReport;
use crate::services::what_if::WhatIfRow;

pub fn format_simulation_report(report: &SimulationReport) -> String {
    let p = &report.parameters;
    let mut lines = Vec::new();
    lines.push("SLA Forecast".to_string());
    lines.push(format!("Scenario: {}", report.scenario));
    lines.push(format!("Window: {} -> {}", report.window.start, report.window.end));
    lines.push(format!(
        "Backlog: {} | Agents: {} | Arrivals: {}/h | Handling: {:.2}h | SLA: {}h",
        p.initial_backlog, p.agent_count, p.arrival_rate, p.avg_handling_time, p.sla_threshold_hours
    ));
    lines.push(format!("Trials: {} (seed {})", p.trial_count, report.seed));
    lines.push(format!("Capacity: {:.2} cases/h", report.capacity_per_hour));
    lines.push(String::new());
    lines.push(format!(
        "SLA breach probability: {:.2}% (std dev {:.2}%)",
        report.breach_probability_pct, report.breach_std_dev_pct
    ));
    lines.push(format!("Expected backlog: {:.1} cases", report.expected_backlog));
    lines.push(format!(
        "Backlog P50/P85/P95/P100: {:.1} / {:.1} / {:.1} / {:.1}",
        report.backlog_percentiles.p50,
        report.backlog_percentiles.p85,
        report.backlog_percentiles.p95,
        report.backlog_percentiles.p100
    ));
    lines.push(String::new());
    lines.push(format!("{}: {}", report.risk.label(), report.recommendation));

    lines.join("\n")
}

pub fn format_what_if_table(rows: &[WhatIfRow]) -> String {
    let mut lines = Vec::new();
    lines.push("Scenario | Agents | Arrivals/h | Breach % | Backlog | Risk".to_string());
    lines.push("---------|--------|------------|----------|---------|-----".to_string());
    for row in rows {
        lines.push(format!(
            "{} | {} | {} | {:.2} | {:.1} | {}",
            row.label,
            row.agent_count,
            row.arrival_rate,
            row.result.breach_probability_pct,
            row.result.expected_backlog,
            row.risk.label()
        ));
    }
    lines.join("\n")
}

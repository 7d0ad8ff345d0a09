use predicates::prelude::*;

#[test]
fn what_if_compares_staffing_levels() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("sla-forecast");
    cmd.args(["what-if", "--seed", "5", "--agents-list", "12,30", "-n", "100"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("What-if analysis for default (seed 5)"))
        .stdout(predicate::str::contains("baseline | 10 | 18 | 25.00"))
        .stdout(predicate::str::contains("agents = 12 | 12 | 18"))
        .stdout(predicate::str::contains("agents = 30 | 30 | 18"));
}

#[test]
fn what_if_defaults_to_extra_agents() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("sla-forecast");
    cmd.args(["what-if", "--seed", "5", "-n", "50"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("agents = 12"))
        .stdout(predicate::str::contains("agents = 14"));
}

#[test]
fn what_if_accepts_arrival_rate_levers() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("sla-forecast");
    cmd.args(["what-if", "--seed", "2", "--arrival-rates", "10", "-n", "50"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("arrival rate = 10/h | 10 | 10"));
}

#[test]
fn what_if_runs_repeated_levers_once() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("sla-forecast");
    cmd.args(["what-if", "--seed", "4", "--agents-list", "12,14,12", "-n", "20"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("agents = 12 |").count(), 1);
    assert_eq!(stdout.matches("agents = 14 |").count(), 1);
}

#[test]
fn what_if_rejects_zero_agents() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("sla-forecast");
    cmd.args(["what-if", "--seed", "4", "--agents-list", "12,0", "-n", "20"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to run what-if variation"))
        .stderr(predicate::str::contains("agent count must be at least 1"));
}

#[test]
fn what_if_baseline_matches_simulate_for_same_seed() {
    let mut simulate = assert_cmd::cargo_bin_cmd!("sla-forecast");
    simulate.args(["simulate", "--seed", "20260101"]);
    simulate
        .assert()
        .success()
        .stdout(predicate::str::contains("Expected backlog: 130.6 cases"));

    let mut what_if = assert_cmd::cargo_bin_cmd!("sla-forecast");
    what_if.args(["what-if", "--seed", "20260101"]);
    what_if
        .assert()
        .success()
        .stdout(predicate::str::contains("baseline | 10 | 18 | 25.00 | 130.6"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn configs() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../configs")
}

fn size_cmd() -> Command {
    let configs = configs();
    let mut cmd = Command::cargo_bin("size").expect("size bin");
    cmd.args([
        "--missions",
        configs.join("missions").to_str().unwrap(),
        "--powerplants",
        configs.join("powerplants.yaml").to_str().unwrap(),
        "--fleet",
        configs.join("fleet.yaml").to_str().unwrap(),
    ]);
    cmd
}

#[test]
fn size_reports_the_endurance_mission() {
    size_cmd()
        .args(["--mission", "droan-endurance", "--no-iterate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sizing Report: droan-endurance"))
        .stdout(predicate::str::contains("3s55p (165 cells)"))
        .stdout(predicate::str::contains("endurance"));
}

#[test]
fn size_iterates_to_a_converged_mass() {
    size_cmd()
        .args(["--mission", "droan-endurance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converged"))
        .stdout(predicate::str::contains("corrections"));
}

#[test]
fn size_writes_artifacts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("phases.csv");
    let json_path = dir.path().join("summary.json");

    size_cmd()
        .args([
            "--mission",
            "droan-endurance",
            "--export-phases",
            csv_path.to_str().unwrap(),
            "--summary",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let csv = std::fs::read_to_string(&csv_path).expect("phases csv");
    assert!(csv.starts_with("phase,final_speed_m_s"));
    assert!(csv.lines().count() > 1);

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).expect("summary json"))
            .expect("summary parses");
    assert_eq!(summary["mission"], "droan-endurance");
    assert_eq!(summary["pack"]["number_in_series"], 3);
    assert!(summary["converged"]["iterated_takeoff_mass_kg"].as_f64().unwrap() > 0.0);
}

#[test]
fn size_rejects_unknown_missions() {
    size_cmd()
        .args(["--mission", "no-such-mission"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn pattern_prints_the_east_bay_legs() {
    Command::cargo_bin("pattern")
        .expect("pattern bin")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final leg is 201 meters"))
        .stdout(predicate::str::contains("Pattern width is 201 meters"));
}

#[test]
fn pattern_rejects_excessive_headwind() {
    Command::cargo_bin("pattern")
        .expect("pattern bin")
        .args(["--headwind", "20.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("headwind"));
}

#[test]
fn matching_sweeps_to_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("matching.csv");

    Command::cargo_bin("matching")
        .expect("matching bin")
        .args(["--output", csv_path.to_str().unwrap()])
        .assert()
        .success();

    let csv = std::fs::read_to_string(&csv_path).expect("matching csv");
    assert!(csv.starts_with("wing_loading_n_m2,stall_limit_n_m2"));
    // 90 steps sample 91 rows plus the header.
    assert_eq!(csv.lines().count(), 92);
}

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("perf_calc_cli").unwrap()
}

#[test]
fn wind_prints_components() {
    cli()
        .args(["wind", "0", "90", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("headwind: 0.00 kt"))
        .stdout(predicate::str::contains("crosswind: 20.00 kt (from right)"));
}

#[test]
fn wind_reports_tailwind() {
    cli()
        .args(["wind", "132", "312", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tailwind: 20.00 kt"));
}

#[test]
fn climb_prints_rate() {
    cli()
        .args(["climb", "15", "5000", "11000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("768 ft/min"));
}

#[test]
fn accel_stop_prints_distance() {
    cli()
        .args(["accel-stop", "15", "2000", "11000", "0", "10", "0.95"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3875 ft"));
}

#[test]
fn accel_stop_out_of_envelope_fails() {
    cli()
        .args(["accel-stop", "200", "200000", "99999", "0", "0", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("no result"));
}

#[test]
fn eval_chart_reads_csv_table() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let table = tmp.child("table.csv");
    table.write_str("0,0,1\n10,0,21\n0,10,31\n").unwrap();

    cli()
        .args(["eval-chart", table.path().to_str().unwrap(), "3", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("19"));
}

#[test]
fn eval_chain_reads_json_chain() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let chain = tmp.child("chain.json");
    chain
        .write_str(concat!(
            r#"[{"points":[{"x":0.0,"y":0.0,"z":1.0},"#,
            r#"{"x":10.0,"y":0.0,"z":21.0},{"x":0.0,"y":10.0,"z":31.0}]}]"#
        ))
        .unwrap();

    cli()
        .args(["eval-chain", chain.path().to_str().unwrap(), "3,4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("19"));
}

use std::path::PathBuf;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn aoc() -> Command {
    let mut cmd = Command::cargo_bin("aoc-2016").unwrap();
    cmd.env_remove("AOC_INPUT_DIR").env_remove("RUST_LOG");
    cmd
}

#[test]
fn runs_both_parts_from_input_dir() {
    aoc()
        .arg("1")
        .arg("--input-dir")
        .arg(fixtures())
        .assert()
        .success()
        .stdout(predicate::str::contains("= Day 1: No Time for a Taxicab ="))
        .stdout(predicate::str::contains("-- Part 1 --\n8\n"))
        .stdout(predicate::str::contains("-- Part 2 --\n4\n"));
}

#[test]
fn input_dir_from_environment() {
    aoc()
        .arg("1")
        .env("AOC_INPUT_DIR", fixtures())
        .assert()
        .success()
        .stdout(predicate::str::contains("-- Part 1 --\n8\n"));
}

#[test]
fn runs_selected_part_of_input_file() {
    aoc()
        .args(["6", "--part", "2", "--input"])
        .arg(fixtures().join("06.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("advent"))
        .stdout(predicate::str::contains("easter").not())
        .stdout(predicate::str::contains("Part 1").not());
}

#[test]
fn plain_prints_only_the_answer() {
    aoc()
        .args(["1", "--part", "two", "--plain", "--input-dir"])
        .arg(fixtures())
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn plain_unsolved_day_prints_nothing() {
    aoc()
        .args(["20", "--part", "1", "--plain", "--input-dir"])
        .arg(fixtures())
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("has not yet been developed"))
        .stderr(predicate::str::contains("cannot be opened").not());
}

#[test]
fn plain_missing_input_logs_and_prints_nothing() {
    aoc()
        .args(["5", "--part", "1", "--plain", "--input-dir"])
        .arg(fixtures())
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("cannot be opened"))
        .stderr(predicate::str::contains("has not yet been developed").not());
}

#[test]
fn plain_requires_part() {
    aoc()
        .args(["1", "--plain", "--input-dir"])
        .arg(fixtures())
        .assert()
        .failure();
}

#[test]
fn missing_input_fails() {
    aoc()
        .args(["2", "--input-dir"])
        .arg(fixtures())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read input file"));
}

#[test]
fn unsolved_day_fails() {
    aoc()
        .args(["20", "--input"])
        .arg(fixtures().join("01.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no solution available for day 20"));
}

#[test]
fn day_out_of_range_is_rejected() {
    aoc().arg("26").assert().failure();
}

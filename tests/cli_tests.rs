//! CLI tests: command handlers directly, and the binary through assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use replan::cli::{commands, ScopeArg};
use replan::error::ReplanError;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SHEET_NAME: &str = "01. Calendario SCL Abarrotes";

const COL_CARRIER: u16 = 1; // B
const COL_CHAIN: u16 = 3; // D
const COL_AI: u16 = 34;

fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).unwrap();

    let weekdays = ["L", "M", "W", "J", "V", "S"];
    for i in 0..6u16 {
        worksheet
            .write_number(2, COL_AI + i, (i + 1) as f64)
            .unwrap();
        worksheet
            .write_string(5, COL_AI + i, weekdays[i as usize])
            .unwrap();
    }

    // Row 8: task on day 3 (AK); row 9: task on day 4 (AL)
    worksheet.write_string(7, COL_CARRIER, "North").unwrap();
    worksheet.write_string(7, COL_CHAIN, "Retail").unwrap();
    worksheet.write_number(7, COL_AI + 2, 2.0).unwrap();
    worksheet.write_string(8, COL_CARRIER, "South").unwrap();
    worksheet.write_string(8, COL_CHAIN, "Grocery").unwrap();
    worksheet.write_number(8, COL_AI + 3, 1.0).unwrap();

    workbook.save(path).unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// HANDLER TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_reschedule_writes_default_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("calendar.xlsx");
    write_fixture(&input);

    let result = commands::reschedule(
        input.clone(),
        3,
        None, // default output path
        ScopeArg::Rescheduled,
        false, // json
        false, // verbose
    );
    assert!(result.is_ok(), "Reschedule should succeed on valid file");
    assert!(dir.path().join("calendar_rescheduled.xlsx").exists());
}

#[test]
fn test_reschedule_explicit_output_and_verbose() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("calendar.xlsx");
    let output = dir.path().join("replanned.xlsx");
    write_fixture(&input);

    let result = commands::reschedule(
        input,
        3,
        Some(output.clone()),
        ScopeArg::Period,
        false,
        true, // verbose
    );
    assert!(result.is_ok());
    assert!(output.exists());
}

#[test]
fn test_reschedule_nonexistent_file() {
    let result = commands::reschedule(
        PathBuf::from("nonexistent.xlsx"),
        3,
        None,
        ScopeArg::Rescheduled,
        false,
        false,
    );
    assert!(result.is_err(), "Reschedule should fail on missing file");
}

#[test]
fn test_reschedule_day_not_found_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("calendar.xlsx");
    write_fixture(&input);

    let result = commands::reschedule(input, 99, None, ScopeArg::Rescheduled, false, false);
    assert!(matches!(result, Err(ReplanError::DayNotFound(99))));
    assert!(!dir.path().join("calendar_rescheduled.xlsx").exists());
}

#[test]
fn test_report_whole_period() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("calendar.xlsx");
    write_fixture(&input);

    let result = commands::report(input, ScopeArg::Period, false, false);
    assert!(result.is_ok());
}

#[test]
fn test_report_rejects_rescheduled_scope() {
    let result = commands::report(
        PathBuf::from("calendar.xlsx"),
        ScopeArg::Rescheduled,
        false,
        false,
    );
    assert!(matches!(result, Err(ReplanError::Validation(_))));
}

// ═══════════════════════════════════════════════════════════════════════════
// BINARY TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_binary_reschedule_reports_moves() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("calendar.xlsx");
    write_fixture(&input);

    Command::cargo_bin("replan")
        .unwrap()
        .arg("reschedule")
        .arg(&input)
        .args(["--day", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Holiday identified in the Delivery column: AK",
        ))
        .stdout(predicate::str::contains(
            "Rescheduling completed. 1 tasks were moved.",
        ));

    assert!(dir.path().join("calendar_rescheduled.xlsx").exists());
}

#[test]
fn test_binary_reschedule_day_not_found_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("calendar.xlsx");
    write_fixture(&input);

    Command::cargo_bin("replan")
        .unwrap()
        .arg("reschedule")
        .arg(&input)
        .args(["--day", "99"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("was not found in row 3"));
}

#[test]
fn test_binary_reschedule_first_day_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("calendar.xlsx");
    write_fixture(&input);

    Command::cargo_bin("replan")
        .unwrap()
        .arg("reschedule")
        .arg(&input)
        .args(["--day", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "first day of the period",
        ));
}

#[test]
fn test_binary_json_report_is_parseable() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("calendar.xlsx");
    write_fixture(&input);

    let output = Command::cargo_bin("replan")
        .unwrap()
        .arg("report")
        .arg(&input)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_deliveries"], 2);
    assert_eq!(report["by_carrier"][0][0], "North");
}

#[test]
fn test_binary_help_names_both_commands() {
    Command::cargo_bin("replan")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reschedule"))
        .stdout(predicate::str::contains("report"));
}

//! Integration tests for the rutter CLI
//!
//! These tests run the rutter binary against the worked example network
//! and verify output and exit codes.

use std::io::Write;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// The worked example network.
const SAMPLE: &str = "AB5 BC4 CD8 DC8 DE6 AD5 CE2 EB3 AE7";

/// Get a Command for rutter
fn rutter() -> Command {
    cargo_bin_cmd!("rutter")
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    rutter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rutter"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("count"))
        .stdout(predicate::str::contains("shortest"));
}

#[test]
fn test_version_flag() {
    rutter()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rutter"));
}

#[test]
fn test_subcommand_help() {
    rutter()
        .args(["count", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Count routes"));
}

// ============================================================================
// Route queries over the worked example
// ============================================================================

#[test]
fn test_route_weight() {
    rutter()
        .args(["route", "A", "B", "C"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_route_missing_edge() {
    rutter()
        .args(["route", "A", "E", "D"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("NO SUCH ROUTE\n");
}

#[test]
fn test_route_longer_sequence() {
    rutter()
        .args(["route", "A", "E", "B", "C", "D"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("22\n");
}

#[test]
fn test_count_max_stops() {
    rutter()
        .args(["count", "C", "C", "--max-stops", "3"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_count_exact_stops() {
    rutter()
        .args(["count", "A", "C", "--exact-stops", "4"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_count_max_weight() {
    rutter()
        .args(["count", "C", "C", "--max-weight", "30"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_shortest_cycle() {
    rutter()
        .args(["shortest", "B", "B"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_shortest_unreachable() {
    rutter()
        .args(["shortest", "C", "A"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("NO SUCH ROUTE\n");
}

#[test]
fn test_queries_over_unknown_nodes_are_neutral() {
    rutter()
        .args(["shortest", "X", "A"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("NO SUCH ROUTE\n");

    rutter()
        .args(["count", "X", "A", "--max-stops", "3"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("0\n");
}

// ============================================================================
// Bound validation
// ============================================================================

#[test]
fn test_rejected_bound_is_zero_not_an_error() {
    rutter()
        .args(["count", "A", "C", "--max-stops", "1"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_rejected_bound_visible_in_json() {
    rutter()
        .args(["--format", "json", "count", "A", "C", "--max-stops", "1"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bound_rejected\":true"));
}

#[test]
fn test_missing_bound_is_usage_error() {
    rutter()
        .args(["count", "A", "C"])
        .write_stdin(SAMPLE)
        .assert()
        .code(2);
}

#[test]
fn test_conflicting_bounds_are_usage_error() {
    rutter()
        .args(["count", "A", "C", "--max-stops", "3", "--max-weight", "9"])
        .write_stdin(SAMPLE)
        .assert()
        .code(2);
}

// ============================================================================
// Input handling
// ============================================================================

#[test]
fn test_graph_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", SAMPLE).unwrap();

    rutter()
        .args(["--graph"])
        .arg(file.path())
        .args(["route", "A", "B", "C"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_malformed_tokens_are_skipped() {
    rutter()
        .args(["route", "A", "B", "C"])
        .write_stdin("AB5, bogus, BC4, CD0")
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_empty_graph_has_no_routes() {
    rutter()
        .args(["shortest", "A", "B"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("NO SUCH ROUTE\n");
}

// ============================================================================
// Formats, usage errors, exit codes
// ============================================================================

#[test]
fn test_json_route_output() {
    rutter()
        .args(["--format", "json", "route", "A", "B", "C"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\":true"))
        .stdout(predicate::str::contains("\"weight\":9"));
}

#[test]
fn test_json_shortest_unreachable() {
    rutter()
        .args(["--format", "json", "shortest", "A", "A"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\":false"))
        .stdout(predicate::str::contains("\"weight\":null"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    rutter()
        .args(["--format", "xml", "shortest", "A", "B"])
        .assert()
        .code(2);
}

#[test]
fn test_multi_character_node_is_usage_error() {
    rutter()
        .args(["route", "AB"])
        .write_stdin(SAMPLE)
        .assert()
        .code(2);
}

#[test]
fn test_unknown_command_exit_code_2() {
    rutter().arg("nonexistent").assert().code(2);
}

#[test]
fn test_missing_command_exit_code_2() {
    rutter().assert().code(2);
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for the route lifecycle
//!
//! These drive the `handoff` binary end to end: loading a route, applying
//! steps, and rendering text or JSON output.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{handoff, write_route, TWO_PACKAGE_ROUTE};
use predicates::prelude::*;

#[test]
fn test_help() {
    handoff()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Driver package hand-off"));
}

#[test]
fn test_version() {
    handoff()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("handoff"));
}

#[test]
fn show_uses_sample_route_by_default() {
    handoff()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Sunset Heights (driver: Michael Chen)",
        ))
        .stdout(predicate::str::contains("Status: on-the-way - En Route to Pickup"))
        .stdout(predicate::str::contains("Packages (4/4 checked):"))
        .stdout(predicate::str::contains("Next: confirm-arrival, toggle-checked, reset"));
}

#[test]
fn show_json_snapshot() {
    let output = handoff()
        .args(["show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "on-the-way");
    assert_eq!(json["total"], 4);
    assert_eq!(json["route"]["payout_cents"], 1250);
    assert_eq!(json["actions"][0], "confirm-arrival");
}

#[test]
fn delivery_path_prints_steps_and_summary() {
    let (_temp, route) = write_route(TWO_PACKAGE_ROUTE);

    let output = handoff()
        .arg("run")
        .arg("--route")
        .arg(&route)
        .args(["arrive", "toggle:b", "pickup", "receipt:proof.png", "deliver"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let steps: Vec<&str> = stdout.lines().take(5).collect();
    similar_asserts::assert_eq!(
        steps,
        vec![
            "confirm-arrival: on-the-way -> picked-up",
            "toggle-checked b: picked-up -> picked-up",
            "confirm-pickup: picked-up -> delivered",
            "attach-receipt proof.png: delivered -> delivered",
            "confirm-delivery: delivered -> complete",
        ]
    );
    assert!(stdout.contains("Packages Delivered: 2\n"));
    assert!(stdout.contains("Earnings: $8.00\n"));
    assert!(stdout.contains("Receipt: proof.png\n"));
}

#[test]
fn partial_pickup_logs_a_warning() {
    handoff()
        .env("HANDOFF_LOG", "warn")
        .args(["run", "arrive", "toggle:4", "pickup"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "pickup confirmed with 1 of 4 packages unchecked",
        ));
}

#[test]
fn return_path_json_report() {
    let output = handoff()
        .args([
            "run",
            "--format",
            "json",
            "arrive",
            "pickup",
            "undeliverable:closed:gate locked",
            "return-complete",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[2]["from"], "delivered");
    assert_eq!(steps[2]["to"], "returned");
    assert_eq!(steps[2]["events"][0]["event"], "return_recorded");
    assert_eq!(steps[2]["events"][0]["notes"], "gate locked");

    let snapshot = &json["snapshot"];
    assert_eq!(snapshot["status"], "complete");
    assert_eq!(snapshot["return_reason"], "closed");
    assert_eq!(snapshot["summary"]["outcome"], "returned");
}

#[test]
fn rejected_step_exits_with_friendly_error() {
    handoff()
        .args(["run", "arrive", "deliver"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "error: cannot confirm-delivery while picked-up",
        ))
        .stderr(predicate::str::contains("Step 2 (confirm-delivery) was rejected"))
        .stderr(predicate::str::contains("suggestions:"));
}

#[test]
fn strict_mode_rejects_unknown_package() {
    handoff()
        .args(["run", "--strict", "toggle:42"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown package: 42"))
        .stderr(predicate::str::contains("Known package ids: 1, 2, 3, 4"));
}

#[test]
fn unknown_package_is_ignored_without_strict() {
    handoff()
        .args(["run", "toggle:42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Packages (4/4 checked):"));
}

#[test]
fn unsupported_receipt_is_rejected() {
    handoff()
        .args(["run", "arrive", "pickup", "receipt:proof.pdf"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported receipt file: proof.pdf"));
}

#[test]
fn malformed_step_is_a_usage_error() {
    handoff()
        .args(["run", "teleport"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown step `teleport`"));
}

#[test]
fn route_from_environment() {
    let (_temp, route) = write_route(TWO_PACKAGE_ROUTE);

    handoff()
        .env("HANDOFF_ROUTE", &route)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: Riverside (driver: Ada Park)"))
        .stdout(predicate::str::contains("Packages (2/2 checked):"));
}

#[test]
fn missing_route_file() {
    let (temp, _) = write_route(TWO_PACKAGE_ROUTE);
    let missing = temp.path().join("missing.toml");

    handoff()
        .arg("show")
        .arg("--route")
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load route"))
        .stderr(predicate::str::contains("Check the path passed to --route"));
}

#[test]
fn duplicate_package_ids_rejected() {
    let content = format!(
        "{}\n[[package]]\nid = \"a\"\nlabel = \"PKG-C\"\ncustomer = \"Sam\"\nunit = \"1\"\ncarrier = \"USPS\"\n",
        TWO_PACKAGE_ROUTE
    );
    let (_temp, route) = write_route(&content);

    handoff()
        .arg("show")
        .arg("--route")
        .arg(&route)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("duplicate package id: a"));
}

#[test]
fn completions_generate_for_bash() {
    handoff()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("handoff"));
}

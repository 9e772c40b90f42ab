// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TWO_PACKAGE_ROUTE: &str = r#"
[route]
driver = "Ada Park"
name = "Riverside"
pickup = "1 River Rd"
dropoff = "Depot 9"
payout_cents = 800

[[package]]
id = "a"
label = "PKG-A"
customer = "Lee Wong"
unit = "Unit 3"
carrier = "DHL"

[[package]]
id = "b"
label = "PKG-B"
customer = "Kim Ortiz"
unit = "Unit 5"
carrier = "UPS"
tracking = "1Z0000"
"#;

/// `handoff` with the environment cleared of route and log overrides
pub fn handoff() -> Command {
    let mut cmd = Command::cargo_bin("handoff").expect("handoff binary should build");
    cmd.env_remove("HANDOFF_ROUTE").env_remove("HANDOFF_LOG");
    cmd
}

/// Write a manifest into a fresh temp dir; keep the TempDir alive while in use
pub fn write_route(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let path = temp.path().join("route.toml");
    fs::write(&path, content).expect("Failed to write route");
    (temp, path)
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only pipeline snapshots for presentation layers

use crate::pipeline::HandoffPipeline;
use crate::route::{PackageItem, RouteId, RouteInfo};
use crate::status::{DriverStatus, ReturnReason, Timeline};
use crate::summary::RouteSummary;
use serde::Serialize;
use std::fmt;

/// Everything a screen needs to render the current route state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandoffSnapshot {
    pub route_id: RouteId,
    pub route: RouteInfo,
    pub status: DriverStatus,
    pub heading: &'static str,
    pub packages: Vec<PackageItem>,
    pub checked: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_reason: Option<ReturnReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    pub timeline: Timeline,
    /// Commands accepted in the current status
    pub actions: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RouteSummary>,
}

impl HandoffPipeline {
    pub fn snapshot(&self) -> HandoffSnapshot {
        HandoffSnapshot {
            route_id: self.id().clone(),
            route: self.route().clone(),
            status: self.status(),
            heading: self.status().heading(),
            packages: self.packages().to_vec(),
            checked: self.checked_count(),
            total: self.total(),
            return_reason: self.return_reason(),
            return_notes: self.return_notes().map(str::to_string),
            receipt: self.receipt().map(str::to_string),
            timeline: self.timeline(),
            actions: self.available_commands(),
            summary: self.summary(),
        }
    }
}

/// Collapse a multi-line address onto one line
fn one_line(address: &str) -> String {
    address
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for HandoffSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Route: {} (driver: {})",
            self.route.route_name, self.route.driver_name
        )?;
        writeln!(f, "Status: {} - {}", self.status, self.heading)?;
        writeln!(f, "Timeline: {}", self.timeline)?;
        writeln!(f, "Pickup: {}", one_line(&self.route.pickup_address))?;
        writeln!(f, "Drop-off: {}", one_line(&self.route.dropoff_address))?;

        writeln!(f, "Packages ({}/{} checked):", self.checked, self.total)?;
        for pkg in &self.packages {
            let mark = if pkg.is_checked { "x" } else { " " };
            writeln!(f, "  [{}] {}", mark, pkg)?;
        }

        if let Some(reason) = self.return_reason {
            write!(f, "Return: {} - {}", reason, reason.label())?;
            match &self.return_notes {
                Some(notes) => writeln!(f, " ({})", notes)?,
                None => writeln!(f)?,
            }
        }
        if let Some(receipt) = &self.receipt {
            writeln!(f, "Receipt: {}", receipt)?;
        }
        if let Some(summary) = &self.summary {
            writeln!(f, "{}", summary)?;
        }

        write!(f, "Next: {}", self.actions.join(", "))
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for state machine orchestration

use crate::route::PackageId;
use crate::status::{DriverStatus, ReturnReason, RouteOutcome};
use serde::{Deserialize, Serialize};

/// Effects are side effects that the pipeline requests from its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit an event for other components to observe
    Emit(Event),
    /// Log a message
    Log { level: LogLevel, message: String },
}

/// Log levels for effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

/// Events emitted by the hand-off pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    StatusChanged {
        route_id: String,
        from: DriverStatus,
        to: DriverStatus,
    },
    PackageToggled {
        route_id: String,
        package_id: PackageId,
        checked: bool,
    },
    /// Pickup confirmed; `checked` may be lower than `total`
    PickupConfirmed {
        route_id: String,
        checked: usize,
        total: usize,
    },
    ReceiptAttached {
        route_id: String,
        file_name: String,
    },
    ReturnRecorded {
        route_id: String,
        reason: ReturnReason,
        notes: Option<String>,
    },
    RouteCompleted {
        route_id: String,
        outcome: RouteOutcome,
    },
    RouteReset {
        route_id: String,
        from: DriverStatus,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::StatusChanged { .. } => "route:status",
            Event::PackageToggled { .. } => "package:toggled",
            Event::PickupConfirmed { .. } => "route:pickup",
            Event::ReceiptAttached { .. } => "route:receipt",
            Event::ReturnRecorded { .. } => "route:return",
            Event::RouteCompleted { .. } => "route:complete",
            Event::RouteReset { .. } => "route:reset",
        }
    }

    pub fn route_id(&self) -> &str {
        match self {
            Event::StatusChanged { route_id, .. }
            | Event::PackageToggled { route_id, .. }
            | Event::PickupConfirmed { route_id, .. }
            | Event::ReceiptAttached { route_id, .. }
            | Event::ReturnRecorded { route_id, .. }
            | Event::RouteCompleted { route_id, .. }
            | Event::RouteReset { route_id, .. } => route_id,
        }
    }
}

/// Collect the events out of a list of effects, dropping log requests
pub fn events(effects: &[Effect]) -> Vec<Event> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Emit(event) => Some(event.clone()),
            Effect::Log { .. } => None,
        })
        .collect()
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;

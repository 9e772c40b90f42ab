// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delivery statuses, return reasons, and the timeline projection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where a route is in the hand-off pipeline
///
/// ```text
/// on-the-way → picked-up → delivered → complete
///                              └─→ returned ─┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverStatus {
    OnTheWay,
    PickedUp,
    Delivered,
    Returned,
    Complete,
}

impl DriverStatus {
    pub const ALL: [DriverStatus; 5] = [
        DriverStatus::OnTheWay,
        DriverStatus::PickedUp,
        DriverStatus::Delivered,
        DriverStatus::Returned,
        DriverStatus::Complete,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DriverStatus::OnTheWay => "on-the-way",
            DriverStatus::PickedUp => "picked-up",
            DriverStatus::Delivered => "delivered",
            DriverStatus::Returned => "returned",
            DriverStatus::Complete => "complete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DriverStatus::OnTheWay => "On the Way",
            DriverStatus::PickedUp => "Picked Up",
            DriverStatus::Delivered => "Delivered",
            DriverStatus::Returned => "Returned",
            DriverStatus::Complete => "Complete",
        }
    }

    /// Title shown to the driver while in this status
    pub fn heading(&self) -> &'static str {
        match self {
            DriverStatus::OnTheWay => "En Route to Pickup",
            DriverStatus::PickedUp => "Confirm Package Pickup",
            DriverStatus::Delivered => "Delivery Confirmation",
            DriverStatus::Returned => "Return Packages",
            DriverStatus::Complete => "Route Complete!",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DriverStatus::Complete)
    }

    /// Position on the timeline; `returned` shares the `delivered` slot
    pub fn timeline_index(&self) -> usize {
        match self {
            DriverStatus::OnTheWay => 0,
            DriverStatus::PickedUp => 1,
            DriverStatus::Delivered | DriverStatus::Returned => 2,
            DriverStatus::Complete => 3,
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Why packages could not be handed to the carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnReason {
    Closed,
    Refused,
    Damaged,
    Other,
}

impl ReturnReason {
    pub const ALL: [ReturnReason; 4] = [
        ReturnReason::Closed,
        ReturnReason::Refused,
        ReturnReason::Damaged,
        ReturnReason::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReturnReason::Closed => "closed",
            ReturnReason::Refused => "refused",
            ReturnReason::Damaged => "damaged",
            ReturnReason::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReturnReason::Closed => "Drop-off location closed",
            ReturnReason::Refused => "Package refused by carrier",
            ReturnReason::Damaged => "Package damaged",
            ReturnReason::Other => "Other",
        }
    }
}

impl fmt::Display for ReturnReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown return reason: {0} (expected closed, refused, damaged, or other)")]
pub struct UnknownReturnReason(pub String);

impl FromStr for ReturnReason {
    type Err = UnknownReturnReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ReturnReason::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownReturnReason(s.to_string()))
    }
}

/// How a completed route ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteOutcome {
    Delivered,
    Returned,
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteOutcome::Delivered => write!(f, "delivered"),
            RouteOutcome::Returned => write!(f, "returned"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepState {
    Pending,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStep {
    /// 1-based position
    pub number: usize,
    pub label: &'static str,
    pub status: DriverStatus,
    pub state: StepState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub steps: Vec<TimelineStep>,
    /// Fraction of the line filled, 0.0 to 1.0
    pub progress: f64,
}

const TIMELINE_STEPS: [DriverStatus; 4] = [
    DriverStatus::OnTheWay,
    DriverStatus::PickedUp,
    DriverStatus::Delivered,
    DriverStatus::Returned,
];

/// Project a status onto the four-step driver timeline.
///
/// Steps before the current index are completed and the step at the index
/// is active. While returning, the `Returned` step is lit alongside
/// `Delivered`, since both share index 2.
pub fn timeline(current: DriverStatus) -> Timeline {
    let index = current.timeline_index();
    let steps = TIMELINE_STEPS
        .iter()
        .enumerate()
        .map(|(i, status)| {
            let returned_path =
                current == DriverStatus::Returned && *status == DriverStatus::Returned;
            let state = if i < index {
                StepState::Completed
            } else if i == index || returned_path {
                StepState::Active
            } else {
                StepState::Pending
            };
            TimelineStep {
                number: i + 1,
                label: status.label(),
                status: *status,
                state,
            }
        })
        .collect();

    Timeline {
        steps,
        progress: index as f64 / (TIMELINE_STEPS.len() - 1) as f64,
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .steps
            .iter()
            .map(|step| {
                let mark = match step.state {
                    StepState::Completed => "x",
                    StepState::Active => ">",
                    StepState::Pending => " ",
                };
                format!("[{}] {}", mark, step.label)
            })
            .collect();
        write!(f, "{}", rendered.join("  "))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;

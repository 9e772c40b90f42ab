// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Driver actions accepted by the hand-off pipeline

use crate::route::PackageId;
use crate::status::{DriverStatus, ReturnReason};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A driver action, applied through `HandoffPipeline::transition`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum HandoffCommand {
    /// Flip one checklist entry; unknown ids are ignored
    ToggleChecked { id: PackageId },
    ConfirmArrival,
    ConfirmPickup,
    /// Attach a PNG/JPEG drop-off receipt photo
    AttachReceipt { file_name: String },
    ConfirmDelivery,
    MarkUndeliverable {
        reason: ReturnReason,
        notes: Option<String>,
    },
    ConfirmReturnComplete,
    Reset,
}

impl HandoffCommand {
    pub fn name(&self) -> &'static str {
        match self {
            HandoffCommand::ToggleChecked { .. } => "toggle-checked",
            HandoffCommand::ConfirmArrival => "confirm-arrival",
            HandoffCommand::ConfirmPickup => "confirm-pickup",
            HandoffCommand::AttachReceipt { .. } => "attach-receipt",
            HandoffCommand::ConfirmDelivery => "confirm-delivery",
            HandoffCommand::MarkUndeliverable { .. } => "mark-undeliverable",
            HandoffCommand::ConfirmReturnComplete => "confirm-return-complete",
            HandoffCommand::Reset => "reset",
        }
    }

    /// The only status this command may be issued from, or `None` when it is
    /// accepted in every status.
    ///
    /// This table is the sole source of transition legality.
    pub fn source_status(&self) -> Option<DriverStatus> {
        match self {
            HandoffCommand::ToggleChecked { .. } | HandoffCommand::Reset => None,
            HandoffCommand::ConfirmArrival => Some(DriverStatus::OnTheWay),
            HandoffCommand::ConfirmPickup => Some(DriverStatus::PickedUp),
            HandoffCommand::AttachReceipt { .. }
            | HandoffCommand::ConfirmDelivery
            | HandoffCommand::MarkUndeliverable { .. } => Some(DriverStatus::Delivered),
            HandoffCommand::ConfirmReturnComplete => Some(DriverStatus::Returned),
        }
    }

    /// Status reached after the command succeeds, if it moves the route
    pub fn target_status(&self) -> Option<DriverStatus> {
        match self {
            HandoffCommand::ToggleChecked { .. } | HandoffCommand::AttachReceipt { .. } => None,
            HandoffCommand::ConfirmArrival => Some(DriverStatus::PickedUp),
            HandoffCommand::ConfirmPickup => Some(DriverStatus::Delivered),
            HandoffCommand::ConfirmDelivery | HandoffCommand::ConfirmReturnComplete => {
                Some(DriverStatus::Complete)
            }
            HandoffCommand::MarkUndeliverable { .. } => Some(DriverStatus::Returned),
            HandoffCommand::Reset => Some(DriverStatus::OnTheWay),
        }
    }

    pub fn is_allowed_from(&self, status: DriverStatus) -> bool {
        match self.source_status() {
            Some(required) => required == status,
            None => true,
        }
    }

    /// Names of the commands accepted in `status`, in pipeline order
    pub fn available_from(status: DriverStatus) -> Vec<&'static str> {
        Self::templates()
            .iter()
            .filter(|command| command.is_allowed_from(status))
            .map(|command| command.name())
            .collect()
    }

    /// One instance of every command kind, payloads left empty
    fn templates() -> [HandoffCommand; 8] {
        [
            HandoffCommand::ConfirmArrival,
            HandoffCommand::ToggleChecked {
                id: PackageId(String::new()),
            },
            HandoffCommand::ConfirmPickup,
            HandoffCommand::AttachReceipt {
                file_name: String::new(),
            },
            HandoffCommand::ConfirmDelivery,
            HandoffCommand::MarkUndeliverable {
                reason: ReturnReason::Other,
                notes: None,
            },
            HandoffCommand::ConfirmReturnComplete,
            HandoffCommand::Reset,
        ]
    }
}

impl fmt::Display for HandoffCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandoffCommand::ToggleChecked { id } => write!(f, "{} {}", self.name(), id),
            HandoffCommand::AttachReceipt { file_name } => {
                write!(f, "{} {}", self.name(), file_name)
            }
            HandoffCommand::MarkUndeliverable { reason, .. } => {
                write!(f, "{} {}", self.name(), reason)
            }
            _ => write!(f, "{}", self.name()),
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing infrastructure for effects

use crate::effect::{Effect, Event};

/// Trait for effects that should be traced
///
/// Provides consistent naming and structured fields for logging.
pub trait TracedEffect {
    /// Effect name for log spans (e.g., "emit", "log")
    fn name(&self) -> &'static str;

    /// Key-value pairs for structured logging
    fn fields(&self) -> Vec<(&'static str, String)>;
}

impl TracedEffect for Effect {
    fn name(&self) -> &'static str {
        match self {
            Effect::Emit(_) => "emit",
            Effect::Log { .. } => "log",
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::Emit(event) => event.fields(),
            Effect::Log { level, message } => vec![
                ("level", format!("{:?}", level).to_lowercase()),
                ("message", message.clone()),
            ],
        }
    }
}

impl TracedEffect for Event {
    fn name(&self) -> &'static str {
        Event::name(self)
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("event", Event::name(self).to_string()),
            ("route_id", self.route_id().to_string()),
        ];
        match self {
            Event::StatusChanged { from, to, .. } => {
                fields.push(("from", from.to_string()));
                fields.push(("to", to.to_string()));
            }
            Event::PackageToggled {
                package_id,
                checked,
                ..
            } => {
                fields.push(("package_id", package_id.to_string()));
                fields.push(("checked", checked.to_string()));
            }
            Event::PickupConfirmed { checked, total, .. } => {
                fields.push(("checked", checked.to_string()));
                fields.push(("total", total.to_string()));
            }
            Event::ReceiptAttached { file_name, .. } => {
                fields.push(("file_name", file_name.clone()));
            }
            Event::ReturnRecorded { reason, notes, .. } => {
                fields.push(("reason", reason.to_string()));
                if let Some(notes) = notes {
                    fields.push(("notes", notes.clone()));
                }
            }
            Event::RouteCompleted { outcome, .. } => {
                fields.push(("outcome", outcome.to_string()));
            }
            Event::RouteReset { from, .. } => {
                fields.push(("from", from.to_string()));
            }
        }
        fields
    }
}

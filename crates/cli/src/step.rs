// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step syntax for `handoff run`
//!
//! `arrive`, `toggle:<id>`, `pickup`, `receipt:<file>`, `deliver`,
//! `undeliverable:<reason>[:<notes>]`, `return-complete`, `reset`

use handoff_core::{HandoffCommand, PackageId, ReturnReason, UnknownReturnReason};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("unknown step `{0}` (expected arrive, toggle:<id>, pickup, receipt:<file>, deliver, undeliverable:<reason>[:<notes>], return-complete, or reset)")]
    Unknown(String),
    #[error("step `{step}` needs a value: {step}:<{value}>")]
    MissingValue {
        step: &'static str,
        value: &'static str,
    },
    #[error("step `{0}` takes no value")]
    UnexpectedValue(String),
    #[error(transparent)]
    Reason(#[from] UnknownReturnReason),
}

pub fn parse_step(s: &str) -> Result<HandoffCommand, StepError> {
    let (name, value) = match s.split_once(':') {
        Some((name, value)) => (name.trim(), Some(value)),
        None => (s.trim(), None),
    };

    let command = match name {
        "arrive" => HandoffCommand::ConfirmArrival,
        "pickup" => HandoffCommand::ConfirmPickup,
        "deliver" => HandoffCommand::ConfirmDelivery,
        "return-complete" => HandoffCommand::ConfirmReturnComplete,
        "reset" => HandoffCommand::Reset,
        "toggle" => {
            return Ok(HandoffCommand::ToggleChecked {
                id: PackageId(required(value, "toggle", "id")?),
            })
        }
        "receipt" => {
            return Ok(HandoffCommand::AttachReceipt {
                file_name: required(value, "receipt", "file")?,
            })
        }
        "undeliverable" => {
            let value = required(value, "undeliverable", "reason")?;
            let (reason, notes) = match value.split_once(':') {
                Some((reason, notes)) => (reason, Some(notes.to_string())),
                None => (value.as_str(), None),
            };
            return Ok(HandoffCommand::MarkUndeliverable {
                reason: reason.parse::<ReturnReason>()?,
                notes,
            });
        }
        _ => return Err(StepError::Unknown(s.to_string())),
    };

    match value {
        Some(_) => Err(StepError::UnexpectedValue(name.to_string())),
        None => Ok(command),
    }
}

fn required(
    value: Option<&str>,
    step: &'static str,
    what: &'static str,
) -> Result<String, StepError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(StepError::MissingValue { step, value: what })
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;

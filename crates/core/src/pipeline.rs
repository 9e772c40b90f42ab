// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hand-off pipeline state machine
//!
//! A pipeline tracks one route: the driver travels to the pickup, confirms
//! the package checklist, and either hands the packages to the carrier or
//! brings them back. The pipeline is the only authority on which actions
//! are legal; presentation layers submit commands and render snapshots.
//!
//! All state changes go through [`HandoffPipeline::transition`], a pure
//! function returning the next state and the effects the caller should
//! execute. The `&mut self` methods are thin wrappers around it.

use crate::clock::Clock;
use crate::command::HandoffCommand;
use crate::effect::{Effect, Event, LogLevel};
use crate::error::HandoffError;
use crate::route::{PackageId, PackageItem, RouteId, RouteInfo};
use crate::status::{timeline, DriverStatus, ReturnReason, RouteOutcome, Timeline};
use crate::summary::RouteSummary;
use std::collections::HashSet;
use std::time::Instant;

const RECEIPT_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// One driver's route through the hand-off pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct HandoffPipeline {
    id: RouteId,
    route: RouteInfo,
    status: DriverStatus,
    packages: Vec<PackageItem>,
    return_reason: Option<ReturnReason>,
    return_notes: Option<String>,
    receipt: Option<String>,
    started_at: Instant,
    completed_at: Option<Instant>,
}

impl HandoffPipeline {
    /// Create a pipeline at `on-the-way` with every package checked.
    ///
    /// Package ids must be unique; the set is fixed for the life of the route.
    pub fn new(
        id: impl Into<RouteId>,
        route: RouteInfo,
        packages: Vec<PackageItem>,
        clock: &impl Clock,
    ) -> Result<Self, HandoffError> {
        let mut seen = HashSet::new();
        for pkg in &packages {
            if !seen.insert(&pkg.id) {
                return Err(HandoffError::DuplicatePackage(pkg.id.clone()));
            }
        }

        Ok(Self {
            id: id.into(),
            route,
            status: DriverStatus::OnTheWay,
            packages: packages.iter().map(|p| p.with_checked(true)).collect(),
            return_reason: None,
            return_notes: None,
            receipt: None,
            started_at: clock.now(),
            completed_at: None,
        })
    }

    pub fn id(&self) -> &RouteId {
        &self.id
    }

    pub fn route(&self) -> &RouteInfo {
        &self.route
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn packages(&self) -> &[PackageItem] {
        &self.packages
    }

    pub fn package(&self, id: &PackageId) -> Option<&PackageItem> {
        self.packages.iter().find(|p| &p.id == id)
    }

    /// Like [`package`](Self::package), for callers that treat unknown ids as errors
    pub fn require_package(&self, id: &PackageId) -> Result<&PackageItem, HandoffError> {
        self.package(id)
            .ok_or_else(|| HandoffError::UnknownPackage(id.clone()))
    }

    pub fn return_reason(&self) -> Option<ReturnReason> {
        self.return_reason
    }

    pub fn return_notes(&self) -> Option<&str> {
        self.return_notes.as_deref()
    }

    pub fn receipt(&self) -> Option<&str> {
        self.receipt.as_deref()
    }

    pub fn checked_count(&self) -> usize {
        self.packages.iter().filter(|p| p.is_checked).count()
    }

    pub fn total(&self) -> usize {
        self.packages.len()
    }

    pub fn all_checked(&self) -> bool {
        self.packages.iter().all(|p| p.is_checked)
    }

    /// Checked fraction for display only; never gates a transition
    pub fn progress(&self) -> f64 {
        if self.packages.is_empty() {
            0.0
        } else {
            self.checked_count() as f64 / self.packages.len() as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_terminal()
    }

    /// Outcome of the route once it has reached `complete`
    pub fn outcome(&self) -> Option<RouteOutcome> {
        if !self.is_complete() {
            return None;
        }
        Some(match self.return_reason {
            Some(_) => RouteOutcome::Returned,
            None => RouteOutcome::Delivered,
        })
    }

    pub fn summary(&self) -> Option<RouteSummary> {
        let outcome = self.outcome()?;
        let completed_at = self.completed_at?;
        Some(RouteSummary {
            outcome,
            packages: self.packages.len(),
            route_time: completed_at.saturating_duration_since(self.started_at),
            payout_cents: self.route.payout_cents,
        })
    }

    pub fn timeline(&self) -> Timeline {
        timeline(self.status)
    }

    /// Names of the commands the pipeline will accept right now
    pub fn available_commands(&self) -> Vec<&'static str> {
        HandoffCommand::available_from(self.status)
    }

    /// Pure transition function - returns new state and effects.
    ///
    /// Commands issued outside their source status fail with
    /// `InvalidTransition`; `self` is never modified.
    pub fn transition(
        &self,
        command: HandoffCommand,
        clock: &impl Clock,
    ) -> Result<(HandoffPipeline, Vec<Effect>), HandoffError> {
        if !command.is_allowed_from(self.status) {
            return Err(HandoffError::InvalidTransition {
                command: command.name(),
                from: self.status,
            });
        }

        match command {
            HandoffCommand::ToggleChecked { id } => Ok(self.toggled(&id)),

            HandoffCommand::ConfirmArrival => {
                Ok(self.clone().advance(DriverStatus::PickedUp, vec![], clock))
            }

            // Unchecked packages do not block pickup; the shortfall is surfaced instead
            HandoffCommand::ConfirmPickup => {
                let checked = self.checked_count();
                let total = self.total();
                let mut effects = vec![Effect::Emit(Event::PickupConfirmed {
                    route_id: self.id.0.clone(),
                    checked,
                    total,
                })];
                if checked < total {
                    effects.push(Effect::Log {
                        level: LogLevel::Warn,
                        message: format!(
                            "pickup confirmed with {} of {} packages unchecked",
                            total - checked,
                            total
                        ),
                    });
                }
                Ok(self.clone().advance(DriverStatus::Delivered, effects, clock))
            }

            HandoffCommand::AttachReceipt { file_name } => {
                if !is_supported_receipt(&file_name) {
                    return Err(HandoffError::UnsupportedReceipt(file_name));
                }
                let mut pipeline = self.clone();
                pipeline.receipt = Some(file_name.clone());
                let effects = vec![Effect::Emit(Event::ReceiptAttached {
                    route_id: self.id.0.clone(),
                    file_name,
                })];
                Ok((pipeline, effects))
            }

            HandoffCommand::ConfirmDelivery | HandoffCommand::ConfirmReturnComplete => {
                Ok(self.clone().advance(DriverStatus::Complete, vec![], clock))
            }

            HandoffCommand::MarkUndeliverable { reason, notes } => {
                let notes = notes.filter(|n| !n.trim().is_empty());
                let mut pipeline = self.clone();
                pipeline.return_reason = Some(reason);
                pipeline.return_notes = notes.clone();
                let effects = vec![Effect::Emit(Event::ReturnRecorded {
                    route_id: self.id.0.clone(),
                    reason,
                    notes,
                })];
                Ok(pipeline.advance(DriverStatus::Returned, effects, clock))
            }

            HandoffCommand::Reset => Ok(self.restarted(clock)),
        }
    }

    /// Apply a command in place
    pub fn apply(
        &mut self,
        command: HandoffCommand,
        clock: &impl Clock,
    ) -> Result<Vec<Effect>, HandoffError> {
        let (pipeline, effects) = self.transition(command, clock)?;
        *self = pipeline;
        Ok(effects)
    }

    /// Flip a checklist entry; unknown ids leave the pipeline untouched
    pub fn toggle_checked(&mut self, id: impl Into<PackageId>) -> Vec<Effect> {
        let (pipeline, effects) = self.toggled(&id.into());
        *self = pipeline;
        effects
    }

    pub fn confirm_arrival(&mut self, clock: &impl Clock) -> Result<Vec<Effect>, HandoffError> {
        self.apply(HandoffCommand::ConfirmArrival, clock)
    }

    pub fn confirm_pickup(&mut self, clock: &impl Clock) -> Result<Vec<Effect>, HandoffError> {
        self.apply(HandoffCommand::ConfirmPickup, clock)
    }

    pub fn attach_receipt(
        &mut self,
        file_name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Vec<Effect>, HandoffError> {
        self.apply(
            HandoffCommand::AttachReceipt {
                file_name: file_name.into(),
            },
            clock,
        )
    }

    pub fn confirm_delivery(&mut self, clock: &impl Clock) -> Result<Vec<Effect>, HandoffError> {
        self.apply(HandoffCommand::ConfirmDelivery, clock)
    }

    pub fn mark_undeliverable(
        &mut self,
        reason: ReturnReason,
        notes: Option<String>,
        clock: &impl Clock,
    ) -> Result<Vec<Effect>, HandoffError> {
        self.apply(HandoffCommand::MarkUndeliverable { reason, notes }, clock)
    }

    pub fn confirm_return_complete(
        &mut self,
        clock: &impl Clock,
    ) -> Result<Vec<Effect>, HandoffError> {
        self.apply(HandoffCommand::ConfirmReturnComplete, clock)
    }

    /// Return to `on-the-way` from any status for a fresh run of the route
    pub fn reset(&mut self, clock: &impl Clock) -> Vec<Effect> {
        let (pipeline, effects) = self.restarted(clock);
        *self = pipeline;
        effects
    }

    fn toggled(&self, id: &PackageId) -> (HandoffPipeline, Vec<Effect>) {
        let Some(index) = self.packages.iter().position(|p| &p.id == id) else {
            return (
                self.clone(),
                vec![Effect::Log {
                    level: LogLevel::Debug,
                    message: format!("ignoring toggle for unknown package {}", id),
                }],
            );
        };

        let mut pipeline = self.clone();
        let checked = !self.packages[index].is_checked;
        pipeline.packages[index] = self.packages[index].with_checked(checked);

        let effects = vec![Effect::Emit(Event::PackageToggled {
            route_id: self.id.0.clone(),
            package_id: id.clone(),
            checked,
        })];
        (pipeline, effects)
    }

    fn restarted(&self, clock: &impl Clock) -> (HandoffPipeline, Vec<Effect>) {
        let pipeline = HandoffPipeline {
            status: DriverStatus::OnTheWay,
            packages: self.packages.iter().map(|p| p.with_checked(true)).collect(),
            return_reason: None,
            return_notes: None,
            receipt: None,
            started_at: clock.now(),
            completed_at: None,
            ..self.clone()
        };

        let effects = vec![Effect::Emit(Event::RouteReset {
            route_id: self.id.0.clone(),
            from: self.status,
        })];
        (pipeline, effects)
    }

    /// Move to `to`, appending the status-change (and completion) events
    fn advance(
        mut self,
        to: DriverStatus,
        mut effects: Vec<Effect>,
        clock: &impl Clock,
    ) -> (HandoffPipeline, Vec<Effect>) {
        let from = self.status;
        self.status = to;
        effects.push(Effect::Emit(Event::StatusChanged {
            route_id: self.id.0.clone(),
            from,
            to,
        }));

        if to == DriverStatus::Complete {
            self.completed_at = Some(clock.now());
            if let Some(outcome) = self.outcome() {
                effects.push(Effect::Emit(Event::RouteCompleted {
                    route_id: self.id.0.clone(),
                    outcome,
                }));
                effects.push(Effect::Log {
                    level: LogLevel::Info,
                    message: format!(
                        "route {} complete: {} packages {}",
                        self.route.route_name,
                        self.packages.len(),
                        outcome
                    ),
                });
            }
        }

        (self, effects)
    }
}

fn is_supported_receipt(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            RECEIPT_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! handoff-core: driver package hand-off pipeline
//!
//! This crate provides:
//! - The route description and package checklist types
//! - A pure, self-validating state machine for the hand-off status pipeline
//! - Effect-based orchestration (the pipeline requests, callers execute)
//! - Serializable snapshots for presentation layers

pub mod clock;
pub mod id;
pub mod traced;

// State machine (order matters for dependencies)
pub mod route;
pub mod status;
pub mod error;
pub mod effect;
pub mod command;
pub mod summary;
pub mod pipeline;
pub mod snapshot;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use command::HandoffCommand;
pub use effect::{events, Effect, Event, LogLevel};
pub use error::HandoffError;
pub use id::{RouteIdGen, SequentialRouteIds, UuidRouteIds};
pub use pipeline::HandoffPipeline;
pub use route::{PackageId, PackageItem, RouteId, RouteInfo};
pub use snapshot::HandoffSnapshot;
pub use status::{
    timeline, DriverStatus, ReturnReason, RouteOutcome, StepState, Timeline, TimelineStep,
    UnknownReturnReason,
};
pub use summary::RouteSummary;
pub use traced::TracedEffect;

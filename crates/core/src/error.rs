// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the hand-off pipeline

use crate::route::PackageId;
use crate::status::DriverStatus;
use thiserror::Error;

/// Errors returned by pipeline operations; state is unchanged whenever one is returned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandoffError {
    #[error("cannot {command} while {from}")]
    InvalidTransition {
        command: &'static str,
        from: DriverStatus,
    },
    #[error("unknown package: {0}")]
    UnknownPackage(PackageId),
    #[error("duplicate package id: {0}")]
    DuplicatePackage(PackageId),
    #[error("unsupported receipt file: {0} (expected .png, .jpg, or .jpeg)")]
    UnsupportedReceipt(String),
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Route description and package checklist items

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a route run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub String);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RouteId {
    fn from(s: String) -> Self {
        RouteId(s)
    }
}

impl From<&str> for RouteId {
    fn from(s: &str) -> Self {
        RouteId(s.to_string())
    }
}

/// Identifier of a package within a route, stable for the life of the route
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub String);

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PackageId {
    fn from(s: String) -> Self {
        PackageId(s)
    }
}

impl From<&str> for PackageId {
    fn from(s: &str) -> Self {
        PackageId(s.to_string())
    }
}

/// Read-only description of a driver's assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub driver_name: String,
    pub route_name: String,
    /// May span several lines (street, then city line)
    pub pickup_address: String,
    pub dropoff_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_cents: Option<u64>,
}

impl RouteInfo {
    pub fn new(
        driver_name: impl Into<String>,
        route_name: impl Into<String>,
        pickup_address: impl Into<String>,
        dropoff_address: impl Into<String>,
    ) -> Self {
        Self {
            driver_name: driver_name.into(),
            route_name: route_name.into(),
            pickup_address: pickup_address.into(),
            dropoff_address: dropoff_address.into(),
            payout_cents: None,
        }
    }

    pub fn with_payout(self, cents: u64) -> Self {
        Self {
            payout_cents: Some(cents),
            ..self
        }
    }
}

/// One entry of the pickup checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageItem {
    pub id: PackageId,
    /// Human-readable label, e.g. `PKG-2025-001`
    pub package_id: String,
    pub customer_name: String,
    pub unit: String,
    pub carrier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    pub is_checked: bool,
}

impl PackageItem {
    /// Create a checked package without a tracking number
    pub fn new(
        id: impl Into<PackageId>,
        package_id: impl Into<String>,
        customer_name: impl Into<String>,
        unit: impl Into<String>,
        carrier: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            package_id: package_id.into(),
            customer_name: customer_name.into(),
            unit: unit.into(),
            carrier: carrier.into(),
            tracking_number: None,
            is_checked: true,
        }
    }

    pub fn with_tracking(self, tracking_number: impl Into<String>) -> Self {
        Self {
            tracking_number: Some(tracking_number.into()),
            ..self
        }
    }

    pub(crate) fn with_checked(&self, is_checked: bool) -> PackageItem {
        PackageItem {
            is_checked,
            ..self.clone()
        }
    }
}

impl fmt::Display for PackageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {} ({}) | {}",
            self.package_id, self.customer_name, self.unit, self.carrier
        )?;
        if let Some(tracking) = &self.tracking_number {
            write!(f, " | {}", tracking)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod tests;

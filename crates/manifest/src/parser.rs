// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest TOML parsing

use handoff_core::{Clock, HandoffError, HandoffPipeline, PackageId, PackageItem, RouteId, RouteInfo};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The built-in Sunset Heights route
pub const SAMPLE_MANIFEST: &str = include_str!("../routes/sunset-heights.toml");

/// Errors that can occur while loading a manifest
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("duplicate package id: {0}")]
    DuplicatePackage(String),
    #[error("route has no packages")]
    EmptyRoute,
}

/// A parsed route manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub route: RouteInfo,
    pub packages: Vec<PackageItem>,
}

impl Manifest {
    /// The built-in sample route
    pub fn sample() -> Result<Self, ParseError> {
        parse_manifest(SAMPLE_MANIFEST)
    }

    /// Start a pipeline for this route
    pub fn into_pipeline(
        self,
        id: impl Into<RouteId>,
        clock: &impl Clock,
    ) -> Result<HandoffPipeline, HandoffError> {
        HandoffPipeline::new(id, self.route, self.packages, clock)
    }
}

/// Read and parse a manifest file
pub fn load_manifest(path: &Path) -> Result<Manifest, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&content)
}

/// Parse a manifest from TOML content
pub fn parse_manifest(content: &str) -> Result<Manifest, ParseError> {
    let raw: toml::Value = toml::from_str(content)?;
    let table = raw
        .as_table()
        .ok_or_else(|| ParseError::InvalidFormat("root must be a table".to_string()))?;

    let route_value = table
        .get("route")
        .ok_or_else(|| ParseError::MissingField("route".to_string()))?;
    let route = parse_route(route_value)?;

    let package_values = match table.get("package") {
        Some(value) => value.as_array().ok_or_else(|| {
            ParseError::InvalidFormat("package must be an array of tables".to_string())
        })?,
        None => return Err(ParseError::EmptyRoute),
    };

    let mut seen = HashSet::new();
    let mut packages = Vec::with_capacity(package_values.len());
    for (index, value) in package_values.iter().enumerate() {
        let pkg = parse_package(index, value)?;
        if !seen.insert(pkg.id.clone()) {
            return Err(ParseError::DuplicatePackage(pkg.id.0));
        }
        packages.push(pkg);
    }

    if packages.is_empty() {
        return Err(ParseError::EmptyRoute);
    }

    Ok(Manifest { route, packages })
}

fn parse_route(value: &toml::Value) -> Result<RouteInfo, ParseError> {
    let table = value
        .as_table()
        .ok_or_else(|| ParseError::InvalidFormat("route must be a table".to_string()))?;

    let payout_cents = match table.get("payout_cents") {
        Some(v) => {
            let cents = v.as_integer().ok_or_else(|| {
                ParseError::InvalidFormat("route.payout_cents must be an integer".to_string())
            })?;
            Some(u64::try_from(cents).map_err(|_| {
                ParseError::InvalidFormat("route.payout_cents must not be negative".to_string())
            })?)
        }
        None => None,
    };

    Ok(RouteInfo {
        driver_name: required_str(table, "route", "driver")?,
        route_name: required_str(table, "route", "name")?,
        pickup_address: required_str(table, "route", "pickup")?,
        dropoff_address: required_str(table, "route", "dropoff")?,
        payout_cents,
    })
}

fn parse_package(index: usize, value: &toml::Value) -> Result<PackageItem, ParseError> {
    let context = format!("package[{}]", index);
    let table = value
        .as_table()
        .ok_or_else(|| ParseError::InvalidFormat(format!("{} must be a table", context)))?;

    let id = required_str(table, &context, "id")?;
    let mut pkg = PackageItem::new(
        PackageId(id),
        required_str(table, &context, "label")?,
        required_str(table, &context, "customer")?,
        required_str(table, &context, "unit")?,
        required_str(table, &context, "carrier")?,
    );

    if let Some(tracking) = optional_str(table, &context, "tracking")? {
        pkg = pkg.with_tracking(tracking);
    }

    Ok(pkg)
}

fn required_str(
    table: &toml::value::Table,
    context: &str,
    key: &str,
) -> Result<String, ParseError> {
    optional_str(table, context, key)?
        .ok_or_else(|| ParseError::MissingField(format!("{}.{}", context, key)))
}

/// Blank strings count as absent
fn optional_str(
    table: &toml::value::Table,
    context: &str,
    key: &str,
) -> Result<Option<String>, ParseError> {
    match table.get(key) {
        Some(v) => {
            let s = v.as_str().ok_or_else(|| {
                ParseError::InvalidFormat(format!("{}.{} must be a string", context, key))
            })?;
            let s = s.trim();
            Ok((!s.is_empty()).then(|| s.to_string()))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

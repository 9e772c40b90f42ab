// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod run;
pub mod show;

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use handoff_core::{Clock, HandoffPipeline, RouteIdGen, UuidRouteIds};
use handoff_manifest::{load_manifest, Manifest};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Route manifest (TOML); defaults to the built-in Sunset Heights route
    #[arg(long, env = "HANDOFF_ROUTE")]
    pub route: Option<PathBuf>,
}

impl RouteArgs {
    /// Load the route and start a fresh pipeline at `on-the-way`
    pub fn start(&self, clock: &impl Clock) -> Result<HandoffPipeline> {
        let manifest = match &self.route {
            Some(path) => load_manifest(path).map_err(|e| CliError::manifest(path, e))?,
            None => Manifest::sample()
                .map_err(|e| CliError::manifest(&PathBuf::from("<built-in sample>"), e))?,
        };

        let route_id = UuidRouteIds.next_route_id();
        tracing::debug!(%route_id, packages = manifest.packages.len(), "route loaded");

        let pipeline = manifest.into_pipeline(route_id, clock).map_err(|e| {
            CliError::new(e.to_string()).with_suggestion("Give every [[package]] entry a unique id")
        })?;
        Ok(pipeline)
    }
}

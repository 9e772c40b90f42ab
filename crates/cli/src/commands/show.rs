// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `handoff show` - Print the starting state of a route

use super::RouteArgs;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use handoff_core::SystemClock;

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub route: RouteArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn show(args: ShowArgs) -> Result<()> {
    let pipeline = args.route.start(&SystemClock)?;
    output::print(&pipeline.snapshot(), args.format)
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `handoff run <step>...` - Drive a route through hand-off steps

use super::RouteArgs;
use crate::error::CliError;
use crate::executor;
use crate::output::{self, OutputFormat};
use crate::step::parse_step;
use anyhow::Result;
use clap::Args;
use handoff_core::{
    Clock, DriverStatus, Event, HandoffCommand, HandoffPipeline, HandoffSnapshot, SystemClock,
};
use serde::Serialize;
use std::fmt;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub route: RouteArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail on unknown package ids instead of ignoring them
    #[arg(long)]
    pub strict: bool,

    /// Steps to apply in order (e.g. arrive toggle:4 pickup deliver)
    #[arg(required = true, value_parser = parse_step)]
    pub steps: Vec<HandoffCommand>,
}

/// One applied step
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub command: String,
    pub from: DriverStatus,
    pub to: DriverStatus,
    pub events: Vec<Event>,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.command, self.from, self.to)
    }
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
    pub snapshot: HandoffSnapshot,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.snapshot)
    }
}

pub fn run(args: RunArgs) -> Result<()> {
    let clock = SystemClock;
    let mut pipeline = args.route.start(&clock)?;

    let steps = apply_steps(&mut pipeline, args.steps, args.strict, &clock)?;

    let report = RunReport {
        steps,
        snapshot: pipeline.snapshot(),
    };
    output::print(&report, args.format)
}

/// Apply steps in order, stopping at the first rejected one
pub fn apply_steps(
    pipeline: &mut HandoffPipeline,
    commands: Vec<HandoffCommand>,
    strict: bool,
    clock: &impl Clock,
) -> Result<Vec<StepReport>, CliError> {
    let mut reports = Vec::with_capacity(commands.len());

    for (index, command) in commands.into_iter().enumerate() {
        if strict {
            if let HandoffCommand::ToggleChecked { id } = &command {
                if let Err(e) = pipeline.require_package(id) {
                    return Err(CliError::step_failed(index, &command, pipeline, e));
                }
            }
        }

        let from = pipeline.status();
        let label = command.to_string();
        let effects = match pipeline.apply(command.clone(), clock) {
            Ok(effects) => effects,
            Err(e) => return Err(CliError::step_failed(index, &command, pipeline, e)),
        };

        reports.push(StepReport {
            command: label,
            from,
            to: pipeline.status(),
            events: executor::execute_all(&effects),
        });
    }

    Ok(reports)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error carries what went wrong (message), why it might have
//! happened (context), and how to fix it (suggestions).

use handoff_core::{HandoffCommand, HandoffError, HandoffPipeline};
use handoff_manifest::ParseError;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures a route run can hit
impl CliError {
    /// A manifest that could not be read or parsed
    pub fn manifest(path: &Path, err: ParseError) -> Self {
        let suggestion = match &err {
            ParseError::Io { .. } => "Check the path passed to --route or HANDOFF_ROUTE",
            ParseError::DuplicatePackage(_) => "Give every [[package]] entry a unique id",
            ParseError::EmptyRoute => "Add at least one [[package]] entry",
            ParseError::MissingField(_)
            | ParseError::InvalidFormat(_)
            | ParseError::Toml(_) => "Each route needs a [route] table and [[package]] entries",
        };
        CliError::new(format!("Failed to load route {}", path.display()))
            .with_context(err.to_string())
            .with_suggestion(suggestion)
            .with_source(err)
    }

    /// A step the pipeline rejected
    pub fn step_failed(
        index: usize,
        command: &HandoffCommand,
        pipeline: &HandoffPipeline,
        err: HandoffError,
    ) -> Self {
        let step = CliError::new(err.to_string())
            .with_context(format!("Step {} ({}) was rejected", index + 1, command));

        let step = match &err {
            HandoffError::InvalidTransition { from, .. } => step
                .with_context(format!("The route is {} ({})", from, from.heading()))
                .with_suggestion(format!(
                    "Commands accepted while {}: {}",
                    from,
                    pipeline.available_commands().join(", ")
                )),
            HandoffError::UnknownPackage(_) => {
                let ids: Vec<String> =
                    pipeline.packages().iter().map(|p| p.id.to_string()).collect();
                step.with_suggestion(format!("Known package ids: {}", ids.join(", ")))
            }
            HandoffError::UnsupportedReceipt(_) => {
                step.with_suggestion("Attach a .png, .jpg, or .jpeg photo")
            }
            HandoffError::DuplicatePackage(_) => step,
        };

        step.with_source(err)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

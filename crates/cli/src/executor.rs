// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect execution for the CLI

use handoff_core::{events, Effect, Event, LogLevel, TracedEffect};

/// Execute effects in order, returning the emitted events
pub fn execute_all(effects: &[Effect]) -> Vec<Event> {
    for effect in effects {
        execute(effect);
    }
    events(effects)
}

/// Execute a single effect with tracing
pub fn execute(effect: &Effect) {
    let span = tracing::info_span!("effect", effect = effect.name());
    let _guard = span.enter();

    tracing::debug!(fields = ?effect.fields(), "executing");

    match effect {
        Effect::Emit(event) => {
            tracing::info!(route_id = event.route_id(), "{}", event.name());
        }
        Effect::Log { level, message } => match level {
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warn => tracing::warn!("{}", message),
        },
    }
}

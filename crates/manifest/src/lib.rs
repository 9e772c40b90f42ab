// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Route manifest parsing
//!
//! A manifest is a TOML file describing one route: a `[route]` table with
//! the driver and addresses, and one `[[package]]` table per checklist entry.

mod parser;

pub use parser::{load_manifest, parse_manifest, Manifest, ParseError, SAMPLE_MANIFEST};

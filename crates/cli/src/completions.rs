// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation for the handoff CLI.
//!
//! ```bash
//! handoff completions bash > ~/.local/share/bash-completion/completions/handoff
//! handoff completions zsh > ~/.zfunc/_handoff
//! handoff completions fish > ~/.config/fish/completions/handoff.fish
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "handoff", &mut io::stdout());
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

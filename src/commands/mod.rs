//! Command implementations for revdiff.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Commands write to any `io::Write` so tests can capture
//! their output.

mod parse;
mod rev;


use crate::cli::{Cli, Command};
use revdiff::config::Config;
use revdiff::error::{Result, RevdiffError};
use std::fmt::Display;
use std::io::{self, Write};

/// Dispatch a command to its implementation, printing to stdout.
///
/// This is the main entry point for command execution.
pub fn dispatch(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

/// Load config and run the command, writing results to `out`.
pub(crate) fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Parse(args) => parse::cmd_parse(&config, args, out),
        Command::Rev(rev_cmd) => rev::dispatch_rev(&config, rev_cmd.action, out),
    }
}

/// Write one line of command output.
fn emit<W: Write>(out: &mut W, value: impl Display) -> Result<()> {
    writeln!(out, "{}", value)
        .map_err(|e| RevdiffError::IoError(format!("failed to write output: {}", e)))
}

//! CLI argument parsing for revdiff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Revdiff: unified diff hunk parser and CVS/RCS revision calculator.
///
/// - `parse` groups a unified diff into add/remove/change/context blocks
/// - `rev` validates, compares and walks dotted revision numbers
#[derive(Parser, Debug)]
#[command(name = "revdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for revdiff.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a unified diff into hunks.
    ///
    /// Reads the diff from FILE, or stdin when FILE is omitted or `-`,
    /// and prints the hunks as JSON or YAML.
    Parse(ParseArgs),

    /// Revision number operations.
    Rev(RevCommand),
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Diff file to read (stdin if omitted or `-`).
    pub file: Option<PathBuf>,

    /// Output format (json, yaml). Overrides the config file.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Pass `diff`/`index`/`---`/`+++` lines through to the parser.
    #[arg(long)]
    pub keep_file_headers: bool,
}

/// Revision subcommands.
#[derive(Parser, Debug)]
pub struct RevCommand {
    #[command(subcommand)]
    pub action: RevAction,
}

/// Available revision actions.
#[derive(Subcommand, Debug)]
pub enum RevAction {
    /// Check whether REV is a revision number.
    Check(RevArgs),

    /// Print the number of components in REV.
    Count(RevArgs),

    /// Remove trailing components from REV.
    Strip(StripArgs),

    /// Print the revision before REV.
    ///
    /// The first revision on a branch steps back to the branch point.
    Prev(RevArgs),

    /// Map a magic branch revision (x.y.0.z) to its branch number (x.y.z).
    Branch(RevArgs),

    /// Map a branch number (x.y.z) to its magic revision (x.y.0.z).
    Magic(RevArgs),

    /// Compare two revisions numerically.
    Cmp(CmpArgs),

    /// Sort revisions newest first.
    Sort(SortArgs),
}

/// Arguments for single-revision actions.
#[derive(Parser, Debug)]
pub struct RevArgs {
    /// Revision number (e.g., 1.2.0.4).
    pub rev: String,
}

/// Arguments for the `rev strip` action.
#[derive(Parser, Debug)]
pub struct StripArgs {
    /// Revision number to strip.
    pub rev: String,

    /// Number of trailing components to remove.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub amount: usize,
}

/// Arguments for the `rev cmp` action.
#[derive(Parser, Debug)]
pub struct CmpArgs {
    /// Left-hand revision.
    pub left: String,

    /// Right-hand revision.
    pub right: String,
}

/// Arguments for the `rev sort` action.
#[derive(Parser, Debug)]
pub struct SortArgs {
    /// Revisions to sort; invalid ones are skipped.
    #[arg(required = true)]
    pub revs: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

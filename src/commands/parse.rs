//! Implementation of `revdiff parse`.

use super::emit;
use crate::cli::ParseArgs;
use revdiff::config::{Config, OutputFormat};
use revdiff::diff::{self, Hunk};
use revdiff::error::{Result, RevdiffError};
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

/// Parse a diff from a file or stdin and print its hunks.
pub(super) fn cmd_parse<W: Write>(config: &Config, args: ParseArgs, out: &mut W) -> Result<()> {
    let format = match args.format.as_deref() {
        Some(name) => OutputFormat::from_str(name).ok_or_else(|| {
            RevdiffError::UserError(format!(
                "unknown output format '{}'. Use 'json' or 'yaml'.",
                name
            ))
        })?,
        None => config.output_format,
    };

    let input = read_input(args.file.as_deref())?;

    let hunks = if config.strip_file_headers && !args.keep_file_headers {
        diff::parse(diff::strip_file_headers(input.lines()))
    } else {
        diff::parse_str(&input)
    };
    debug!(
        hunks = hunks.len(),
        format = format.as_str(),
        "parsed diff input"
    );

    emit(out, render_hunks(&hunks, format)?.trim_end())
}

/// Read the whole diff. Invalid UTF-8 is replaced rather than rejected,
/// since diffs of legacy files are often Latin-1.
fn read_input(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) if path != Path::new("-") => std::fs::read(path).map_err(|e| {
            RevdiffError::IoError(format!("failed to read '{}': {}", path.display(), e))
        })?,
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| RevdiffError::IoError(format!("failed to read stdin: {}", e)))?;
            buf
        }
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn render_hunks(hunks: &[Hunk], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(hunks).map_err(|e| {
            RevdiffError::UserError(format!("failed to serialize hunks to JSON: {}", e))
        }),
        OutputFormat::Yaml => serde_yaml::to_string(hunks).map_err(|e| {
            RevdiffError::UserError(format!("failed to serialize hunks to YAML: {}", e))
        }),
    }
}

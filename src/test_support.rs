use crate::cli::Cli;
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

/// Write `contents` to a temp file that lives as long as the returned handle.
pub(crate) fn write_temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Run a revdiff command line and capture what it prints.
pub(crate) fn run_cli(args: &[&str]) -> revdiff::error::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("revdiff").chain(args.iter().copied()))
        .unwrap_or_else(|e| panic!("failed to parse args {:?}: {}", args, e));

    let mut out = Vec::new();
    crate::commands::run(cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

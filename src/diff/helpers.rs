//! Helper functions for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

use super::types::HunkHeader;

/// `@@ -old_start[,old_count] +new_start[,new_count] @@ rest`
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@(.*)$")
        .expect("Invalid hunk header regex")
});

/// Prefixes of the per-file lines `git diff` and `rcsdiff` print around hunks.
const FILE_HEADER_PREFIXES: &[&str] = &[
    "diff ",
    "index ",
    "--- ",
    "+++ ",
    "new file mode",
    "deleted file mode",
    "similarity index",
    "rename from",
    "rename to",
    "old mode",
    "new mode",
    "Binary files",
];

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" or "@@ -old_start +new_start @@"
/// Also handles: "@@ -old_start,old_len +new_start,new_len @@ context info"
///
/// Missing lengths default to 1. The trailing context is trimmed.
/// Returns None if the line is not a hunk header.
pub fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let caps = HUNK_HEADER_REGEX.captures(line)?;

    Some(HunkHeader {
        old_start: caps[1].parse().ok()?,
        old_count: parse_range_len(caps.get(2))?,
        new_start: caps[3].parse().ok()?,
        new_count: parse_range_len(caps.get(4))?,
        function_context: caps[5].trim().to_string(),
    })
}

fn parse_range_len(len: Option<regex::Match<'_>>) -> Option<usize> {
    match len {
        Some(m) => m.as_str().parse().ok(),
        None => Some(1),
    }
}

fn is_file_header_line(line: &str) -> bool {
    FILE_HEADER_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Drop file-level header lines so only hunk headers and bodies remain.
///
/// The parser treats every line inside a hunk as body, so `---`/`+++` lines
/// of the next file would otherwise become a removal and an addition. Header
/// counts are tracked so that a body line such as `--- old comment` (a
/// removed `-- old comment`) is kept.
pub fn strip_file_headers<'a, I>(lines: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut kept = Vec::new();
    let mut old_remaining = 0usize;
    let mut new_remaining = 0usize;

    for line in lines {
        if let Some(header) = parse_hunk_header(line) {
            old_remaining = header.old_count;
            new_remaining = header.new_count;
            kept.push(line);
            continue;
        }

        if old_remaining > 0 || new_remaining > 0 {
            match line.as_bytes().first() {
                Some(b'+') => new_remaining = new_remaining.saturating_sub(1),
                Some(b'-') => old_remaining = old_remaining.saturating_sub(1),
                // "\ No newline at end of file"
                Some(b'\\') => {}
                _ => {
                    old_remaining = old_remaining.saturating_sub(1);
                    new_remaining = new_remaining.saturating_sub(1);
                }
            }
            kept.push(line);
        } else if !is_file_header_line(line) {
            kept.push(line);
        }
    }

    kept
}

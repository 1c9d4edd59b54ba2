//! Unified diff hunk parsing.
//!
//! Turns the body of a unified diff into a sequence of [`Hunk`]s whose
//! contents are grouped into add, remove, change and context blocks, ready
//! for a side-by-side renderer.
//!
//! The parsing is deterministic and total:
//! - Lines before the first hunk header are ignored
//! - A `-` run immediately followed by a `+` run becomes one change block
//! - Every other line inside a hunk is treated as context
//! - Header counts are optional (`@@ -3 +4 @@`)

mod helpers;
mod parser;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use helpers::{parse_hunk_header, strip_file_headers};
pub use parser::{parse, parse_str};
pub use types::{ContentBlock, Hunk, HunkHeader};

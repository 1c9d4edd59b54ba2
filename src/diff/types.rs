//! Hunk and content block types produced by the parser.

use serde::{Deserialize, Serialize};

/// The numbers and trailing text of a `@@ -a,b +c,d @@ text` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkHeader {
    /// First line of the hunk in the old file (1-based).
    pub old_start: usize,
    /// Number of old lines covered; 1 when the header omits it.
    pub old_count: usize,
    /// First line of the hunk in the new file (1-based).
    pub new_start: usize,
    /// Number of new lines covered; 1 when the header omits it.
    pub new_count: usize,
    /// Text after the closing `@@`, trimmed (often the enclosing function).
    pub function_context: String,
}

/// One grouped region of a hunk body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Pure insertion.
    Add { lines: Vec<String> },
    /// Pure deletion.
    Remove { lines: Vec<String> },
    /// Removed lines directly replaced by added lines.
    Change {
        old_lines: Vec<String>,
        new_lines: Vec<String>,
    },
    /// A line present on both sides. May be empty.
    Context { line: String },
}

impl ContentBlock {
    /// Short name of the block kind, as used in serialized output.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Add { .. } => "add",
            ContentBlock::Remove { .. } => "remove",
            ContentBlock::Change { .. } => "change",
            ContentBlock::Context { .. } => "context",
        }
    }

    /// Lines this block contributes to the old side of the hunk.
    pub fn old_lines(&self) -> &[String] {
        match self {
            ContentBlock::Add { .. } => &[],
            ContentBlock::Remove { lines } => lines,
            ContentBlock::Change { old_lines, .. } => old_lines,
            ContentBlock::Context { line } => std::slice::from_ref(line),
        }
    }

    /// Lines this block contributes to the new side of the hunk.
    pub fn new_lines(&self) -> &[String] {
        match self {
            ContentBlock::Add { lines } => lines,
            ContentBlock::Remove { .. } => &[],
            ContentBlock::Change { new_lines, .. } => new_lines,
            ContentBlock::Context { line } => std::slice::from_ref(line),
        }
    }
}

/// One contiguous region of a unified diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    /// First line of the hunk in the old file (1-based).
    pub old_start: usize,
    /// Number of old lines the header claims.
    pub old_count: usize,
    /// First line of the hunk in the new file (1-based).
    pub new_start: usize,
    /// Number of new lines the header claims.
    pub new_count: usize,
    /// Trailing header text; empty when absent.
    pub function_context: String,
    /// Body blocks in source order.
    pub contents: Vec<ContentBlock>,
}

impl Hunk {
    /// Open an empty hunk from a parsed header.
    pub fn from_header(header: HunkHeader) -> Self {
        Self {
            old_start: header.old_start,
            old_count: header.old_count,
            new_start: header.new_start,
            new_count: header.new_count,
            function_context: header.function_context,
            contents: Vec::new(),
        }
    }

    /// Reconstruct the old side of the hunk, in order.
    pub fn old_side(&self) -> Vec<&str> {
        self.contents
            .iter()
            .flat_map(|block| block.old_lines())
            .map(String::as_str)
            .collect()
    }

    /// Reconstruct the new side of the hunk, in order.
    pub fn new_side(&self) -> Vec<&str> {
        self.contents
            .iter()
            .flat_map(|block| block.new_lines())
            .map(String::as_str)
            .collect()
    }
}

//! Core hunk parsing state machine.

use tracing::{debug, trace};

use super::helpers::parse_hunk_header;
use super::types::{ContentBlock, Hunk};

/// What the lines collected since the last context line amount to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PendingMode {
    #[default]
    None,
    Add,
    Remove,
    Change,
}

/// Edit lines not yet emitted as a block.
#[derive(Debug, Default)]
struct PendingBlock {
    mode: PendingMode,
    removed: Vec<String>,
    added: Vec<String>,
}

impl PendingBlock {
    fn push_added(&mut self, content: &str) {
        self.mode = match self.mode {
            PendingMode::None | PendingMode::Add => PendingMode::Add,
            PendingMode::Remove | PendingMode::Change => PendingMode::Change,
        };
        self.added.push(content.to_string());
    }

    /// Append a removed line. A removal after additions starts a new group,
    /// so the finished block is returned for the caller to emit first.
    fn push_removed(&mut self, content: &str) -> Option<ContentBlock> {
        let finished = match self.mode {
            PendingMode::Add | PendingMode::Change => self.take(),
            PendingMode::None | PendingMode::Remove => None,
        };
        self.mode = PendingMode::Remove;
        self.removed.push(content.to_string());
        finished
    }

    /// Turn the pending lines into a block and reset.
    fn take(&mut self) -> Option<ContentBlock> {
        let removed = std::mem::take(&mut self.removed);
        let added = std::mem::take(&mut self.added);

        let block = match std::mem::take(&mut self.mode) {
            PendingMode::None => None,
            PendingMode::Add => Some(ContentBlock::Add { lines: added }),
            PendingMode::Remove => Some(ContentBlock::Remove { lines: removed }),
            PendingMode::Change => Some(ContentBlock::Change {
                old_lines: removed,
                new_lines: added,
            }),
        };

        if let Some(block) = &block {
            trace!(kind = block.kind(), "flushed content block");
        }
        block
    }
}

/// Parser state for a single `parse` call. No hunk open means idle.
#[derive(Debug, Default)]
struct HunkParser {
    hunks: Vec<Hunk>,
    current: Option<Hunk>,
    pending: PendingBlock,
}

impl HunkParser {
    fn feed(&mut self, line: &str) {
        if let Some(header) = parse_hunk_header(line) {
            self.close_hunk();
            debug!(
                old_start = header.old_start,
                new_start = header.new_start,
                "opened hunk"
            );
            self.current = Some(Hunk::from_header(header));
            return;
        }

        // Nothing to attach the line to before the first header
        let Some(hunk) = self.current.as_mut() else {
            return;
        };

        if let Some(content) = line.strip_prefix('+') {
            self.pending.push_added(content);
        } else if let Some(content) = line.strip_prefix('-') {
            if let Some(block) = self.pending.push_removed(content) {
                hunk.contents.push(block);
            }
        } else {
            let content = line.strip_prefix(' ').unwrap_or(line);
            if let Some(block) = self.pending.take() {
                hunk.contents.push(block);
            }
            hunk.contents.push(ContentBlock::Context {
                line: content.to_string(),
            });
        }
    }

    /// Flush pending edits into the open hunk and push it to the result.
    fn close_hunk(&mut self) {
        let block = self.pending.take();
        if let Some(mut hunk) = self.current.take() {
            hunk.contents.extend(block);
            self.hunks.push(hunk);
        }
    }

    fn finish(mut self) -> Vec<Hunk> {
        self.close_hunk();
        self.hunks
    }
}

/// Parse the body lines of a unified diff into hunks.
///
/// File header lines (`---`/`+++`) must already be removed; see
/// [`strip_file_headers`](super::strip_file_headers). Never fails: lines
/// before the first hunk header are dropped and any line inside a hunk that
/// is not an addition or removal becomes context.
///
/// # Example
///
/// ```
/// use revdiff::diff::{parse, ContentBlock};
///
/// let hunks = parse(["@@ -1,2 +1,2 @@", "-old", "+new", " same"]);
/// assert_eq!(hunks.len(), 1);
/// assert_eq!(
///     hunks[0].contents[0],
///     ContentBlock::Change {
///         old_lines: vec!["old".to_string()],
///         new_lines: vec!["new".to_string()],
///     }
/// );
/// ```
pub fn parse<I, S>(lines: I) -> Vec<Hunk>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = HunkParser::default();
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish()
}

/// Parse hunks from raw diff text, splitting on `\n` or `\r\n`.
pub fn parse_str(diff_output: &str) -> Vec<Hunk> {
    parse(diff_output.lines())
}

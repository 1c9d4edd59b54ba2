//! Tests for diff parsing.

use super::helpers::parse_hunk_header;
use super::{ContentBlock, Hunk, parse, parse_str, strip_file_headers};

// =========================================================================
// Helper functions
// =========================================================================

fn context(line: &str) -> ContentBlock {
    ContentBlock::Context {
        line: line.to_string(),
    }
}

fn add(lines: &[&str]) -> ContentBlock {
    ContentBlock::Add {
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

fn remove(lines: &[&str]) -> ContentBlock {
    ContentBlock::Remove {
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

fn change(old: &[&str], new: &[&str]) -> ContentBlock {
    ContentBlock::Change {
        old_lines: old.iter().map(|s| s.to_string()).collect(),
        new_lines: new.iter().map(|s| s.to_string()).collect(),
    }
}

// =========================================================================
// Hunk header parsing
// =========================================================================

#[test]
fn test_parse_hunk_header_full() {
    let header = parse_hunk_header("@@ -10,5 +12,7 @@ fn main() {").unwrap();
    assert_eq!(header.old_start, 10);
    assert_eq!(header.old_count, 5);
    assert_eq!(header.new_start, 12);
    assert_eq!(header.new_count, 7);
    assert_eq!(header.function_context, "fn main() {");
}

#[test]
fn test_parse_hunk_header_without_counts() {
    let header = parse_hunk_header("@@ -3 +4 @@").unwrap();
    assert_eq!(header.old_start, 3);
    assert_eq!(header.old_count, 1);
    assert_eq!(header.new_start, 4);
    assert_eq!(header.new_count, 1);
    assert_eq!(header.function_context, "");
}

#[test]
fn test_parse_hunk_header_zero_length_range() {
    let header = parse_hunk_header("@@ -0,0 +1,3 @@").unwrap();
    assert_eq!(header.old_start, 0);
    assert_eq!(header.old_count, 0);
    assert_eq!(header.new_count, 3);
}

#[test]
fn test_parse_hunk_header_rejects_non_headers() {
    assert!(parse_hunk_header(" @@ -1 +1 @@").is_none());
    assert!(parse_hunk_header("@@ -a,1 +1 @@").is_none());
    assert!(parse_hunk_header("@@ -1,1 +1,1").is_none());
    assert!(parse_hunk_header("@@@ -1,1 -1,1 +1,2 @@@").is_none());
    assert!(parse_hunk_header("").is_none());
}

#[test]
fn test_parse_hunk_header_trims_carriage_return() {
    let header = parse_hunk_header("@@ -1 +1 @@ sub foo\r").unwrap();
    assert_eq!(header.function_context, "sub foo");
}

// =========================================================================
// Block grouping
// =========================================================================

#[test]
fn test_end_to_end_single_hunk() {
    let hunks = parse(["@@ -1,3 +1,4 @@ func()", " a", "-b", "+c", "+d", " e"]);

    assert_eq!(
        hunks,
        vec![Hunk {
            old_start: 1,
            old_count: 3,
            new_start: 1,
            new_count: 4,
            function_context: "func()".to_string(),
            contents: vec![context("a"), change(&["b"], &["c", "d"]), context("e")],
        }]
    );
}

#[test]
fn test_context_only_hunk() {
    let hunks = parse(["@@ -5,3 +5,3 @@", " one", " two", " three"]);

    assert_eq!(hunks.len(), 1);
    assert_eq!(
        hunks[0].contents,
        vec![context("one"), context("two"), context("three")]
    );
}

#[test]
fn test_remove_then_add_is_single_change() {
    let hunks = parse([
        "@@ -1,4 +1,2 @@",
        "-old one",
        "-old two",
        "-old three",
        "+new one",
        " tail",
    ]);

    assert_eq!(
        hunks[0].contents,
        vec![
            change(&["old one", "old two", "old three"], &["new one"]),
            context("tail"),
        ]
    );
}

#[test]
fn test_pure_addition() {
    let hunks = parse(["@@ -1,1 +1,3 @@", " keep", "+x", "+y"]);
    assert_eq!(hunks[0].contents, vec![context("keep"), add(&["x", "y"])]);
}

#[test]
fn test_pure_removal() {
    let hunks = parse(["@@ -1,3 +1,1 @@", "-x", "-y", " keep"]);
    assert_eq!(hunks[0].contents, vec![remove(&["x", "y"]), context("keep")]);
}

#[test]
fn test_removal_after_change_starts_new_group() {
    let hunks = parse(["@@ -1,3 +1,1 @@", "-a", "+b", "-c", "-d"]);

    assert_eq!(
        hunks[0].contents,
        vec![change(&["a"], &["b"]), remove(&["c", "d"])]
    );
}

#[test]
fn test_removal_after_addition_starts_new_group() {
    let hunks = parse(["@@ -1,1 +1,1 @@", "+a", "-b", "+c"]);

    assert_eq!(hunks[0].contents, vec![add(&["a"]), change(&["b"], &["c"])]);
}

#[test]
fn test_context_line_content_strips_single_space() {
    let hunks = parse(["@@ -1,2 +1,2 @@", "   indented", "bare"]);

    assert_eq!(hunks[0].contents, vec![context("  indented"), context("bare")]);
}

#[test]
fn test_blank_line_is_empty_context() {
    let hunks = parse(["@@ -1,3 +1,3 @@", "-a", "", "+b"]);

    assert_eq!(
        hunks[0].contents,
        vec![remove(&["a"]), context(""), add(&["b"])]
    );
}

#[test]
fn test_edit_content_keeps_inner_prefix_chars() {
    let hunks = parse(["@@ -1 +1 @@", "--- not a header", "+++ nor this"]);

    assert_eq!(
        hunks[0].contents,
        vec![change(&["-- not a header"], &["++ nor this"])]
    );
}

// =========================================================================
// Hunk boundaries
// =========================================================================

#[test]
fn test_lines_before_first_header_are_ignored() {
    let hunks = parse(["garbage", "+added too early", "-removed too early", "@@ -1 +1 @@", " x"]);

    assert_eq!(hunks.len(), 1);
    assert_eq!(hunks[0].contents, vec![context("x")]);
}

#[test]
fn test_no_header_yields_no_hunks() {
    assert!(parse([" a", "+b", "-c"]).is_empty());
    assert!(parse(Vec::<String>::new()).is_empty());
}

#[test]
fn test_new_header_flushes_pending_block() {
    let hunks = parse([
        "@@ -1,2 +1,2 @@ first",
        "-a",
        "+b",
        "@@ -10,1 +10,2 @@ second",
        "+c",
    ]);

    assert_eq!(hunks.len(), 2);
    assert_eq!(hunks[0].function_context, "first");
    assert_eq!(hunks[0].contents, vec![change(&["a"], &["b"])]);
    assert_eq!(hunks[1].old_start, 10);
    assert_eq!(hunks[1].function_context, "second");
    assert_eq!(hunks[1].contents, vec![add(&["c"])]);
}

#[test]
fn test_end_of_input_flushes_pending_block() {
    let hunks = parse(["@@ -1 +1 @@", " a", "-b"]);
    assert_eq!(hunks[0].contents, vec![context("a"), remove(&["b"])]);
}

#[test]
fn test_header_without_body_yields_empty_hunk() {
    let hunks = parse(["@@ -1 +1 @@", "@@ -5,2 +5,2 @@", " x"]);

    assert_eq!(hunks.len(), 2);
    assert!(hunks[0].contents.is_empty());
    assert_eq!(hunks[1].contents, vec![context("x")]);
}

#[test]
fn test_malformed_header_inside_hunk_is_context() {
    let hunks = parse(["@@ -1 +1 @@", "@@ broken @@"]);

    assert_eq!(hunks.len(), 1);
    assert_eq!(hunks[0].contents, vec![context("@@ broken @@")]);
}

// =========================================================================
// Side reconstruction
// =========================================================================

#[test]
fn test_sides_reconstruct_original_order() {
    let hunks = parse([
        "@@ -1,6 +1,6 @@",
        " ctx1",
        "-r1",
        "-r2",
        "+a1",
        " ctx2",
        "+a2",
        "-r3",
        " ctx3",
        "+a3",
    ]);
    let hunk = &hunks[0];

    assert_eq!(hunk.old_side(), vec!["ctx1", "r1", "r2", "ctx2", "r3", "ctx3"]);
    assert_eq!(hunk.new_side(), vec!["ctx1", "a1", "ctx2", "a2", "ctx3", "a3"]);
}

// =========================================================================
// Raw text input
// =========================================================================

#[test]
fn test_parse_str_handles_crlf() {
    let diff = "@@ -1,2 +1,2 @@ main\r\n-a\r\n+b\r\n c\r\n";
    let hunks = parse_str(diff);

    assert_eq!(hunks[0].function_context, "main");
    assert_eq!(
        hunks[0].contents,
        vec![change(&["a"], &["b"]), context("c")]
    );
}

#[test]
fn test_strip_file_headers_between_files() {
    let diff = r#"diff --git a/src/a.rs b/src/a.rs
index abc1234..def5678 100644
--- a/src/a.rs
+++ b/src/a.rs
@@ -1,2 +1,2 @@
-one
+uno
 two
diff --git a/src/b.rs b/src/b.rs
--- a/src/b.rs
+++ b/src/b.rs
@@ -3 +3,2 @@ fn b()
 three
+four
"#;

    let lines = strip_file_headers(diff.lines());
    assert_eq!(
        lines,
        vec![
            "@@ -1,2 +1,2 @@",
            "-one",
            "+uno",
            " two",
            "@@ -3 +3,2 @@ fn b()",
            " three",
            "+four",
        ]
    );

    let hunks = parse(lines);
    assert_eq!(hunks.len(), 2);
    assert_eq!(hunks[0].contents, vec![change(&["one"], &["uno"]), context("two")]);
    assert_eq!(hunks[1].contents, vec![context("three"), add(&["four"])]);
}

#[test]
fn test_strip_file_headers_keeps_header_like_body_lines() {
    let diff = "--- a/notes.txt\n+++ b/notes.txt\n@@ -1,2 +1,1 @@\n--- signature\n keep\n";

    let lines = strip_file_headers(diff.lines());
    assert_eq!(lines, vec!["@@ -1,2 +1,1 @@", "--- signature", " keep"]);

    let hunks = parse(lines);
    assert_eq!(hunks[0].contents, vec![remove(&["-- signature"]), context("keep")]);
}

#[test]
fn test_strip_file_headers_ignores_no_newline_marker_in_counts() {
    let diff = "@@ -1 +1 @@\n-a\n\\ No newline at end of file\n+b\n--- a/next\n";

    let lines = strip_file_headers(diff.lines());
    assert_eq!(
        lines,
        vec!["@@ -1 +1 @@", "-a", "\\ No newline at end of file", "+b"]
    );
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn test_content_block_serializes_tagged() {
    let json = serde_json::to_value(change(&["a"], &["b"])).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"type": "change", "old_lines": ["a"], "new_lines": ["b"]})
    );

    let json = serde_json::to_value(context("")).unwrap();
    assert_eq!(json, serde_json::json!({"type": "context", "line": ""}));
}

#[test]
fn test_content_block_kind_matches_tag() {
    for block in [add(&["x"]), remove(&["x"]), change(&["x"], &["y"]), context("x")] {
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], block.kind());
    }
}

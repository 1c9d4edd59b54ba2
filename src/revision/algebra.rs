//! Free functions over revision strings.

use std::cmp::Ordering;

/// Check whether a string is a revision number.
///
/// Accepts any non-empty run of ASCII digits and dots. Leading, trailing and
/// repeated dots (`.1`, `1.`, `1..2`) are accepted, matching what CVS
/// front ends have historically tolerated.
pub fn is_valid(rev: &str) -> bool {
    !rev.is_empty() && rev.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

/// Number of dot-separated components (`1.2.3.4` has 4).
pub fn component_count(rev: &str) -> Option<usize> {
    is_valid(rev).then(|| rev.matches('.').count() + 1)
}

/// Remove `amount` trailing components.
///
/// Returns None if the revision is invalid or has fewer than `amount` dots.
///
/// ```
/// assert_eq!(revdiff::revision::strip("1.2.3.4", 2).as_deref(), Some("1.2"));
/// assert_eq!(revdiff::revision::strip("1.2", 5), None);
/// ```
pub fn strip(rev: &str, amount: usize) -> Option<String> {
    if !is_valid(rev) {
        return None;
    }

    let mut end = rev.len();
    for _ in 0..amount {
        end = rev[..end].rfind('.')?;
    }
    Some(rev[..end].to_string())
}

/// Order two revisions component by component, numerically.
///
/// `1.9` sorts before `1.10`, and a revision sorts before any longer
/// revision it is a prefix of. Empty components are skipped and leading
/// zeros are ignored. Components that are not all digits fall back to
/// byte order so the function stays total on arbitrary strings.
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut left = components(a);
    let mut right = components(b);

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => match compare_component(x, y) {
                Ordering::Equal => continue,
                ord => return ord,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn components(rev: &str) -> impl Iterator<Item = &str> {
    rev.split('.').filter(|c| !c.is_empty())
}

fn compare_component(a: &str, b: &str) -> Ordering {
    let numeric = |s: &str| s.bytes().all(|c| c.is_ascii_digit());
    if !(numeric(a) && numeric(b)) {
        return a.cmp(b);
    }

    // Compare as integers of any length
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// The revision that precedes `rev` in history.
///
/// `1.5` → `1.4`. The first revision on a branch (`1.3.2.1`) steps back to
/// the branch point (`1.3`). The first trunk revision (`1.1`) has no
/// predecessor.
pub fn predecessor(rev: &str) -> Option<String> {
    if !is_valid(rev) {
        return None;
    }

    let last_dot = rev.rfind('.');
    let (head, last) = match last_dot {
        Some(dot) => (&rev[..=dot], &rev[dot + 1..]),
        None => ("", rev),
    };

    if let Some(prev) = decrement(last) {
        return Some(format!("{head}{prev}"));
    }

    // Branch point; position 0 is never a separator
    let branch_dot = rev[..last_dot?].rfind('.').filter(|&pos| pos > 0)?;
    Some(rev[..branch_dot].to_string())
}

/// Subtract one from a run of digits; None unless the result is positive.
fn decrement(digits: &str) -> Option<String> {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() || digits == "1" {
        return None;
    }

    let mut out = digits.as_bytes().to_vec();
    for b in out.iter_mut().rev() {
        if *b == b'0' {
            *b = b'9';
        } else {
            *b -= 1;
            break;
        }
    }

    let out: String = out.into_iter().map(char::from).collect();
    Some(out.trim_start_matches('0').to_string())
}

/// Map a magic branch revision `x.y.0.z` to its branch number `x.y.z`.
///
/// The penultimate component is dropped without checking that it is `0`.
/// A two-component revision maps to its last component.
pub fn to_branch(rev: &str) -> Option<String> {
    if !is_valid(rev) {
        return None;
    }

    let end = rev.rfind('.')?;
    match rev[..end].rfind('.') {
        Some(start) => Some(format!("{}.{}", &rev[..start], &rev[end + 1..])),
        None => Some(rev[end + 1..].to_string()),
    }
}

/// Map a branch number `x.y.z` to the magic revision `x.y.0.z` CVS stores
/// symbolic branch tags under.
pub fn magic_branch(rev: &str) -> Option<String> {
    if !is_valid(rev) {
        return None;
    }

    let dot = rev.rfind('.')?;
    Some(format!("{}.0{}", &rev[..dot], &rev[dot..]))
}

/// `rev` if it is valid, otherwise `fallback`.
pub fn valid_or<'a>(rev: &'a str, fallback: &'a str) -> &'a str {
    if is_valid(rev) { rev } else { fallback }
}

/// Sort revisions newest first, the order a file log is listed in.
pub fn sort_descending<S: AsRef<str>>(revs: &mut [S]) {
    revs.sort_by(|a, b| compare(b.as_ref(), a.as_ref()));
}

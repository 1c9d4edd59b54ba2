//! Validated revision value type.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::algebra;

/// Error returned when a string is not a revision number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a valid revision number")]
pub struct ParseRevisionError(pub String);

/// An owned revision string known to pass [`is_valid`](super::is_valid).
///
/// Equality and ordering follow [`compare`](super::compare), so `1.01` and
/// `1.1` are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Revision(String);

impl Revision {
    /// Validate an owned string, returning None if it is not a revision.
    pub fn new(rev: impl Into<String>) -> Option<Self> {
        let rev = rev.into();
        algebra::is_valid(&rev).then_some(Self(rev))
    }

    /// The revision as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of dot-separated components.
    pub fn size(&self) -> usize {
        self.0.matches('.').count() + 1
    }

    /// Remove `amount` trailing components.
    pub fn strip(&self, amount: usize) -> Option<Self> {
        algebra::strip(&self.0, amount).and_then(Self::new)
    }

    /// The preceding revision, stepping back to the branch point from the
    /// first revision of a branch.
    pub fn predecessor(&self) -> Option<Self> {
        algebra::predecessor(&self.0).and_then(Self::new)
    }

    /// Branch number for a magic branch revision (`1.2.0.4` → `1.2.4`).
    pub fn to_branch(&self) -> Option<Self> {
        algebra::to_branch(&self.0).and_then(Self::new)
    }

    /// Magic branch revision for a branch number (`1.2.4` → `1.2.0.4`).
    pub fn magic_branch(&self) -> Option<Self> {
        algebra::magic_branch(&self.0).and_then(Self::new)
    }
}

impl FromStr for Revision {
    type Err = ParseRevisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or_else(|| ParseRevisionError(s.to_string()))
    }
}

impl TryFrom<String> for Revision {
    type Error = ParseRevisionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if algebra::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ParseRevisionError(value))
        }
    }
}

impl From<Revision> for String {
    fn from(rev: Revision) -> Self {
        rev.0
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq for Revision {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Revision {}

impl PartialOrd for Revision {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Revision {
    fn cmp(&self, other: &Self) -> Ordering {
        algebra::compare(&self.0, &other.0)
    }
}

//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for revdiff.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Diff settings
    // =========================================================================
    /// Output format for `revdiff parse`.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Drop `diff`/`index`/`---`/`+++` lines before parsing.
    #[serde(default = "default_true")]
    pub strip_file_headers: bool,

    // =========================================================================
    // Revision settings
    // =========================================================================
    /// Revision substituted for invalid input to `revdiff rev` commands.
    ///
    /// Unset means invalid input is reported as an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_revision: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            strip_file_headers: default_true(),
            fallback_revision: None,
        }
    }
}

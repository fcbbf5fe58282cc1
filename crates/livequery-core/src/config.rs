//! Filter configuration.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default limit on the size of a compiled regex program (10 MB).
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * 1024 * 1024;

/// Default limit on the lazy DFA cache of a single regex (2 MB).
pub const DEFAULT_REGEX_DFA_SIZE_LIMIT: usize = 2 * 1024 * 1024;

/// Configuration applied when compiling filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Upper bound on the compiled size of a filter regex, in bytes.
    /// Patterns that exceed it are rejected as invalid.
    pub regex_size_limit: usize,

    /// Upper bound on the lazy DFA cache of a filter regex, in bytes.
    pub regex_dfa_size_limit: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            regex_dfa_size_limit: DEFAULT_REGEX_DFA_SIZE_LIMIT,
        }
    }
}

impl FilterConfig {
    /// Load a configuration from a JSON document. Missing keys keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Set the compiled regex size limit.
    pub fn with_regex_size_limit(mut self, limit: usize) -> Self {
        self.regex_size_limit = limit;
        self
    }

    /// Set the lazy DFA size limit.
    pub fn with_dfa_size_limit(mut self, limit: usize) -> Self {
        self.regex_dfa_size_limit = limit;
        self
    }
}

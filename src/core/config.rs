// File: src/core/config.rs
use crate::core::error::Result;
use crate::core::types::validate_letter;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_LENGTH: usize = 4;
pub const DEFAULT_MAX_PATTERNS: usize = 4;
pub const DEFAULT_REFERENCE_LETTER: char = 'e';
pub const DEFAULT_TOP_K: usize = 3;

/// How start offsets accumulate under a repeated pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    /// Register a pattern at the first offset whose substring recurs further
    /// right, then record every later occurrence, the final one included.
    #[default]
    AllOccurrences,
    /// Record an offset only while its substring still recurs further right,
    /// so the final occurrence of each pattern is never recorded.
    RecurringOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Length of the substrings searched for repeats.
    pub min_length: usize,
    /// How many patterns (most frequent first) feed the distance stage.
    pub max_patterns: usize,
    /// Letter assumed to be the most common in the plaintext.
    pub reference_letter: char,
    /// Guesses kept per key position.
    pub top_k: usize,
    pub scan_policy: ScanPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_patterns: DEFAULT_MAX_PATTERNS,
            reference_letter: DEFAULT_REFERENCE_LETTER,
            top_k: DEFAULT_TOP_K,
            scan_policy: ScanPolicy::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_max_patterns(mut self, max_patterns: usize) -> Self {
        self.max_patterns = max_patterns;
        self
    }

    pub fn with_reference_letter(mut self, reference_letter: char) -> Self {
        self.reference_letter = reference_letter;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_scan_policy(mut self, scan_policy: ScanPolicy) -> Self {
        self.scan_policy = scan_policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_letter(self.reference_letter)?;
        Ok(())
    }
}

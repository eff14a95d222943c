// File: src/analysis/patterns.rs
use crate::core::config::ScanPolicy;
use crate::core::types::{PatternOccurrences, Text};
use std::collections::HashMap;
use tracing::trace;

/// Finds fixed-length substrings that recur in a ciphertext and records
/// where each one starts.
#[derive(Debug, Clone, Copy)]
pub struct PatternScanner {
    min_length: usize,
    max_patterns: usize,
    policy: ScanPolicy,
}

impl PatternScanner {
    pub fn new(min_length: usize, max_patterns: usize) -> Self {
        Self { min_length, max_patterns, policy: ScanPolicy::default() }
    }

    pub fn with_policy(mut self, policy: ScanPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Scans left to right. A pattern enters the result at the first offset
    /// whose substring also occurs somewhere strictly to its right
    /// (overlapping occurrences count). Results are ordered by occurrence
    /// count, descending, with ties left in first-seen order, and cut to
    /// `max_patterns`.
    ///
    /// O(n^2 * min_length); fine for ciphertexts of a few kilobytes.
    pub fn scan(&self, ciphertext: &Text) -> Vec<PatternOccurrences> {
        let bytes = ciphertext.as_bytes();
        let len = self.min_length;
        if len == 0 || len > bytes.len() {
            return vec![];
        }

        let mut found: Vec<PatternOccurrences> = Vec::new();
        let mut index: HashMap<&[u8], usize> = HashMap::new();

        for start in 0..=bytes.len() - len {
            let window = &bytes[start..start + len];
            let registered = index.get(window).copied();

            let keep = match (self.policy, registered) {
                (ScanPolicy::AllOccurrences, Some(_)) => true,
                _ => recurs_after(bytes, start, window),
            };
            if !keep {
                continue;
            }

            let slot = registered.unwrap_or_else(|| {
                found.push(PatternOccurrences {
                    pattern: ciphertext.as_str()[start..start + len].to_string(),
                    positions: Vec::new(),
                });
                index.insert(window, found.len() - 1);
                found.len() - 1
            });
            found[slot].positions.push(start);
        }

        found.retain(|p| p.positions.len() >= 2);
        // sort_by_key is stable, so equal counts keep first-seen order
        found.sort_by_key(|p| std::cmp::Reverse(p.positions.len()));
        found.truncate(self.max_patterns);

        trace!(
            min_length = len,
            patterns = found.len(),
            "repeated pattern scan finished"
        );
        found
    }
}

/// True if `window` occurs again at any offset after `start`.
fn recurs_after(bytes: &[u8], start: usize, window: &[u8]) -> bool {
    bytes[start + 1..].windows(window.len()).any(|w| w == window)
}

/// Repeated substrings of length `min_length`, at most `max_patterns` of them.
pub fn find_repeated_patterns(
    ciphertext: &Text,
    min_length: usize,
    max_patterns: usize,
) -> Vec<PatternOccurrences> {
    PatternScanner::new(min_length, max_patterns).scan(ciphertext)
}

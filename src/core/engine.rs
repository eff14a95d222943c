use crate::analysis::distances::measure_distances;
use crate::analysis::frequency::{infer_shift_candidates, split_by_position};
use crate::analysis::key_length::{tally_key_length_votes, winner};
use crate::analysis::patterns::PatternScanner;
use crate::core::cipher::VigenereCipher;
use crate::core::config::AnalysisConfig;
use crate::core::error::Result;
use crate::core::types::{
    KeyLength, Keyword, PatternDistances, PatternOccurrences, ShiftCandidate, Text,
    UNDETERMINED_KEY_LENGTH,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Every artifact of one analysis run, from repeated patterns through to
/// the per-position key guesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub patterns: Vec<PatternOccurrences>,
    pub distances: Vec<PatternDistances>,
    /// `(pattern, gcd)` in pattern order.
    pub gcds: Vec<(String, usize)>,
    /// `(gcd value, votes)` for gcds above 1, first-seen order.
    pub votes: Vec<(usize, usize)>,
    pub key_length: KeyLength,
    /// Interleaved ciphertext columns, one per key position.
    pub subsequences: Vec<Text>,
    pub shift_candidates: Vec<ShiftCandidate>,
}

impl AnalysisReport {
    pub fn is_determined(&self) -> bool {
        self.key_length != UNDETERMINED_KEY_LENGTH
    }

    /// Keyword built from the top guess at every key position.
    /// `None` when the key length is undetermined or a column was empty.
    pub fn primary_keyword(&self) -> Option<Keyword> {
        if !self.is_determined() {
            return None;
        }
        let letters: Option<String> = self.shift_candidates.iter().map(ShiftCandidate::best).collect();
        Keyword::new(&letters?).ok()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// The analyzer wires scanner -> distances -> vote -> frequency guesses.
// It never decrypts on its own; see `break_cipher` for the one-shot path.
#[derive(Debug, Clone, Default)]
pub struct CipherAnalyzer {
    config: AnalysisConfig,
}

impl CipherAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, ciphertext: &Text) -> Result<AnalysisReport> {
        let config = &self.config;

        // 1. Repeated substrings
        let patterns = PatternScanner::new(config.min_length, config.max_patterns)
            .with_policy(config.scan_policy)
            .scan(ciphertext);
        debug!(
            letters = ciphertext.len(),
            min_length = config.min_length,
            patterns = patterns.len(),
            "found repeated patterns"
        );

        // 2. Distances and their gcd
        let distances = measure_distances(&patterns);
        let gcds: Vec<(String, usize)> =
            distances.iter().map(|d| (d.pattern.clone(), d.gcd)).collect();
        debug!(gcds = ?gcds, "measured pattern distances");

        // 3. Vote on the key length
        let votes = tally_key_length_votes(gcds.iter().map(|&(_, gcd)| gcd));
        let key_length = winner(&votes);

        // 4. Frequency guesses per key position
        let (subsequences, shift_candidates) = if key_length == UNDETERMINED_KEY_LENGTH {
            warn!(patterns = patterns.len(), "key length could not be determined");
            (Vec::new(), Vec::new())
        } else {
            debug!(key_length, votes = ?votes, "estimated key length");
            (
                split_by_position(ciphertext, key_length)?,
                infer_shift_candidates(
                    ciphertext,
                    key_length,
                    config.reference_letter,
                    config.top_k,
                )?,
            )
        };

        Ok(AnalysisReport {
            patterns,
            distances,
            gcds,
            votes,
            key_length,
            subsequences,
            shift_candidates,
        })
    }

    /// Analyzes, takes the top guess per position as the keyword and
    /// decrypts with it. `None` if no keyword could be assembled.
    pub fn break_cipher(&self, ciphertext: &Text) -> Result<Option<(Keyword, Text)>> {
        let report = self.analyze(ciphertext)?;
        Ok(report.primary_keyword().map(|keyword| {
            debug!(keyword = %keyword, "decrypting with primary keyword");
            let plaintext = VigenereCipher::new(keyword.clone()).decrypt(ciphertext);
            (keyword, plaintext)
        }))
    }
}

/// Runs the full pipeline with default frequency settings.
pub fn analyze(ciphertext: &Text, min_length: usize, max_patterns: usize) -> Result<AnalysisReport> {
    let config = AnalysisConfig::default()
        .with_min_length(min_length)
        .with_max_patterns(max_patterns);
    CipherAnalyzer::with_config(config)?.analyze(ciphertext)
}

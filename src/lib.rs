// src/lib.rs

pub mod analysis;
pub mod core;

pub use crate::analysis::distances::{gcd_of_distances, measure_distances, measure_distances_with_gcd};
pub use crate::analysis::frequency::{infer_shift_candidates, rank_letters, split_by_position, FrequencyTable};
pub use crate::analysis::key_length::{estimate_key_length, tally_key_length_votes, vote_key_length};
pub use crate::analysis::patterns::{find_repeated_patterns, PatternScanner};
pub use crate::core::alphabet::AlphabetCodec;
pub use crate::core::cipher::{decrypt, encrypt, VigenereCipher};
pub use crate::core::config::{AnalysisConfig, ScanPolicy};
pub use crate::core::engine::{analyze, AnalysisReport, CipherAnalyzer};
pub use crate::core::error::{CipherError, Result};
pub use crate::core::types::{
    KeyGuess, KeyLength, Keyword, PatternDistances, PatternOccurrences, ShiftCandidate, Text,
    UNDETERMINED_KEY_LENGTH,
};

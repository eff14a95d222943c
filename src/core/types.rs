// src/core/types.rs
use crate::core::alphabet::AlphabetCodec;
use crate::core::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimated repeating-key period. Zero means no estimate could be made.
pub type KeyLength = usize;

pub const UNDETERMINED_KEY_LENGTH: KeyLength = 0;

/// An immutable run of lowercase letters `a..=z`, used for both ciphertext
/// and plaintext. Every byte is guaranteed to have a valid alphabet rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Text(String);

impl Text {
    pub fn new(letters: &str) -> Result<Self> {
        if let Some(symbol) = letters.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(CipherError::InvalidSymbol { symbol });
        }
        Ok(Self(letters.to_string()))
    }

    /// Keeps ASCII letters (lowercased) and drops everything else.
    pub fn sanitize(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter(|c| c.is_ascii_alphabetic())
                .map(|c| c.to_ascii_lowercase())
                .collect(),
        )
    }

    pub(crate) fn from_ranks(ranks: impl IntoIterator<Item = u8>) -> Self {
        Self(ranks.into_iter().map(|r| (b'a' + r) as char).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Alphabet ranks, one per letter.
    pub fn ranks(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'a')
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Text {
    type Error = CipherError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.0
    }
}

/// The repeating shift key. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keyword(Text);

impl Keyword {
    pub fn new(letters: &str) -> Result<Self> {
        if letters.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        Ok(Self(Text::new(letters)?))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn ranks(&self) -> Vec<u8> {
        self.0.ranks().collect()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for Keyword {
    type Error = CipherError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.0.into()
    }
}

/// A recurring substring and every start offset recorded for it, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternOccurrences {
    pub pattern: String,
    pub positions: Vec<usize>,
}

/// Gaps between consecutive occurrences of one pattern and their gcd.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDistances {
    pub pattern: String,
    pub distances: Vec<usize>,
    pub gcd: usize,
}

/// One hypothesis for the key letter at a key position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGuess {
    pub key_letter: char,
    /// The ciphertext letter assumed to decrypt to the reference letter.
    pub cipher_letter: char,
    pub count: usize,
}

/// Ranked key-letter guesses for one key position, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCandidate {
    pub key_position: usize,
    pub guesses: Vec<KeyGuess>,
}

impl ShiftCandidate {
    pub fn letters(&self) -> String {
        self.guesses.iter().map(|g| g.key_letter).collect()
    }

    pub fn as_pairs(&self) -> Vec<(char, usize)> {
        self.guesses.iter().map(|g| (g.key_letter, g.count)).collect()
    }

    pub fn best(&self) -> Option<char> {
        self.guesses.first().map(|g| g.key_letter)
    }
}

/// Checks that a single character is usable as a reference letter.
pub(crate) fn validate_letter(letter: char) -> Result<char> {
    AlphabetCodec::rank(letter).map(|_| letter)
}

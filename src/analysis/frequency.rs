// File: src/analysis/frequency.rs
use crate::core::alphabet::{AlphabetCodec, ALPHABET_SIZE};
use crate::core::error::{CipherError, Result};
use crate::core::types::{KeyGuess, ShiftCandidate, Text};

/// Letter counts for one subsequence, remembering the order in which each
/// distinct letter first appeared so rankings are deterministic.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [usize; ALPHABET_SIZE as usize],
    first_seen: Vec<u8>,
}

impl FrequencyTable {
    pub fn from_text(text: &Text) -> Self {
        let mut counts = [0usize; ALPHABET_SIZE as usize];
        let mut first_seen = Vec::new();
        for rank in text.ranks() {
            if counts[rank as usize] == 0 {
                first_seen.push(rank);
            }
            counts[rank as usize] += 1;
        }
        Self { counts, first_seen }
    }

    pub fn count(&self, letter: char) -> usize {
        AlphabetCodec::rank(letter).map_or(0, |r| self.counts[r as usize])
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// The `k` most frequent letters, ties in first-seen order.
    pub fn top(&self, k: usize) -> Vec<(char, usize)> {
        let mut ranked: Vec<(char, usize)> = self
            .first_seen
            .iter()
            .map(|&r| ((b'a' + r) as char, self.counts[r as usize]))
            .collect();
        ranked.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
        ranked.truncate(k);
        ranked
    }
}

/// Interleaved columns: column `k` holds the letters at `k, k+n, k+2n, ...`.
pub fn split_by_position(ciphertext: &Text, key_length: usize) -> Result<Vec<Text>> {
    if key_length == 0 {
        return Err(CipherError::InvalidKeyLength { key_length });
    }
    let bytes = ciphertext.as_bytes();
    Ok((0..key_length)
        .map(|offset| {
            Text::from_ranks(bytes.iter().skip(offset).step_by(key_length).map(|b| b - b'a'))
        })
        .collect())
}

pub fn rank_letters(subsequence: &Text, top_k: usize) -> Vec<(char, usize)> {
    FrequencyTable::from_text(subsequence).top(top_k)
}

/// For each key position, guesses the key letter by assuming each of the
/// `top_k` most frequent ciphertext letters there stands for `reference`.
pub fn infer_shift_candidates(
    ciphertext: &Text,
    key_length: usize,
    reference: char,
    top_k: usize,
) -> Result<Vec<ShiftCandidate>> {
    AlphabetCodec::rank(reference)?;
    let columns = split_by_position(ciphertext, key_length)?;
    columns
        .iter()
        .enumerate()
        .map(|(key_position, column)| -> Result<ShiftCandidate> {
            let guesses = rank_letters(column, top_k)
                .into_iter()
                .map(|(cipher_letter, count)| -> Result<KeyGuess> {
                    let shift = AlphabetCodec::caesar_shift_for(reference, cipher_letter)?;
                    Ok(KeyGuess { key_letter: AlphabetCodec::letter(shift)?, cipher_letter, count })
                })
                .collect::<Result<Vec<KeyGuess>>>()?;
            Ok(ShiftCandidate { key_position, guesses })
        })
        .collect()
}

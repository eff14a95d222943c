// File: src/core/alphabet.rs
use crate::core::error::{CipherError, Result};

pub const ALPHABET_SIZE: u8 = 26;

/// Maps letters of the 26-letter lowercase alphabet to their 0..25 rank and
/// back, and defines the modular shift both cipher directions are built on.
pub struct AlphabetCodec;

impl AlphabetCodec {
    /// Rank of a lowercase letter, `'a' => 0` through `'z' => 25`.
    pub fn rank(letter: char) -> Result<u8> {
        if letter.is_ascii_lowercase() {
            Ok(letter as u8 - b'a')
        } else {
            Err(CipherError::InvalidSymbol { symbol: letter })
        }
    }

    pub fn letter(rank: u8) -> Result<char> {
        if rank < ALPHABET_SIZE {
            Ok((b'a' + rank) as char)
        } else {
            Err(CipherError::OutOfRange { rank })
        }
    }

    /// `(cipher - key) mod 26`, always in `0..26`.
    pub fn shift_decrypt(cipher_rank: u8, key_rank: u8) -> u8 {
        debug_assert!(cipher_rank < ALPHABET_SIZE && key_rank < ALPHABET_SIZE);
        (cipher_rank + ALPHABET_SIZE - key_rank) % ALPHABET_SIZE
    }

    /// `(plain + key) mod 26`.
    pub fn shift_encrypt(plain_rank: u8, key_rank: u8) -> u8 {
        debug_assert!(plain_rank < ALPHABET_SIZE && key_rank < ALPHABET_SIZE);
        (plain_rank + key_rank) % ALPHABET_SIZE
    }

    /// The key rank that would turn `reference` (assumed plaintext) into
    /// `observed` (seen in the ciphertext).
    pub fn caesar_shift_for(reference: char, observed: char) -> Result<u8> {
        let reference = Self::rank(reference)?;
        let observed = Self::rank(observed)?;
        Ok(Self::shift_decrypt(observed, reference))
    }
}

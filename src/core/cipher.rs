// File: src/core/cipher.rs
use crate::core::alphabet::AlphabetCodec;
use crate::core::error::Result;
use crate::core::types::{Keyword, Text};

/// A repeating-key shift cipher bound to one keyword.
#[derive(Debug, Clone)]
pub struct VigenereCipher {
    key_ranks: Vec<u8>,
    keyword: Keyword,
}

impl VigenereCipher {
    pub fn new(keyword: Keyword) -> Self {
        Self { key_ranks: keyword.ranks(), keyword }
    }

    pub fn keyword(&self) -> &Keyword {
        &self.keyword
    }

    /// Letter `i` is shifted back by `keyword[i mod |keyword|]`.
    pub fn decrypt(&self, ciphertext: &Text) -> Text {
        self.apply(ciphertext, AlphabetCodec::shift_decrypt)
    }

    pub fn encrypt(&self, plaintext: &Text) -> Text {
        self.apply(plaintext, AlphabetCodec::shift_encrypt)
    }

    fn apply(&self, input: &Text, shift: fn(u8, u8) -> u8) -> Text {
        let keys = self.key_ranks.iter().cycle();
        Text::from_ranks(input.ranks().zip(keys).map(|(rank, &key)| shift(rank, key)))
    }
}

/// Decrypts a lowercase ciphertext with a lowercase keyword.
pub fn decrypt(ciphertext: &str, keyword: &str) -> Result<String> {
    let cipher = VigenereCipher::new(Keyword::new(keyword)?);
    Ok(cipher.decrypt(&Text::new(ciphertext)?).into())
}

pub fn encrypt(plaintext: &str, keyword: &str) -> Result<String> {
    let cipher = VigenereCipher::new(Keyword::new(keyword)?);
    Ok(cipher.encrypt(&Text::new(plaintext)?).into())
}

// File: src/core/error.rs

/// Failures raised at the point of detection. None of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    #[error("invalid symbol {symbol:?}: expected a lowercase letter a-z")]
    InvalidSymbol { symbol: char },

    #[error("alphabet rank {rank} out of range 0..26")]
    OutOfRange { rank: u8 },

    #[error("keyword must contain at least one letter")]
    EmptyKey,

    #[error("key length must be at least 1, got {key_length}")]
    InvalidKeyLength { key_length: usize },
}

pub type Result<T> = std::result::Result<T, CipherError>;

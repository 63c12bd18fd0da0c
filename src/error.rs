//! Error types for cryptanalysis and cipher operations.

use thiserror::Error;

/// Unified error type for the crate.
///
/// Every failure is reported to the immediate caller; there is no silent
/// recovery and no default-to-identity behavior anywhere in the engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Input too short for the requested statistical method.
    #[error("input too short for statistical analysis: {len} byte(s), need at least {min}")]
    InsufficientData { len: usize, min: usize },

    /// No reliable local-maxima gap signal in the coincidence table.
    #[error("no reliable periodicity signal: key length cannot be estimated")]
    UndeterminedPeriod,

    /// Cipher-method selector the dispatcher cannot act on.
    #[error("unsupported cipher method: {0}")]
    UnsupportedMethod(String),

    /// Empty or mismatched key, pad, or IV.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(&'static str),

    /// Character outside the 8-bit alphabet handed to the codec.
    #[error("character {0:?} is outside the 8-bit alphabet")]
    UnencodableChar(char),

    /// I/O failure at the CLI boundary (the engine itself performs no I/O).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

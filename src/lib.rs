//! Kryptos - classical-cipher cryptanalysis toolkit.
//!
//! This library recovers plaintext and key material from ciphertext
//! produced by classical ciphers, without prior knowledge of the key:
//! - Caesar shifts, by correlating byte frequencies against an English
//!   reference model
//! - Vigenère repeating keys, by coincidence-based period detection and
//!   per-column Caesar recovery
//! - Single-byte XOR, by exhaustive key enumeration
//!
//! The matching forward transforms (Caesar, Vigenère, XOR, cyclic one-time
//! pad, chained-XOR CBC) are provided alongside the breakers, together with
//! a lossless 8-bit string/byte codec.

pub mod analysis;
pub mod breaker;
pub mod cipher;
pub mod error;
pub mod util;

#[cfg(test)]
pub(crate) mod testdata;

pub use breaker::break_cipher;
pub use cipher::Method;
pub use error::{Error, Result};

//! Caesar key recovery by reference-model correlation.
//!
//! A Caesar shift slides the plaintext letter distribution along the 256-bin
//! byte axis without reshaping it. Scoring every candidate alignment of the
//! frequency vector against the English reference table finds where the
//! distribution landed; the recovered key is the shift that moves it back.

use crate::analysis::frequency::{ALPHABET_START, ENGLISH_FREQUENCIES};

/// Dot product of the 26 frequency-vector entries starting at `alignment`
/// (wrapping modulo 256) against the English reference table.
///
/// High scores mean "if the ciphertext alphabet starts at this byte value,
/// its letter statistics look like English".
#[inline]
fn correlate_alignment(freq: &[f64; 256], alignment: usize) -> f64 {
    let mut score = 0.0;
    for (i, &reference) in ENGLISH_FREQUENCIES.iter().enumerate() {
        score += freq[(alignment + i) & 0xFF] * reference;
    }
    score
}

/// Find the most likely Caesar key for a ciphertext frequency vector.
///
/// The returned key is the additive shift that realigns the ciphertext to
/// the conventional alphabet start; applying it through the forward Caesar
/// transform decrypts the text.
///
/// Only a strictly larger score replaces the running best, so the first of
/// several tied alignments wins. An all-zero frequency vector never beats
/// the initial score and degenerates to key 0: defined, but meaningless, and
/// callers must not treat it as a confident result.
pub fn find_caesar_key(freq: &[f64; 256]) -> u8 {
    let mut best_score = 0.0f64;
    let mut key = 0u8;

    for alignment in 0..256usize {
        let score = correlate_alignment(freq, alignment);
        if score > best_score {
            best_score = score;
            key = ALPHABET_START.wrapping_sub(alignment as u8);
        }
    }

    key
}

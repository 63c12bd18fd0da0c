//! Vigenère key recovery.
//!
//! Under a repeating key of length L, every L-th byte of the despaced
//! ciphertext was shifted by the same key byte, so each of the L column
//! groups is a plain Caesar sub-ciphertext. Estimating L reduces the whole
//! problem to L independent Caesar recoveries.

use log::debug;
use rayon::prelude::*;

use crate::analysis::caesar::find_caesar_key;
use crate::analysis::coincidence::estimate_key_length;
use crate::analysis::frequency::compute_frequencies;
use crate::cipher::SPACE;
use crate::error::Result;

/// Strip every space byte. Spaces pass through encryption unencoded and
/// without consuming key material, so they carry no alignment signal.
pub fn remove_spaces(text: &[u8]) -> Vec<u8> {
    text.iter().copied().filter(|&byte| byte != SPACE).collect()
}

/// Recover the full repeating key of a Vigenère ciphertext.
///
/// The returned key realigns the ciphertext when applied through the
/// forward Vigenère transform (each byte is the realigning shift recovered
/// for its column). Columns are statistically independent and are analyzed
/// in parallel; the result preserves column order.
///
/// # Errors
///
/// Propagates [`crate::error::Error::InsufficientData`] and
/// [`crate::error::Error::UndeterminedPeriod`] from the key-length
/// estimation.
pub fn recover_vigenere_key(ciphertext: &[u8]) -> Result<Vec<u8>> {
    let despaced = remove_spaces(ciphertext);
    let key_length = estimate_key_length(&despaced)?;
    debug!("estimated repeating-key length: {key_length}");

    let key = (0..key_length)
        .into_par_iter()
        .map(|column| {
            let group: Vec<u8> = despaced
                .iter()
                .copied()
                .skip(column)
                .step_by(key_length)
                .collect();
            find_caesar_key(&compute_frequencies(&group))
        })
        .collect();

    Ok(key)
}

//! Single-byte XOR brute force.
//!
//! XOR does not slide the byte distribution the way an additive shift does
//! (it permutes bins bitwise), so the reference-model correlation that
//! cracks Caesar does not apply. With only 256 possible keys, exhaustive
//! enumeration is the offered strategy; ranking the candidates is left to
//! the caller.

use rayon::prelude::*;

use crate::cipher;

/// Size of the single-byte key space.
pub const KEY_SPACE: usize = 256;

/// Decode a ciphertext under every possible single-byte XOR key.
///
/// Returns exactly [`KEY_SPACE`] candidates in key order (candidate `k` is
/// the text XORed with key `k`), computed in parallel and collected in
/// order. No statistical ranking is performed.
pub fn xor_brute_force(ciphertext: &[u8]) -> Vec<Vec<u8>> {
    (0..KEY_SPACE)
        .into_par_iter()
        .map(|key| cipher::xor(ciphertext, key as u8, false))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_key_index_recovers_plaintext() {
        let cipher = cipher::xor(b"hello", 0x05, false);
        let candidates = xor_brute_force(&cipher);
        assert_eq!(candidates.len(), KEY_SPACE);
        assert_eq!(candidates[0x05], b"hello".to_vec());
    }

    #[test]
    fn test_candidates_are_distinct() {
        let candidates = xor_brute_force(b"some ciphertext");
        for (k, candidate) in candidates.iter().enumerate() {
            for other in &candidates[k + 1..] {
                assert_ne!(candidate, other);
            }
        }
    }

    #[test]
    fn test_key_zero_is_identity() {
        let cipher = b"untouched".to_vec();
        assert_eq!(xor_brute_force(&cipher)[0], cipher);
    }
}

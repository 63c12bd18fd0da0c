//! Top-level cipher-breaking dispatcher.

use log::debug;

use crate::analysis::{
    compute_frequencies, find_caesar_key, recover_vigenere_key, xor_brute_force,
};
use crate::cipher::{self, Method};
use crate::error::{Error, Result};
use crate::util::codec::bytes_to_string;

/// Break a ciphertext with the selected statistical strategy.
///
/// Caesar and Vigenère return the single recovered plaintext; XOR returns
/// all 256 candidate decodings joined with newlines, in key order, for
/// external inspection.
///
/// # Errors
///
/// - [`Error::InsufficientData`] for empty ciphertext (a degenerate key must
///   never be dressed up as a result).
/// - [`Error::UndeterminedPeriod`] when no repeating-key period can be
///   estimated.
/// - [`Error::UnsupportedMethod`] for methods with no statistical attack
///   (one-time pad, CBC).
pub fn break_cipher(ciphertext: &[u8], method: Method) -> Result<String> {
    if ciphertext.is_empty() {
        return Err(Error::InsufficientData { len: 0, min: 1 });
    }

    match method {
        Method::Caesar => {
            let key = find_caesar_key(&compute_frequencies(ciphertext));
            debug!("recovered caesar shift {key:#04x}");
            Ok(bytes_to_string(&cipher::caesar(ciphertext, key, false)))
        }
        Method::Vigenere => {
            let key = recover_vigenere_key(ciphertext)?;
            debug!("recovered vigenere key of {} byte(s)", key.len());
            Ok(bytes_to_string(&cipher::vigenere(ciphertext, &key, false)?))
        }
        Method::Xor => {
            let candidates = xor_brute_force(ciphertext);
            let rendered: Vec<String> = candidates.iter().map(|c| bytes_to_string(c)).collect();
            Ok(rendered.join("\n"))
        }
        Method::OneTimePad | Method::Cbc => Err(Error::UnsupportedMethod(method.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::{caesar, vigenere, xor};
    use crate::testdata::ENGLISH_SAMPLE;
    use crate::util::codec::string_to_bytes;

    #[test]
    fn test_breaks_caesar_scenario() {
        let plain = "the quick brown fox";
        let cipher = caesar(&string_to_bytes(plain).unwrap(), 3, false);
        assert_eq!(break_cipher(&cipher, Method::Caesar).unwrap(), plain);
    }

    #[test]
    fn test_breaks_vigenere_scenario() {
        let cipher = vigenere(ENGLISH_SAMPLE.as_bytes(), b"key", false).unwrap();
        assert_eq!(
            break_cipher(&cipher, Method::Vigenere).unwrap(),
            ENGLISH_SAMPLE
        );
    }

    #[test]
    fn test_xor_candidate_list() {
        let cipher = xor(b"hello", 0x05, false);
        let rendered = break_cipher(&cipher, Method::Xor).unwrap();

        // Candidates can themselves contain newline bytes, so the rendered
        // text has at least one line per key; lines stay index-stable up to
        // the first such candidate, which for this ciphertext is past the
        // true key.
        let lines: Vec<&str> = rendered.split('\n').collect();
        assert!(lines.len() >= 256);
        assert_eq!(lines[0x05], "hello");
    }

    #[test]
    fn test_empty_ciphertext_is_rejected() {
        assert!(matches!(
            break_cipher(b"", Method::Caesar),
            Err(Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_unbreakable_methods_are_typed_errors() {
        for method in [Method::OneTimePad, Method::Cbc] {
            assert!(matches!(
                break_cipher(b"anything", method),
                Err(Error::UnsupportedMethod(_))
            ));
        }
    }
}

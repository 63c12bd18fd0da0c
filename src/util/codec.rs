//! Lossless conversion between display strings and 8-bit byte sequences.
//!
//! Characters map 1:1 onto byte values 0..=255 (the Latin-1 range), so any
//! byte sequence — including ciphertext full of control and high-bit values
//! — survives a round trip through a `String` unchanged.

use crate::error::{Error, Result};

/// Convert a display string to its byte sequence.
///
/// # Errors
///
/// [`Error::UnencodableChar`] for any character above U+00FF; silently
/// truncating would corrupt ciphertext.
pub fn string_to_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code > 0xFF {
                Err(Error::UnencodableChar(c))
            } else {
                Ok(code as u8)
            }
        })
        .collect()
}

/// Convert a byte sequence to its display string. Total: every byte value
/// has a character.
pub fn bytes_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_all_byte_values() {
        let bytes: Vec<u8> = (0..=255).collect();
        let text = bytes_to_string(&bytes);
        assert_eq!(string_to_bytes(&text).unwrap(), bytes);
    }

    #[test]
    fn test_roundtrip_ascii() {
        let text = "the quick brown fox";
        assert_eq!(
            bytes_to_string(&string_to_bytes(text).unwrap()),
            text
        );
    }

    #[test]
    fn test_rejects_wide_characters() {
        assert!(matches!(
            string_to_bytes("snowman \u{2603}"),
            Err(Error::UnencodableChar('\u{2603}'))
        ));
    }
}

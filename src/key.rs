//! Media key decoding.
//!
//! Keys travel as text, either hex (64 digits) or standard base64 (44 chars).
//! Hex is tried first, then base64; the decoded value must be exactly 32 bytes.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::aliases::MediaKey32;
use crate::consts::KEY_SIZE;
use crate::error::MediaDecryptError;

/// Wrap raw key bytes, rejecting anything that is not exactly 32 bytes.
pub fn media_key_from_slice(bytes: &[u8]) -> Result<MediaKey32, MediaDecryptError> {
    let raw: [u8; KEY_SIZE] = bytes
        .try_into()
        .map_err(|_| MediaDecryptError::InvalidKeyLength { found: bytes.len() })?;
    Ok(MediaKey32::new(raw))
}

/// Decode a hex or base64 encoded media key.
///
/// When neither encoding yields 32 bytes, the error reports the length of the
/// longest successful decode (0 if the text is neither hex nor base64).
pub fn decode_media_key(encoded: &str) -> Result<MediaKey32, MediaDecryptError> {
    let encoded = encoded.trim();
    let mut found = 0;

    for decoded in [hex::decode(encoded).ok(), STANDARD.decode(encoded).ok()]
        .into_iter()
        .flatten()
    {
        let mut decoded = decoded;
        let result = media_key_from_slice(&decoded);
        found = found.max(decoded.len());
        decoded.fill(0);
        if let Ok(key) = result {
            return Ok(key);
        }
    }

    Err(MediaDecryptError::InvalidKeyLength { found })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secure_gate::RevealSecret;

    const KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
    const KEY_B64: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";

    fn expected() -> [u8; 32] {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn decodes_hex() {
        let key = decode_media_key(KEY_HEX).unwrap();
        assert_eq!(key.expose_secret(), &expected());
    }

    #[test]
    fn decodes_base64() {
        let key = decode_media_key(KEY_B64).unwrap();
        assert_eq!(key.expose_secret(), &expected());
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let key = decode_media_key(&format!("  {KEY_HEX}\n")).unwrap();
        assert_eq!(key.expose_secret(), &expected());
    }

    #[test]
    fn rejects_short_key() {
        // valid as hex (4 bytes) and as base64 (6 bytes)
        let err = decode_media_key("00112233").unwrap_err();
        assert!(matches!(err, MediaDecryptError::InvalidKeyLength { found: 6 }));
    }

    #[test]
    fn rejects_garbage() {
        let err = decode_media_key("not a key!").unwrap_err();
        assert!(matches!(err, MediaDecryptError::InvalidKeyLength { found: 0 }));
    }

    #[test]
    fn raw_slice_length_checked() {
        assert!(media_key_from_slice(&[0u8; 32]).is_ok());
        assert!(matches!(
            media_key_from_slice(&[0u8; 31]),
            Err(MediaDecryptError::InvalidKeyLength { found: 31 })
        ));
    }
}

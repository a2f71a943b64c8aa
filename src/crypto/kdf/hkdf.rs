//! src/crypto/kdf/hkdf.rs
//! Media key expansion: HKDF-SHA256, empty salt, per-media-type info string

use hkdf::Hkdf;
use sha2::Sha256;
use tracing::debug;

use secure_gate::{RevealSecret, RevealSecretMut};

use crate::aliases::{Aes256Key32, Iv16, MacKey32, MediaKey32, Okm112};
use crate::consts::{BLOCK_SIZE, DERIVED_KEY_MATERIAL_LEN, HKDF_OUTPUT_LEN, KEY_SIZE};
use crate::error::MediaDecryptError;
use crate::media::MediaType;

const IV_RANGE: std::ops::Range<usize> = 0..BLOCK_SIZE;
const CIPHER_KEY_RANGE: std::ops::Range<usize> = BLOCK_SIZE..BLOCK_SIZE + KEY_SIZE;
const MAC_KEY_RANGE: std::ops::Range<usize> = BLOCK_SIZE + KEY_SIZE..DERIVED_KEY_MATERIAL_LEN;

/// IV, cipher key and MAC key for one decryption.
///
/// Owned by a single decryption and wiped on drop (with the `zeroize` feature).
pub struct DerivedKeys {
    pub iv: Iv16,
    pub cipher_key: Aes256Key32,
    pub mac_key: MacKey32,
}

/// Expand a media key into [`DerivedKeys`].
///
/// - HKDF-SHA256 with an empty salt and the media type's info string
/// - 112 bytes of output; bytes `0..16` are the IV, `16..48` the cipher key,
///   `48..80` the MAC key, and the trailing 32 bytes are discarded
///
/// Fails with [`MediaDecryptError::InvalidContext`] for [`MediaType::Unknown`].
pub fn derive_media_keys(
    media_key: &MediaKey32,
    media_type: MediaType,
) -> Result<DerivedKeys, MediaDecryptError> {
    let info = media_type.hkdf_info()?;

    let hkdf = Hkdf::<Sha256>::new(None, media_key.expose_secret());
    let mut okm = Okm112::new([0u8; HKDF_OUTPUT_LEN]);
    hkdf.expand(info, okm.expose_secret_mut())
        .expect("112 bytes is a valid HKDF-SHA256 output length");

    let material = okm.expose_secret();
    let mut keys = DerivedKeys {
        iv: Iv16::new([0u8; BLOCK_SIZE]),
        cipher_key: Aes256Key32::new([0u8; KEY_SIZE]),
        mac_key: MacKey32::new([0u8; KEY_SIZE]),
    };
    keys.iv.expose_secret_mut().copy_from_slice(&material[IV_RANGE]);
    keys.cipher_key
        .expose_secret_mut()
        .copy_from_slice(&material[CIPHER_KEY_RANGE]);
    keys.mac_key
        .expose_secret_mut()
        .copy_from_slice(&material[MAC_KEY_RANGE]);

    debug!(%media_type, "derived media keys");
    Ok(keys)
}

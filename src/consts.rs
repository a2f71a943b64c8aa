//! # Constants
//!
//! Sizes and context strings of the media encryption format.
//!
//! On-disk layout: `ciphertext (N bytes, N % 16 == 0, N >= 16) || tag (10 bytes)`.

/// AES block size; also the unit of the lookahead buffer.
pub const BLOCK_SIZE: usize = 16;

/// Length of the media key and of each derived 256-bit key.
pub const KEY_SIZE: usize = 32;

/// Length of the truncated HMAC-SHA256 tag that terminates every file.
pub const TAG_LEN: usize = 10;

/// Length of the untruncated HMAC-SHA256 output.
pub const FULL_TAG_LEN: usize = 32;

/// Bytes of HKDF output produced by the scheme.
///
/// The last 32 bytes are reserved for a companion key elsewhere in the ecosystem
/// and are never consumed by decryption.
pub const HKDF_OUTPUT_LEN: usize = 112;

/// Bytes of HKDF output actually used: IV (16) + cipher key (32) + MAC key (32).
pub const DERIVED_KEY_MATERIAL_LEN: usize = BLOCK_SIZE + KEY_SIZE + KEY_SIZE;

/// Smallest well-formed input: one ciphertext block plus the tag.
pub const MIN_INPUT_LEN: u64 = (BLOCK_SIZE + TAG_LEN) as u64;

/// HKDF `info` strings, one per media type.
pub const IMAGE_KEYS_INFO: &[u8] = b"WhatsApp Image Keys";
pub const VIDEO_KEYS_INFO: &[u8] = b"WhatsApp Video Keys";
pub const AUDIO_KEYS_INFO: &[u8] = b"WhatsApp Audio Keys";
pub const DOCUMENT_KEYS_INFO: &[u8] = b"WhatsApp Document Keys";

/// Suffix appended to the output path while [`crate::decrypt_file`] is writing.
pub const PARTIAL_FILE_SUFFIX: &str = "part";

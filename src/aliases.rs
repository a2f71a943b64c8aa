//! # Secure-Gate Type Aliases
//!
//! Every buffer that holds key material, derived keys or decrypted data is a
//! [`secure_gate::Fixed`] array. With the `zeroize` feature (on by default) the
//! contents are wiped when the value is dropped.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha256`] - HMAC-SHA256 over `IV || ciphertext`
//!
//! ### Generic Secure Buffers
//! - [`SpanBuffer<N>`] - Generic secure stack buffer for any size `N`
//!
//! ### Semantic Fixed-Size Types
//! - [`MediaKey32`] - 32-byte caller-supplied media key
//! - [`Okm112`] - full HKDF output (only the first 80 bytes are consumed)
//! - [`Iv16`] - 16-byte CBC initialization vector
//! - [`Aes256Key32`] - 32-byte AES-256 cipher key
//! - [`MacKey32`] - 32-byte HMAC-SHA256 key
//! - [`Block16`] - one AES block (ciphertext or plaintext)
//! - [`TruncatedTag10`] - the 10-byte tag appended to every media file
//!
//! All secure types require explicit `.expose_secret()` or `.expose_secret_mut()` to access
//! the underlying data.

use hmac::Hmac;
use sha2::Sha256;

use crate::consts::{BLOCK_SIZE, HKDF_OUTPUT_LEN, KEY_SIZE, TAG_LEN};

pub type HmacSha256 = Hmac<Sha256>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size secrets, alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
pub type Aes256Key32 = SpanBuffer<KEY_SIZE>; // AES-256-CBC key
pub type Block16 = SpanBuffer<BLOCK_SIZE>; // one AES block
pub type Iv16 = SpanBuffer<BLOCK_SIZE>; // CBC IV, first authenticated segment
pub type MacKey32 = SpanBuffer<KEY_SIZE>; // HMAC-SHA256 key
pub type MediaKey32 = SpanBuffer<KEY_SIZE>; // caller-supplied shared secret
pub type Okm112 = SpanBuffer<HKDF_OUTPUT_LEN>; // raw HKDF output
pub type TruncatedTag10 = SpanBuffer<TAG_LEN>; // trailing authentication tag

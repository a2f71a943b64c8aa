// src/lib.rs

//! Streaming, authenticated decryption of WhatsApp-style encrypted media.
//!
//! A 32-byte media key is expanded with HKDF-SHA256 into an IV, an AES-256 key
//! and an HMAC key. The input is AES-256-CBC ciphertext (PKCS#7 padded) followed
//! by the first 10 bytes of HMAC-SHA256 over `IV || ciphertext`.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod error;
pub mod key;
pub mod media;
pub mod utils;

// High-level API
pub use builders::decrypt_builder::DecryptBuilder;
pub use decryptor::{
    decrypt, decrypt_file, DecryptSummary, DecryptionPipeline, PaddingPolicy, PaddingStatus,
    PipelineState,
};
pub use error::{ErrorKind, MediaDecryptError};
pub use key::{decode_media_key, media_key_from_slice};
pub use media::MediaType;

// Building blocks for custom flows
pub use crypto::hmac::BlockAuthenticator;
pub use crypto::kdf::hkdf::{derive_media_keys, DerivedKeys};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, DecryptJob};

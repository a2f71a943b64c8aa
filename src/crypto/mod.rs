// src/crypto/mod.rs

//! Low-level crypto building blocks: key expansion and block authentication.
//!
//! AES, SHA-256, HMAC and HKDF themselves come from the RustCrypto crates.

pub mod hmac;
pub mod kdf;

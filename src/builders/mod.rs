//! # Builders
//!
//! Fluent configuration of a decryption.
//!
//! ## Modules
//!
//! - [`decrypt_builder`] - key, media type, padding policy, input length and progress callback

pub mod decrypt_builder;

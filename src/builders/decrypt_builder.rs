//! src/builders/decrypt_builder.rs
//! Decryption builder: key, media type and per-call options in one place

use std::io::{Read, Write};
use std::path::Path;

use crate::aliases::MediaKey32;
use crate::decryptor::decrypt::decrypt_file_with;
use crate::decryptor::pipeline::{DecryptSummary, DecryptionPipeline};
use crate::decryptor::stream::trailer::PaddingPolicy;
use crate::error::MediaDecryptError;
use crate::key::{decode_media_key, media_key_from_slice};
use crate::media::MediaType;

/// Media decryption builder
///
/// Defaults: [`PaddingPolicy::Strict`], unknown input length, no progress callback.
///
/// # Thread Safety
///
/// Each builder owns its key and options; nothing is shared between decryptions,
/// so separate builders can run concurrently on separate threads.
pub struct DecryptBuilder<'p> {
    media_key: MediaKey32,
    media_type: MediaType,
    padding_policy: PaddingPolicy,
    input_len: Option<u64>,
    progress: Option<&'p mut dyn FnMut(u8)>,
}

impl<'p> DecryptBuilder<'p> {
    #[must_use]
    pub fn new(media_key: MediaKey32, media_type: MediaType) -> Self {
        Self {
            media_key,
            media_type,
            padding_policy: PaddingPolicy::default(),
            input_len: None,
            progress: None,
        }
    }

    /// Build from raw key bytes (must be exactly 32).
    pub fn from_key_bytes(key: &[u8], media_type: MediaType) -> Result<Self, MediaDecryptError> {
        Ok(Self::new(media_key_from_slice(key)?, media_type))
    }

    /// Build from a hex or base64 encoded key.
    pub fn from_encoded_key(encoded: &str, media_type: MediaType) -> Result<Self, MediaDecryptError> {
        Ok(Self::new(decode_media_key(encoded)?, media_type))
    }

    #[must_use]
    pub fn with_padding_policy(mut self, policy: PaddingPolicy) -> Self {
        self.padding_policy = policy;
        self
    }

    /// Total input length in bytes; needed for percentage progress.
    #[must_use]
    pub fn with_input_len(mut self, input_len: u64) -> Self {
        self.input_len = Some(input_len);
        self
    }

    /// Called with `0..=100`, monotonically, at least once with 100 on success.
    /// Must not block: it runs inside the decryption loop.
    #[must_use]
    pub fn with_progress(mut self, callback: &'p mut dyn FnMut(u8)) -> Self {
        self.progress = Some(callback);
        self
    }

    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        self.media_type
    }

    #[must_use]
    pub const fn padding_policy(&self) -> PaddingPolicy {
        self.padding_policy
    }

    /// Decrypt `input` into `output` in one pass.
    ///
    /// Plaintext already written when an error occurs is not rolled back.
    pub fn decrypt<R, W>(self, input: R, output: W) -> Result<DecryptSummary, MediaDecryptError>
    where
        R: Read,
        W: Write,
    {
        DecryptionPipeline::new(&self.media_key, self.media_type, input, output)
            .with_padding_policy(self.padding_policy)
            .with_input_len(self.input_len)
            .with_progress(self.progress)
            .run()
    }

    /// Decrypt a file, committing the output only on success.
    ///
    /// Writes to `<output>.part` and renames it over `output` once the tag has
    /// been verified; on failure the partial file is removed. Without an explicit
    /// [`with_input_len`](Self::with_input_len), regular files report their size
    /// for progress and other inputs (pipes, devices) run without one.
    pub fn decrypt_file(
        self,
        input_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<DecryptSummary, MediaDecryptError> {
        decrypt_file_with(
            input_path.as_ref(),
            output_path.as_ref(),
            &self.media_key,
            self.media_type,
            self.padding_policy,
            self.input_len,
            self.progress,
        )
    }
}

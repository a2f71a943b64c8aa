//! src/decryptor/pipeline.rs
//! One-pass authenticated decryption: derive keys, stream blocks, finalize
//!
//! `Start → DerivingKeys → Streaming → Finalizing → {Done, Failed(kind)}`

use std::io::{Read, Write};

use tracing::{debug, trace, warn};

use secure_gate::{RevealSecret, RevealSecretMut};

use crate::aliases::{MediaKey32, TruncatedTag10};
use crate::consts::{BLOCK_SIZE, TAG_LEN};
use crate::crypto::hmac::BlockAuthenticator;
use crate::crypto::kdf::hkdf::derive_media_keys;
use crate::decryptor::progress::ProgressReporter;
use crate::decryptor::stream::lookahead::{BlockReadOutcome, LookaheadCipherStream, ShortRead};
use crate::decryptor::stream::trailer::{write_final_block, PaddingPolicy, PaddingStatus};
use crate::error::{ErrorKind, MediaDecryptError};
use crate::media::MediaType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Start,
    DerivingKeys,
    Streaming,
    Finalizing,
    Done,
    Failed(ErrorKind),
}

impl PipelineState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed(_))
    }
}

/// Result of a successful decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptSummary {
    /// Plaintext bytes written to the output.
    pub bytes_written: u64,
    /// Ciphertext blocks read (excluding the tag).
    pub blocks: u64,
    pub padding: PaddingStatus,
}

pub struct DecryptionPipeline<'k, 'p, R, W> {
    media_key: &'k MediaKey32,
    media_type: MediaType,
    input: R,
    output: W,
    input_len: Option<u64>,
    padding_policy: PaddingPolicy,
    progress: ProgressReporter<'p>,
    state: PipelineState,
}

impl<'k, 'p, R, W> DecryptionPipeline<'k, 'p, R, W>
where
    R: Read,
    W: Write,
{
    pub fn new(media_key: &'k MediaKey32, media_type: MediaType, input: R, output: W) -> Self {
        Self {
            media_key,
            media_type,
            input,
            output,
            input_len: None,
            padding_policy: PaddingPolicy::default(),
            progress: ProgressReporter::disabled(),
            state: PipelineState::Start,
        }
    }

    #[must_use]
    pub fn with_padding_policy(mut self, policy: PaddingPolicy) -> Self {
        self.padding_policy = policy;
        self
    }

    /// Total input length, if known. Enables percentage progress.
    #[must_use]
    pub fn with_input_len(mut self, input_len: Option<u64>) -> Self {
        self.input_len = input_len;
        self.progress.set_total_len(input_len);
        self
    }

    #[must_use]
    pub fn with_progress(mut self, callback: Option<&'p mut dyn FnMut(u8)>) -> Self {
        self.progress = ProgressReporter::new(callback, self.input_len);
        self
    }

    /// Drive the pipeline to a terminal state.
    pub fn run(mut self) -> Result<DecryptSummary, MediaDecryptError> {
        match self.drive() {
            Ok(summary) => {
                self.transition(PipelineState::Done);
                Ok(summary)
            }
            Err(err) => {
                self.transition(PipelineState::Failed(err.kind()));
                if err.is_integrity_failure() {
                    warn!(error = %err, "decryption output must not be trusted");
                }
                Err(err)
            }
        }
    }

    fn transition(&mut self, next: PipelineState) {
        debug!(from = ?self.state, to = ?next, "pipeline transition");
        self.state = next;
    }

    fn drive(&mut self) -> Result<DecryptSummary, MediaDecryptError> {
        // Start
        if !self.media_type.is_known() {
            return Err(MediaDecryptError::InvalidContext);
        }
        if let Some(len) = self.input_len.filter(|&len| len < BLOCK_SIZE as u64) {
            return Err(MediaDecryptError::TruncatedInput { read: len as usize });
        }

        self.transition(PipelineState::DerivingKeys);
        let keys = derive_media_keys(self.media_key, self.media_type)?;

        self.transition(PipelineState::Streaming);
        let mut authenticator = BlockAuthenticator::new(&keys.mac_key, &keys.iv);
        let mut stream = LookaheadCipherStream::new(&mut self.input, &keys.cipher_key, &keys.iv);
        let mut bytes_written = 0u64;
        let mut blocks = 0u64;

        // Short records the terminal read; Empty confirms nothing follows it
        let mut tail = ShortRead::default();
        loop {
            match stream.next()? {
                BlockReadOutcome::Full(block) => {
                    // MAC covers ciphertext, so update before decrypting in place
                    authenticator.update(block.expose_secret());
                    blocks += 1;
                    if let Some(plaintext) = stream.accept(block) {
                        self.output.write_all(plaintext.expose_secret())?;
                        bytes_written += BLOCK_SIZE as u64;
                    }
                    trace!(blocks, "block decrypted");
                    self.progress.update(stream.bytes_consumed());
                }
                BlockReadOutcome::Short(terminal) => tail = terminal,
                BlockReadOutcome::Empty => break,
            }
        }

        let Some(last_block) = stream.take_pending() else {
            return Err(MediaDecryptError::TruncatedInput { read: tail.len() });
        };
        self.progress.finish();

        self.transition(PipelineState::Finalizing);
        if tail.len() != TAG_LEN {
            return Err(MediaDecryptError::MalformedTag { found: tail.len() });
        }

        // Authenticate before touching padding: a corrupted last block must
        // surface as a tag mismatch, not as a padding error.
        let mut tag = TruncatedTag10::new([0u8; TAG_LEN]);
        tag.expose_secret_mut().copy_from_slice(tail.as_slice());
        if !authenticator.verify(&tag) {
            return Err(MediaDecryptError::TagMismatch);
        }

        let (kept, padding) = write_final_block(&last_block, &mut self.output, self.padding_policy)?;
        bytes_written += kept as u64;
        self.output.flush()?;

        debug!(bytes_written, blocks, ?padding, "decryption complete");
        Ok(DecryptSummary {
            bytes_written,
            blocks,
            padding,
        })
    }
}

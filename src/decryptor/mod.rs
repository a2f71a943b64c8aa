// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(input, output, &media_key, media_type)?` for one stream.
//! Building blocks: `DecryptionPipeline`, `LookaheadCipherStream`, `strip_padding`.

pub(crate) mod decrypt;
pub mod pipeline;
pub mod progress;
pub(crate) mod read;
pub mod stream;

pub use decrypt::{decrypt, decrypt_file};
pub use pipeline::{DecryptSummary, DecryptionPipeline, PipelineState};
pub use progress::ProgressReporter;
pub use read::read_up_to;
pub use stream::{
    strip_padding, write_final_block, BlockReadOutcome, LookaheadCipherStream, PaddingPolicy,
    PaddingStatus, ShortRead,
};

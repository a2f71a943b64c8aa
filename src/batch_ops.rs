//! Parallel decryption of independent media streams.
//!
//! Every job owns its key, media type, reader and writer; jobs share no state,
//! so they run on the rayon pool without locking.

#[cfg(feature = "batch-ops")]
use rayon::prelude::*;
#[cfg(feature = "batch-ops")]
use std::io::{Read, Write};

#[cfg(feature = "batch-ops")]
use crate::aliases::MediaKey32;
#[cfg(feature = "batch-ops")]
use crate::{decrypt, DecryptSummary, MediaDecryptError, MediaType};

#[cfg(feature = "batch-ops")]
pub struct DecryptJob<R, W> {
    pub input: R,
    pub output: W,
    pub media_key: MediaKey32,
    pub media_type: MediaType,
}

/// Decrypt every job in parallel; one result per job, in job order.
///
/// A failing job does not stop the others.
#[cfg(feature = "batch-ops")]
pub fn decrypt_batch<R, W>(
    batch: &mut [DecryptJob<R, W>],
) -> Vec<Result<DecryptSummary, MediaDecryptError>>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .map(|job| {
            decrypt(
                &mut job.input,
                &mut job.output,
                &job.media_key,
                job.media_type,
            )
        })
        .collect()
}

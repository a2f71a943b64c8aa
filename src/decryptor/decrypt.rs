//! src/decryptor/decrypt.rs
//! Media decryption entry points

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::aliases::MediaKey32;
use crate::consts::PARTIAL_FILE_SUFFIX;
use crate::decryptor::pipeline::{DecryptSummary, DecryptionPipeline};
use crate::decryptor::stream::trailer::PaddingPolicy;
use crate::error::MediaDecryptError;
use crate::media::MediaType;

/// Decrypt one media stream with strict padding checks and no progress reporting.
#[inline(always)]
pub fn decrypt<R, W>(
    input: R,
    output: W,
    media_key: &MediaKey32,
    media_type: MediaType,
) -> Result<DecryptSummary, MediaDecryptError>
where
    R: Read,
    W: Write,
{
    DecryptionPipeline::new(media_key, media_type, input, output).run()
}

/// Decrypt `input_path` into `output_path`, replacing it only on success.
///
/// For regular files the input length is read from metadata, so `progress`
/// (if any) gets whole-percent updates. Pipes and other special files are
/// decrypted without a length and only report 100.
pub fn decrypt_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    media_key: &MediaKey32,
    media_type: MediaType,
    progress: Option<&mut dyn FnMut(u8)>,
) -> Result<DecryptSummary, MediaDecryptError> {
    decrypt_file_with(
        input_path.as_ref(),
        output_path.as_ref(),
        media_key,
        media_type,
        PaddingPolicy::default(),
        None,
        progress,
    )
}

/// Shared by [`decrypt_file`] and [`crate::DecryptBuilder::decrypt_file`].
///
/// Writes to `<output>.part` and renames it over `output` once the tag has been
/// verified; on failure the partial file is removed.
pub(crate) fn decrypt_file_with(
    input_path: &Path,
    output_path: &Path,
    media_key: &MediaKey32,
    media_type: MediaType,
    padding_policy: PaddingPolicy,
    input_len: Option<u64>,
    progress: Option<&mut dyn FnMut(u8)>,
) -> Result<DecryptSummary, MediaDecryptError> {
    let input = File::open(input_path)?;
    let input_len = match input_len {
        Some(len) => Some(len),
        None => {
            let metadata = input.metadata()?;
            // FIFOs, sockets and procfs entries report 0
            metadata.is_file().then(|| metadata.len())
        }
    };

    let partial_path = partial_path(output_path);
    debug!(
        input = %input_path.display(),
        partial = %partial_path.display(),
        ?input_len,
        "decrypting file"
    );

    let result = File::create(&partial_path)
        .map_err(MediaDecryptError::from)
        .and_then(|out| {
            DecryptionPipeline::new(media_key, media_type, BufReader::new(input), BufWriter::new(out))
                .with_padding_policy(padding_policy)
                .with_input_len(input_len)
                .with_progress(progress)
                .run()
        });

    match result {
        Ok(summary) => {
            fs::rename(&partial_path, output_path)?;
            info!(
                output = %output_path.display(),
                bytes = summary.bytes_written,
                "decrypted"
            );
            Ok(summary)
        }
        Err(err) => {
            if let Err(cleanup) = fs::remove_file(&partial_path) {
                warn!(path = %partial_path.display(), error = %cleanup, "could not remove partial output");
            }
            Err(err)
        }
    }
}

fn partial_path(output_path: &Path) -> PathBuf {
    let mut name = output_path.as_os_str().to_owned();
    name.push(".");
    name.push(PARTIAL_FILE_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_path_appends_suffix() {
        assert_eq!(
            partial_path(Path::new("/tmp/photo.jpg")),
            PathBuf::from("/tmp/photo.jpg.part")
        );
    }
}

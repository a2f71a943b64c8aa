//! src/decryptor/stream/trailer.rs
//! Final block handling: PKCS#7 padding removal

use std::io::Write;

use secure_gate::RevealSecret;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::aliases::Block16;
use crate::consts::BLOCK_SIZE;
use crate::error::MediaDecryptError;

/// What to do when the final block's padding length is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// Fail with [`MediaDecryptError::InvalidPadding`]. Also checks that every
    /// padding byte equals the padding length.
    #[default]
    Strict,
    /// Clamp the length to 16 (emit nothing from the final block), log a warning
    /// and report [`PaddingStatus::Clamped`].
    Permissive,
}

/// Outcome of padding removal on a successful decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingStatus {
    /// Well-formed padding of this length.
    Valid(u8),
    /// Out-of-range length byte, clamped under [`PaddingPolicy::Permissive`].
    Clamped(u8),
}

/// Number of plaintext bytes to keep from the final decrypted block.
///
/// Returns `16 - padding_length` with `1 <= padding_length <= 16`.
pub fn strip_padding(
    block: &Block16,
    policy: PaddingPolicy,
) -> Result<(usize, PaddingStatus), MediaDecryptError> {
    let block = block.expose_secret();
    let padding = block[BLOCK_SIZE - 1];

    if padding == 0 || padding as usize > BLOCK_SIZE {
        return match policy {
            PaddingPolicy::Strict => Err(MediaDecryptError::InvalidPadding { value: padding }),
            PaddingPolicy::Permissive => {
                warn!(padding, "invalid padding length, dropping final block");
                Ok((0, PaddingStatus::Clamped(padding)))
            }
        };
    }

    let keep = BLOCK_SIZE - padding as usize;
    if policy == PaddingPolicy::Strict {
        let expected = [padding; BLOCK_SIZE];
        if !bool::from(block[keep..].ct_eq(&expected[keep..])) {
            return Err(MediaDecryptError::InvalidPadding { value: padding });
        }
    }

    Ok((keep, PaddingStatus::Valid(padding)))
}

/// Strip padding from the final block and write what remains.
#[inline(always)]
pub fn write_final_block<W: Write>(
    block: &Block16,
    output: &mut W,
    policy: PaddingPolicy,
) -> Result<(usize, PaddingStatus), MediaDecryptError> {
    let (keep, status) = strip_padding(block, policy)?;
    output.write_all(&block.expose_secret()[..keep])?;
    Ok((keep, status))
}

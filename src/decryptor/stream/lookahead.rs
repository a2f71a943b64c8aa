//! src/decryptor/stream/lookahead.rs
//! Block reader with one-block deferred emission
//!
//! The input ends in a 10-byte tag that is not block aligned, so a block can only
//! be emitted once the following read proves it was not the last one.

use std::io::Read;

use secure_gate::{RevealSecret, RevealSecretMut};

use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::consts::BLOCK_SIZE;
use crate::decryptor::read::read_up_to;
use crate::decryptor::stream::context::DecryptionContext;
use crate::error::MediaDecryptError;

/// Bytes of the terminal short read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShortRead {
    bytes: [u8; BLOCK_SIZE],
    len: usize,
}

impl ShortRead {
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Result of one [`LookaheadCipherStream::next`] call.
pub enum BlockReadOutcome {
    /// Exactly 16 ciphertext bytes, not yet authenticated or decrypted.
    Full(Block16),
    /// End of input with fewer than 16 bytes; the terminal read.
    Short(ShortRead),
    /// Nothing left after a prior `Short`. The source is not read again.
    Empty,
}

pub struct LookaheadCipherStream<R> {
    reader: R,
    context: DecryptionContext,
    exhausted: bool,
    bytes_consumed: u64,
}

impl<R: Read> LookaheadCipherStream<R> {
    pub fn new(reader: R, cipher_key: &Aes256Key32, iv: &Iv16) -> Self {
        Self {
            reader,
            context: DecryptionContext::new(cipher_key, iv),
            exhausted: false,
            bytes_consumed: 0,
        }
    }

    /// Read the next block from the source.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<BlockReadOutcome, MediaDecryptError> {
        if self.exhausted {
            return Ok(BlockReadOutcome::Empty);
        }

        let mut block = Block16::new([0u8; BLOCK_SIZE]);
        let n = read_up_to(&mut self.reader, block.expose_secret_mut())?;
        self.bytes_consumed += n as u64;

        if n == BLOCK_SIZE {
            return Ok(BlockReadOutcome::Full(block));
        }

        self.exhausted = true;
        let mut bytes = [0u8; BLOCK_SIZE];
        bytes[..n].copy_from_slice(&block.expose_secret()[..n]);
        Ok(BlockReadOutcome::Short(ShortRead { bytes, len: n }))
    }

    /// Decrypt an already authenticated ciphertext block and make it the pending
    /// block. Returns the previous pending block, which is now safe to emit.
    #[must_use]
    pub fn accept(&mut self, mut block: Block16) -> Option<Block16> {
        self.context.decrypt_in_place(&mut block);
        self.context.replace_pending(block)
    }

    /// The last decrypted block, once the terminal read has been seen.
    pub fn take_pending(&mut self) -> Option<Block16> {
        self.context.take_pending()
    }

    /// Total bytes pulled from the source so far.
    #[must_use]
    pub const fn bytes_consumed(&self) -> u64 {
        self.bytes_consumed
    }
}

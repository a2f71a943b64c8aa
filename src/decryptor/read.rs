//! src/decryptor/read.rs
//! Short-read-tolerant block reads

use std::io::{ErrorKind, Read};

use crate::error::MediaDecryptError;

/// Fill `buf` from `reader`, retrying on short reads and `Interrupted`.
///
/// Returns the number of bytes read; less than `buf.len()` only at end of input.
#[inline(always)]
pub fn read_up_to<R>(reader: &mut R, buf: &mut [u8]) -> Result<usize, MediaDecryptError>
where
    R: Read,
{
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(MediaDecryptError::Io(e)),
        }
    }
    Ok(filled)
}

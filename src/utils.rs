// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used for CBC chaining.
///
/// # Panics (by contract)
///
/// Panics if any of `block_a`, `block_b` or `output` is shorter than 16 bytes.
/// All callers pass `expose_secret()` of 16-byte secure-gate buffers.
#[inline(always)]
pub fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

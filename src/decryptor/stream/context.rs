//! src/decryptor/stream/context.rs
//! AES-256-CBC chaining state and the one-block pending slot

use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};

use secure_gate::{RevealSecret, RevealSecretMut};

use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::utils::xor_blocks;

pub struct DecryptionContext {
    cipher: Aes256Dec,
    /// Previous ciphertext block; the IV before the first block.
    chain_block: Block16,
    /// Decrypted block not yet known to be followed by more ciphertext.
    pending: Option<Block16>,
}

impl DecryptionContext {
    #[inline(always)]
    pub fn new(cipher_key: &Aes256Key32, iv: &Iv16) -> Self {
        Self {
            cipher: Aes256Dec::new(cipher_key.expose_secret().into()),
            chain_block: Block16::new(*iv.expose_secret()),
            pending: None,
        }
    }

    /// CBC-decrypt `block` in place: `P = D(C) ^ C_prev`.
    #[inline(always)]
    pub fn decrypt_in_place(&mut self, block: &mut Block16) {
        let ciphertext = *block.expose_secret();

        let mut aes_block = AesBlock::from(ciphertext);
        self.cipher.decrypt_block(&mut aes_block);
        xor_blocks(
            aes_block.as_slice(),
            self.chain_block.expose_secret(),
            block.expose_secret_mut(),
        );

        self.chain_block.expose_secret_mut().copy_from_slice(&ciphertext);
    }

    /// Store `plaintext` as the pending block, handing back the one it replaces.
    #[inline(always)]
    pub fn replace_pending(&mut self, plaintext: Block16) -> Option<Block16> {
        self.pending.replace(plaintext)
    }

    #[inline(always)]
    pub fn take_pending(&mut self) -> Option<Block16> {
        self.pending.take()
    }
}

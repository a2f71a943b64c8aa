// src/crypto/hmac.rs

//! Incremental HMAC-SHA256 over `IV || ciphertext`, checked against a truncated tag.

use hmac::Mac;

use secure_gate::RevealSecret;

use crate::aliases::{HmacSha256, Iv16, MacKey32, TruncatedTag10};
use crate::consts::FULL_TAG_LEN;

/// Running authenticator for one decryption.
///
/// Primed with the IV, then fed every ciphertext block (before decryption) in
/// input order. The trailing tag bytes are never fed in.
pub struct BlockAuthenticator {
    mac: HmacSha256,
}

impl BlockAuthenticator {
    pub fn new(mac_key: &MacKey32, iv: &Iv16) -> Self {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(mac_key.expose_secret())
            .expect("mac_key is 32 bytes, a valid HMAC-SHA256 key");
        mac.update(iv.expose_secret());
        Self { mac }
    }

    #[inline(always)]
    pub fn update(&mut self, ciphertext_block: &[u8]) {
        self.mac.update(ciphertext_block);
    }

    /// Full 32-byte HMAC-SHA256 tag.
    #[must_use]
    pub fn finalize(self) -> [u8; FULL_TAG_LEN] {
        self.mac.finalize().into_bytes().into()
    }

    /// Compare the leftmost 10 bytes of the tag against `candidate` in constant time.
    #[must_use]
    pub fn verify(self, candidate: &TruncatedTag10) -> bool {
        self.mac
            .verify_truncated_left(candidate.expose_secret())
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TAG_LEN;

    fn authenticator() -> BlockAuthenticator {
        BlockAuthenticator::new(&MacKey32::new([0x07; 32]), &Iv16::new([0x01; 16]))
    }

    #[test]
    fn verify_accepts_truncated_prefix() {
        let mut auth = authenticator();
        auth.update(&[0xAA; 16]);
        let full = auth.finalize();

        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&full[..TAG_LEN]);

        let mut auth = authenticator();
        auth.update(&[0xAA; 16]);
        assert!(auth.verify(&TruncatedTag10::new(tag)));
    }

    #[test]
    fn verify_rejects_other_data() {
        let mut auth = authenticator();
        auth.update(&[0xAA; 16]);
        let full = auth.finalize();

        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&full[..TAG_LEN]);

        let mut auth = authenticator();
        auth.update(&[0xAB; 16]);
        assert!(!auth.verify(&TruncatedTag10::new(tag)));
    }

    #[test]
    fn iv_is_authenticated() {
        let mut a = authenticator();
        let mut b = BlockAuthenticator::new(&MacKey32::new([0x07; 32]), &Iv16::new([0x02; 16]));
        a.update(&[0u8; 16]);
        b.update(&[0u8; 16]);
        assert_ne!(a.finalize(), b.finalize());
    }

    #[test]
    fn update_is_incremental() {
        let mut split = authenticator();
        split.update(&[1u8; 16]);
        split.update(&[2u8; 16]);

        let mut joined = authenticator();
        let mut both = [1u8; 32];
        both[16..].fill(2);
        joined.update(&both);

        assert_eq!(split.finalize(), joined.finalize());
    }
}

//! tests/common.rs
//! Shared constants and a reference encryptor: TEST ONLY
//!
//! The library only decrypts; this builds files in the same format straight
//! from the RustCrypto primitives.

#![allow(dead_code)] // each test file uses a different subset

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};
use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use wamedia_rs::aliases::MediaKey32;
use wamedia_rs::MediaType;

/// "hello whatsapp", media key 00 01 .. 1f, Document.
pub const DOCUMENT_FIXTURE_HEX: &str = "d9769a4cb8220ad59c4995b083a6846e9171bdaf712bd7220ee8";
pub const DOCUMENT_FIXTURE_PLAINTEXT: &[u8] = b"hello whatsapp";

/// Empty plaintext, all-zero media key, Image: one full padding block + tag.
pub const EMPTY_IMAGE_FIXTURE_HEX: &str = "c1c2799dafa350f9fb507b5fce07ebcb0c7ae0b62fbf77c891a6";

pub const ALL_MEDIA_TYPES: [MediaType; 4] = [
    MediaType::Image,
    MediaType::Video,
    MediaType::Audio,
    MediaType::Document,
];

pub fn sequential_key() -> [u8; 32] {
    core::array::from_fn(|i| i as u8)
}

pub fn media_key(raw: [u8; 32]) -> MediaKey32 {
    MediaKey32::new(raw)
}

fn info(media_type: MediaType) -> &'static [u8] {
    match media_type {
        MediaType::Image => b"WhatsApp Image Keys",
        MediaType::Video => b"WhatsApp Video Keys",
        MediaType::Audio => b"WhatsApp Audio Keys",
        MediaType::Document => b"WhatsApp Document Keys",
        MediaType::Unknown => panic!("no info string for Unknown"),
    }
}

/// Encrypt already block-aligned data without adding padding.
///
/// Lets tests forge files whose final block carries arbitrary padding bytes
/// but a valid tag.
pub fn encrypt_unpadded(data: &[u8], key: &[u8; 32], media_type: MediaType) -> Vec<u8> {
    assert_eq!(data.len() % 16, 0, "data must be block aligned");

    let mut okm = [0u8; 112];
    Hkdf::<Sha256>::new(None, key)
        .expand(info(media_type), &mut okm)
        .unwrap();
    let (iv, rest) = okm.split_at(16);
    let (cipher_key, rest) = rest.split_at(32);
    let mac_key = &rest[..32];

    let cipher = Aes256Enc::new_from_slice(cipher_key).unwrap();
    let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(mac_key).unwrap();
    mac.update(iv);

    let mut prev = [0u8; 16];
    prev.copy_from_slice(iv);
    let mut out = Vec::with_capacity(data.len() + 10);

    for chunk in data.chunks_exact(16) {
        let mut block = [0u8; 16];
        for (i, b) in block.iter_mut().enumerate() {
            *b = chunk[i] ^ prev[i];
        }
        let mut aes_block = AesBlock::from(block);
        cipher.encrypt_block(&mut aes_block);
        prev.copy_from_slice(aes_block.as_slice());
        mac.update(&prev);
        out.extend_from_slice(&prev);
    }

    let tag = mac.finalize().into_bytes();
    out.extend_from_slice(&tag[..10]);
    out
}

/// PKCS#7-pad and encrypt `plaintext` into the on-disk media format.
pub fn encrypt_media(plaintext: &[u8], key: &[u8; 32], media_type: MediaType) -> Vec<u8> {
    let pad = 16 - plaintext.len() % 16;
    let mut padded = plaintext.to_vec();
    padded.resize(plaintext.len() + pad, pad as u8);
    encrypt_unpadded(&padded, key, media_type)
}

/// Deterministic, non-repeating test payload.
pub fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

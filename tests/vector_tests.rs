//! tests/vector_tests.rs
//! Fixed vectors: HKDF expansion and bit-exact media files

mod common;
use common::{
    encrypt_media, media_key, sequential_key, DOCUMENT_FIXTURE_HEX, DOCUMENT_FIXTURE_PLAINTEXT,
    EMPTY_IMAGE_FIXTURE_HEX,
};

use secure_gate::RevealSecret;
use std::io::Cursor;
use wamedia_rs::consts::MIN_INPUT_LEN;
use wamedia_rs::{decode_media_key, decrypt, derive_media_keys, MediaDecryptError, MediaType};

#[test]
fn hkdf_zero_key_image() {
    let keys = derive_media_keys(&media_key([0u8; 32]), MediaType::Image).unwrap();

    assert_eq!(
        keys.iv.expose_secret(),
        &hex::decode("a056b2e5cd64d4545d08f2503a042e75").unwrap()[..]
    );
    assert_eq!(
        keys.cipher_key.expose_secret(),
        &hex::decode("9fd66b8025ea8b52777ab7efc2e748eb97639b1c96ecb902a5e235d99179a6f9")
            .unwrap()[..]
    );
    assert_eq!(
        keys.mac_key.expose_secret(),
        &hex::decode("7d206170eaff865940556ddd27f8770a28a46cc1281865e5c586a74bf60bc08e")
            .unwrap()[..]
    );
}

#[test]
fn hkdf_unknown_media_type() {
    let result = derive_media_keys(&media_key([0u8; 32]), MediaType::Unknown);
    assert!(matches!(result, Err(MediaDecryptError::InvalidContext)));
}

#[test]
fn document_fixture_decrypts() {
    let input = hex::decode(DOCUMENT_FIXTURE_HEX).unwrap();
    let key = decode_media_key("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
        .unwrap();

    let mut out = Vec::new();
    let summary = decrypt(Cursor::new(input), &mut out, &key, MediaType::Document).unwrap();
    assert_eq!(out, DOCUMENT_FIXTURE_PLAINTEXT);
    assert_eq!(summary.bytes_written, DOCUMENT_FIXTURE_PLAINTEXT.len() as u64);
}

#[test]
fn reference_encryptor_matches_fixtures() {
    assert_eq!(
        hex::encode(encrypt_media(
            DOCUMENT_FIXTURE_PLAINTEXT,
            &sequential_key(),
            MediaType::Document
        )),
        DOCUMENT_FIXTURE_HEX
    );
    assert_eq!(
        hex::encode(encrypt_media(&[], &[0u8; 32], MediaType::Image)),
        EMPTY_IMAGE_FIXTURE_HEX
    );
}

#[test]
fn empty_image_fixture_yields_no_bytes() {
    let input = hex::decode(EMPTY_IMAGE_FIXTURE_HEX).unwrap();
    assert_eq!(input.len() as u64, MIN_INPUT_LEN);

    let mut out = Vec::new();
    let summary = decrypt(
        Cursor::new(input),
        &mut out,
        &media_key([0u8; 32]),
        MediaType::Image,
    )
    .unwrap();
    assert!(out.is_empty());
    assert_eq!(summary.bytes_written, 0);
    assert_eq!(summary.blocks, 1);
}

#[test]
fn fixture_under_other_media_types_fails_authentication() {
    let input = hex::decode(DOCUMENT_FIXTURE_HEX).unwrap();
    for media_type in [MediaType::Image, MediaType::Video, MediaType::Audio] {
        let err = decrypt(
            Cursor::new(&input),
            Vec::new(),
            &media_key(sequential_key()),
            media_type,
        )
        .unwrap_err();
        assert!(matches!(err, MediaDecryptError::TagMismatch), "{media_type}");
    }
}

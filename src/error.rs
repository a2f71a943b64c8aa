//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, MediaDecryptError>`](MediaDecryptError).

use thiserror::Error;

/// The error type for all media decryption operations.
///
/// Every failure of a decryption is classified into exactly one of these
/// variants. The first error encountered ends the decryption; bytes already
/// written to the output are not rolled back.
#[derive(Error, Debug)]
pub enum MediaDecryptError {
    /// The media key is not exactly 32 bytes (after hex/base64 decoding, if any).
    #[error("invalid media key length: {found} bytes (expected 32)")]
    InvalidKeyLength { found: usize },

    /// The media type is unknown or unset, so no HKDF context can be selected.
    #[error("unknown media type: expected image, video, audio or document")]
    InvalidContext,

    /// Fewer than 16 bytes were available where a full ciphertext block was required.
    #[error("input too short: {read} bytes read, expected at least 16")]
    TruncatedInput { read: usize },

    /// The trailing bytes after the last full block are not exactly 10 bytes.
    #[error("expected 10 trailing tag bytes at end of input, found {found}")]
    MalformedTag { found: usize },

    /// The PKCS#7 padding length byte of the final block is outside `1..=16`,
    /// or the padding bytes disagree with it.
    #[error("invalid padding length: {value} (must be between 1 and 16)")]
    InvalidPadding { value: u8 },

    /// The truncated HMAC-SHA256 tag did not match: the file is corrupted or tampered.
    #[error("authentication tag mismatch (file corrupted)")]
    TagMismatch,

    /// Read or write failure reported by the byte source or sink.
    ///
    /// This variant wraps [`std::io::Error`] and is created automatically with `?`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Copyable discriminant of [`MediaDecryptError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidKeyLength,
    InvalidContext,
    TruncatedInput,
    MalformedTag,
    InvalidPadding,
    TagMismatch,
    Io,
}

impl MediaDecryptError {
    /// The tagged kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidKeyLength { .. } => ErrorKind::InvalidKeyLength,
            Self::InvalidContext => ErrorKind::InvalidContext,
            Self::TruncatedInput { .. } => ErrorKind::TruncatedInput,
            Self::MalformedTag { .. } => ErrorKind::MalformedTag,
            Self::InvalidPadding { .. } => ErrorKind::InvalidPadding,
            Self::TagMismatch => ErrorKind::TagMismatch,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// `true` for corruption/tamper signals.
    ///
    /// These abandon the current decryption only; the output must not be trusted,
    /// but the process can keep serving other requests.
    #[must_use]
    pub fn is_integrity_failure(&self) -> bool {
        matches!(self, Self::InvalidPadding { .. } | Self::TagMismatch)
    }
}

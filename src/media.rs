//! Media types and the HKDF context each one selects.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::consts::{AUDIO_KEYS_INFO, DOCUMENT_KEYS_INFO, IMAGE_KEYS_INFO, VIDEO_KEYS_INFO};
use crate::error::MediaDecryptError;

const IMAGE_EXTENSIONS: &[&str] = &["gif", "jpg", "jpeg", "png", "tiff", "raw", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mpeg", "mpg", "mpeg4", "mpv", "qt", "quicktime", "vc1", "flv", "vob", "ogg", "ogv",
    "avi", "mov", "wmv", "m4p", "m4v", "3gp", "3g2",
];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "aiff", "aac", "flac", "wav", "webm"];
const DOCUMENT_EXTENSIONS: &[&str] = &["doc", "pdf", "txt", "zip", "rar"];

/// Which kind of media a file holds. Selects the HKDF `info` string.
///
/// `Unknown` is the unset value; it is rejected before any decryption starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaType {
    #[default]
    Unknown,
    Image,
    Video,
    Audio,
    Document,
}

impl MediaType {
    /// HKDF `info` parameter for this media type.
    pub fn hkdf_info(self) -> Result<&'static [u8], MediaDecryptError> {
        match self {
            Self::Image => Ok(IMAGE_KEYS_INFO),
            Self::Video => Ok(VIDEO_KEYS_INFO),
            Self::Audio => Ok(AUDIO_KEYS_INFO),
            Self::Document => Ok(DOCUMENT_KEYS_INFO),
            Self::Unknown => Err(MediaDecryptError::InvalidContext),
        }
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Guess the media type from a filename extension (case-insensitive).
    ///
    /// Returns `Unknown` when nothing matches; no default is inferred.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let Some(ext) = path.as_ref().extension().and_then(|e| e.to_str()) else {
            return Self::Unknown;
        };
        let ext = ext.to_ascii_lowercase();
        let tables = [
            (Self::Image, IMAGE_EXTENSIONS),
            (Self::Video, VIDEO_EXTENSIONS),
            (Self::Audio, AUDIO_EXTENSIONS),
            (Self::Document, DOCUMENT_EXTENSIONS),
        ];
        tables
            .iter()
            .find(|(_, exts)| exts.contains(&ext.as_str()))
            .map_or(Self::Unknown, |(media_type, _)| *media_type)
    }
}

impl FromStr for MediaType {
    type Err = MediaDecryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "doc" | "document" | "text" => Ok(Self::Document),
            _ => Err(MediaDecryptError::InvalidContext),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
        };
        f.write_str(name)
    }
}

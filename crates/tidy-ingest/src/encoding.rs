//! Text encoding detection.
//!
//! Input files arrive without any declared encoding. Detection tries each
//! candidate in [`CANDIDATE_ENCODINGS`] against the full byte content and keeps
//! the first one that decodes without error. No sampling is done: a partial
//! read could split a multi-byte sequence and produce a false negative.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::error::{IngestError, Result};

/// A text encoding the detector knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Iso8859_1,
    Cp1252,
}

/// Candidates in the order they are tried.
pub const CANDIDATE_ENCODINGS: [TextEncoding; 4] = [
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Iso8859_1,
    TextEncoding::Cp1252,
];

/// Bytes with no assigned character in Windows code page 1252.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

impl TextEncoding {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin-1",
            Self::Iso8859_1 => "iso-8859-1",
            Self::Cp1252 => "cp1252",
        }
    }

    /// Decodes the full buffer, returning `None` on the first invalid sequence.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| strip_bom(text).into_owned()),
            // ISO-8859-1 assigns every byte to the code point of the same value.
            Self::Latin1 | Self::Iso8859_1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Cp1252 => {
                if bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
                    return None;
                }
                WINDOWS_1252
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(Cow::into_owned)
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn strip_bom(text: Cow<'_, str>) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(s.strip_prefix('\u{feff}').unwrap_or(s)),
        Cow::Owned(s) => match s.strip_prefix('\u{feff}') {
            Some(rest) => Cow::Owned(rest.to_string()),
            None => Cow::Owned(s),
        },
    }
}

/// Returns the first candidate that decodes `bytes`, or UTF-8 if none do.
pub fn detect_encoding_bytes(bytes: &[u8]) -> TextEncoding {
    CANDIDATE_ENCODINGS
        .into_iter()
        .find(|encoding| encoding.decode(bytes).is_some())
        .unwrap_or(TextEncoding::Utf8)
}

/// Detects the encoding of the file at `path`.
///
/// Fails with [`IngestError::FileNotFound`] or [`IngestError::FileRead`] when
/// the file cannot be opened; never falls back silently in that case.
pub fn detect_encoding(path: &Path) -> Result<TextEncoding> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    let encoding = detect_encoding_bytes(&bytes);
    tracing::debug!(path = %path.display(), encoding = encoding.label(), "detected encoding");
    Ok(encoding)
}

/// Reads and decodes the file at `path`, returning the text and the encoding used.
pub fn read_to_string_detected(path: &Path) -> Result<(String, TextEncoding)> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    let encoding = detect_encoding_bytes(&bytes);
    let text = encoding.decode(&bytes).ok_or(IngestError::Decode {
        path: path.to_path_buf(),
        encoding: encoding.label(),
    })?;
    Ok((text, encoding))
}

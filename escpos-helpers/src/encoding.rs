//! Code pages and text transcoding
//!
//! Printers only understand 8-bit code pages. This module provides:
//! - The ESC t table number for each supported code page
//! - UTF-8 to code page conversion with a substitute for unmappable characters
//!
//! The conversion tables themselves come from `encoding_rs`.

use crate::error::{EscPosError, EscPosResult};
use encoding_rs::{EncoderResult, Encoding};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Character code table selectable with ESC t
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodePage {
    /// USA, Standard Europe
    Pc437,
    Katakana,
    /// Multilingual
    Pc850,
    /// Portuguese
    Pc860,
    /// Canadian-French
    Pc863,
    /// Nordic
    Pc865,
    /// Greek
    Pc737,
    Iso8859_7,
    Wpc1252,
    /// Cyrillic #2
    Pc866,
    /// Latin 2
    Pc852,
    /// Euro
    Pc858,
    /// Hebrew
    Pc862,
    Iso8859_2,
    Iso8859_15,
    Wpc1250,
    Wpc1251,
    Wpc1253,
    Wpc1254,
    Wpc1255,
    Wpc1256,
    Wpc1257,
    Wpc1258,
}

impl CodePage {
    /// Table number sent after ESC t
    pub fn code(self) -> u8 {
        match self {
            CodePage::Pc437 => 0,
            CodePage::Katakana => 1,
            CodePage::Pc850 => 2,
            CodePage::Pc860 => 3,
            CodePage::Pc863 => 4,
            CodePage::Pc865 => 5,
            CodePage::Pc737 => 14,
            CodePage::Iso8859_7 => 15,
            CodePage::Wpc1252 => 16,
            CodePage::Pc866 => 17,
            CodePage::Pc852 => 18,
            CodePage::Pc858 => 19,
            CodePage::Pc862 => 36,
            CodePage::Iso8859_2 => 39,
            CodePage::Iso8859_15 => 40,
            CodePage::Wpc1250 => 45,
            CodePage::Wpc1251 => 46,
            CodePage::Wpc1253 => 47,
            CodePage::Wpc1254 => 48,
            CodePage::Wpc1255 => 49,
            CodePage::Wpc1256 => 50,
            CodePage::Wpc1257 => 51,
            CodePage::Wpc1258 => 52,
        }
    }

    /// Matching `encoding_rs` encoding, if one exists.
    ///
    /// The DOS code pages (437, 850, ...) have no WHATWG encoding and
    /// return `None`; text for those must be supplied pre-encoded.
    pub fn encoding(self) -> Option<&'static Encoding> {
        match self {
            CodePage::Iso8859_7 => Some(encoding_rs::ISO_8859_7),
            CodePage::Wpc1252 => Some(encoding_rs::WINDOWS_1252),
            CodePage::Pc866 => Some(encoding_rs::IBM866),
            CodePage::Iso8859_2 => Some(encoding_rs::ISO_8859_2),
            CodePage::Iso8859_15 => Some(encoding_rs::ISO_8859_15),
            CodePage::Wpc1250 => Some(encoding_rs::WINDOWS_1250),
            CodePage::Wpc1251 => Some(encoding_rs::WINDOWS_1251),
            CodePage::Wpc1253 => Some(encoding_rs::WINDOWS_1253),
            CodePage::Wpc1254 => Some(encoding_rs::WINDOWS_1254),
            CodePage::Wpc1255 => Some(encoding_rs::WINDOWS_1255),
            CodePage::Wpc1256 => Some(encoding_rs::WINDOWS_1256),
            CodePage::Wpc1257 => Some(encoding_rs::WINDOWS_1257),
            CodePage::Wpc1258 => Some(encoding_rs::WINDOWS_1258),
            _ => None,
        }
    }
}

/// Transcoding options for [`encode`]
#[derive(Debug, Clone, Copy)]
pub struct EncodeOptions {
    pub encoding: &'static Encoding,
    /// Substitute for characters the target encoding cannot represent
    pub replacement: char,
}

impl EncodeOptions {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            encoding,
            replacement: '?',
        }
    }

    /// Look up the target encoding by WHATWG label (e.g. "cp1252", "latin2")
    pub fn for_label(label: &str) -> EscPosResult<Self> {
        Encoding::for_label(label.trim().as_bytes())
            .map(Self::new)
            .ok_or_else(|| EscPosError::UnknownEncoding(label.to_string()))
    }

    pub fn with_replacement(mut self, replacement: char) -> Self {
        self.replacement = replacement;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::new(encoding_rs::WINDOWS_1252)
    }
}

/// Encode UTF-8 text into the printer's code page.
///
/// Characters with no mapping are replaced by `options.replacement`
/// (itself encoded in the target encoding).
#[instrument(skip(text), fields(encoding = options.encoding.name(), text_len = text.len()))]
pub fn encode(text: &str, options: &EncodeOptions) -> Vec<u8> {
    let mut utf8_buf = [0u8; 4];
    let (replacement, _, _) = options
        .encoding
        .encode(options.replacement.encode_utf8(&mut utf8_buf));

    let mut encoder = options.encoding.new_encoder();
    let mut result = Vec::with_capacity(text.len());
    let mut remaining = text;
    let mut unmappable = 0usize;

    loop {
        let needed = encoder
            .max_buffer_length_from_utf8_without_replacement(remaining.len())
            .unwrap_or(remaining.len() * 4 + 16);
        result.reserve(needed);

        let (status, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(remaining, &mut result, true);
        remaining = &remaining[read..];

        match status {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => continue,
            EncoderResult::Unmappable(c) => {
                unmappable += 1;
                debug!(character = %c, "unmappable character replaced");
                result.extend_from_slice(&replacement);
            }
        }
    }

    if unmappable > 0 {
        debug!(unmappable, "encoded with replacements");
    }
    result
}

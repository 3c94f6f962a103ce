//! # Unwrapping captured payloads
//!
//! Payloads arrive as base64 text blobs. Decoding one yields the gateway's
//! hex dump, a run of `X'…'` quoted segments. This module peels both layers
//! so that [`crate::record::transcode`] sees plain hex digits.

use displaydoc::Display;
use thiserror::Error;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurpose, GeneralPurposeConfig};

/// Canonical alphabet, accepts both padded and unpadded input.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Error when unwrapping a payload
#[derive(Debug, Display, Error)]
pub enum PayloadError {
    /// payload is not valid base64: {0}
    Base64(#[from] base64::DecodeError),
}

/// Decodes the base64 payload to text.
///
/// ASCII whitespace is dropped wherever it appears, since the dumps arrive
/// line-wrapped. Bytes that are not UTF-8 decode with replacement
/// characters rather than failing.
pub fn decode_base64(raw: &str) -> Result<String, PayloadError> {
    let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = ENGINE.decode(compact)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Removes the `X'…'` hex quoting convention.
///
/// Every literal `X'` marker and every remaining tick is stripped,
/// everything else passes through untouched.
pub fn strip_hex_markers(text: &str) -> String {
    text.replace("X'", "").replace('\'', "")
}

/// The body region of a decoded record.
///
/// Skips `header_len` characters, then takes everything up to but not
/// including the final character. The one-character trailing exclusion is
/// part of the record envelope and applies no matter what that character
/// is. Counts characters, not bytes, so replacement markers in the decoded
/// text do not shift field positions.
pub fn body_region(text: &str, header_len: usize) -> &str {
    let start = match text.char_indices().nth(header_len) {
        Some((idx, _)) => idx,
        None => return "",
    };
    let end = match text.char_indices().next_back() {
        Some((idx, _)) => idx,
        None => return "",
    };
    if start < end {
        &text[start..end]
    } else {
        ""
    }
}

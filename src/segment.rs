//! Base64url segment decoding.
//!
//! JWT segments are usually emitted without `=` padding, while the
//! `URL_SAFE` engine insists on canonical padding, so segments are padded
//! back to a multiple of four before decoding.

use std::borrow::Cow;

use base64::{Engine, engine::general_purpose};
use serde_json::Value;
use tracing::debug;

use crate::error::{DecodeError, Section};

/// Number of `=` needed to bring `len` up to a multiple of four.
pub fn padding_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Pad `segment` with `=`; borrows when no padding is needed.
pub fn pad(segment: &str) -> Cow<'_, str> {
    match padding_len(segment.len()) {
        0 => Cow::Borrowed(segment),
        n => {
            let mut padded = String::with_capacity(segment.len() + n);
            padded.push_str(segment);
            padded.extend(std::iter::repeat_n('=', n));
            Cow::Owned(padded)
        }
    }
}

/// Decode one base64url segment and parse it as JSON.
pub fn decode(section: Section, segment: &str) -> Result<Value, DecodeError> {
    let padded = pad(segment);
    debug!(
        %section,
        len = segment.len(),
        padding = padded.len() - segment.len(),
        "decoding segment"
    );

    let bytes = general_purpose::URL_SAFE
        .decode(padded.as_bytes())
        .map_err(|source| {
            debug!(%section, error = %source, "base64 decode failed");
            DecodeError::Base64 { section, source }
        })?;

    serde_json::from_slice(&bytes).map_err(|source| {
        debug!(%section, error = %source, "json parse failed");
        DecodeError::Json { section, source }
    })
}

use tracing::debug;

use crate::error::DecodeError;

/// The three raw segments of a compact JWT, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> Token<'a> {
    /// Split `raw` on `.`; anything other than exactly three parts is rejected.
    pub fn split(raw: &'a str) -> Result<Self, DecodeError> {
        let parts: Vec<&str> = raw.split('.').collect();

        match parts[..] {
            [header, payload, signature] => {
                debug!(
                    header_len = header.len(),
                    payload_len = payload.len(),
                    signature_len = signature.len(),
                    "split token"
                );
                Ok(Token {
                    header,
                    payload,
                    signature,
                })
            }
            _ => Err(DecodeError::InvalidFormat { parts: parts.len() }),
        }
    }
}

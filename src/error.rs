use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Which decoded segment an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Header,
    Payload,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Header => f.write_str("header"),
            Section::Payload => f.write_str("payload"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid JWT format: expected 3 parts, got {parts}")]
    InvalidFormat { parts: usize },
    #[error("Failed to decode {section}: {source}")]
    Base64 {
        section: Section,
        #[source]
        source: base64::DecodeError,
    },
    #[error("Failed to decode {section}: {source}")]
    Json {
        section: Section,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::InvalidFormat { .. } => "format",
            DecodeError::Base64 { .. } => "base64",
            DecodeError::Json { .. } => "json",
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            DecodeError::InvalidFormat { .. } => None,
            DecodeError::Base64 { section, .. } | DecodeError::Json { section, .. } => {
                Some(*section)
            }
        }
    }
}

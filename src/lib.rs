//! Decode a compact JSON Web Token and print its parts for debugging.
//!
//! Nothing here verifies signatures or checks claims: the header and
//! payload are base64url-decoded and parsed as JSON, and the signature is
//! only measured.

use std::io::{self, Write};

use serde_json::Value;
use tracing::debug;

pub mod error;
pub mod presenter;
pub mod result;
pub mod segment;
pub mod signature;
pub mod token;

pub use error::{DecodeError, Section};
pub use presenter::Presenter;
pub use result::JsonReport;
pub use signature::SignatureSummary;
pub use token::Token;

/// A fully decoded token.
#[derive(Debug)]
pub struct Analysis<'a> {
    pub header: Value,
    pub payload: Value,
    pub signature: SignatureSummary<'a>,
}

/// Decode `raw`, stopping at the first stage that fails.
pub fn analyze(raw: &str) -> Result<Analysis<'_>, DecodeError> {
    let token = Token::split(raw)?;
    let header = segment::decode(Section::Header, token.header)?;
    let payload = segment::decode(Section::Payload, token.payload)?;

    Ok(Analysis {
        header,
        payload,
        signature: SignatureSummary::new(token.signature),
    })
}

/// Render the outcome of [`analyze`] as a JSON document.
pub fn json_report(raw: &str) -> Value {
    JsonReport(analyze(raw)).into()
}

/// Print the sectioned report for `raw` to `out`.
///
/// Sections are written as each stage succeeds, so a payload failure still
/// leaves the decoded header on screen. Returns `Ok(false)` when decoding
/// stopped early; only write errors on `out` are returned as `Err`.
pub fn debug_token<W: Write>(out: W, raw: &str) -> io::Result<bool> {
    let mut presenter = Presenter::new(out);

    let token = match Token::split(raw) {
        Ok(token) => token,
        Err(e) => {
            presenter.failure(&e)?;
            return Ok(false);
        }
    };

    presenter.banner()?;

    for (section, title, segment) in [
        (Section::Header, "📋 Header:", token.header),
        (Section::Payload, "📦 Payload:", token.payload),
    ] {
        presenter.section(title)?;
        match segment::decode(section, segment) {
            Ok(value) => presenter.json(&value)?,
            Err(e) => {
                presenter.failure(&e)?;
                return Ok(false);
            }
        }
    }

    presenter.section("🔐 Signature:")?;
    presenter.signature(&SignatureSummary::new(token.signature))?;
    presenter.footer()?;

    debug!("token decoded");
    Ok(true)
}

use serde_json::{Value, json};

use crate::Analysis;
use crate::error::DecodeError;

/// Outcome of an analysis, rendered as a single JSON document.
pub struct JsonReport<'a>(pub Result<Analysis<'a>, DecodeError>);

impl From<JsonReport<'_>> for Value {
    fn from(report: JsonReport<'_>) -> Self {
        match report.0 {
            Ok(Analysis {
                header,
                payload,
                signature,
            }) => json!({
                "header": header,
                "payload": payload,
                "signature": {
                    "length": signature.length,
                    "prefix": signature.prefix,
                    "truncated": signature.truncated,
                },
            }),
            Err(e) => json!({
                "error": e.to_string(),
                "kind": e.kind(),
                "section": e.section(),
            }),
        }
    }
}

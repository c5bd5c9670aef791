use std::io::{self, Write};

use serde_json::Value;

use crate::error::DecodeError;
use crate::signature::SignatureSummary;

const RULE_WIDTH: usize = 60;

/// Writes the human-readable report sections to `W`.
pub struct Presenter<W> {
    out: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }

    pub fn banner(&mut self) -> io::Result<()> {
        self.rule()?;
        writeln!(self.out, "🔍 JWT Token Analysis")?;
        self.rule()
    }

    pub fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "\n{title}")
    }

    /// Pretty-print with two-space indentation.
    pub fn json(&mut self, value: &Value) -> io::Result<()> {
        let pretty = serde_json::to_string_pretty(value)?;
        writeln!(self.out, "{pretty}")
    }

    pub fn signature(&mut self, summary: &SignatureSummary<'_>) -> io::Result<()> {
        let ellipsis = if summary.truncated { "..." } else { "" };
        writeln!(
            self.out,
            "First {} chars: {}{ellipsis}",
            crate::signature::PREFIX_CHARS,
            summary.prefix
        )?;
        writeln!(self.out, "Length: {} characters", summary.length)
    }

    pub fn failure(&mut self, err: &DecodeError) -> io::Result<()> {
        writeln!(self.out, "❌ {err}")
    }

    pub fn footer(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.rule()
    }
}

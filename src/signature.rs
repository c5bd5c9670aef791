/// Number of signature characters shown in a report.
pub const PREFIX_CHARS: usize = 40;

/// Length and leading characters of a signature segment. Never decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureSummary<'a> {
    pub length: usize,
    pub prefix: &'a str,
    pub truncated: bool,
}

impl<'a> SignatureSummary<'a> {
    pub fn new(signature: &'a str) -> Self {
        let length = signature.chars().count();
        let end = signature
            .char_indices()
            .nth(PREFIX_CHARS)
            .map_or(signature.len(), |(idx, _)| idx);

        SignatureSummary {
            length,
            prefix: &signature[..end],
            truncated: length > PREFIX_CHARS,
        }
    }
}

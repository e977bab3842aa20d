//! Line-oriented scraping of `tf` console output.
//!
//! Invariants:
//! - Lines are split on `\n`; a trailing `\r` is dropped so CRLF output from Windows matches.
//! - Lookups return the first matching line only.
//! - Extracted values are trimmed; a line without `:` yields the whole trimmed line.

/// First line of `text` containing `needle`, without its line terminator.
pub fn first_line_containing<'a>(text: &'a str, needle: &str) -> Option<&'a str> {
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .find(|l| l.contains(needle))
}

/// Text after the last `:` of `line`, trimmed.
pub fn value_after_last_colon(line: &str) -> &str {
    line.rsplit_once(':').map_or(line, |(_, rest)| rest).trim()
}

/// Text after the first `:` of `line`, trimmed. Use for values that contain colons (URLs).
pub fn value_after_first_colon(line: &str) -> &str {
    line.split_once(':').map_or(line, |(_, rest)| rest).trim()
}

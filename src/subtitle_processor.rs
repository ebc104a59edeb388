use once_cell::sync::Lazy;
use regex::Regex;

// @module: Subtitle text extraction and normalization

// @const: SRT cue index line (decimal digits only)
static CUE_INDEX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

// @const: SRT timestamp range line, tolerant of comma or period millisecond
// separators, irregular spacing around the arrow, and trailing cue metadata
static TIMESTAMP_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,2}:\d{2}:\d{2}[,.]\d{3}\s*-->\s*\d{1,2}:\d{2}:\d{2}[,.]\d{3}.*$").unwrap()
});

/// Normalize raw subtitle file text into a continuous prose stream.
///
/// Strips cue index lines, timestamp range lines and blank lines, then joins
/// the surviving dialogue lines with single spaces in their original order.
/// Pure and infallible: always returns a string, possibly empty.
///
/// A dialogue line consisting solely of digits is indistinguishable from a cue
/// index and is always discarded. This is accepted lossy behavior.
pub fn normalize(raw: &str) -> String {
    // Unify line endings so splitting is platform-independent
    let unified = raw.replace("\r\n", "\n");

    let mut text_lines: Vec<&str> = Vec::new();

    for line in unified.split('\n') {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if CUE_INDEX_REGEX.is_match(trimmed) {
            continue;
        }

        if TIMESTAMP_LINE_REGEX.is_match(trimmed) {
            continue;
        }

        text_lines.push(trimmed);
    }

    text_lines.join(" ")
}

//! Line-level markers of the TLDR text layout
//!
//! Every predicate takes an already trimmed line. Nothing here looks at more
//! than one line; the segmenter combines them with lookback and lookahead.

use regex::Regex;

/// Phrases that only appear in the newsletter's closing boilerplate
pub const CLOSING_PHRASES: [&str; 5] = [
    "Love TLDR?",
    "Want to advertise in TLDR?",
    "Share your referral link",
    "Track your referrals",
    "If you have any comments",
];

/// Substring that identifies the AI edition
pub const AI_EDITION_MARKER: &str = "TLDR AI";

// Regex patterns
static READING_TIME_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"\((?:([0-9]+) MINUTE READ|GITHUB REPO)\)\s*(?:\[[0-9]+\])?$").unwrap()
});

static SPONSOR_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?i)\(SPONSOR\)").unwrap());

static FOOTNOTE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\[([0-9]+)\]").unwrap());

static LINK_REFERENCE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^\[([0-9]+)\]$").unwrap());

static LINK_DEFINITION_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^\[([0-9]+)\]\s+(\S+)").unwrap());

static LINK_FOOTER_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^\[([0-9]+)\]\s+https?://\S+").unwrap());

static EMOJI_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"[\x{1F300}-\x{1F9FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]").unwrap()
});

/// Line ends with `(N MINUTE READ)` or `(GITHUB REPO)`, optionally followed
/// by a footnote index
#[must_use]
pub fn has_reading_time(line: &str) -> bool {
    READING_TIME_REGEX.is_match(line)
}

/// Minutes from a trailing `(N MINUTE READ)` marker.
///
/// `None` when the marker is `(GITHUB REPO)` or absent, and for a zero or
/// out-of-range minute count.
#[must_use]
pub fn reading_time(line: &str) -> Option<u32> {
    READING_TIME_REGEX
        .captures(line)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .filter(|minutes| *minutes > 0)
}

/// Remove the trailing reading-time marker (and its footnote index)
#[must_use]
pub fn strip_reading_time(line: &str) -> String {
    READING_TIME_REGEX.replace(line, "").trim().to_string()
}

#[must_use]
pub fn is_sponsored(line: &str) -> bool {
    SPONSOR_REGEX.is_match(line)
}

#[must_use]
pub fn is_closing_boilerplate(line: &str) -> bool {
    CLOSING_PHRASES.iter().any(|phrase| line.contains(phrase))
}

/// A reading-time line that opens a real article.
///
/// Sponsored slots and boilerplate never start one.
#[must_use]
pub fn is_article_start(line: &str) -> bool {
    has_reading_time(line) && !is_sponsored(line) && !is_closing_boilerplate(line)
}

/// First `[n]` footnote index anywhere in the line
#[must_use]
pub fn footnote_ref(line: &str) -> Option<&str> {
    FOOTNOTE_REGEX
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Remove every `[n]` footnote index from a title
#[must_use]
pub fn strip_footnote_refs(title: &str) -> String {
    FOOTNOTE_REGEX.replace_all(title, "").trim().to_string()
}

/// Footnote index of a line that only points at a link: either a bare
/// `[3]` or a URL footnote such as `[3] https://example.com`
#[must_use]
pub fn link_reference(line: &str) -> Option<&str> {
    LINK_REFERENCE_REGEX
        .captures(line)
        .or_else(|| LINK_FOOTER_REGEX.captures(line))
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// A footnote whose target is a web URL, e.g. `[5] https://example.com`.
///
/// Unlike [`link_definition`], bracketed list items such as
/// `[2] Second point` do not qualify.
#[must_use]
pub fn is_link_footer(line: &str) -> bool {
    LINK_FOOTER_REGEX.is_match(line)
}

/// A footnote definition such as `[5] https://example.com`, as `(index, url)`
#[must_use]
pub fn link_definition(line: &str) -> Option<(&str, &str)> {
    let cap = LINK_DEFINITION_REGEX.captures(line)?;
    Some((cap.get(1)?.as_str(), cap.get(2)?.as_str()))
}

/// Shouted headline heuristic.
///
/// More than two characters, and the uppercase letters outnumber
/// `ratio` times the lowercase ones. Digits and punctuation count for
/// neither side, so acronym-only or number-heavy lines can misfire.
#[must_use]
pub fn is_title_like(line: &str, ratio: u32) -> bool {
    if line.chars().count() <= 2 {
        return false;
    }
    let upper = line.chars().filter(|c| c.is_uppercase()).count();
    let lower = line.chars().filter(|c| c.is_lowercase()).count();
    upper > lower.saturating_mul(ratio as usize)
}

/// Split text into lines on every line terminator: `\n`, `\r\n`, a lone
/// `\r`, vertical tab, form feed, the file/group/record separators, NEL and
/// the Unicode line and paragraph separators.
///
/// A terminator at the very end does not produce a trailing empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..pos]);
        start = pos + c.len_utf8();
        if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Remove pictographs and dingbats, then trim
#[must_use]
pub fn strip_emoji(text: &str) -> String {
    EMOJI_REGEX.replace_all(text, "").trim().to_string()
}

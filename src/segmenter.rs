//! Article segmentation over newsletter text
//!
//! A single forward scan over trimmed lines. Footnote definitions are
//! collected first so both forward and backward references resolve, then
//! each line is classified as blank, section header, article start or noise.
//! Article starts hand off to [`Segmenter::extract_article`], which owns the
//! cursor until the article body ends.

use crate::error::{ParseError, Result};
use crate::markers;
use crate::types::{Article, LinkTable, NewsletterKind, Section};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Anything that can turn a newsletter body into articles
pub trait ContentParser: Send + Sync {
    /// Extract articles from decoded newsletter text, in document order
    fn parse_content(&self, content: &str) -> Vec<Article>;
}

/// Tunable knobs of the segmenter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Uppercase letters must outnumber `title_case_ratio` times the
    /// lowercase letters for a line to count as a headline fragment.
    /// Older issues were parsed with 2.
    pub title_case_ratio: u32,

    /// Substring that marks the document as the AI edition
    pub variant_marker: String,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            title_case_ratio: 1,
            variant_marker: markers::AI_EDITION_MARKER.to_string(),
        }
    }
}

impl SegmenterConfig {
    /// Load a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ParseError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title_case_ratio == 0 {
            return Err(ParseError::Config(
                "title_case_ratio must be at least 1".into(),
            ));
        }
        if self.variant_marker.trim().is_empty() {
            return Err(ParseError::Config("variant_marker must not be empty".into()));
        }
        Ok(())
    }
}

/// Per-document scan state, created fresh for every parse
#[derive(Debug)]
struct ScanState {
    kind: NewsletterKind,
    links: LinkTable,
    section: Option<Section>,
    cursor: usize,
    /// Lines before this index belong to a header or an earlier article
    consumed_until: usize,
}

impl ScanState {
    const fn new(kind: NewsletterKind, links: LinkTable) -> Self {
        Self {
            kind,
            links,
            section: None,
            cursor: 0,
            consumed_until: 0,
        }
    }

    const fn consume_through(&mut self, next: usize) {
        self.cursor = next;
        self.consumed_until = next;
    }
}

/// Splits TLDR newsletter text into articles.
///
/// Holds only configuration, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SegmenterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Edition of the whole document, decided once
    #[must_use]
    pub fn detect_kind(&self, text: &str) -> NewsletterKind {
        if text.contains(self.config.variant_marker.as_str()) {
            NewsletterKind::TldrAi
        } else {
            NewsletterKind::Tldr
        }
    }

    /// Extract all articles from newsletter text.
    ///
    /// Never fails: unrecognized structure just yields fewer articles.
    #[must_use]
    pub fn parse(&self, text: &str) -> Vec<Article> {
        let kind = self.detect_kind(text);
        debug!("Detected newsletter type: {kind}");

        let lines: Vec<&str> = markers::split_lines(text)
            .into_iter()
            .map(str::trim)
            .collect();
        let links = build_link_table(&lines);
        debug!("Found {} link definitions", links.len());

        let mut state = ScanState::new(kind, links);
        let mut articles = Vec::new();

        while state.cursor < lines.len() {
            let index = state.cursor;
            let line = lines[index];

            if line.chars().count() <= 2 {
                state.cursor += 1;
                continue;
            }

            if let Some(section) = Section::from_line(line) {
                debug!("Found section header: {section}");
                state.section = Some(section);
                state.consume_through(index + 1);
                continue;
            }

            if markers::is_article_start(line) {
                debug!("Found article start at line {index}");
                let (article, next) = self.extract_article(&lines, index, &state);
                if let Some(article) = article {
                    debug!("Parsed article: {}", article.title);
                    articles.push(article);
                }
                state.consume_through(next);
                continue;
            }

            state.cursor += 1;
        }

        info!("Parsed {} articles from {kind}", articles.len());
        articles
    }

    /// Like [`Segmenter::parse`], for input that has not been validated as
    /// UTF-8 yet
    pub fn parse_bytes(&self, raw: &[u8]) -> Result<Vec<Article>> {
        let text = std::str::from_utf8(raw).map_err(|e| ParseError::InvalidText(e.to_string()))?;
        Ok(self.parse(text))
    }

    /// Build the article whose reading-time line is `lines[start]`.
    ///
    /// Returns the article, if it has both a title and a body, and the index
    /// of the first line that is not part of it.
    fn extract_article(
        &self,
        lines: &[&str],
        start: usize,
        state: &ScanState,
    ) -> (Option<Article>, usize) {
        let line = lines[start];
        let reading_time = markers::reading_time(line);
        let mut title = markers::strip_reading_time(line);
        let mut title_end = start;

        let link = if let Some(index) = markers::footnote_ref(line) {
            title = markers::strip_footnote_refs(&title);
            state.links.get(index).map(str::to_string)
        } else if let Some(index) = lines
            .get(start + 1)
            .copied()
            .and_then(markers::link_reference)
        {
            title_end = start + 1;
            state.links.get(index).map(str::to_string)
        } else {
            None
        };

        if let Some(prefix) = self.title_prefix(lines, start, state.consumed_until) {
            title = format!("{prefix} {title}").trim().to_string();
        }

        let mut body = Vec::new();
        let mut index = title_end + 1;
        while !self.is_body_boundary(lines, index) {
            if !lines[index].is_empty() {
                body.push(lines[index]);
            }
            index += 1;
        }
        let content = markers::strip_emoji(&body.join(" "));

        if title.is_empty() || content.is_empty() {
            debug!("Discarding article at line {start}: missing title or body");
            return (None, index);
        }

        let article = Article {
            title,
            content,
            section: state.section,
            reading_time,
            newsletter_type: state.kind,
            link,
        };
        (Some(article), index)
    }

    /// First half of a headline wrapped across two lines.
    ///
    /// Looks only at `lines[start - 1]`, and only if that line is at or
    /// after `floor` (lines before it were already used by a header or an
    /// earlier article).
    #[must_use]
    pub fn title_prefix<'a>(&self, lines: &[&'a str], start: usize, floor: usize) -> Option<&'a str> {
        let prev_index = start.checked_sub(1)?;
        if prev_index < floor {
            return None;
        }
        let prev = *lines.get(prev_index)?;

        let usable = markers::is_title_like(prev, self.config.title_case_ratio)
            && !markers::has_reading_time(prev)
            && !markers::is_sponsored(prev)
            && !markers::is_closing_boilerplate(prev);
        usable.then_some(prev)
    }

    /// Whether body collection stops at `lines[index]`.
    ///
    /// Blank lines never stop it; the end of the document always does.
    #[must_use]
    pub fn is_body_boundary(&self, lines: &[&str], index: usize) -> bool {
        let Some(&line) = lines.get(index) else {
            return true;
        };
        if line.is_empty() {
            return false;
        }

        Section::from_line(line).is_some()
            || markers::has_reading_time(line)
            || markers::is_article_start(line)
            || self.starts_wrapped_headline(lines, index)
            || markers::is_closing_boilerplate(line)
            || markers::is_link_footer(line)
    }

    fn starts_wrapped_headline(&self, lines: &[&str], index: usize) -> bool {
        markers::is_title_like(lines[index], self.config.title_case_ratio)
            && lines
                .get(index + 1)
                .is_some_and(|next| markers::has_reading_time(next))
    }
}

impl ContentParser for Segmenter {
    fn parse_content(&self, content: &str) -> Vec<Article> {
        self.parse(content)
    }
}

/// Collect `[n] url` footnote definitions; later definitions win
#[must_use]
pub fn build_link_table(lines: &[&str]) -> LinkTable {
    let mut links = LinkTable::new();
    for line in lines {
        if let Some((index, url)) = markers::link_definition(line.trim()) {
            links.insert(index, url);
        }
    }
    links
}

/// Parse newsletter text with the default configuration
#[must_use]
pub fn parse(text: &str) -> Vec<Article> {
    Segmenter::default().parse(text)
}

/// Parse raw bytes with the default configuration
pub fn parse_bytes(raw: &[u8]) -> Result<Vec<Article>> {
    Segmenter::default().parse_bytes(raw)
}

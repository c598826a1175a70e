//! Core types for segmented newsletter articles

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single article extracted from a newsletter body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Headline, with the reading-time marker and footnote index removed
    pub title: String,

    /// Body text joined into one line, emoji removed
    pub content: String,

    /// Section header the article appeared under
    pub section: Option<Section>,

    /// Reading time in minutes (`None` for repository links)
    pub reading_time: Option<u32>,

    /// Newsletter edition the article came from
    pub newsletter_type: NewsletterKind,

    /// Resolved footnote URL
    pub link: Option<String>,
}

impl Article {
    /// Metadata record handed to a search index alongside the text
    #[must_use]
    pub fn metadata(&self) -> ArticleMetadata {
        ArticleMetadata {
            title: self.title.clone(),
            section: self.section,
            reading_time: self.reading_time,
            newsletter_type: self.newsletter_type,
            link: self.link.clone(),
        }
    }

    /// Text to embed for semantic search
    #[must_use]
    pub fn index_text(&self) -> String {
        format!("Title: {}\n\nContent: {}", self.title, self.content)
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reading_time {
            Some(minutes) => write!(f, "{} ({minutes} min)", self.title),
            None => write!(f, "{}", self.title),
        }
    }
}

/// Per-article metadata as expected by an indexing backend.
///
/// Absent values are omitted from the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleMetadata {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,

    pub newsletter_type: NewsletterKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Newsletter edition, decided once per document
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NewsletterKind {
    /// The main TLDR newsletter
    #[default]
    #[serde(rename = "TLDR")]
    Tldr,

    /// The TLDR AI edition
    #[serde(rename = "TLDR AI")]
    TldrAi,
}

impl NewsletterKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tldr => "TLDR",
            Self::TldrAi => "TLDR AI",
        }
    }
}

impl fmt::Display for NewsletterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known section headers of the newsletter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Section {
    #[serde(rename = "HEADLINES & LAUNCHES")]
    HeadlinesAndLaunches,

    #[serde(rename = "RESEARCH & INNOVATION")]
    ResearchAndInnovation,

    #[serde(rename = "ENGINEERING & RESOURCES")]
    EngineeringAndResources,

    #[serde(rename = "MISCELLANEOUS")]
    Miscellaneous,

    #[serde(rename = "QUICK LINKS")]
    QuickLinks,

    #[serde(rename = "BIG TECH & STARTUPS")]
    BigTechAndStartups,

    #[serde(rename = "SCIENCE & FUTURISTIC TECHNOLOGY")]
    ScienceAndFuturisticTechnology,

    #[serde(rename = "PROGRAMMING, DESIGN & DATA SCIENCE")]
    ProgrammingDesignAndDataScience,
}

impl Section {
    /// Every known section, in the order the newsletter usually prints them
    pub const ALL: [Self; 8] = [
        Self::HeadlinesAndLaunches,
        Self::BigTechAndStartups,
        Self::ResearchAndInnovation,
        Self::ScienceAndFuturisticTechnology,
        Self::EngineeringAndResources,
        Self::ProgrammingDesignAndDataScience,
        Self::Miscellaneous,
        Self::QuickLinks,
    ];

    /// Exact-match a trimmed line against the known headers
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == line)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HeadlinesAndLaunches => "HEADLINES & LAUNCHES",
            Self::ResearchAndInnovation => "RESEARCH & INNOVATION",
            Self::EngineeringAndResources => "ENGINEERING & RESOURCES",
            Self::Miscellaneous => "MISCELLANEOUS",
            Self::QuickLinks => "QUICK LINKS",
            Self::BigTechAndStartups => "BIG TECH & STARTUPS",
            Self::ScienceAndFuturisticTechnology => "SCIENCE & FUTURISTIC TECHNOLOGY",
            Self::ProgrammingDesignAndDataScience => "PROGRAMMING, DESIGN & DATA SCIENCE",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Footnote index to URL mapping for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTable(HashMap<String, String>);

impl LinkTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a definition; a later definition of the same index replaces it
    pub fn insert(&mut self, index: impl Into<String>, url: impl Into<String>) {
        self.0.insert(index.into(), url.into());
    }

    #[must_use]
    pub fn get(&self, index: &str) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

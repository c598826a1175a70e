// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! TLDR Newsletter Article Extraction
//!
//! Splits the plain-text body of TLDR and TLDR AI newsletter emails into
//! structured articles. The text has no delimiters or schema; structure is
//! recovered from typographic conventions:
//!
//! - fixed section headers such as `QUICK LINKS`
//! - a trailing `(N MINUTE READ)` or `(GITHUB REPO)` marker on headlines
//! - numbered footnote links (`[3]` in the headline, `[3] https://...` later)
//! - all-caps headlines that may wrap across two lines
//!
//! Parsing is best-effort and never fails on odd content; it just yields
//! fewer articles.
//!
//! # Example
//!
//! ```rust
//! use tldr_extract::{Section, parse};
//!
//! let text = "QUICK LINKS\n\
//!             BIG STORY (2 MINUTE READ) [1]\n\
//!             Some body text.\n\
//!             \n\
//!             [1] https://example.com/a\n";
//! let articles = parse(text);
//!
//! assert_eq!(articles.len(), 1);
//! assert_eq!(articles[0].title, "BIG STORY");
//! assert_eq!(articles[0].section, Some(Section::QuickLinks));
//! assert_eq!(articles[0].link.as_deref(), Some("https://example.com/a"));
//! ```

mod error;
pub mod markers;
mod parser;
mod segmenter;
mod types;

pub use error::{ParseError, Result};
pub use parser::{Newsletter, parse_newsletter, parse_newsletter_with};
pub use segmenter::{
    ContentParser, Segmenter, SegmenterConfig, build_link_table, parse, parse_bytes,
};
pub use types::*;

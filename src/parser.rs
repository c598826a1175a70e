//! Newsletter email parsing
//!
//! Decodes an RFC 5322 message, picks its text body and segments it.

use crate::error::{ParseError, Result};
use crate::segmenter::{ContentParser, Segmenter};
use crate::types::{Article, NewsletterKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One newsletter issue with its articles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Newsletter {
    /// Message-ID header, if present
    pub message_id: Option<String>,

    /// Subject line
    pub subject: Option<String>,

    /// Date sent, if the header parses as RFC 2822
    pub date: Option<DateTime<Utc>>,

    /// Articles in document order
    pub articles: Vec<Article>,
}

impl Newsletter {
    /// Edition of the issue, known once at least one article was found
    #[must_use]
    pub fn kind(&self) -> Option<NewsletterKind> {
        self.articles.first().map(|a| a.newsletter_type)
    }
}

/// Parse a raw newsletter email with the default segmenter
pub fn parse_newsletter(raw: &[u8]) -> Result<Newsletter> {
    parse_newsletter_with(&Segmenter::default(), raw)
}

/// Parse a raw newsletter email with a caller-supplied content parser
pub fn parse_newsletter_with<P>(parser: &P, raw: &[u8]) -> Result<Newsletter>
where
    P: ContentParser + ?Sized,
{
    let parsed = mailparse::parse_mail(raw).map_err(|e| ParseError::Structure(e.to_string()))?;

    let text = extract_text_body(&parsed)?;
    let articles = parser.parse_content(&text);

    let message_id = header_value(&parsed.headers, "message-id");
    let subject = header_value(&parsed.headers, "subject");
    let date = extract_date(&parsed.headers);

    debug!(
        "Parsed newsletter {:?} with {} articles",
        subject.as_deref().unwrap_or("(no subject)"),
        articles.len()
    );

    Ok(Newsletter {
        message_id,
        subject,
        date,
        articles,
    })
}

fn header_value(headers: &[mailparse::MailHeader], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key().eq_ignore_ascii_case(name))
        .map(mailparse::MailHeader::get_value)
}

fn extract_date(headers: &[mailparse::MailHeader]) -> Option<DateTime<Utc>> {
    header_value(headers, "date")
        .and_then(|value| DateTime::parse_from_rfc2822(value.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// First `text/plain` leaf, falling back to the first other `text/*` leaf
fn extract_text_body(parsed: &mailparse::ParsedMail) -> Result<String> {
    let mut plain: Option<String> = None;
    let mut fallback: Option<String> = None;

    collect_text_parts(parsed, &mut plain, &mut fallback)?;

    plain.or(fallback).ok_or(ParseError::MissingBody)
}

fn collect_text_parts(
    part: &mailparse::ParsedMail,
    plain: &mut Option<String>,
    fallback: &mut Option<String>,
) -> Result<()> {
    if !part.subparts.is_empty() {
        for sub in &part.subparts {
            collect_text_parts(sub, plain, fallback)?;
        }
        return Ok(());
    }

    let content_type = part.ctype.mimetype.to_lowercase();
    if content_type == "text/plain" {
        if plain.is_none() {
            let body = part
                .get_body()
                .map_err(|e| ParseError::Decode(e.to_string()))?;
            *plain = Some(body);
        }
    } else if content_type.starts_with("text/") && fallback.is_none() {
        match part.get_body() {
            Ok(body) => *fallback = Some(body),
            Err(e) => warn!("Skipping undecodable {content_type} part: {e}"),
        }
    }

    Ok(())
}

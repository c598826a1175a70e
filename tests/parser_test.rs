use chrono::{TimeZone, Utc};
use tldr_extract::*;

#[test]
fn test_parse_plain_newsletter() {
    let raw = b"From: TLDR <dan@tldrnewsletter.com>\r\n\
                To: reader@example.com\r\n\
                Subject: Big news today\r\n\
                Date: Sat, 01 Jun 2024 10:00:00 +0000\r\n\
                Message-ID: <issue1@tldrnewsletter.com>\r\n\
                \r\n\
                HEADLINES & LAUNCHES\r\n\
                \r\n\
                NEW MODEL (3 MINUTE READ) [1]\r\n\
                It is faster.\r\n\
                \r\n\
                [1] https://example.com/model\r\n";

    let newsletter = parse_newsletter(raw).unwrap();

    assert_eq!(newsletter.subject.as_deref(), Some("Big news today"));
    assert_eq!(
        newsletter.message_id.as_deref(),
        Some("<issue1@tldrnewsletter.com>")
    );
    assert_eq!(
        newsletter.date,
        Some(Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap())
    );
    assert_eq!(newsletter.kind(), Some(NewsletterKind::Tldr));
    assert_eq!(newsletter.articles.len(), 1);

    let article = &newsletter.articles[0];
    assert_eq!(article.title, "NEW MODEL");
    assert_eq!(article.content, "It is faster.");
    assert_eq!(article.section, Some(Section::HeadlinesAndLaunches));
    assert_eq!(article.link.as_deref(), Some("https://example.com/model"));
}

#[test]
fn test_parse_base64_body() {
    let raw = b"From: TLDR AI <dan@tldrnewsletter.com>\r\n\
                Subject: TLDR AI issue\r\n\
                MIME-Version: 1.0\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                Content-Transfer-Encoding: base64\r\n\
                \r\n\
                VExEUiBBSSAyMDI0LTA2LTAxCgpSRVNFQVJDSCAmIElOTk9WQVRJT04KClNNQUxMRVIgTU9ERUxT\r\n\
                IFdJTiAoNCBNSU5VVEUgUkVBRCkgWzFdCkRpc3RpbGxlZCBtb2RlbHMgbWF0Y2ggbGFyZ2VyIG9u\r\n\
                ZXMuIPCfmoAKClsxXSBodHRwczovL2V4YW1wbGUuY29tL3BhcGVyCg==\r\n";

    let newsletter = parse_newsletter(raw).unwrap();

    assert_eq!(newsletter.kind(), Some(NewsletterKind::TldrAi));
    assert_eq!(newsletter.articles.len(), 1);

    let article = &newsletter.articles[0];
    assert_eq!(article.title, "SMALLER MODELS WIN");
    assert_eq!(article.content, "Distilled models match larger ones.");
    assert_eq!(article.section, Some(Section::ResearchAndInnovation));
    assert_eq!(article.reading_time, Some(4));
    assert_eq!(article.link.as_deref(), Some("https://example.com/paper"));
}

#[test]
fn test_multipart_prefers_plain_text() {
    let raw = b"From: dan@tldrnewsletter.com\r\n\
                Subject: Multi\r\n\
                MIME-Version: 1.0\r\n\
                Content-Type: multipart/alternative; boundary=\"XYZ\"\r\n\
                \r\n\
                --XYZ\r\n\
                Content-Type: text/html; charset=utf-8\r\n\
                \r\n\
                <html><body>HTML STORY (9 MINUTE READ)</body></html>\r\n\
                --XYZ\r\n\
                Content-Type: text/plain; charset=utf-8\r\n\
                \r\n\
                QUICK LINKS\r\n\
                SMALL STORY (1 MINUTE READ)\r\n\
                Short body.\r\n\
                --XYZ--\r\n";

    let newsletter = parse_newsletter(raw).unwrap();

    assert_eq!(newsletter.articles.len(), 1);
    assert_eq!(newsletter.articles[0].title, "SMALL STORY");
    assert_eq!(newsletter.articles[0].content, "Short body.");
    assert_eq!(newsletter.articles[0].section, Some(Section::QuickLinks));
}

#[test]
fn test_missing_text_body() {
    let raw = b"From: dan@tldrnewsletter.com\r\n\
                Subject: Binary\r\n\
                Content-Type: application/octet-stream\r\n\
                \r\n\
                xyz";

    let result = parse_newsletter(raw);
    assert!(matches!(result, Err(ParseError::MissingBody)));
}

#[test]
fn test_missing_and_invalid_headers() {
    let raw = b"Subject: No date\r\n\
                Date: sometime last week\r\n\
                \r\n\
                Nothing structured here.";

    let newsletter = parse_newsletter(raw).unwrap();

    assert!(newsletter.date.is_none());
    assert!(newsletter.message_id.is_none());
    assert!(newsletter.articles.is_empty());
    assert!(newsletter.kind().is_none());
}

struct FixedParser;

impl ContentParser for FixedParser {
    fn parse_content(&self, content: &str) -> Vec<Article> {
        vec![Article {
            title: "FIXED".into(),
            content: content.trim().to_string(),
            section: None,
            reading_time: None,
            newsletter_type: NewsletterKind::Tldr,
            link: None,
        }]
    }
}

#[test]
fn test_custom_content_parser() {
    let raw = b"Subject: Custom\r\n\r\nhello";

    let newsletter = parse_newsletter_with(&FixedParser, raw).unwrap();

    assert_eq!(newsletter.articles.len(), 1);
    assert_eq!(newsletter.articles[0].content, "hello");
}

#[test]
fn test_configured_segmenter() {
    let config = SegmenterConfig::from_json(r#"{"title_case_ratio": 2}"#).unwrap();
    let segmenter = Segmenter::with_config(config).unwrap();
    let raw = b"Subject: Config\r\n\r\nWRAPPED Headline TEXT\r\nREST (1 MINUTE READ)\r\nBody.\r\n";

    let newsletter = parse_newsletter_with(&segmenter, raw).unwrap();

    assert_eq!(newsletter.articles[0].title, "REST");
}

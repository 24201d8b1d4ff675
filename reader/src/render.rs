//! Presentation adapter
//!
//! Turns decoded summaries into user-facing text: Markdown to HTML, ISO dates to
//! long-form labels. Summary content is untrusted, so raw HTML in it is shown as
//! text and script-capable link schemes are dropped.

use chrono::{DateTime, Datelike, NaiveDate};
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use crate::error::ReaderError;

/// URL schemes that can execute code when followed
const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Convert Markdown to HTML.
///
/// Only structural elements come out of the conversion: raw HTML blocks and inline
/// HTML are escaped, and `javascript:`/`vbscript:`/`data:` link targets become `#`.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(content, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut buf = String::with_capacity(content.len() + content.len() / 2);
    html::push_html(&mut buf, events);
    buf
}

/// Escape plain text for inclusion in HTML element content
pub fn escape_text(text: &str) -> String {
    let mut buf = String::with_capacity(text.len());
    html::push_html(&mut buf, std::iter::once(Event::Text(CowStr::Borrowed(text))));
    buf
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_unsafe_url(&url) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

fn is_unsafe_url(url: &str) -> bool {
    // Browsers ignore embedded whitespace and control characters in schemes
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    UNSAFE_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}

/// Parse an ISO calendar date (`2024-01-15`), also accepting a full RFC 3339 timestamp.
///
/// The date part must be zero-padded `YYYY-MM-DD`; signed years, one-digit fields
/// and surrounding whitespace are rejected.
pub fn parse_iso_date(iso_date: &str) -> Result<NaiveDate, ReaderError> {
    let invalid = || ReaderError::DateParse(iso_date.to_string());

    let date_part = iso_date.get(..10).ok_or_else(invalid)?;
    if !is_padded_date(date_part) {
        return Err(invalid());
    }

    if iso_date.len() == date_part.len() {
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| invalid())
    } else {
        DateTime::parse_from_rfc3339(iso_date)
            .map(|dt| dt.date_naive())
            .map_err(|_| invalid())
    }
}

fn is_padded_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Render an ISO date in long form: `2024-01-15` -> `January 15th, 2024`
pub fn format_display_date(iso_date: &str) -> Result<String, ReaderError> {
    let date = parse_iso_date(iso_date)?;
    let day = date.day();

    Ok(format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.format("%Y")
    ))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

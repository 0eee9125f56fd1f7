//! Page renderers. Each one takes entries plus raw template text and returns
//! the finished HTML; writing is left to the caller.

use crate::config::SiteConfig;
use crate::domain::{ArticlePath, Entry};
use crate::parser::markdown::compile_markdown_to_html;
use chrono::{DateTime, NaiveDate};
use std::borrow::Cow;
use std::fmt::Write as _;
use std::str::FromStr;

pub mod article;
pub mod home;
pub mod news_list;
pub mod template;

pub use self::article::render_article;
pub use self::home::{latest, render_homepage};
pub use self::news_list::{date_summary, render_news_list};

/// An entry paired with the path its article page is written to. Every
/// renderer links through the same value, so links and files cannot drift.
#[derive(Debug, Clone, Copy)]
pub struct Article<'a> {
    pub entry: &'a Entry,
    pub path: &'a ArticlePath,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyFormat {
    /// Body text is escaped and inserted as-is.
    #[default]
    Plain,
    Markdown,
}

impl FromStr for BodyFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(format!("unknown body format {other:?}")),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    pub body_format: BodyFormat,
    pub date_format: Option<String>,
    pub excerpt_chars: Option<usize>,
}

impl RenderSettings {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            body_format: config.body_format,
            date_format: config.date_format.clone(),
            excerpt_chars: config.excerpt_chars,
        }
    }

    /// The date as shown on pages, already escaped.
    pub fn display_date(&self, raw: &str) -> String {
        let shown = match &self.date_format {
            Some(format) => reformat_date(raw, format).unwrap_or_else(|| raw.to_string()),
            None => raw.to_string(),
        };
        escape_html(&shown)
    }

    /// Body markup for an article page. Never truncated.
    pub fn body_html(&self, body: &str) -> String {
        match self.body_format {
            BodyFormat::Plain => escape_html(body),
            BodyFormat::Markdown => compile_markdown_to_html(body),
        }
    }

    /// Body block for list fragments, cut down to the configured excerpt.
    pub fn excerpt_block(&self, body: &str) -> String {
        let text = excerpt(body, self.excerpt_chars);
        match self.body_format {
            BodyFormat::Plain => format!("<p>{}</p>", escape_html(&text)),
            BodyFormat::Markdown => compile_markdown_to_html(&text),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn excerpt(text: &str, limit: Option<usize>) -> Cow<'_, str> {
    match limit {
        Some(limit) if text.chars().count() > limit => {
            let mut cut: String = text.chars().take(limit).collect();
            cut.push('…');
            Cow::Owned(cut)
        }
        _ => Cow::Borrowed(text),
    }
}

// None when the value isn't a date we understand or the format doesn't fit it
fn reformat_date(raw: &str, format: &str) -> Option<String> {
    let raw = raw.trim();
    let mut out = String::new();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        write!(out, "{}", dt.format(format)).ok()?;
        return Some(out);
    }

    // date-time fields without seconds, e.g. 2024-01-01T09:00+09:00
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z") {
        write!(out, "{}", dt.format(format)).ok()?;
        return Some(out);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        write!(out, "{}", midnight.format(format)).ok()?;
        return Some(out);
    }

    None
}

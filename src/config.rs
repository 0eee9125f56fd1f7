use crate::error::{BuildError, BuildResult};
use crate::render::BodyFormat;
use crate::services::{ContentQuery, SortOrder};
use std::path::PathBuf;
use std::str::FromStr;

// the delivery API refuses anything above this
const MAX_PAGE_SIZE: usize = 1000;

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub contentful: ContentfulConfig,
    pub query: ContentQuery,
    pub template_dir: PathBuf,
    pub public_dir: PathBuf,
    pub home_entry_count: usize,
    pub excerpt_chars: Option<usize>,
    pub body_format: BodyFormat,
    pub date_format: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ContentfulConfig {
    pub space_id: String,
    pub access_token: String,
    pub environment: String,
    pub host: String,
    pub locale: Option<String>,
    pub page_size: usize,
    pub fields: FieldMapping,
}

/// Names of the content-type fields each entry attribute is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMapping {
    pub title: String,
    pub date: String,
    pub category: String,
    pub body: String,
    pub image: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            title: "タイトル".to_string(),
            date: "日時".to_string(),
            category: "カテゴリー".to_string(),
            body: "本文".to_string(),
            image: "画像".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> BuildResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so callers other than
    /// `main` never have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> BuildResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| var(key).ok_or_else(|| BuildError::config(key, "not set"));

        let defaults = FieldMapping::default();
        let fields = FieldMapping {
            title: var("SITE_FIELD_TITLE").unwrap_or(defaults.title),
            date: var("SITE_FIELD_DATE").unwrap_or(defaults.date),
            category: var("SITE_FIELD_CATEGORY").unwrap_or(defaults.category),
            body: var("SITE_FIELD_BODY").unwrap_or(defaults.body),
            image: var("SITE_FIELD_IMAGE").unwrap_or(defaults.image),
        };

        let page_size = parse_or("CONTENTFUL_PAGE_SIZE", var("CONTENTFUL_PAGE_SIZE"), 100)?;
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(BuildError::config(
                "CONTENTFUL_PAGE_SIZE",
                format!("must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }

        let contentful = ContentfulConfig {
            space_id: required("CONTENTFUL_SPACE_ID")?,
            access_token: required("CONTENTFUL_ACCESS_TOKEN")?,
            environment: var("CONTENTFUL_ENVIRONMENT").unwrap_or_else(|| "master".to_string()),
            host: var("CONTENTFUL_HOST").unwrap_or_else(|| "cdn.contentful.com".to_string()),
            locale: var("CONTENTFUL_LOCALE"),
            page_size,
            fields,
        };

        let order = var("CONTENTFUL_ORDER")
            .unwrap_or_else(|| format!("-fields.{}", contentful.fields.date))
            .parse::<SortOrder>()
            .map_err(|reason| BuildError::config("CONTENTFUL_ORDER", reason))?;

        let query = ContentQuery {
            content_type: var("CONTENTFUL_CONTENT_TYPE").unwrap_or_else(|| "記事".to_string()),
            order,
        };

        let body_format = var("SITE_BODY_FORMAT")
            .map(|raw| raw.parse::<BodyFormat>())
            .transpose()
            .map_err(|reason| BuildError::config("SITE_BODY_FORMAT", reason))?
            .unwrap_or_default();

        let excerpt_chars = var("SITE_EXCERPT_CHARS")
            .map(|raw| parse_value::<usize>("SITE_EXCERPT_CHARS", &raw))
            .transpose()?;

        Ok(Self {
            contentful,
            query,
            template_dir: PathBuf::from(
                var("SITE_TEMPLATE_DIR").unwrap_or_else(|| "src/templates".to_string()),
            ),
            public_dir: PathBuf::from(var("SITE_PUBLIC_DIR").unwrap_or_else(|| "public".to_string())),
            home_entry_count: parse_or("SITE_HOME_ENTRIES", var("SITE_HOME_ENTRIES"), 3)?,
            excerpt_chars,
            body_format,
            date_format: var("SITE_DATE_FORMAT"),
        })
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> BuildResult<T> {
    match raw {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> BuildResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| BuildError::config(key, format!("cannot parse {raw:?}")))
}

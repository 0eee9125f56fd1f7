use crate::domain::Entry;
use crate::error::{BuildError, BuildResult};
use std::collections::HashMap;
use std::path::PathBuf;

pub const ARTICLE_ROOT: &str = "news";

/// Where an entry's article page lives: the file path relative to the public
/// root, and the site-absolute link every other page uses to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePath {
    pub file: PathBuf,
    pub href: String,
}

impl ArticlePath {
    pub fn for_entry(entry: &Entry) -> BuildResult<Self> {
        let category = checked_segment(entry, &entry.category)?;
        let id = checked_segment(entry, &entry.id)?;

        Ok(Self {
            file: PathBuf::from(ARTICLE_ROOT)
                .join(category)
                .join(format!("{id}.html")),
            // categories are free text; the link must survive `#`, `?`, `%` and spaces
            href: format!(
                "/{ARTICLE_ROOT}/{}/{}.html",
                urlencoding::encode(category),
                urlencoding::encode(id)
            ),
        })
    }
}

/// Derives every entry's path up front, rejecting two entries that would
/// overwrite each other's page.
pub fn plan_article_paths(entries: &[Entry]) -> BuildResult<Vec<ArticlePath>> {
    let mut claimed: HashMap<PathBuf, &str> = HashMap::new();
    let mut paths = Vec::with_capacity(entries.len());

    for entry in entries {
        let path = ArticlePath::for_entry(entry)?;
        if let Some(first) = claimed.insert(path.file.clone(), entry.id.as_str()) {
            return Err(BuildError::PathCollision {
                path: path.file,
                first: first.to_string(),
                second: entry.id.clone(),
            });
        }
        paths.push(path);
    }

    Ok(paths)
}

fn checked_segment<'a>(entry: &Entry, segment: &'a str) -> BuildResult<&'a str> {
    let unusable = segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains(['/', '\\', '\0']);

    if unusable {
        return Err(BuildError::InvalidPathSegment {
            entry: entry.id.clone(),
            segment: segment.to_string(),
        });
    }
    Ok(segment)
}

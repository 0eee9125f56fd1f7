use crate::error::{BuildError, BuildResult};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

pub mod local;

pub use self::local::{LocalPageWriter, LocalTemplateStore};

pub const HOME_TEMPLATE: &str = "home.html";
pub const NEWS_LIST_TEMPLATE: &str = "news-list.html";
pub const ARTICLE_TEMPLATE: &str = "article.html";

pub const HOME_PAGE: &str = "index.html";
pub const NEWS_LIST_PAGE: &str = "news.html";

// hands out raw template text; re-read on every call so edits land on the next run
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn read_template(&self, name: &str) -> BuildResult<String>;
}

// writes rendered pages below the public output root
#[async_trait]
pub trait PageWriter: Send + Sync {
    async fn write_page(&self, relative: &Path, html: &str) -> BuildResult<WriteOutcome>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The file already held exactly this content.
    Unchanged,
}

/// Joins `relative` onto `root`, refusing anything that could land outside it.
pub fn verify_relative_path(root: &Path, relative: &Path) -> BuildResult<PathBuf> {
    let mut joined = root.to_path_buf();
    let mut depth = 0usize;

    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                joined.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            _ => {
                return Err(escaped_root(relative));
            }
        }
    }

    if depth == 0 {
        return Err(escaped_root(relative));
    }
    Ok(joined)
}

fn escaped_root(relative: &Path) -> BuildError {
    BuildError::FileAccess {
        action: "resolve output path",
        path: relative.to_path_buf(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path must stay inside the output root",
        ),
    }
}

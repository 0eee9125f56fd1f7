use std::path::PathBuf;
use thiserror::Error;

pub type BuildResult<T> = Result<T, BuildError>;

/// Everything that can stop a site build. No stage recovers locally; the first
/// error aborts the run and is reported once by `main`.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },

    /// Network, authentication or decoding failure talking to the content API.
    #[error("Failed to fetch entries from the content source: {reason}")]
    RemoteFetch { reason: String },

    #[error("Template not found at {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Failed to {action} {}: {source}", path.display())]
    FileAccess {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required placeholder is missing from a template.
    #[error("Template {template} has no {marker} placeholder")]
    TemplateShape { template: String, marker: String },

    #[error("Entry {entry} has an unusable path segment {segment:?}")]
    InvalidPathSegment { entry: String, segment: String },

    #[error("Entries {first} and {second} both map to {}", path.display())]
    PathCollision {
        path: PathBuf,
        first: String,
        second: String,
    },
}

impl BuildError {
    pub fn config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Config {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn remote(reason: impl Into<String>) -> Self {
        Self::RemoteFetch {
            reason: reason.into(),
        }
    }
}

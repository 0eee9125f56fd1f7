use crate::error::{BuildError, BuildResult};
use crate::io::{verify_relative_path, PageWriter, TemplateStore, WriteOutcome};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct LocalTemplateStore {
    pub root_path: PathBuf,
}

impl LocalTemplateStore {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
        }
    }
}

#[async_trait]
impl TemplateStore for LocalTemplateStore {
    async fn read_template(&self, name: &str) -> BuildResult<String> {
        let path = self.root_path.join(name);
        debug!(path = %path.display(), "reading template");

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BuildError::TemplateNotFound { path }),
            Err(source) => Err(BuildError::FileAccess {
                action: "read template",
                path,
                source,
            }),
        }
    }
}

pub struct LocalPageWriter {
    pub public_root: PathBuf,
}

impl LocalPageWriter {
    pub fn new(public_root: impl Into<PathBuf>) -> Self {
        Self {
            public_root: public_root.into(),
        }
    }
}

#[async_trait]
impl PageWriter for LocalPageWriter {
    async fn write_page(&self, relative: &Path, html: &str) -> BuildResult<WriteOutcome> {
        let target = verify_relative_path(&self.public_root, relative)?;

        // a missing or unreadable file just means we write it
        if let Ok(existing) = tokio::fs::read(&target).await {
            if existing == html.as_bytes() {
                return Ok(WriteOutcome::Unchanged);
            }
        }

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| BuildError::FileAccess {
                    action: "create directory",
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&target, html)
            .await
            .map_err(|source| BuildError::FileAccess {
                action: "write page",
                path: target.clone(),
                source,
            })?;

        Ok(WriteOutcome::Written)
    }
}

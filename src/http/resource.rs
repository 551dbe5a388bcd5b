//! Mapping request paths onto files under the document root.

use std::path::{Component, Path, PathBuf};

use crate::config::StaticFilesConfig;
use crate::http::mime;

/// A regular file found under the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    pub path: PathBuf,
    /// Size from the file's metadata at resolve time
    pub size: u64,
    pub mime_type: &'static str,
}

impl ResolvedResource {
    /// Reads the whole file. The result may differ in length from `size`
    /// if the file changed after it was resolved.
    pub async fn read(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
    home: String,
}

impl DocumentRoot {
    pub fn new(root: impl Into<PathBuf>, home: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            home: home.into(),
        }
    }

    pub fn from_config(cfg: &StaticFilesConfig) -> Self {
        Self::new(cfg.root.clone(), cfg.home.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Any path ending in `/` is replaced by the home filename.
    pub fn rewrite_home<'a>(&'a self, path: &'a str) -> &'a str {
        if path.ends_with('/') { &self.home } else { path }
    }

    /// Joins `path` onto the root without touching the filesystem.
    ///
    /// Returns `None` when the path climbs out with `..`.
    pub fn locate(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));

        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return None;
        }

        Some(self.root.join(relative))
    }

    /// Looks up a regular file for `path`.
    ///
    /// `None` means "not found": nothing there, a directory, unreadable
    /// metadata, or a path outside the root.
    pub async fn resolve(&self, path: &str) -> Option<ResolvedResource> {
        let Some(location) = self.locate(path) else {
            tracing::warn!(path, "Rejected path outside document root");
            return None;
        };

        let meta = tokio::fs::metadata(&location).await.ok()?;
        if !meta.is_file() {
            return None;
        }

        Some(ResolvedResource {
            path: location,
            size: meta.len(),
            mime_type: mime::content_type(path),
        })
    }
}

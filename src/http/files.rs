//! Access to the files the server hands out.
//!
//! Names are joined onto the static root as given. There is no
//! canonicalization, so `..` segments and absolute names reach outside the
//! root.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::config::StaticFilesConfig;
use crate::http::resolver::Resolved;

#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    bad_request_page: String,
    not_found_page: String,
}

impl StaticFiles {
    pub fn new(
        root: impl Into<PathBuf>,
        bad_request_page: impl Into<String>,
        not_found_page: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            bad_request_page: bad_request_page.into(),
            not_found_page: not_found_page.into(),
        }
    }

    pub fn from_config(cfg: &StaticFilesConfig) -> Self {
        Self::new(
            cfg.root.clone(),
            cfg.bad_request_page.clone(),
            cfg.not_found_page.clone(),
        )
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True if `name` exists below the root. Directories count.
    pub async fn exists(&self, name: &str) -> bool {
        fs::try_exists(self.root.join(name)).await.unwrap_or(false)
    }

    /// Classifies an existing file name. The error pages keep their status
    /// even when requested directly.
    pub fn classify(&self, name: &str) -> Resolved {
        if name == self.not_found_page {
            Resolved::NotFound
        } else if name == self.bad_request_page {
            Resolved::BadRequest
        } else {
            Resolved::File(name.to_string())
        }
    }

    /// File name to serve for a resolution.
    pub fn file_name<'a>(&'a self, resolved: &'a Resolved) -> &'a str {
        match resolved {
            Resolved::BadRequest => &self.bad_request_page,
            Resolved::NotFound => &self.not_found_page,
            Resolved::File(name) => name,
        }
    }

    /// Reads the whole file for `resolved`.
    pub async fn load(&self, resolved: &Resolved) -> io::Result<Vec<u8>> {
        let path = self.root.join(self.file_name(resolved));
        fs::read(&path).await.map_err(|e| {
            io::Error::new(e.kind(), format!("failed to read {}: {}", path.display(), e))
        })
    }

    /// Error pages that are not present under the root.
    pub async fn missing_error_pages(&self) -> Vec<&str> {
        let mut missing = Vec::new();
        for page in [&self.bad_request_page, &self.not_found_page] {
            if !self.exists(page).await {
                missing.push(page.as_str());
            }
        }
        missing
    }
}

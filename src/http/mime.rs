//! Content-Type lookup by file extension.

use std::collections::HashMap;

use serde::Deserialize;

/// Maps file extensions (without the dot) to MIME types.
///
/// Names whose extension is not in the table get `fallback`, which is the
/// empty string unless configured otherwise. The `Content-Type` header is
/// still sent in that case.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MimeTable {
    pub types: HashMap<String, String>,
    pub fallback: String,
}

impl Default for MimeTable {
    fn default() -> Self {
        let types = [
            ("html", "text/html"),
            ("htm", "text/html"),
            ("gif", "image/gif"),
            ("txt", "text/plain"),
        ]
        .into_iter()
        .map(|(ext, mime)| (ext.to_string(), mime.to_string()))
        .collect();

        Self {
            types,
            fallback: String::new(),
        }
    }
}

impl MimeTable {
    /// Returns the MIME type for `file_name`.
    ///
    /// Matching is a case-sensitive suffix match on `.<ext>`; the longest
    /// matching extension wins.
    pub fn content_type(&self, file_name: &str) -> &str {
        self.types
            .iter()
            .filter(|(ext, _)| {
                file_name
                    .strip_suffix(ext.as_str())
                    .is_some_and(|stem| stem.ends_with('.'))
            })
            .max_by_key(|(ext, _)| ext.len())
            .map(|(_, mime)| mime.as_str())
            .unwrap_or(self.fallback.as_str())
    }
}

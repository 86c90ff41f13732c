use tracing::debug;

use crate::http::files::StaticFiles;
use crate::http::request::Method;

/// The file a request ends up being answered with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Resolved {
    /// Malformed, rejected or unresolvable request
    #[default]
    BadRequest,
    /// Resolvable request for a name that does not exist
    NotFound,
    /// Existing file, relative to the static root
    File(String),
}

/// Maps a method and resource path to the file to serve.
///
/// Only GET and HEAD resolve. Exactly one leading `/` is stripped; an empty
/// remainder is not mapped to an index file and stays a bad request.
pub async fn resolve(method: &str, resource: &str, files: &StaticFiles) -> Resolved {
    if Method::from_str(method).is_none() {
        debug!(method, resource, "Method not served");
        return Resolved::BadRequest;
    }

    let name = resource.strip_prefix('/').unwrap_or(resource);
    if name.is_empty() {
        return Resolved::BadRequest;
    }

    if files.exists(name).await {
        files.classify(name)
    } else {
        Resolved::NotFound
    }
}

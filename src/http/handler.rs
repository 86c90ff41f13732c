use std::io;

use tracing::debug;

use crate::config::Config;
use crate::http::files::StaticFiles;
use crate::http::mime::MimeTable;
use crate::http::parser::{parse_http_request, HostPolicy};
use crate::http::resolver::{resolve, Resolved};
use crate::http::response::Response;

/// A response plus whether its body goes on the wire.
#[derive(Debug)]
pub struct Reply {
    pub response: Response,
    pub include_body: bool,
    /// File the response was built from
    pub file_name: String,
}

/// Parses, accepts, resolves and builds the response for one raw request.
///
/// Holds only read-only settings; everything about a request lives in
/// locals of [`RequestHandler::handle`].
#[derive(Debug, Clone)]
pub struct RequestHandler {
    files: StaticFiles,
    mime: MimeTable,
    policy: HostPolicy,
}

impl RequestHandler {
    pub fn new(files: StaticFiles, mime: MimeTable, policy: HostPolicy) -> Self {
        Self { files, mime, policy }
    }

    /// `port` is the port actually bound, used for the Host check.
    pub fn from_config(cfg: &Config, port: u16) -> Self {
        Self::new(
            StaticFiles::from_config(&cfg.static_files),
            cfg.mime_types.clone(),
            HostPolicy::new(&cfg.server.trusted_host, port),
        )
    }

    pub fn files(&self) -> &StaticFiles {
        &self.files
    }

    /// Fails only when the chosen file cannot be read.
    pub async fn handle(&self, raw: &str) -> io::Result<Reply> {
        let mut resolved = Resolved::default();
        let mut include_body = true;

        match parse_http_request(raw) {
            Ok(request) => {
                include_body = !request.is_head();
                match self.policy.check(&request) {
                    Ok(()) => {
                        resolved = resolve(&request.method, &request.resource, &self.files).await;
                    }
                    Err(e) => {
                        debug!(
                            error = %e,
                            method = %request.method,
                            resource = %request.resource,
                            "Rejected request"
                        );
                    }
                }
            }
            Err(e) => {
                debug!(error = %e, "Unparseable request");
            }
        }

        let body = self.files.load(&resolved).await?;
        let file_name = self.files.file_name(&resolved).to_string();
        let content_type = self.mime.content_type(&file_name);
        let response = Response::for_resource(&resolved, content_type, body);

        Ok(Reply {
            response,
            include_body,
            file_name,
        })
    }
}

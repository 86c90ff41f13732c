//! HTTP request handling.
//!
//! One request per connection. The server answers HTTP/1.0 requests, and
//! HTTP/1.1 requests that name the trusted host, with files from a static
//! root.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection state machine
//! - **`reader`**: reads the raw request up to the blank line, spotting `QUIT`
//! - **`parser`**: request line tokens and the Host acceptance policy
//! - **`request`**: parsed request representation
//! - **`resolver`**: maps method and path to a file or an error page
//! - **`files`**: existence checks and file loading under the static root
//! - **`mime`**: MIME type detection based on file extensions
//! - **`handler`**: runs parse, resolve and load for one raw request
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request head
//!        └──────┬──────┘
//!               ├─ QUIT / EOF → Closed
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, resolve, load file
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, shut down write half
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
pub mod reader;
pub mod resolver;
pub mod files;
pub mod handler;

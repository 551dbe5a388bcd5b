//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request line per connection,
//! `GET` and `HEAD` served from a document root, canned pages for 404 and
//! 501, and the connection closed after every response.
//!
//! # Architecture
//!
//! - **`connection`**: reads the request line, dispatches, and closes the stream
//! - **`parser`**: splits the request line into method and path
//! - **`request`**: method and request representation
//! - **`resource`**: maps request paths onto files under the document root
//! - **`mime`**: content type by file extension
//! - **`response`**: status codes and responses with ordered headers
//! - **`writer`**: serializes responses, headers always before body
//! - **`error_page`**: 404 and 501 responses built from static pages
//!
//! # Connection flow
//!
//! ```text
//!   read one line ──(EOF)──────────────────────────────┐
//!        │                                             │
//!      parse ──(fewer than two tokens)─────────────────┤
//!        │                                             │
//!   GET/HEAD? ──no──► 501 page ────────────────────────┤
//!        │ yes                                         │
//!     resolve ──missing──► 404 page ───────────────────┤
//!        │ found                                       │
//!   200 headers (+ body for GET) ──────────────────────┤
//!                                                      ▼
//!                                  close reader, writers, stream
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use staticd::config::Config;
//! use staticd::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Arc::new(Config::default());
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let cfg = cfg.clone();
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket, cfg).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod error_page;
pub mod mime;
pub mod parser;
pub mod request;
pub mod resource;
pub mod response;
pub mod writer;

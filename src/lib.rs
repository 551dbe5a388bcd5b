//! staticd - minimal HTTP/1.1 static file server
//!
//! One request line per connection, `GET`/`HEAD` only, files served from a
//! fixed document root.

pub mod config;
pub mod http;
pub mod server;

//! Shared fixtures: a temporary document root and a response splitter.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use staticd::config::Config;
use staticd::http::connection::{Connection, Exchange};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub const INDEX: &[u8] = b"<html><body>home</body></html>";
pub const NOT_FOUND_PAGE: &[u8] = b"<html><body>404: nothing here</body></html>";
pub const NOT_SUPPORTED_PAGE: &[u8] = b"<html><body>501: method not supported</body></html>";

/// Document root with a home page, both error pages and a few files.
pub fn docroot() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "index.html", INDEX);
    write(dir.path(), "fileNotFound.html", NOT_FOUND_PAGE);
    write(dir.path(), "methodNoSupport.html", NOT_SUPPORTED_PAGE);
    write(dir.path(), "notes.txt", b"plain notes\n");
    write(dir.path(), "data.bin", &[0u8, 159, 146, 150, 255, 10, 13]);
    std::fs::create_dir(dir.path().join("docs")).unwrap();
    write(dir.path(), "docs/report.html", b"<p>report</p>");
    dir
}

pub fn write(root: &Path, name: &str, contents: &[u8]) {
    std::fs::write(root.join(name), contents).unwrap();
}

pub fn config_for(root: &Path) -> Arc<Config> {
    let mut cfg = Config::default();
    cfg.static_files.root = root.to_path_buf();
    cfg.server.verbose = false;
    Arc::new(cfg)
}

/// Drives one connection over an in-memory pipe and returns what the
/// client received.
pub async fn exchange(cfg: Arc<Config>, request: &[u8]) -> (anyhow::Result<Exchange>, Vec<u8>) {
    let (mut client, server) = tokio::io::duplex(64 * 1024);
    let handle = tokio::spawn(Connection::new(server, cfg).run());

    client.write_all(request).await.unwrap();
    client.shutdown().await.unwrap();

    let mut received = Vec::new();
    client.read_to_end(&mut received).await.unwrap();

    (handle.await.unwrap(), received)
}

#[derive(Debug)]
pub struct Parsed {
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Parsed {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn header_names(&self) -> Vec<&str> {
        self.headers.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Headers other than `Date`, which depends on the clock.
    pub fn stable_headers(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .filter(|(k, _)| k != "Date")
            .cloned()
            .collect()
    }
}

pub fn parse_response(raw: &[u8]) -> Parsed {
    let split = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");

    let head = std::str::from_utf8(&raw[..split]).unwrap();
    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap().to_string();
    let headers = lines
        .map(|line| {
            let (k, v) = line.split_once(": ").unwrap();
            (k.to_string(), v.to_string())
        })
        .collect();

    Parsed {
        status_line,
        headers,
        body: raw[split + 4..].to_vec(),
    }
}

use anyhow::Context;
use tokio::io::AsyncWrite;

use crate::config::Config;
use crate::http::mime::TEXT_HTML;
use crate::http::resource::DocumentRoot;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

/// The two canned pages the server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPage {
    /// 404, requested file does not exist
    NotFound,
    /// 501, method other than GET or HEAD
    NotSupported,
}

impl ErrorPage {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorPage::NotFound => StatusCode::NotFound,
            ErrorPage::NotSupported => StatusCode::NotImplemented,
        }
    }
}

/// Builds 404 and 501 responses from static pages under the document root.
#[derive(Debug, Clone)]
pub struct ErrorResponder {
    not_found: String,
    not_supported: String,
    server_name: String,
}

impl ErrorResponder {
    pub fn new(
        not_found: impl Into<String>,
        not_supported: impl Into<String>,
        server_name: impl Into<String>,
    ) -> Self {
        Self {
            not_found: not_found.into(),
            not_supported: not_supported.into(),
            server_name: server_name.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.static_files.not_found_page.clone(),
            cfg.static_files.not_supported_page.clone(),
            cfg.server.server_name.clone(),
        )
    }

    pub fn filename(&self, page: ErrorPage) -> &str {
        match page {
            ErrorPage::NotFound => &self.not_found,
            ErrorPage::NotSupported => &self.not_supported,
        }
    }

    /// Reads the page and wraps it in a `text/html` response.
    ///
    /// The page is read even when `with_body` is false so that
    /// `Content-length` matches what a body-carrying response would send.
    /// A missing or unreadable page is an error.
    pub async fn build(
        &self,
        docroot: &DocumentRoot,
        page: ErrorPage,
        with_body: bool,
    ) -> anyhow::Result<Response> {
        let name = self.filename(page);
        let resource = docroot.resolve(name).await.with_context(|| {
            format!("error page {} missing under {}", name, docroot.root().display())
        })?;
        let data = resource
            .read()
            .await
            .with_context(|| format!("reading error page {}", resource.path.display()))?;

        let len = data.len() as u64;
        let body = with_body.then_some(data);

        Ok(Response::file(page.status(), &self.server_name, TEXT_HTML, len, body))
    }

    /// Builds the page response and writes it.
    pub async fn send<W: AsyncWrite + Unpin>(
        &self,
        writer: &mut ResponseWriter<W>,
        docroot: &DocumentRoot,
        page: ErrorPage,
        with_body: bool,
    ) -> anyhow::Result<StatusCode> {
        let response = self.build(docroot, page, with_body).await?;
        writer
            .send(&response)
            .await
            .context("writing error response")?;
        Ok(response.status)
    }
}

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
    ReadHalf, WriteHalf,
};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::http::error_page::{ErrorPage, ErrorResponder};
use crate::http::parser::{ParseError, parse_request_line};
use crate::http::resource::DocumentRoot;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

/// Longest request line read from a client, in bytes.
pub const MAX_REQUEST_LINE: u64 = 8 * 1024;

/// How a connection ended when no I/O fault occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    /// The client closed before sending anything
    Idle,
    /// The request line could not be parsed; nothing was sent
    Malformed(ParseError),
    /// A complete response was written
    Responded(StatusCode),
}

/// One accepted client connection: one request line in, at most one
/// response out, then close.
pub struct Connection<S> {
    stream: S,
    config: Arc<Config>,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, config: Arc<Config>) -> Self {
        Self { stream, config }
    }

    /// Serves the connection and closes it.
    ///
    /// The stream is closed on every path, including when an error is
    /// returned. Errors are I/O faults for which no response is
    /// guaranteed to have reached the client.
    pub async fn run(self) -> anyhow::Result<Exchange> {
        let Connection { stream, config } = self;

        let (read_half, write_half) = tokio::io::split(stream);
        let mut reader = BufReader::new(read_half);
        let mut writer = ResponseWriter::new(write_half);

        let result = exchange(&mut reader, &mut writer, &config).await;

        close(reader, writer).await;
        if config.server.verbose {
            info!("Connection closed");
        }

        result
    }
}

async fn exchange<R, W>(
    reader: &mut R,
    writer: &mut ResponseWriter<W>,
    config: &Config,
) -> anyhow::Result<Exchange>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(line) = read_request_line(reader)
        .await
        .context("reading request line")?
    else {
        debug!("Client closed before sending a request");
        return Ok(Exchange::Idle);
    };

    let request = match parse_request_line(&line) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "Dropping malformed request");
            return Ok(Exchange::Malformed(e));
        }
    };

    let verbose = config.server.verbose;
    let docroot = DocumentRoot::from_config(&config.static_files);
    let pages = ErrorResponder::from_config(config);

    if !request.method.is_supported() {
        if verbose {
            info!(method = %request.method, "501 Not Implemented");
        }
        let status = pages
            .send(writer, &docroot, ErrorPage::NotSupported, true)
            .await?;
        return Ok(Exchange::Responded(status));
    }

    let target = docroot.rewrite_home(&request.path);
    let Some(resource) = docroot.resolve(target).await else {
        if verbose {
            info!(path = %request.path, "404 File Not Found");
        }
        let status = pages
            .send(writer, &docroot, ErrorPage::NotFound, request.wants_body())
            .await?;
        return Ok(Exchange::Responded(status));
    };

    let server_name = &config.server.server_name;
    let response = if request.wants_body() {
        let data = resource
            .read()
            .await
            .with_context(|| format!("reading {}", resource.path.display()))?;
        // Advertise what was actually read, not the earlier metadata size.
        let len = data.len() as u64;
        Response::file(StatusCode::Ok, server_name, resource.mime_type, len, Some(data))
    } else {
        Response::file(StatusCode::Ok, server_name, resource.mime_type, resource.size, None)
    };

    writer.send(&response).await.context("writing response")?;

    if verbose {
        info!(path = target, content_type = resource.mime_type, method = %request.method, "File served");
    }

    Ok(Exchange::Responded(StatusCode::Ok))
}

/// Reads one line, up to `MAX_REQUEST_LINE` bytes.
///
/// `None` means the stream ended before any byte arrived.
async fn read_request_line<R: AsyncBufRead + Unpin>(
    reader: &mut R,
) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    let n = reader
        .take(MAX_REQUEST_LINE)
        .read_until(b'\n', &mut buf)
        .await?;

    if n == 0 {
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Releases the reader, both writers and the stream. A failure at one step
/// is logged and the remaining steps still run.
async fn close<S>(reader: BufReader<ReadHalf<S>>, mut writer: ResponseWriter<WriteHalf<S>>)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    if let Err(e) = writer.flush_head().await {
        warn!(error = %e, "Failed to flush response headers on close");
    }

    let mut write_half = writer.into_inner();
    if let Err(e) = write_half.flush().await {
        warn!(error = %e, "Failed to flush response body on close");
    }

    let read_half = reader.into_inner();

    let mut stream = read_half.unsplit(write_half);
    if let Err(e) = stream.shutdown().await {
        warn!(error = %e, "Failed to shut down connection");
    }
}

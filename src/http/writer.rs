use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

fn serialize_head(resp: &Response, buf: &mut BytesMut) {
    // Status line
    buf.put_slice(
        format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            resp.status.as_u16(),
            resp.status.reason_phrase()
        )
        .as_bytes(),
    );

    // Headers
    for (k, v) in &resp.headers {
        buf.put_slice(k.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(v.as_bytes());
        buf.put_slice(b"\r\n");
    }

    // Header/body separator
    buf.put_slice(b"\r\n");
}

/// Writes responses onto one byte stream.
///
/// Header text is staged in a buffer and always pushed to the stream
/// before any body bytes, so head and body never interleave out of order.
pub struct ResponseWriter<W> {
    stream: W,
    head: BytesMut,
}

impl<W: AsyncWrite + Unpin> ResponseWriter<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream,
            head: BytesMut::with_capacity(256),
        }
    }

    /// Writes status line, headers, blank line and, if present, the body.
    pub async fn send(&mut self, resp: &Response) -> std::io::Result<()> {
        serialize_head(resp, &mut self.head);
        self.flush_head().await?;

        if let Some(body) = &resp.body {
            self.write_body(body).await?;
        }

        self.stream.flush().await
    }

    /// Pushes any staged header bytes to the stream.
    pub async fn flush_head(&mut self) -> std::io::Result<()> {
        if !self.head.is_empty() {
            self.stream.write_all_buf(&mut self.head).await?;
        }
        Ok(())
    }

    pub async fn write_body(&mut self, body: &[u8]) -> std::io::Result<()> {
        self.flush_head().await?;
        self.stream.write_all(body).await
    }

    pub fn into_inner(self) -> W {
        self.stream
    }
}

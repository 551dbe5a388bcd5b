use std::time::SystemTime;

/// HTTP status codes sent by the server.
///
/// - `Ok` (200): file found and served
/// - `NotFound` (404): no regular file at the requested path
/// - `NotImplemented` (501): method other than GET or HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 File Not Found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase written on the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "File Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "File Not Found",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// A complete HTTP response ready to be written to a client.
///
/// Headers keep insertion order. `body` is `None` for `HEAD` responses,
/// which still advertise the full `Content-length`.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Headers in the order they go on the wire
    pub headers: Vec<(String, String)>,
    /// Body bytes, if any are sent
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use staticd::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-type", "text/plain")
///     .body(b"hi".to_vec())
///     .build();
/// assert_eq!(response.header("Content-type"), Some("text/plain"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header. Names are not de-duplicated.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Builds a file response with the fixed header set:
    /// `Server`, `Date`, `Content-type`, `Content-length`.
    ///
    /// `content_length` is what the client is told; `body` may be `None`
    /// for `HEAD`.
    pub fn file(
        status: StatusCode,
        server_name: &str,
        content_type: &str,
        content_length: u64,
        body: Option<Vec<u8>>,
    ) -> Self {
        let builder = ResponseBuilder::new(status)
            .header("Server", server_name)
            .header("Date", httpdate::fmt_http_date(SystemTime::now()))
            .header("Content-type", content_type)
            .header("Content-length", content_length.to_string());

        match body {
            Some(body) => builder.body(body).build(),
            None => builder.build(),
        }
    }

    /// Looks up the first header with this name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP request methods.
///
/// Only `GET` and `HEAD` are served; every other token is carried as
/// `Other` and answered with 501 Not Implemented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// Any other method token, upper-cased
    Other(String),
}

/// The part of a client request this server looks at: the first two tokens
/// of the request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The requested path, lower-cased (e.g. "/index.html")
    pub path: String,
}

impl Method {
    /// Parses a method token, ignoring case.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::request::Method;
    /// assert_eq!(Method::from_token("get"), Method::GET);
    /// assert_eq!(Method::from_token("Post"), Method::Other("POST".into()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        let upper = token.to_ascii_uppercase();
        match upper.as_str() {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            _ => Method::Other(upper),
        }
    }

    /// Returns `true` for the methods this server answers with a file.
    pub fn is_supported(&self) -> bool {
        matches!(self, Method::GET | Method::HEAD)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Request {
    /// `HEAD` responses carry headers only.
    pub fn wants_body(&self) -> bool {
        self.method != Method::HEAD
    }
}

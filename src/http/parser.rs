use crate::http::request::{Method, Request};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line holds no tokens at all
    Empty,
    /// A method token with nothing after it
    MissingPath,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty request line"),
            ParseError::MissingPath => f.write_str("request line has no path"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses `<METHOD> <path> [<version>]`.
///
/// Tokens are separated by any whitespace. Everything after the path is
/// ignored. The method is upper-cased and the path lower-cased.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::Empty)?;
    let path = parts.next().ok_or(ParseError::MissingPath)?;

    Ok(Request {
        method: Method::from_token(method),
        path: path.to_lowercase(),
    })
}

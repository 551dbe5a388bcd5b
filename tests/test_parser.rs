use staticd::http::parser::{ParseError, parse_request_line};
use staticd::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let parsed = parse_request_line("GET /index.html HTTP/1.1\r\n").unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/index.html");
}

#[test]
fn test_parse_without_version() {
    let parsed = parse_request_line("HEAD /notes.txt").unwrap();

    assert_eq!(parsed.method, Method::HEAD);
    assert_eq!(parsed.path, "/notes.txt");
}

#[test]
fn test_parse_ignores_trailing_tokens() {
    let parsed = parse_request_line("GET /a HTTP/1.1 extra junk\n").unwrap();

    assert_eq!(parsed.path, "/a");
}

#[test]
fn test_parse_normalizes_case() {
    let parsed = parse_request_line("get /Docs/Report.HTML HTTP/1.1").unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/docs/report.html");
}

#[test]
fn test_parse_tabs_and_repeated_spaces() {
    let parsed = parse_request_line("  GET\t\t/x   HTTP/1.0").unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/x");
}

#[test]
fn test_parse_unknown_method_is_kept() {
    let parsed = parse_request_line("brew /pot HTTP/1.1").unwrap();

    assert_eq!(parsed.method, Method::Other("BREW".to_string()));
    assert!(!parsed.method.is_supported());
}

#[test]
fn test_parse_single_token_missing_path() {
    assert_eq!(parse_request_line("GET\r\n"), Err(ParseError::MissingPath));
}

#[test]
fn test_parse_whitespace_only_is_empty() {
    assert_eq!(parse_request_line(" \t \r\n"), Err(ParseError::Empty));
    assert_eq!(parse_request_line(""), Err(ParseError::Empty));
}

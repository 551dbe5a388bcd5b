//! Content-type lookup by file extension.

pub const TEXT_HTML: &str = "text/html";
pub const TEXT_PLAIN: &str = "text/plain";

/// Returns the content type for `path`.
///
/// `.htm` and `.html` are HTML; everything else is served as plain text.
/// The match is case-sensitive: request paths are lower-cased before they
/// get here.
pub fn content_type(path: &str) -> &'static str {
    if path.ends_with(".htm") || path.ends_with(".html") {
        TEXT_HTML
    } else {
        TEXT_PLAIN
    }
}

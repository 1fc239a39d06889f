//! Script text minification
//!
//! This is a pattern-based pass, not a lexer. Line comments are only
//! recognized when the `//` is not directly preceded by a quote or backtick,
//! so `'//cdn.example.com'` survives but `"http://example.com"` loses
//! everything after `http:` on that line.

use regex::Regex;
use std::sync::LazyLock;

/// `//` up to the end of the line, with the preceding character captured
static LINE_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([^"'`])//[^\n]*"#).unwrap());

static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Whitespace around operators and punctuation
static OPERATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([=+\-*/%<>!&|,;{}()\[\]])\s*").unwrap());

static STATEMENT_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";\s*\n\s*").unwrap());

/// Strip comments and insignificant whitespace from script statements.
pub fn minify_js(js: &str) -> String {
    let js = LINE_COMMENT_REGEX.replace_all(js, "$1");
    let js = BLOCK_COMMENT_REGEX.replace_all(&js, "");
    let js = WHITESPACE_REGEX.replace_all(&js, " ");
    let js = OPERATOR_REGEX.replace_all(&js, "$1");
    let js = STATEMENT_BREAK_REGEX.replace_all(&js, ";");
    js.trim().to_string()
}

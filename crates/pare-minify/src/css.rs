//! Style text minification
//!
//! Used for `<style>` element bodies and inline `style="..."` values.

use regex::Regex;
use std::sync::LazyLock;

/// `/* ... */`, possibly spanning lines
static COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Whitespace around the structural characters of a rule
static PUNCTUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([{}:;,])\s*").unwrap());

/// Declaration terminators right before a closing brace
static TRAILING_SEMICOLON_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";+\}").unwrap());

/// Strip comments and insignificant whitespace from style rules.
///
/// ```
/// assert_eq!(
///     pare_minify::minify_css(".a { color: red; margin: 0px; }"),
///     ".a{color:red;margin:0px}"
/// );
/// ```
pub fn minify_css(css: &str) -> String {
    let css = COMMENT_REGEX.replace_all(css, "");
    let css = WHITESPACE_REGEX.replace_all(&css, " ");
    let css = PUNCTUATION_REGEX.replace_all(&css, "$1");
    let css = TRAILING_SEMICOLON_REGEX.replace_all(&css, "}");
    css.trim().to_string()
}

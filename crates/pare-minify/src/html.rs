//! Document minification
//!
//! The document pass runs a fixed sequence of rewrites. Order matters: each
//! step sees the output of the previous one, so style and script bodies are
//! minified before whitespace between tags is collapsed.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::css::minify_css;
use crate::js::minify_js;

/// `<style ...>body</style>` with opening tag, body and closing tag captured
static STYLE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(<style[^>]*>)(.*?)(</style>)").unwrap());

/// `<script ...>body</script>` with opening tag, body and closing tag captured
static SCRIPT_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(<script[^>]*>)(.*?)(</script>)").unwrap());

static INLINE_STYLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"style="([^"]*)""#).unwrap());

static BETWEEN_TAGS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// Script type whose body is data, not code
const STRUCTURED_DATA_MARKER: &str = "application/ld+json";

/// Legacy browser conditional comment prefix
const CONDITIONAL_MARKER: &str = "[if";

/// What a `<script>` element holds, decided from its opening tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    /// Declarative data (JSON-LD); passed through untouched
    StructuredData,
    /// Executable code; eligible for minification
    Executable,
}

impl ScriptKind {
    /// Classify a script block by the attributes on its opening tag.
    pub fn of_opening_tag(tag: &str) -> Self {
        if tag.contains(STRUCTURED_DATA_MARKER) {
            Self::StructuredData
        } else {
            Self::Executable
        }
    }
}

/// What an HTML comment is, decided from the text right after `<!--`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `<!--[if ...]>`; kept verbatim
    Conditional,
    /// Anything else; deleted
    Removable,
}

impl CommentKind {
    /// Classify a comment by the text following its `<!--` opener.
    pub fn of_body(body: &str) -> Self {
        if body.starts_with(CONDITIONAL_MARKER) {
            Self::Conditional
        } else {
            Self::Removable
        }
    }
}

/// Minify a whole HTML document, including its inline CSS and JavaScript.
///
/// Pure and total: malformed markup passes through whichever step would
/// have handled it, and the output is never longer than the input.
pub fn minify_html(html: &str) -> String {
    let input_len = html.len();

    let html = STYLE_BLOCK_REGEX.replace_all(html, |caps: &Captures| {
        format!("{}{}{}", &caps[1], minify_css(&caps[2]), &caps[3])
    });
    tracing::trace!(bytes = html.len(), "minified style blocks");

    let html = SCRIPT_BLOCK_REGEX.replace_all(&html, |caps: &Captures| {
        match ScriptKind::of_opening_tag(&caps[1]) {
            ScriptKind::StructuredData => caps[0].to_string(),
            ScriptKind::Executable => {
                format!("{}{}{}", &caps[1], minify_js(&caps[2]), &caps[3])
            }
        }
    });
    tracing::trace!(bytes = html.len(), "minified script blocks");

    let html = INLINE_STYLE_REGEX.replace_all(&html, |caps: &Captures| {
        format!("style=\"{}\"", minify_inline_style(&caps[1]))
    });
    tracing::trace!(bytes = html.len(), "minified inline styles");

    let html = strip_comments(&html);
    tracing::trace!(bytes = html.len(), "stripped comments");

    let html = BETWEEN_TAGS_REGEX.replace_all(&html, "><");
    let html = WHITESPACE_REGEX.replace_all(&html, " ");
    let html = html.trim().to_string();

    tracing::debug!(
        input_bytes = input_len,
        output_bytes = html.len(),
        "minified document"
    );
    html
}

/// An attribute value has no closing brace, so its trailing declaration
/// terminators are dropped as well.
fn minify_inline_style(value: &str) -> String {
    minify_css(value).trim_end_matches(';').to_string()
}

/// Remove every `<!-- ... -->` except conditional comments.
///
/// An opener without a matching `-->` is left in place, along with
/// everything after it.
fn strip_comments(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find(COMMENT_OPEN) {
        let body_start = start + COMMENT_OPEN.len();
        let body = &rest[body_start..];

        if CommentKind::of_body(body) == CommentKind::Conditional {
            out.push_str(&rest[..body_start]);
            rest = body;
            continue;
        }

        let Some(end) = body.find(COMMENT_CLOSE) else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &body[end + COMMENT_CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

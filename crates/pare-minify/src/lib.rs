//! # pare-minify
//!
//! Pattern-based minification for hand-written static pages: `<style>`
//! bodies, inline `style` attributes, `<script>` bodies, HTML comments and
//! inter-tag whitespace.
//!
//! Every function here is a pure `&str -> String` rewrite. There is no I/O
//! and nothing can fail.
//!
//! ## Example
//!
//! ```
//! let html = "<div>\n   <span>x</span>\n</div>";
//! assert_eq!(pare_minify::minify(html), "<div><span>x</span></div>");
//! ```

mod css;
mod html;
mod js;

pub use css::minify_css;
pub use html::{CommentKind, ScriptKind, minify_html};
pub use js::minify_js;

/// Minify an HTML document. Alias of [`minify_html`].
pub fn minify(document: &str) -> String {
    minify_html(document)
}

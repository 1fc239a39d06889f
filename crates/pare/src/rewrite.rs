//! Post-minification asset path rewriting

use crate::config::Rewrite;

/// Apply each rewrite in order as a literal replace-all.
///
/// Returns the rewritten text and the total number of replaced occurrences.
/// A later rewrite sees the output of the earlier ones.
pub fn apply_rewrites(html: &str, rewrites: &[Rewrite]) -> (String, usize) {
    let mut out = html.to_string();
    let mut replaced = 0;

    for rewrite in rewrites {
        if rewrite.from.is_empty() {
            continue;
        }
        let count = out.matches(rewrite.from.as_str()).count();
        if count > 0 {
            out = out.replace(rewrite.from.as_str(), &rewrite.to);
            replaced += count;
        }
    }

    (out, replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(from: &str, to: &str) -> Rewrite {
        Rewrite {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_image_folder_rewrite() {
        let html = r#"<img src="images/a.jpg"><img src="images/b.jpg">"#;
        let (out, count) = apply_rewrites(html, &[rewrite("images/", "images-compressed/")]);
        assert_eq!(
            out,
            r#"<img src="images-compressed/a.jpg"><img src="images-compressed/b.jpg">"#
        );
        assert_eq!(count, 2);
    }

    #[test]
    fn test_rewrites_apply_in_order() {
        let (out, count) = apply_rewrites("a", &[rewrite("a", "b"), rewrite("b", "c")]);
        assert_eq!(out, "c");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_no_match() {
        let (out, count) = apply_rewrites("<p>x</p>", &[rewrite("images/", "img/")]);
        assert_eq!(out, "<p>x</p>");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_empty_from_is_ignored() {
        let (out, count) = apply_rewrites("abc", &[rewrite("", "x")]);
        assert_eq!(out, "abc");
        assert_eq!(count, 0);
    }
}

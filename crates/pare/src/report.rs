//! Human-readable run summary

use std::fmt;

use owo_colors::OwoColorize;

use crate::process::FileOutcome;

/// Byte sizes before and after one file was minified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub original_bytes: usize,
    pub minified_bytes: usize,
}

impl SizeReport {
    pub fn new(original_bytes: usize, minified_bytes: usize) -> Self {
        Self {
            original_bytes,
            minified_bytes,
        }
    }

    /// Percentage of bytes saved; 0.0 for an empty input
    pub fn reduction_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.minified_bytes as f64 / self.original_bytes as f64) * 100.0
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "   Original size: {} bytes",
            group_thousands(self.original_bytes)
        )?;
        writeln!(
            f,
            "   Minified size: {} bytes",
            group_thousands(self.minified_bytes)
        )?;
        write!(f, "   Reduction: {:.1}%", self.reduction_percent())
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render the summary printed after a file is done.
pub fn render_summary(outcome: &FileOutcome, color: bool) -> String {
    let mut lines = Vec::new();

    let verb = if outcome.written {
        "Minified"
    } else {
        "Minified (dry run)"
    };
    let headline = format!("{} {}", verb, outcome.input);
    if color {
        lines.push(format!("{} {}", "✓".green().bold(), headline.bold()));
    } else {
        lines.push(format!("✓ {headline}"));
    }

    lines.push(outcome.sizes.to_string());

    let output = outcome.output.to_string();
    if color {
        lines.push(format!("   Output: {}", output.cyan()));
    } else {
        lines.push(format!("   Output: {output}"));
    }

    let mut passes = vec![
        "inline CSS minified".to_string(),
        "JavaScript minified".to_string(),
        "HTML compacted".to_string(),
    ];
    if outcome.rewrite_rules > 0 {
        passes.push(format!(
            "asset paths rewritten ({} replacements)",
            outcome.rewrites_applied
        ));
    }
    for pass in passes {
        if color {
            lines.push(format!("   {} {}", "•".dimmed(), pass));
        } else {
            lines.push(format!("   • {pass}"));
        }
    }

    lines.join("\n")
}

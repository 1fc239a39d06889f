//! One input file, start to finish: read, minify, rewrite, write.

use camino::{Utf8Path, Utf8PathBuf};

use crate::config::ResolvedConfig;
use crate::error::FileError;
use crate::report::SizeReport;
use crate::rewrite::apply_rewrites;

/// What happened to one input file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub input: Utf8PathBuf,
    pub output: Utf8PathBuf,
    pub sizes: SizeReport,
    /// Number of configured rewrite rules
    pub rewrite_rules: usize,
    /// Number of occurrences the rules replaced
    pub rewrites_applied: usize,
    /// False on a dry run
    pub written: bool,
}

/// `dir/page.html` + `-optimized` -> `dir/page-optimized.html`
pub fn default_output_path(input: &Utf8Path, suffix: &str) -> Utf8PathBuf {
    match (input.file_stem(), input.extension()) {
        (Some(stem), Some(ext)) => input.with_file_name(format!("{stem}{suffix}.{ext}")),
        (Some(stem), None) => input.with_file_name(format!("{stem}{suffix}")),
        _ => Utf8PathBuf::from(format!("{input}{suffix}")),
    }
}

/// Minify `input` into `output`; with `dry_run` nothing is written.
pub fn process_file(
    input: &Utf8Path,
    output: &Utf8Path,
    config: &ResolvedConfig,
    dry_run: bool,
) -> Result<FileOutcome, FileError> {
    if !input.exists() {
        return Err(FileError::NotFound {
            path: input.to_owned(),
        });
    }

    tracing::info!("Minifying {}", input);

    let html = fs_err::read_to_string(input).map_err(|source| FileError::Read {
        path: input.to_owned(),
        source,
    })?;

    let minified = pare_minify::minify(&html);
    let (minified, rewrites_applied) = apply_rewrites(&minified, &config.rewrites);
    if rewrites_applied > 0 {
        tracing::debug!("Rewrote {} asset path occurrences", rewrites_applied);
    }

    if dry_run {
        tracing::info!("Dry run, not writing {}", output);
    } else {
        fs_err::write(output, &minified).map_err(|source| FileError::Write {
            path: output.to_owned(),
            source,
        })?;
    }

    Ok(FileOutcome {
        input: input.to_owned(),
        output: output.to_owned(),
        sizes: SizeReport::new(html.len(), minified.len()),
        rewrite_rules: config.rewrites.len(),
        rewrites_applied,
        written: !dry_run,
    })
}

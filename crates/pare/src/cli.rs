//! The run loop behind the `pare` binary
//!
//! Argument parsing stays in `main.rs`; everything after it lives here so
//! it can be driven with in-memory writers.

use std::error::Error as _;
use std::io::Write;

use camino::Utf8PathBuf;
use eyre::{Result, eyre};
use owo_colors::OwoColorize;

use crate::config::ResolvedConfig;
use crate::process::{default_output_path, process_file};
use crate::report::render_summary;

/// Parsed command line
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub inputs: Vec<Utf8PathBuf>,
    /// Explicit output path, only allowed with one input
    pub output: Option<Utf8PathBuf>,
    /// Explicit config file; otherwise `.config/pare.yaml` is discovered
    pub config: Option<Utf8PathBuf>,
    pub quiet: bool,
    pub dry_run: bool,
    /// Colorize the report and error labels
    pub color: bool,
}

/// Process every input, writing reports to `out` and per-file errors to `err`.
///
/// Returns `Ok(false)` if any input failed. Usage and config errors abort the
/// whole run before any file is touched.
pub fn run(opts: &RunOptions, out: &mut impl Write, err: &mut impl Write) -> Result<bool> {
    if opts.inputs.is_empty() {
        return Err(eyre!("no input files given"));
    }
    if opts.output.is_some() && opts.inputs.len() > 1 {
        return Err(eyre!(
            "--output can only be used with a single input ({} given)",
            opts.inputs.len()
        ));
    }

    let config = match &opts.config {
        Some(path) => ResolvedConfig::load(path)?,
        None => ResolvedConfig::discover()?,
    };
    if let Some(root) = &config.root {
        tracing::debug!("Project root: {}", root);
    }

    let mut all_ok = true;

    for input in &opts.inputs {
        let output = match &opts.output {
            Some(output) => output.clone(),
            None => default_output_path(input, &config.output_suffix),
        };

        match process_file(input, &output, &config, opts.dry_run) {
            Ok(outcome) => {
                if !opts.quiet {
                    writeln!(out, "{}\n", render_summary(&outcome, opts.color))?;
                }
            }
            Err(e) => {
                all_ok = false;
                let label = if opts.color {
                    "error".red().bold().to_string()
                } else {
                    "error".to_string()
                };
                match e.source() {
                    Some(source) => writeln!(err, "{label}: {e}: {source}")?,
                    None => writeln!(err, "{label}: {e}")?,
                }
            }
        }
    }

    Ok(all_ok)
}

//! Configuration file discovery and parsing
//!
//! Searches for `.config/pare.yaml` walking up from the current directory.
//! The project root is the parent of `.config/`. Without a config file the
//! defaults apply.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{Result, eyre};
use facet::Facet;
use std::env;

const CONFIG_DIR: &str = ".config";
const CONFIG_FILE: &str = "pare.yaml";

/// Suffix inserted before the extension of the default output path
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-optimized";

/// pare configuration from `.config/pare.yaml`
#[derive(Debug, Clone, Default, Facet)]
#[facet(rename_all = "snake_case")]
pub struct PareConfig {
    /// Suffix for the default output file name (`page.html` -> `page<suffix>.html`)
    #[facet(default)]
    pub output_suffix: Option<String>,

    /// Literal substitutions applied to the minified output, in order
    #[facet(default)]
    pub rewrites: Option<Vec<Rewrite>>,
}

/// A literal `from -> to` substitution, e.g. pointing image references at a
/// folder of compressed copies.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct Rewrite {
    pub from: String,
    pub to: String,
}

/// Configuration with defaults filled in
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Project root (parent of .config/), if a config file was found
    pub root: Option<Utf8PathBuf>,
    pub output_suffix: String,
    pub rewrites: Vec<Rewrite>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            root: None,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            rewrites: Vec::new(),
        }
    }
}

impl ResolvedConfig {
    /// Discover and load configuration from the current directory
    pub fn discover() -> Result<Self> {
        let cwd = env::current_dir()?;
        let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| {
            eyre!(
                "Current directory is not valid UTF-8: {}",
                e.as_path().display()
            )
        })?;
        Self::discover_from(&cwd)
    }

    /// Discover and load configuration walking up from `start`
    pub fn discover_from(start: &Utf8Path) -> Result<Self> {
        match find_config_file(start) {
            Some(path) => {
                tracing::debug!("Using config file {}", path);
                load_config(&path)
            }
            None => {
                tracing::debug!("No {}/{} found, using defaults", CONFIG_DIR, CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit file path
    pub fn load(path: &Utf8Path) -> Result<Self> {
        if !path.exists() {
            return Err(eyre!("Config file not found: {}", path));
        }
        load_config(path)
    }
}

fn find_config_file(start: &Utf8Path) -> Option<Utf8PathBuf> {
    let mut current = start;

    loop {
        let candidate = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }

        current = current.parent()?;
    }
}

fn load_config(config_path: &Utf8Path) -> Result<ResolvedConfig> {
    let content = fs_err::read_to_string(config_path)?;

    let config: PareConfig = if content.trim().is_empty() {
        PareConfig::default()
    } else {
        facet_yaml::from_str(&content)
            .map_err(|e| eyre!("Failed to parse {}: {}", config_path, e))?
    };

    let rewrites = config.rewrites.unwrap_or_default();
    if let Some(index) = rewrites.iter().position(|r| r.from.is_empty()) {
        return Err(eyre!(
            "Invalid {}: rewrite #{} has an empty `from`",
            config_path,
            index + 1
        ));
    }

    // Project root is the parent of .config/ when the file lives there
    let root = config_path
        .parent()
        .filter(|dir| dir.file_name() == Some(CONFIG_DIR))
        .and_then(|dir| dir.parent())
        .map(|root| root.to_owned());

    Ok(ResolvedConfig {
        root,
        output_suffix: config
            .output_suffix
            .unwrap_or_else(|| DEFAULT_OUTPUT_SUFFIX.to_string()),
        rewrites,
    })
}

//! Per-file errors
//!
//! Each variant is fatal for the file it names; the other inputs of the same
//! run are still processed. `Read` and `Write` wrap `fs_err` errors, which
//! already carry the path, so their own messages leave it out.

use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The input path does not exist
    #[error("input file not found: {path}")]
    NotFound { path: Utf8PathBuf },

    /// Reading failed, including input that is not valid UTF-8
    #[error("failed to read input")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    /// The file the error is about
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            Self::NotFound { path } | Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

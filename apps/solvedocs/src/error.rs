//! Error type for the command-line tool.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file the command rewrites in place is not there.
    #[error("{} does not exist", .0.display())]
    MissingFile(PathBuf),

    /// The cache file exists but cannot be parsed.
    #[error("invalid cache file {}: {source}", path.display())]
    InvalidCache {
        path: PathBuf,
        #[source]
        source: solvedocs_core::Error,
    },

    #[error(transparent)]
    Core(#[from] solvedocs_core::Error),

    #[error(transparent)]
    Client(#[from] solvedocs_client::Error),
}

impl CliError {
    /// Adapter for `map_err` that attaches the path to an I/O error.
    pub fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

//! Error types for dirtree

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    /// The root argument does not resolve to an existing directory.
    #[error("Directory not found at '{}'", path.display())]
    NotADirectory { path: PathBuf },

    /// Writing the rendered tree to the output file failed.
    #[error("Error writing to file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TreeError>;

//! Root directory resolution

use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

/// Resolve the root argument to an absolute, canonical directory path.
///
/// Anything that does not end up at an existing directory (missing path,
/// regular file, dangling symlink) is reported as `NotADirectory`, naming the
/// most resolved form of the path available.
pub fn resolve_root(arg: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(arg).unwrap_or_else(|_| arg.to_path_buf());
    match absolute.canonicalize() {
        Ok(path) if path.is_dir() => Ok(path),
        Ok(path) => Err(TreeError::NotADirectory { path }),
        Err(_) => Err(TreeError::NotADirectory { path: absolute }),
    }
}

//! Directory listing

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

/// An immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir,
        }
    }
}

/// Source of directory contents for the walker.
pub trait DirLister {
    /// List the immediate children of `dir`, in any order.
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>>;
}

impl<L: DirLister + ?Sized> DirLister for &L {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        (**self).list(dir)
    }
}

/// Lists directories on the real filesystem.
///
/// Symlinks are followed when deciding whether an entry is a directory, so a
/// link to a directory is descended into and a dangling link shows as a file.
///
/// If an entry cannot be examined because the directory is not searchable,
/// the whole listing fails with `PermissionDenied`. Other metadata failures
/// (dangling links, symlink loops) leave the entry as a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();
            let is_dir = match fs::metadata(&path) {
                Ok(meta) => meta.is_dir(),
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => return Err(e),
                Err(e) if e.kind() == io::ErrorKind::NotFound => false,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cannot stat entry, treating as file");
                    false
                }
            };
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
                path,
            });
        }
        Ok(entries)
    }
}

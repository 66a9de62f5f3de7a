//! Name-based exclusion sets
//!
//! Entries are matched by exact base name. Directory names and file names are
//! kept in separate sets so that excluding `build` does not hide a file called
//! `build`.

use std::collections::BTreeSet;
use std::path::Path;

/// Directory names skipped unless the caller builds its own set.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".git",
    "venv",
    ".venv",
    ".vscode",
    ".idea",
    "dist",
    "build",
];

/// File names skipped unless the caller builds its own set.
pub const DEFAULT_EXCLUDE_FILES: &[&str] = &[".DS_Store"];

/// Which set a user-supplied token lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Dir,
    File,
}

/// Classify an exclusion token.
///
/// A token names a file when its last path component contains a `.` and the
/// token itself does not start with one. Everything else (`build`, `.env`,
/// `.cache`) names a directory. This is a naming heuristic, not a filesystem
/// check: `.env` is treated as a directory even if it is a file on disk.
pub fn classify_token(token: &str) -> TokenKind {
    let base_has_dot = Path::new(token)
        .file_name()
        .is_some_and(|name| name.to_string_lossy().contains('.'));

    if base_has_dot && !token.starts_with('.') {
        TokenKind::File
    } else {
        TokenKind::Dir
    }
}

/// Directory and file names to leave out of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusions {
    dirs: BTreeSet<String>,
    files: BTreeSet<String>,
}

impl Exclusions {
    /// An exclusion set that excludes nothing.
    pub fn empty() -> Self {
        Self {
            dirs: BTreeSet::new(),
            files: BTreeSet::new(),
        }
    }

    /// Return a new set with `tokens` merged in, classified by [`classify_token`].
    ///
    /// `self` is left untouched, so the defaults can be shared freely.
    pub fn with_tokens<I, S>(&self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut merged = self.clone();
        for token in tokens {
            let token = token.as_ref();
            match classify_token(token) {
                TokenKind::File => merged.files.insert(token.to_string()),
                TokenKind::Dir => merged.dirs.insert(token.to_string()),
            };
        }
        merged
    }

    pub fn excludes_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    pub fn excludes_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    /// Check an entry against the set matching its kind.
    pub fn excludes(&self, name: &str, is_dir: bool) -> bool {
        if is_dir {
            self.excludes_dir(name)
        } else {
            self.excludes_file(name)
        }
    }

    pub fn dirs(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }
}

impl Default for Exclusions {
    fn default() -> Self {
        Self {
            dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            files: DEFAULT_EXCLUDE_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

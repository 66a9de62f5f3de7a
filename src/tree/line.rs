//! Output of a tree walk: rendered lines and subtree counts

use std::fmt;
use std::ops::AddAssign;

use super::traversal::Connector;

/// What a line in the tree stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The synthetic first line naming the scanned directory.
    Root,
    Dir,
    File,
    /// A directory whose contents could not be listed.
    Error,
}

/// One line of the rendered tree.
///
/// Displays as `prefix + connector + name`, except for the root line which
/// displays as `name/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub prefix: String,
    pub connector: Option<Connector>,
    pub name: String,
    pub kind: LineKind,
}

impl TreeLine {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            connector: None,
            name: name.into(),
            kind: LineKind::Root,
        }
    }

    pub fn entry(prefix: &str, connector: Connector, name: &str, is_dir: bool) -> Self {
        Self {
            prefix: prefix.to_string(),
            connector: Some(connector),
            name: name.to_string(),
            kind: if is_dir { LineKind::Dir } else { LineKind::File },
        }
    }

    /// Marker standing in for the children of an unreadable directory.
    pub fn error(prefix: &str, message: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            connector: Some(Connector::Corner),
            name: format!("[Error: {}]", message),
            kind: LineKind::Error,
        }
    }

    /// The decoration in front of the name: prefix plus connector glyph.
    pub fn lead(&self) -> String {
        match self.connector {
            Some(c) => format!("{}{}", self.prefix, c.glyph()),
            None => self.prefix.clone(),
        }
    }

    /// The name as printed, with the trailing slash on the root.
    pub fn label(&self) -> String {
        match self.kind {
            LineKind::Root => format!("{}/", self.name),
            _ => self.name.clone(),
        }
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.lead(), self.label())
    }
}

/// Directory and file totals for a subtree, not counting its own root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub dirs: usize,
    pub files: usize,
}

impl Counts {
    pub fn new(dirs: usize, files: usize) -> Self {
        Self { dirs, files }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Self) {
        self.dirs += other.dirs;
        self.files += other.files;
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} directories, {} files", self.dirs, self.files)
    }
}

/// Lines produced by a walk, in traversal order, and the totals beneath the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub lines: Vec<TreeLine>,
    pub counts: Counts,
}

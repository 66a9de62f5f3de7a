//! Ordering and connector rules shared by the walker and the formatters.

use crate::exclude::Exclusions;

use super::lister::DirEntryInfo;

/// Branch glyph in front of an entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `├── `, used for every sibling but the last.
    Tee,
    /// `└── `, used for the last sibling.
    Corner,
}

impl Connector {
    /// Connector for the entry at `index` among `total` siblings.
    pub fn for_position(index: usize, total: usize) -> Self {
        if index + 1 == total {
            Connector::Corner
        } else {
            Connector::Tee
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Connector::Tee => "├── ",
            Connector::Corner => "└── ",
        }
    }

    /// Prefix for the children of an entry drawn with this connector.
    pub fn child_prefix(self, current_prefix: &str) -> String {
        match self {
            Connector::Tee => format!("{}│   ", current_prefix),
            Connector::Corner => format!("{}    ", current_prefix),
        }
    }
}

/// Drop excluded entries and order the rest: directories first, then files,
/// each group by lowercase name. Names that only differ in case keep a fixed
/// order by falling back to the raw name.
pub fn sort_entries(entries: Vec<DirEntryInfo>, exclusions: &Exclusions) -> Vec<DirEntryInfo> {
    let mut visible: Vec<_> = entries
        .into_iter()
        .filter(|entry| !exclusions.excludes(&entry.name, entry.is_dir))
        .collect();

    visible.sort_by(|a, b| {
        (!a.is_dir, a.name.to_lowercase(), &a.name).cmp(&(!b.is_dir, b.name.to_lowercase(), &b.name))
    });
    visible
}

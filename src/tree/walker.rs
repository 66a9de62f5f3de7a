//! TreeWalker - depth-first traversal producing tree lines and counts

use std::io;
use std::path::Path;

use tracing::{debug, trace, warn};

use super::config::WalkerConfig;
use super::line::{Counts, Listing, TreeLine};
use super::lister::{DirLister, FsLister};
use super::traversal::{Connector, sort_entries};

/// Walks a directory and renders every visible entry beneath it.
pub struct TreeWalker<L = FsLister> {
    config: WalkerConfig,
    lister: L,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            lister: FsLister,
        }
    }
}

impl<L: DirLister> TreeWalker<L> {
    /// Replace the directory source, e.g. with an in-memory lister in tests.
    pub fn with_lister<M: DirLister>(self, lister: M) -> TreeWalker<M> {
        TreeWalker {
            config: self.config,
            lister,
        }
    }

    /// Walk `root` and return the lines beneath it plus their totals.
    ///
    /// The root itself contributes no line and no count. Listing failures are
    /// rendered inline and never abort the walk.
    pub fn walk(&self, root: &Path) -> Listing {
        let mut lines = Vec::new();
        let counts = self.walk_dir(root, "", &mut lines);
        Listing { lines, counts }
    }

    fn walk_dir(&self, path: &Path, prefix: &str, lines: &mut Vec<TreeLine>) -> Counts {
        let entries = match self.lister.list(path) {
            Ok(e) => e,
            Err(e) => {
                warn!(dir = %path.display(), error = %e, "cannot list directory");
                lines.push(TreeLine::error(prefix, &error_message(&e)));
                return Counts::default();
            }
        };

        let listed = entries.len();
        let entries = sort_entries(entries, &self.config.exclusions);
        debug!(
            dir = %path.display(),
            listed,
            excluded = listed - entries.len(),
            "listed directory"
        );

        let mut counts = Counts::default();
        let total = entries.len();

        for (i, entry) in entries.into_iter().enumerate() {
            let connector = Connector::for_position(i, total);
            lines.push(TreeLine::entry(prefix, connector, &entry.name, entry.is_dir));

            if entry.is_dir {
                trace!(dir = %entry.path.display(), "descending");
                counts.dirs += 1;
                counts += self.walk_dir(&entry.path, &connector.child_prefix(prefix), lines);
            } else {
                counts.files += 1;
            }
        }

        counts
    }
}

fn error_message(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::PermissionDenied => "Permission Denied".to_string(),
        _ => err.to_string(),
    }
}

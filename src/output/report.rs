//! Report assembly
//!
//! A `Report` is the full text block for one run:
//!
//! ```text
//! project/
//! ├── src
//! │   └── main.rs
//! └── Cargo.toml
//!
//! 1 directories, 2 files
//! ```

use std::path::{Path, PathBuf};

use crate::tree::{Counts, DirLister, Listing, TreeLine, TreeWalker};

/// Name shown on the first line. The filesystem root has no final
/// component and renders as an empty name (so the line reads `/`).
pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The walked tree of one root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    root: PathBuf,
    listing: Listing,
}

impl Report {
    pub fn new(root: impl Into<PathBuf>, listing: Listing) -> Self {
        Self {
            root: root.into(),
            listing,
        }
    }

    /// Walk `root` and wrap the result.
    pub fn generate<L: DirLister>(root: &Path, walker: &TreeWalker<L>) -> Self {
        Self::new(root, walker.walk(root))
    }

    pub fn counts(&self) -> Counts {
        self.listing.counts
    }

    pub fn root_line(&self) -> TreeLine {
        TreeLine::root(root_name(&self.root))
    }

    /// Lines beneath the root, in traversal order.
    pub fn body(&self) -> &[TreeLine] {
        &self.listing.lines
    }

    /// `N directories, M files`
    pub fn summary(&self) -> String {
        self.listing.counts.to_string()
    }

    /// The whole block joined with newlines, without a trailing newline.
    pub fn render(&self) -> String {
        let mut out = self.root_line().to_string();
        for line in self.body() {
            out.push('\n');
            out.push_str(&line.to_string());
        }
        out.push_str("\n\n");
        out.push_str(&self.summary());
        out
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::test_utils::TestDir;
    use crate::tree::{Connector, DirEntryInfo, WalkerConfig};

    /// `/work/app` holding an unreadable `secrets` directory and `main.rs`.
    struct LockedLister;

    impl DirLister for LockedLister {
        fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
            match dir.to_str() {
                Some("/work/app") => Ok(vec![
                    DirEntryInfo::new("main.rs", "/work/app/main.rs", false),
                    DirEntryInfo::new("secrets", "/work/app/secrets", true),
                ]),
                Some("/work/app/secrets") => Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "denied",
                )),
                _ => Ok(Vec::new()),
            }
        }
    }

    #[test]
    fn test_root_name() {
        assert_eq!(root_name(Path::new("/home/me/project")), "project");
        assert_eq!(root_name(Path::new("/")), "");
    }

    #[test]
    fn test_render_empty() {
        let report = Report::new("/tmp/empty", Listing::default());
        assert_eq!(report.render(), "empty/\n\n0 directories, 0 files");
    }

    #[test]
    fn test_render_filesystem_root_line() {
        let report = Report::new("/", Listing::default());
        assert!(report.render().starts_with("/\n"));
    }

    #[test]
    fn test_render_listing() {
        let listing = Listing {
            lines: vec![
                TreeLine::entry("", Connector::Tee, "src", true),
                TreeLine::entry("│   ", Connector::Corner, "a.txt", false),
                TreeLine::entry("", Connector::Corner, "readme.md", false),
            ],
            counts: Counts::new(1, 2),
        };
        let report = Report::new("/work/demo", listing);

        assert_eq!(
            report.render(),
            "demo/\n├── src\n│   └── a.txt\n└── readme.md\n\n1 directories, 2 files"
        );
    }

    #[test]
    fn test_generate_from_disk() {
        let dir = TestDir::new();
        dir.add_file("src/a.txt", "");
        dir.add_file("node_modules/left-pad/index.js", "");
        dir.add_file("readme.md", "");

        let walker = TreeWalker::new(WalkerConfig::default());
        let report = Report::generate(dir.path(), &walker);
        let name = root_name(dir.path());

        assert_eq!(
            report.render(),
            format!(
                "{}/\n├── src\n│   └── a.txt\n└── readme.md\n\n1 directories, 2 files",
                name
            )
        );
        assert_eq!(report.counts(), Counts::new(1, 2));
    }

    #[test]
    fn test_generate_with_unreadable_subtree() {
        let walker = TreeWalker::new(WalkerConfig::default()).with_lister(LockedLister);
        let report = Report::generate(Path::new("/work/app"), &walker);

        assert_eq!(
            report.render(),
            "app/\n├── secrets\n│   └── [Error: Permission Denied]\n└── main.rs\n\n1 directories, 1 files"
        );
        assert_eq!(report.counts(), Counts::new(1, 1));
    }
}

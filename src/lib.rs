//! dirtree - render a project's directory layout, skipping the usual noise

pub mod error;
pub mod exclude;
pub mod logging;
pub mod output;
pub mod root;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use exclude::{
    DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_FILES, Exclusions, TokenKind, classify_token,
};
pub use output::{OutputConfig, Report, TreeWriter, root_name};
pub use root::resolve_root;
pub use tree::{
    Connector, Counts, DirEntryInfo, DirLister, FsLister, LineKind, Listing, TreeLine, TreeWalker,
    WalkerConfig,
};

//! Directory tree walking logic
//!
//! `TreeWalker` visits a directory depth-first and returns every rendered line
//! together with the directory and file counts of the subtree. Lines and
//! counts come back as two separate fields of a [`Listing`].
//!
//! Directory listing goes through the [`DirLister`] trait so that error paths
//! (unreadable directories) can be exercised without touching permissions on
//! a real filesystem.

mod config;
mod line;
mod lister;
mod traversal;
mod walker;

pub use config::WalkerConfig;
pub use line::{Counts, LineKind, Listing, TreeLine};
pub use lister::{DirEntryInfo, DirLister, FsLister};
pub use traversal::{Connector, sort_entries};
pub use walker::TreeWalker;

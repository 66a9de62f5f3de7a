//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `report` - Assembles the root line, walked lines and summary into one block
//! - `writer` - Prints a report to stdout (optionally colored) or saves it to a file

mod config;
mod report;
mod writer;

pub use config::OutputConfig;
pub use report::{Report, root_name};
pub use writer::TreeWriter;

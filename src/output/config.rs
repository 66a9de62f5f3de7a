//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Colorize names when printing to a terminal. Files are always plain.
    pub use_color: bool,
}

impl OutputConfig {
    pub fn plain() -> Self {
        Self { use_color: false }
    }
}

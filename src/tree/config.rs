//! Configuration types for tree walkers

use crate::exclude::Exclusions;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Names left out of the tree. Defaults to the built-in exclusions.
    pub exclusions: Exclusions,
}

impl WalkerConfig {
    pub fn new(exclusions: Exclusions) -> Self {
        Self { exclusions }
    }

    /// Built-in exclusions plus the user-supplied tokens.
    pub fn with_extra_exclusions<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Exclusions::default().with_tokens(tokens))
    }
}

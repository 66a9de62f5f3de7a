//! Diagnostic logging setup
//!
//! Logs go to stderr so they never interleave with the tree on stdout.
//! `RUST_LOG` takes precedence over the verbosity flags.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Default filter for the given `-v` count and `-q` flag.
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    // A subscriber may already be set (repeated calls, test binaries); keep it.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .ok();
}

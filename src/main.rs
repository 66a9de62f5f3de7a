//! CLI entry point for dirtree

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirtree::{OutputConfig, Report, TreeWalker, TreeWriter, WalkerConfig, logging, resolve_root};
use tracing::info;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(
    about = "Generate a directory structure tree for a project, excluding specified folders."
)]
#[command(version)]
struct Args {
    /// The root directory of the project to scan
    #[arg(default_value = ".")]
    root_dir: PathBuf,

    /// Additional directories or files to exclude (e.g. -e my_dist_folder debug.log)
    #[arg(short = 'e', long = "exclude", num_args = 1.., value_name = "NAME")]
    exclude: Vec<String>,

    /// Save the tree to this file instead of printing it (e.g. -o tree.txt)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    if let Err(e) = run(&args) {
        eprintln!("dirtree: error writing output: {}", e);
        process::exit(1);
    }
}

/// Scan and emit one tree. Only failures writing to stdout are returned;
/// a bad root or an unwritable output file is reported here.
fn run(args: &Args) -> io::Result<()> {
    let root = match resolve_root(&args.root_dir) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };

    let config = WalkerConfig::with_extra_exclusions(&args.exclude);
    let excluded_dirs: Vec<&str> = config.exclusions.dirs().collect();
    let excluded_files: Vec<&str> = config.exclusions.files().collect();
    info!(
        root = %root.display(),
        excluded_dirs = ?excluded_dirs,
        excluded_files = ?excluded_files,
        "starting walk"
    );

    let mut stdout = io::stdout();
    writeln!(stdout, "Generating tree for: {}\n", root.display())?;

    let walker = TreeWalker::new(config);
    let report = Report::generate(&root, &walker);
    info!(
        dirs = report.counts().dirs,
        files = report.counts().files,
        "walk complete"
    );

    // Files always get plain text
    let writer = TreeWriter::new(OutputConfig {
        use_color: args.output.is_none() && should_use_color(args.color),
    });

    match &args.output {
        Some(path) => match writer.save(&report, path) {
            Ok(()) => writeln!(
                stdout,
                "Directory structure successfully saved to '{}'",
                path.display()
            )?,
            Err(e) => eprintln!("{}", e),
        },
        None => writer.print(&report)?,
    }

    stdout.flush()
}

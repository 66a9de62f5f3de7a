//! Report output
//!
//! `TreeWriter` prints a [`Report`] to stdout, coloring names when enabled,
//! or saves its plain text to a file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::info;

use crate::error::{Result, TreeError};
use crate::tree::{LineKind, TreeLine};

use super::config::OutputConfig;
use super::report::Report;

pub struct TreeWriter {
    config: OutputConfig,
}

impl TreeWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Print the report to stdout followed by a newline.
    pub fn print(&self, report: &Report) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_report(report, &mut stdout)?;
        writeln!(stdout)?;
        stdout.flush()
    }

    /// Write the report to any color-capable sink, without a trailing newline.
    ///
    /// The characters written are identical to [`Report::render`]; color is
    /// applied through the sink and vanishes on a no-color sink.
    pub fn write_report<W: WriteColor>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        write_line(out, &report.root_line())?;
        for line in report.body() {
            writeln!(out)?;
            write_line(out, line)?;
        }
        writeln!(out)?;
        writeln!(out)?;
        write!(out, "{}", report.summary())
    }

    /// Save the plain report to `path` as UTF-8.
    pub fn save(&self, report: &Report, path: &Path) -> Result<()> {
        fs::write(path, report.render()).map_err(|source| TreeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "saved tree");
        Ok(())
    }
}

fn write_line<W: WriteColor>(out: &mut W, line: &TreeLine) -> io::Result<()> {
    write!(out, "{}", line.lead())?;
    match line.kind {
        LineKind::Root | LineKind::Dir => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        LineKind::Error => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        }
        LineKind::File => {}
    }
    write!(out, "{}", line.label())?;
    out.reset()
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use super::*;
    use crate::test_utils::TestDir;
    use crate::tree::{Connector, Counts, Listing};

    fn sample_report() -> Report {
        Report::new(
            "/work/demo",
            Listing {
                lines: vec![
                    TreeLine::entry("", Connector::Tee, "locked", true),
                    TreeLine::error("│   ", "Permission Denied"),
                    TreeLine::entry("", Connector::Corner, "main.rs", false),
                ],
                counts: Counts::new(1, 1),
            },
        )
    }

    #[test]
    fn test_plain_output_matches_render() {
        let report = sample_report();
        let writer = TreeWriter::new(OutputConfig::plain());
        let mut buf = Buffer::no_color();
        writer.write_report(&report, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf.into_inner()).unwrap(), report.render());
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let report = sample_report();
        let writer = TreeWriter::new(OutputConfig { use_color: true });
        let mut buf = Buffer::ansi();
        writer.write_report(&report, &mut buf).unwrap();
        let out = String::from_utf8(buf.into_inner()).unwrap();

        assert!(out.contains("\x1b["), "should contain ANSI escapes");
        assert!(out.contains("├── "));
        assert!(out.contains("[Error: Permission Denied]"));
        assert!(out.ends_with("1 directories, 1 files"));
    }

    #[test]
    fn test_save_writes_plain_text() {
        let dir = TestDir::new();
        let path = dir.path().join("tree.txt");
        let report = sample_report();

        TreeWriter::new(OutputConfig { use_color: true })
            .save(&report, &path)
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), report.render());
    }

    #[test]
    fn test_save_failure_reports_path() {
        let dir = TestDir::new();
        let path = dir.path().join("missing").join("tree.txt");

        let err = TreeWriter::new(OutputConfig::plain())
            .save(&sample_report(), &path)
            .unwrap_err();

        match &err {
            TreeError::Write { path: p, .. } => assert_eq!(p, &path),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().starts_with("Error writing to file '"));
    }
}

//! Template line filter.
//!
//! Copies `KEY=VALUE` lines from an env template to an output file, dropping
//! blank lines, comments, and anything that does not look like an
//! assignment. This is a permissive filter, not a validator: malformed lines
//! are discarded, optionally with a warning, never reported as errors.

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Options controlling [`copy_template`] behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions {
    /// Emit a warning for each dropped line that is neither blank nor a
    /// comment. Off by default to match the permissive silent-drop policy.
    pub warn_dropped: bool,
}

/// Summary of a [`copy_template`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Lines written to the output file
    pub kept: usize,
    /// Blank lines dropped
    pub blank: usize,
    /// Comment lines dropped
    pub comments: usize,
    /// Non-empty, non-comment lines without `=` dropped
    pub malformed: usize,
}

impl CopyReport {
    /// Total number of dropped lines.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.blank + self.comments + self.malformed
    }
}

/// Decide whether a template line survives filtering.
///
/// Returns the trimmed line if it should be kept, `None` otherwise. Only
/// outer whitespace is trimmed; internal spacing is preserved.
///
/// # Examples
///
/// ```
/// use daiku_envfile::keep_line;
///
/// assert_eq!(keep_line("  DB_HOST = localhost  "), Some("DB_HOST = localhost"));
/// assert_eq!(keep_line("# comment"), None);
/// assert_eq!(keep_line(""), None);
/// assert_eq!(keep_line("NOVALUE"), None);
/// ```
#[must_use]
pub fn keep_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    if trimmed.contains('=') {
        Some(trimmed)
    } else {
        None
    }
}

/// Copy assignment lines from `template` to `output`.
///
/// The template is read line by line, top to bottom. Each kept line is
/// written trimmed, followed by a single `\n`; output order equals input
/// order. Running the output back through the filter is a fixed point.
///
/// A write failure aborts the whole operation; lines written before the
/// failure remain in the partially-written output (no rollback). Both file
/// handles are released on every exit path.
///
/// # Errors
///
/// Returns an error if the template cannot be opened, a line cannot be read,
/// or the output file cannot be created or written.
pub fn copy_template(
    template: &Path,
    output: &Path,
    options: FilterOptions,
) -> Result<CopyReport> {
    let src = File::open(template).map_err(|source| Error::OpenTemplate {
        path: template.to_path_buf(),
        source,
    })?;

    let dst = File::create(output).map_err(|source| Error::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(src);
    let mut writer = BufWriter::new(dst);
    let mut report = CopyReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::ReadTemplate {
            path: template.to_path_buf(),
            source,
        })?;

        match keep_line(&line) {
            Some(kept) => {
                writeln!(writer, "{kept}").map_err(|source| Error::WriteOutput {
                    path: output.to_path_buf(),
                    source,
                })?;
                report.kept += 1;
            }
            None => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    report.blank += 1;
                } else if trimmed.starts_with('#') {
                    report.comments += 1;
                } else {
                    report.malformed += 1;
                    if options.warn_dropped {
                        tracing::warn!(
                            line = index + 1,
                            content = trimmed,
                            "Dropping template line without '='"
                        );
                    }
                }
            }
        }
    }

    writer.flush().map_err(|source| Error::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(report)
}

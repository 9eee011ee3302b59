//! Output routing.
//!
//! The extracted text goes to a file, the clipboard, or both. Only when
//! neither is requested is it printed. Each destination is attempted
//! independently; a failure is reported on the console and the remaining
//! destinations still run.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::clipboard::Clipboard;
use crate::error::{Error, WriteError};

/// Where the text should go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destinations {
    /// File to (over)write with the text.
    pub output: Option<PathBuf>,
    /// Copy to the clipboard.
    pub clipboard: bool,
}

impl Destinations {
    /// No destination requested: the text is printed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.output.is_none() && !self.clipboard
    }
}

/// What `route` did.
#[derive(Debug, Default)]
pub struct Report {
    pub written: Option<PathBuf>,
    pub copied: bool,
    pub printed: bool,
    /// Failures that were reported and skipped.
    pub errors: Vec<Error>,
}

/// Write `text` to `path` as UTF-8, replacing any existing file.
///
/// # Errors
///
/// Returns `WriteError` on any I/O failure.
pub fn write_text(path: &Path, text: &str) -> Result<(), WriteError> {
    fs::write(path, text).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })
}

#[must_use]
pub fn saved_message(path: &Path) -> String {
    format!("Der extrahierte Text wurde in '{}' gespeichert.", path.display())
}

#[must_use]
pub fn write_failed_message(err: &WriteError) -> String {
    format!("Fehler beim Schreiben in die Datei: {err}")
}

pub const COPIED_MESSAGE: &str = "Der extrahierte Text wurde in die Zwischenablage kopiert.";

/// Send `text` to every requested destination.
///
/// Confirmations and failures go to `console`, as does the text itself when
/// no destination is set.
///
/// # Errors
///
/// Only fails if `console` cannot be written to.
pub fn route<W, C>(
    text: &str,
    destinations: &Destinations,
    console: &mut W,
    clipboard: &mut C,
) -> io::Result<Report>
where
    W: Write + ?Sized,
    C: Clipboard + ?Sized,
{
    let mut report = Report::default();

    if let Some(path) = &destinations.output {
        match write_text(path, text) {
            Ok(()) => {
                writeln!(console, "{}", saved_message(path))?;
                report.written = Some(path.clone());
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err.source, "writing output file failed");
                writeln!(console, "{}", write_failed_message(&err))?;
                report.errors.push(err.into());
            }
        }
    }

    if destinations.clipboard {
        match clipboard.copy(text) {
            Ok(()) => {
                writeln!(console, "{COPIED_MESSAGE}")?;
                report.copied = true;
            }
            Err(err) => {
                warn!(error = %err, "copying to clipboard failed");
                writeln!(console, "Fehler beim Kopieren in die Zwischenablage: {err}")?;
                report.errors.push(err.into());
            }
        }
    }

    if destinations.is_empty() {
        writeln!(console, "{text}")?;
        report.printed = true;
    }

    console.flush()?;
    Ok(report)
}

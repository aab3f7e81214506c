//! Character stream helpers.
//!
//! Thin buffered wrappers for writing a string to a file and reading it
//! back line by line. Use [`copy`](crate::copy()) for anything that is not
//! known to be UTF-8 text.

use crate::error::{Error, Result};
use crate::utils::path::safe_path;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Line separator appended by [`read_text`] after every line.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// Line separator appended by [`read_text`] after every line.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Write `content` to `path`, creating the file or truncating an existing one.
///
/// # Errors
///
/// - [`Error::NotFound`] if the containing directory does not exist
/// - [`Error::PermissionDenied`] if the file cannot be opened for writing
/// - [`Error::Io`] if the write or final flush fails
///
/// # Example
///
/// ```no_run
/// bytecopy::write_text("message.txt", "Welcome to the world of Streams!\n")?;
/// # Ok::<(), bytecopy::Error>(())
/// ```
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(safe_path(path)).map_err(|e| Error::from_open(path, e))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(content.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    writer.flush().map_err(|e| Error::io(path, e))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), len = content.len(), "wrote text");

    Ok(())
}

/// Read `path` as text, one line at a time.
///
/// Line endings (`\n` or `\r\n`) are normalised: every line, including the
/// last, is followed by [`LINE_SEPARATOR`] in the result. An empty file
/// yields an empty string.
///
/// # Errors
///
/// - [`Error::NotFound`] if `path` does not exist
/// - [`Error::PermissionDenied`] if it cannot be opened
/// - [`Error::IsADirectory`] if it names a directory
/// - [`Error::Io`] on read failure, including content that is not valid
///   UTF-8 (kind [`InvalidData`](std::io::ErrorKind::InvalidData))
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(safe_path(path)).map_err(|e| Error::from_open(path, e))?;
    if file.metadata().map_err(|e| Error::io(path, e))?.is_dir() {
        return Err(Error::IsADirectory(path.to_path_buf()));
    }

    let mut content = String::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| Error::io(path, e))?;
        content.push_str(&line);
        content.push_str(LINE_SEPARATOR);
    }

    Ok(content)
}

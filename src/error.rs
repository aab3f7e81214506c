//! Error types for bytecopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur while copying, reading, or writing files, and the
//! [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors | [`ErrorCode`] |
//! |----------|--------|---------------|
//! | Lookup | [`Error::NotFound`] | `not_found` |
//! | Access | [`Error::PermissionDenied`] | `permission_denied` |
//! | Transfer | [`Error::Io`] | `io_failure` |
//! | Validation | [`Error::IsADirectory`] | `is_a_directory` |
//! | Validation | [`Error::SameFile`] | `same_file` |

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for bytecopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during file operations.
///
/// Every variant carries the path that caused it. Errors are handed to the
/// caller unchanged; nothing in this crate retries or suppresses them.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The path does not exist
    ///
    /// For a copy this is either the source file or the destination's
    /// containing directory.
    #[error("No such file or directory: {0}")]
    NotFound(PathBuf),

    /// Access to the path was denied
    #[error("Permission denied: {path}: {source}")]
    PermissionDenied {
        /// The inaccessible path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Read, write, flush, or sync failure
    ///
    /// When this happens mid-copy the destination is left as-is and may be
    /// truncated.
    #[error("IO error on {path}: {source}")]
    Io {
        /// The file being read or written when the error occurred
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Source is a directory, only regular files can be copied
    #[error("Source is a directory: {0}")]
    IsADirectory(PathBuf),

    /// Source and destination are the same file
    ///
    /// Detected before the destination is opened, so the file is unchanged.
    #[error("Source and destination are the same file: {0}")]
    SameFile(PathBuf),
}

impl Error {
    /// Classify an error from opening `path`.
    ///
    /// `NotFound` and `PermissionDenied` get their own variants, everything
    /// else becomes [`Error::Io`].
    pub(crate) fn from_open(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Error::PermissionDenied {
                path: path.to_path_buf(),
                source,
            },
            _ => Error::io(path, source),
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Stable, machine-readable classification of this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::NotFound(_) => ErrorCode::NotFound,
            Error::PermissionDenied { .. } => ErrorCode::PermissionDenied,
            Error::Io { .. } => ErrorCode::IoFailure,
            Error::IsADirectory(_) => ErrorCode::IsADirectory,
            Error::SameFile(_) => ErrorCode::SameFile,
        }
    }

    /// The path this error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Error::NotFound(path) | Error::IsADirectory(path) | Error::SameFile(path) => path,
            Error::PermissionDenied { path, .. } | Error::Io { path, .. } => path,
        }
    }
}

/// Machine-readable error classification.
///
/// Displayed in snake_case, e.g. `not_found`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Path does not exist
    NotFound,
    /// Path is not accessible
    PermissionDenied,
    /// Device-level or transfer error
    IoFailure,
    /// Source is a directory
    IsADirectory,
    /// Source and destination are one file
    SameFile,
    /// Caller supplied unusable input
    InvalidInput,
}

impl ErrorCode {
    /// The snake_case name of this code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotFound => "not_found",
            ErrorCode::PermissionDenied => "permission_denied",
            ErrorCode::IoFailure => "io_failure",
            ErrorCode::IsADirectory => "is_a_directory",
            ErrorCode::SameFile => "same_file",
            ErrorCode::InvalidInput => "invalid_input",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Builder API for ergonomic copying.
//!
//! # Examples
//!
//! ```no_run
//! use bytecopy::CopyBuilder;
//!
//! let stats = CopyBuilder::new("input.bin", "output.bin")
//!     .no_fsync()
//!     .run()?;
//! println!("Copied {} bytes in {} chunks", stats.bytes_copied, stats.chunks);
//! # Ok::<(), bytecopy::Error>(())
//! ```

use crate::copy::{CopyStats, copy_file, copy_file_with_progress};
use crate::error::Result;
use crate::options::CopyOptions;
use std::path::{Path, PathBuf};

/// A builder for configuring and executing a file copy.
///
/// `CopyBuilder` is a fluent front end over [`copy_file`] and
/// [`CopyOptions`].
#[derive(Debug, Clone)]
pub struct CopyBuilder {
    src: PathBuf,
    dst: PathBuf,
    options: CopyOptions,
}

impl CopyBuilder {
    /// Create a new `CopyBuilder` with the given source and destination paths.
    ///
    /// Uses default options (fsync enabled, no warning handler).
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Self {
        Self {
            src: src.as_ref().to_path_buf(),
            dst: dst.as_ref().to_path_buf(),
            options: CopyOptions::default(),
        }
    }

    /// Disable fsync after writing the destination.
    #[must_use]
    pub fn no_fsync(mut self) -> Self {
        self.options = self.options.without_fsync();
        self
    }

    /// Set a handler for non-fatal warnings.
    #[must_use]
    pub fn on_warning(mut self, handler: fn(&str)) -> Self {
        self.options = self.options.with_warn_handler(handler);
        self
    }

    /// Replace all options at once.
    #[must_use]
    pub fn options(mut self, options: CopyOptions) -> Self {
        self.options = options;
        self
    }

    /// Get a reference to the current options.
    pub fn get_options(&self) -> &CopyOptions {
        &self.options
    }

    /// Execute the copy.
    ///
    /// # Errors
    ///
    /// See [`copy_file`].
    pub fn run(self) -> Result<CopyStats> {
        copy_file(&self.src, &self.dst, &self.options)
    }

    /// Execute the copy, calling `on_progress(copied, total)` after each chunk.
    ///
    /// # Errors
    ///
    /// See [`copy_file`].
    pub fn run_with_progress<F: FnMut(u64, u64)>(self, on_progress: F) -> Result<CopyStats> {
        copy_file_with_progress(&self.src, &self.dst, &self.options, on_progress)
    }
}

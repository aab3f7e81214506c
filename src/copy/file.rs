//! Single file copy operations.
//!
//! Copies run on the calling thread through buffered handles and a fixed
//! transfer buffer. Both handles are owned by the call and closed when it
//! returns, on success and on every error path.

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use crate::utils::path::{is_same_file, safe_path};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::{Duration, Instant};

use super::stream::{StreamError, transfer};

/// Statistics from a completed copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of bytes written to the destination
    pub bytes_copied: u64,
    /// Number of non-empty reads from the source
    pub chunks: u64,
    /// Wall-clock time spent copying
    pub duration: Duration,
}

/// Copy `src` to `dst` with default options.
///
/// Shorthand for [`copy_file`] with [`CopyOptions::default()`].
///
/// # Example
///
/// ```no_run
/// let stats = bytecopy::copy("photo.jpg", "photo-backup.jpg")?;
/// println!("{} bytes", stats.bytes_copied);
/// # Ok::<(), bytecopy::Error>(())
/// ```
pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<CopyStats> {
    copy_file(src.as_ref(), dst.as_ref(), &CopyOptions::default())
}

/// Copy a single file byte for byte.
///
/// The destination is created if missing and truncated if present. Its
/// contents end up identical to the source as of the moment the source was
/// opened; the bytes are never decoded as text.
///
/// # Arguments
///
/// * `src` - Source file path, must be an existing regular file
/// * `dst` - Destination file path, its directory must exist
/// * `options` - Copy options
///
/// # Errors
///
/// Returns an error if:
/// - Source or destination directory does not exist ([`Error::NotFound`])
/// - Either path is not accessible ([`Error::PermissionDenied`])
/// - Source is a directory ([`Error::IsADirectory`])
/// - `dst` is the source itself, by path or link ([`Error::SameFile`])
/// - A read, write, flush, or sync fails ([`Error::Io`])
///
/// The source is opened first, so a missing or unreadable source never
/// touches `dst`. Once `dst` has been opened it is not cleaned up on
/// failure and may be left truncated.
pub fn copy_file(src: &Path, dst: &Path, options: &CopyOptions) -> Result<CopyStats> {
    copy_file_with_progress(src, dst, options, |_, _| {})
}

/// Copy a single file, reporting progress after each chunk.
///
/// `on_progress(copied, total)` is called after every write with the
/// running byte count and the source length observed at open time. Errors
/// are the same as for [`copy_file`].
pub fn copy_file_with_progress<F>(
    src: &Path,
    dst: &Path,
    options: &CopyOptions,
    mut on_progress: F,
) -> Result<CopyStats>
where
    F: FnMut(u64, u64),
{
    let start = Instant::now();

    let src_file = File::open(safe_path(src)).map_err(|e| Error::from_open(src, e))?;
    let src_meta = src_file.metadata().map_err(|e| Error::io(src, e))?;

    // Reading a directory handle fails late on some platforms and not at
    // all on others; reject it before the destination is truncated.
    if src_meta.is_dir() {
        return Err(Error::IsADirectory(src.to_path_buf()));
    }
    let total = src_meta.len();

    // Creating dst would truncate the source before the first read
    if is_same_file(src, &src_meta, dst) {
        return Err(Error::SameFile(dst.to_path_buf()));
    }

    let dst_file = File::create(safe_path(dst)).map_err(|e| Error::from_open(dst, e))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        src = %src.display(),
        dst = %dst.display(),
        len = total,
        "copying"
    );

    let mut reader = BufReader::new(src_file);
    let mut writer = BufWriter::new(dst_file);

    let transferred = match transfer(&mut reader, &mut writer, |n| on_progress(n, total)) {
        Ok(t) => t,
        Err(err) => {
            let err = match err {
                StreamError::Read(e) => Error::io(src, e),
                StreamError::Write(e) => Error::io(dst, e),
            };
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %err, "copy failed");
            return Err(err);
        }
    };

    // Dropping a BufWriter discards flush errors, so flush explicitly
    let dst_file = writer
        .into_inner()
        .map_err(|e| Error::io(dst, e.into_error()))?;

    if options.fsync {
        dst_file.sync_all().map_err(|e| Error::io(dst, e))?;
    }

    // Devices, FIFOs, and procfs files report lengths unrelated to their
    // content, so compare the length before and after rather than the count
    if src_meta.is_file() {
        let len_after = reader.get_ref().metadata().map_or(total, |m| m.len());
        if len_after != total {
            options.warn(&format!(
                "source {} changed size during copy: {} bytes at open, {} now, copied {}",
                src.display(),
                total,
                len_after,
                transferred.bytes
            ));
        }
    }

    let stats = CopyStats {
        bytes_copied: transferred.bytes,
        chunks: transferred.chunks,
        duration: start.elapsed(),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        bytes = stats.bytes_copied,
        chunks = stats.chunks,
        "copy complete"
    );

    Ok(stats)
}

// =============================================================================
// Tests
// =============================================================================

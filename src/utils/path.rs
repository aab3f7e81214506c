//! Path handling for Windows long paths, and file identity checks.
//!
//! Windows limits ordinary paths to 260 characters (`MAX_PATH`). Prefixing
//! an absolute path with `\\?\` lifts the limit to roughly 32k characters.
//! Everywhere else paths are used as given.

use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// Rewrite `path` into `\\?\` form on Windows.
///
/// - `C:\dir\file` becomes `\\?\C:\dir\file`
/// - `\\server\share\file` becomes `\\?\UNC\server\share\file`
/// - paths already carrying the prefix are returned unchanged
/// - other paths are made absolute with `.` and `..` resolved first, since
///   Win32 takes every component of a `\\?\` path literally
#[cfg(windows)]
pub(crate) fn safe_path(path: &Path) -> PathBuf {
    let text = path.as_os_str().to_string_lossy();
    if text.starts_with(r"\\?\") {
        return path.to_path_buf();
    }
    if let Some(unc) = text.strip_prefix(r"\\") {
        return PathBuf::from(format!(r"\\?\UNC\{}", unc));
    }

    // The destination usually does not exist yet, so no canonicalize
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    PathBuf::from(format!(r"\\?\{}", absolute.display()))
}

#[cfg(not(windows))]
pub(crate) fn safe_path(path: &Path) -> PathBuf {
    path.to_path_buf()
}

/// Whether `dst` names the file already opened as the source.
///
/// On Unix this compares device and inode, so hard links and symlinks to the
/// source are caught. Elsewhere both paths are canonicalized and compared.
/// A `dst` that does not exist yet is never the same file.
#[cfg(unix)]
pub(crate) fn is_same_file(_src: &Path, src_meta: &Metadata, dst: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match std::fs::metadata(dst) {
        Ok(dst_meta) => dst_meta.dev() == src_meta.dev() && dst_meta.ino() == src_meta.ino(),
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub(crate) fn is_same_file(src: &Path, _src_meta: &Metadata, dst: &Path) -> bool {
    match (std::fs::canonicalize(src), std::fs::canonicalize(dst)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

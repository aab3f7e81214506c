//! Core copy operations.
//!
//! This module provides the byte-for-byte file copier and the transfer
//! loop it is built on.

mod file;
mod stream;

// Re-export public API
pub use file::{CopyStats, copy, copy_file, copy_file_with_progress};
pub use stream::TRANSFER_BUFFER_SIZE;

//! # bytecopy
//!
//! Buffered, byte-for-byte file copying, plus small text file helpers.
//!
//! ## Core Features
//!
//! - **Byte exact**: Content is moved as raw bytes and never decoded, so binary
//!   files survive untouched
//! - **Fixed buffer**: Data flows through a single [`TRANSFER_BUFFER_SIZE`]
//!   byte buffer; files are never loaded whole into memory
//! - **Scoped handles**: Source and destination are closed on every exit path,
//!   and write errors surfaced by the final flush are reported, not dropped
//! - **Typed errors**: [`Error`] tells a missing file from a denied one from a
//!   failing device, each with the offending path
//!
//! ## Quick Start
//!
//! ```no_run
//! let stats = bytecopy::copy("image.png", "image-copy.png")?;
//! println!("Copied {} bytes", stats.bytes_copied);
//! # Ok::<(), bytecopy::Error>(())
//! ```
//!
//! ### With Options
//!
//! ```no_run
//! use bytecopy::{CopyOptions, copy_file};
//! use std::path::Path;
//!
//! let options = CopyOptions::default().without_fsync();
//! copy_file(Path::new("in.bin"), Path::new("out.bin"), &options)?;
//! # Ok::<(), bytecopy::Error>(())
//! ```
//!
//! ### Text Files
//!
//! ```no_run
//! bytecopy::write_text("message.txt", "Welcome to the world of Streams!\n")?;
//! let text = bytecopy::read_text("message.txt")?;
//! # Ok::<(), bytecopy::Error>(())
//! ```
//!
//! ## Failure Semantics
//!
//! The source is opened before the destination, so a missing or unreadable
//! source leaves the destination alone. Once the destination has been opened
//! it has been truncated; a copy that fails after that point leaves whatever
//! was written so far and does not remove it.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `progress` | Progress bar support with indicatif |
//! | `tracing` | Structured logging with tracing crate |
//! | `serde` | Serialize/Deserialize for [`CopyOptions`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod copy;
mod error;
mod options;
mod text;
mod utils;

#[cfg(feature = "progress")]
mod progress;

pub use builder::CopyBuilder;
pub use copy::{CopyStats, TRANSFER_BUFFER_SIZE, copy, copy_file, copy_file_with_progress};
pub use error::{Error, ErrorCode, Result};
pub use options::CopyOptions;
pub use text::{LINE_SEPARATOR, read_text, write_text};

#[cfg(feature = "progress")]
#[cfg_attr(docsrs, doc(cfg(feature = "progress")))]
pub use progress::{ProgressCallback, create_progress_bar, progress_bar_callback};

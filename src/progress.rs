//! Progress reporting support (requires `progress` feature)

use indicatif::{ProgressBar, ProgressStyle};

/// Callback for progress updates: `(bytes_copied, total_bytes)`
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// Create a default byte progress bar for a single file copy
#[must_use]
pub fn create_progress_bar(total_bytes: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    pb
}

/// Wrap a progress bar in a [`ProgressCallback`] that tracks copied bytes
///
/// The bar's length follows the total reported by the copy, so the bar can
/// be created before the source size is known.
#[must_use]
pub fn progress_bar_callback(pb: &ProgressBar) -> ProgressCallback {
    let pb = pb.clone();
    Box::new(move |copied, total| {
        pb.set_length(total);
        pb.set_position(copied);
    })
}

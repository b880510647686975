// Copyright 2026 SWOT Lens Contributors
// SPDX-License-Identifier: MIT

//! Busy indicator shown while a page is being fetched and analyzed.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for a blocking operation.
///
/// Hidden when stderr is not a terminal or in quiet/JSON mode.
pub fn create_spinner(message: &str) -> ProgressBar {
    if crate::cli::output::is_quiet() || crate::cli::output::is_json() {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("  {spinner:.cyan} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("\u{25b8}\u{25b9}\u{25b8}\u{25b9}\u{25b8}");
    bar.set_style(style);
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

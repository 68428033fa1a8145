//! Progress polling for the preview.
//!
//! The tick copies playback position into the progress bar and time label
//! and expires transient input affordances. It runs at a fixed 100ms for the
//! life of the window; there is no teardown path other than closing the
//! window.

use iced::Subscription;
use std::time::Duration;

/// Create a subscription for progress updates.
pub fn progress_tick_subscription() -> Subscription<crate::message::Message> {
    iced::time::every(Duration::from_millis(100)).map(|_| crate::message::Message::ProgressTick)
}

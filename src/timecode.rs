//! Playback time formatting for the preview header.

/// Format a playback position as `m:ss`.
pub fn format_position(secs: f64) -> String {
    let whole = if secs.is_finite() && secs > 0.0 {
        secs as u64
    } else {
        0
    };
    format!("{}:{:02}", whole / 60, whole % 60)
}

//! Preview playback for the recorded video.
//!
//! Thin wrapper over the video player so the rest of the editor only deals
//! in plain numbers (natural size, duration, position) and simple commands.

use iced_video_player::Video;
use std::path::{Path, PathBuf};

pub struct Preview {
    video: Video,
    path: PathBuf,
}

impl Preview {
    /// Load a recording from disk. The preview always loops; the loop toggle
    /// in the UI only affects the export request.
    pub fn load(path: &Path) -> Result<Self, String> {
        let url = url::Url::from_file_path(path)
            .map_err(|()| format!("Invalid video path: {}", path.display()))?;
        let mut video = Video::new(&url).map_err(|e| format!("Failed to load video: {e}"))?;
        video.set_looping(true);

        log::info!(
            "Preview loaded: path={}, size={:?}, fps={}",
            path.display(),
            video.size(),
            video.framerate()
        );

        Ok(Self {
            video,
            path: path.to_path_buf(),
        })
    }

    pub fn video(&self) -> &Video {
        &self.video
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The video's natural dimensions, clamped to zero on nonsense values.
    pub fn natural_size(&self) -> (u32, u32) {
        let (w, h) = self.video.size();
        (w.max(0) as u32, h.max(0) as u32)
    }

    pub fn duration_secs(&self) -> f64 {
        let secs = self.video.duration().as_secs_f64();
        if secs.is_finite() && secs > 0.0 { secs } else { 0.0 }
    }

    pub fn position_secs(&self) -> f64 {
        let secs = self.video.position().as_secs_f64();
        if secs.is_finite() && secs > 0.0 { secs } else { 0.0 }
    }

    pub fn paused(&self) -> bool {
        self.video.paused()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.video.set_paused(paused);
    }

    /// Restart from the beginning after end-of-stream.
    pub fn restart(&mut self) {
        if let Err(e) = self.video.seek(std::time::Duration::ZERO, true) {
            log::warn!("Preview restart seek failed: {e}");
        }
        self.video.set_paused(false);
    }
}

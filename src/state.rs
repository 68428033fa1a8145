use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::aspect;
use crate::host::HostChannel;
use crate::input::NumericField;
use crate::message::FpsChoice;
use crate::preview::Preview;
use crate::settings::Settings;
use crate::share::{ExportRequest, Format, ShareRegistry};

/// The baseline fps choice offered alongside the recording fps.
pub const LOW_FPS: u32 = 15;

/// What the Escape key should do, given the current window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeAction {
    Unmaximize,
    CloseWindow,
}

/// Dimension fields plus the immutable ratio they are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Dimensions {
    baseline: (u32, u32),
    width: NumericField,
    height: NumericField,
}

/// Everything the editor window's controls read and mutate. Pure state: all
/// methods are side-effect free beyond `self`, so every handler decision is
/// unit-testable without a preview or a host process.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    fps_choice: FpsChoice,
    max_fps: u32,
    loop_playback: bool,
    dims: Option<Dimensions>,
    maximized: bool,
    header_visible: bool,
    export_enabled: bool,
    picked: HashMap<Format, usize>,
}

impl Session {
    pub fn new(max_fps: u32) -> Self {
        Self {
            fps_choice: FpsChoice::Fifteen,
            max_fps,
            loop_playback: true,
            dims: None,
            maximized: false,
            header_visible: false,
            export_enabled: true,
            picked: HashMap::new(),
        }
    }

    pub fn fps(&self) -> u32 {
        match self.fps_choice {
            FpsChoice::Fifteen => LOW_FPS,
            FpsChoice::Max => self.max_fps,
        }
    }

    pub fn fps_choice(&self) -> FpsChoice {
        self.fps_choice
    }

    pub fn max_fps(&self) -> u32 {
        self.max_fps
    }

    pub fn loop_playback(&self) -> bool {
        self.loop_playback
    }

    pub fn maximized(&self) -> bool {
        self.maximized
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    pub fn export_enabled(&self) -> bool {
        self.export_enabled
    }

    pub fn select_fps(&mut self, choice: FpsChoice) {
        self.fps_choice = choice;
    }

    pub fn select_loop(&mut self, enabled: bool) {
        self.loop_playback = enabled;
    }

    pub fn set_maximized(&mut self, maximized: bool) {
        self.maximized = maximized;
    }

    pub fn set_header_visible(&mut self, visible: bool) {
        self.header_visible = visible;
    }

    pub fn set_export_enabled(&mut self, enabled: bool) {
        self.export_enabled = enabled;
    }

    /// One-shot baseline capture when the preview first becomes playable.
    /// Later calls (the video loops, a new frame arrives) are no-ops.
    pub fn capture_baseline(&mut self, width: u32, height: u32) -> bool {
        if self.dims.is_some() || width == 0 || height == 0 {
            return false;
        }
        self.dims = Some(Dimensions {
            baseline: (width, height),
            width: NumericField::seeded(width),
            height: NumericField::seeded(height),
        });
        true
    }

    pub fn baseline(&self) -> Option<(u32, u32)> {
        self.dims.as_ref().map(|d| d.baseline)
    }

    pub fn width_text(&self) -> &str {
        self.dims.as_ref().map_or("", |d| d.width.text())
    }

    pub fn height_text(&self) -> &str {
        self.dims.as_ref().map_or("", |d| d.height.text())
    }

    pub fn width_shaking(&self) -> bool {
        self.dims.as_ref().is_some_and(|d| d.width.shaking())
    }

    pub fn height_shaking(&self) -> bool {
        self.dims.as_ref().is_some_and(|d| d.height.shaking())
    }

    /// A typed width edit: validate against [1, natural width], then derive
    /// the height field through the baseline ratio. Edits before the
    /// baseline exists are dropped.
    pub fn edit_width(&mut self, text: &str) {
        let Some(d) = &mut self.dims else { return };
        if let Some(width) = d.width.edit(text, 1, d.baseline.0) {
            if let (_, Some(height)) = aspect::resize(d.baseline, Some(width), None) {
                d.height.set_derived(height);
            }
        }
    }

    pub fn edit_height(&mut self, text: &str) {
        let Some(d) = &mut self.dims else { return };
        if let Some(height) = d.height.edit(text, 1, d.baseline.1) {
            if let (Some(width), _) = aspect::resize(d.baseline, None, Some(height)) {
                d.width.set_derived(width);
            }
        }
    }

    pub fn commit_width(&mut self) {
        if let Some(d) = &mut self.dims {
            d.width.commit();
        }
    }

    pub fn commit_height(&mut self) {
        if let Some(d) = &mut self.dims {
            d.height.commit();
        }
    }

    /// Advance transient affordances (shakes) by one progress tick.
    pub fn tick(&mut self) {
        if let Some(d) = &mut self.dims {
            d.width.tick();
            d.height.tick();
        }
    }

    pub fn escape(&self) -> EscapeAction {
        if self.maximized {
            EscapeAction::Unmaximize
        } else {
            EscapeAction::CloseWindow
        }
    }

    pub fn pick_service(&mut self, format: Format, index: usize) {
        self.picked.insert(format, index);
    }

    pub fn picked_service(&self, format: Format) -> usize {
        self.picked.get(&format).copied().unwrap_or(0)
    }

    /// Assemble the export request for a format from the current controls.
    /// Requires a loaded preview (baseline captured) and a source path.
    pub fn export_request(&self, format: Format, file_path: &Path) -> Option<ExportRequest> {
        let d = self.dims.as_ref()?;
        Some(ExportRequest {
            format,
            file_path: file_path.to_path_buf(),
            width: d.width.last_valid(),
            height: d.height.last_valid(),
            fps: self.fps(),
            loop_playback: self.loop_playback,
        })
    }
}

/// Top-level application state: the session plus the preview, the share
/// registry, and the outbound host channel.
pub struct Editor {
    pub session: Session,
    pub preview: Option<Preview>,
    pub source: Option<PathBuf>,
    pub registry: ShareRegistry,
    pub host: Arc<dyn HostChannel + Send + Sync>,
    pub position: f64,
    pub duration: f64,
    pub status: String,
}

impl Editor {
    pub fn new(
        settings: &Settings,
        host: Arc<dyn HostChannel + Send + Sync>,
        registry: ShareRegistry,
    ) -> Self {
        Self {
            session: Session::new(settings.max_export_fps()),
            preview: None,
            source: None,
            registry,
            host,
            position: 0.0,
            duration: 0.0,
            status: "Waiting for recording…".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_session() -> Session {
        let mut session = Session::new(30);
        assert!(session.capture_baseline(1920, 1080));
        session
    }

    #[test]
    fn starts_at_fifteen_fps_with_loop_on() {
        let session = Session::new(30);
        assert_eq!(session.fps(), 15);
        assert_eq!(session.fps_choice(), FpsChoice::Fifteen);
        assert!(session.loop_playback());
        assert!(session.export_enabled());
        assert!(!session.header_visible());
    }

    #[test]
    fn baseline_capture_is_one_shot() {
        let mut session = loaded_session();
        assert_eq!(session.baseline(), Some((1920, 1080)));
        assert_eq!(session.width_text(), "1920");
        assert_eq!(session.height_text(), "1080");

        // The video looping back to the start must not reset anything.
        assert!(!session.capture_baseline(1280, 720));
        assert_eq!(session.baseline(), Some((1920, 1080)));
    }

    #[test]
    fn zero_sized_frames_do_not_capture_a_baseline() {
        let mut session = Session::new(30);
        assert!(!session.capture_baseline(0, 1080));
        assert_eq!(session.baseline(), None);
    }

    #[test]
    fn width_edit_derives_height() {
        let mut session = loaded_session();
        session.edit_width("960");
        assert_eq!(session.width_text(), "960");
        assert_eq!(session.height_text(), "540");
    }

    #[test]
    fn height_edit_derives_width() {
        let mut session = loaded_session();
        session.edit_width("960");
        session.edit_height("270");
        assert_eq!(session.width_text(), "480");
        assert_eq!(session.height_text(), "270");
    }

    #[test]
    fn invalid_width_reverts_and_shakes_leaving_height_alone() {
        let mut session = loaded_session();
        session.edit_width("960");
        session.edit_width("99999");
        assert_eq!(session.width_text(), "960");
        assert_eq!(session.height_text(), "540");
        assert!(session.width_shaking());
        assert!(!session.height_shaking());
    }

    #[test]
    fn committing_an_empty_field_restores_it() {
        let mut session = loaded_session();
        session.edit_height("");
        session.commit_height();
        assert_eq!(session.height_text(), "1080");
        assert!(session.height_shaking());
    }

    #[test]
    fn edits_before_baseline_are_dropped() {
        let mut session = Session::new(30);
        session.edit_width("960");
        session.commit_width();
        assert_eq!(session.width_text(), "");
        assert!(!session.width_shaking());
    }

    #[test]
    fn fps_buttons_are_mutually_exclusive() {
        let mut session = Session::new(24);
        session.select_fps(FpsChoice::Max);
        assert_eq!(session.fps(), 24);
        assert_eq!(session.fps_choice(), FpsChoice::Max);
        session.select_fps(FpsChoice::Fifteen);
        assert_eq!(session.fps(), 15);
    }

    #[test]
    fn loop_buttons_are_mutually_exclusive() {
        let mut session = Session::new(30);
        session.select_loop(false);
        assert!(!session.loop_playback());
        session.select_loop(true);
        assert!(session.loop_playback());
    }

    #[test]
    fn escape_closes_unless_maximized() {
        let mut session = Session::new(30);
        assert_eq!(session.escape(), EscapeAction::CloseWindow);
        session.set_maximized(true);
        assert_eq!(session.escape(), EscapeAction::Unmaximize);
        session.set_maximized(false);
        assert_eq!(session.escape(), EscapeAction::CloseWindow);
    }

    #[test]
    fn export_toggle_applies_uniformly() {
        let mut session = Session::new(30);
        session.set_export_enabled(false);
        assert!(!session.export_enabled());
        session.set_export_enabled(true);
        assert!(session.export_enabled());
    }

    #[test]
    fn export_request_reflects_current_controls() {
        let mut session = loaded_session();
        session.edit_width("960");
        session.select_fps(FpsChoice::Max);
        session.select_loop(false);

        let request = session
            .export_request(Format::Gif, Path::new("/tmp/rec.mp4"))
            .unwrap();
        assert_eq!(request.width, 960);
        assert_eq!(request.height, 540);
        assert_eq!(request.fps, 30);
        assert!(!request.loop_playback);
        assert_eq!(request.file_path, PathBuf::from("/tmp/rec.mp4"));
    }

    #[test]
    fn export_request_needs_a_baseline() {
        let session = Session::new(30);
        assert!(session.export_request(Format::Mp4, Path::new("/tmp/rec.mp4")).is_none());
    }

    #[test]
    fn dropdown_selection_defaults_to_first_service() {
        let mut session = Session::new(30);
        assert_eq!(session.picked_service(Format::Gif), 0);
        session.pick_service(Format::Gif, 2);
        assert_eq!(session.picked_service(Format::Gif), 2);
        // Other formats keep their own selection.
        assert_eq!(session.picked_service(Format::Mp4), 0);
    }
}

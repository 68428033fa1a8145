use iced::event;
use iced::{Element, Subscription};

use crate::host::{self, HostEvent, HostNotification};
use crate::message::Message;
use crate::poller;
use crate::preview::Preview;
use crate::state::{Editor, EscapeAction};
use crate::ui;

impl Editor {
    /// Handle UI messages and state updates.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Host(HostEvent::VideoSrc { src }) => {
                log::info!("Host delivered video source: {}", src.display());
                match Preview::load(&src) {
                    Ok(preview) => {
                        self.preview = Some(preview);
                        self.status = format!(
                            "Loaded {}",
                            src.file_name().unwrap_or_default().to_string_lossy()
                        );
                    }
                    Err(e) => {
                        log::error!("{e}");
                        self.status = e;
                    }
                }
                self.source = Some(src);
            }
            Message::Host(HostEvent::ToggleFormatButtons { enabled }) => {
                self.session.set_export_enabled(enabled);
            }
            Message::PreviewFrame => {
                if let Some(preview) = &self.preview {
                    let (width, height) = preview.natural_size();
                    if self.session.capture_baseline(width, height) {
                        self.duration = preview.duration_secs();
                        log::debug!(
                            "Aspect baseline captured: {width}x{height}, duration={}s",
                            self.duration
                        );
                    }
                }
            }
            Message::PreviewEnded => {
                if let Some(preview) = &mut self.preview {
                    preview.restart();
                }
            }
            Message::ProgressTick => {
                if let Some(preview) = &self.preview {
                    self.position = preview.position_secs();
                }
                self.session.tick();
            }
            Message::Play => {
                if let Some(preview) = &mut self.preview {
                    preview.set_paused(false);
                }
            }
            Message::Pause => {
                if let Some(preview) = &mut self.preview {
                    preview.set_paused(true);
                }
            }
            Message::Maximize => {
                if !self.session.maximized() {
                    self.session.set_maximized(true);
                    self.host.notify(HostNotification::ToggleFullscreenEditorWindow);
                }
            }
            Message::Unmaximize => {
                if self.session.maximized() {
                    self.session.set_maximized(false);
                    self.host.notify(HostNotification::ToggleFullscreenEditorWindow);
                }
            }
            Message::WidthEdited(text) => self.session.edit_width(&text),
            Message::WidthCommitted => self.session.commit_width(),
            Message::HeightEdited(text) => self.session.edit_height(&text),
            Message::HeightCommitted => self.session.commit_height(),
            Message::FpsSelected(choice) => self.session.select_fps(choice),
            Message::LoopSelected(enabled) => self.session.select_loop(enabled),
            Message::ServicePicked(format, choice) => {
                self.session.pick_service(format, choice.index);
            }
            Message::Export(format) => self.export(format),
            Message::HeaderHoverChanged(visible) => self.session.set_header_visible(visible),
            Message::EventOccurred(event) => match event {
                iced::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                    key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
                    ..
                }) => self.handle_escape(),
                iced::Event::Window(iced::window::Event::FileDropped(path)) => {
                    // No file-drop feature in the editor window.
                    log::debug!("Ignoring dropped file {}", path.display());
                }
                _ => {}
            },
        }
    }

    /// Escape leaves fullscreen when maximized, otherwise asks the host to
    /// close the window.
    fn handle_escape(&mut self) {
        match self.session.escape() {
            EscapeAction::Unmaximize => self.update(Message::Unmaximize),
            EscapeAction::CloseWindow => {
                self.host.notify(HostNotification::CloseEditorWindow);
            }
        }
    }

    fn export(&self, format: crate::share::Format) {
        if !self.session.export_enabled() {
            return;
        }
        let Some(source) = &self.source else {
            log::warn!("Export requested before a video source arrived");
            return;
        };
        let Some(request) = self.session.export_request(format, source) else {
            log::warn!("Export requested before the preview became playable");
            return;
        };
        let index = self.session.picked_service(format);
        match self.registry.service_for(format, index) {
            Some(service) => service.run(&request),
            None => log::warn!("No share service at index {index} for {format}"),
        }
    }

    /// Subscribe to the progress tick, runtime events, and host events.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            poller::progress_tick_subscription(),
            event::listen().map(Message::EventOccurred),
            host::host_event_subscription(),
        ])
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        ui::render(self)
    }
}

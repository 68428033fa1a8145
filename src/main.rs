mod app;
mod aspect;
mod host;
mod input;
mod message;
mod poller;
mod preview;
mod settings;
mod share;
mod state;
mod timecode;
mod ui;

use std::sync::Arc;

use host::{HostChannel, HostNotification, StdioHost};
use share::{Format, ShareRegistry, ShareService};
use state::Editor;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(
        || {
            let settings = settings::load();
            log::info!("Editor starting, max export fps {}", settings.max_export_fps());

            let host = Arc::new(StdioHost);
            let registry = builtin_registry(host.clone());
            let editor = Editor::new(&settings, host, registry);

            (editor, iced::Task::none())
        },
        Editor::update,
        Editor::view,
    )
    .title("Cutaway")
    .subscription(Editor::subscription)
    .run()
}

/// Built-in share services. Each one just forwards the request to the host,
/// which owns the actual export work; the service title tells the host which
/// destination was picked.
fn builtin_registry(host: Arc<StdioHost>) -> ShareRegistry {
    let mut registry = ShareRegistry::new();

    let forward = |title: &'static str, formats: Vec<Format>| {
        let channel = host.clone();
        ShareService::new(title, formats, move |request| {
            channel.notify(HostNotification::Export {
                service: title.to_string(),
                request: request.clone(),
            });
        })
    };

    registry.register(forward(
        "Save to Disk",
        vec![Format::Gif, Format::Mp4, Format::Webm, Format::Apng],
    ));
    registry.register(forward("Copy to Clipboard", vec![Format::Gif, Format::Apng]));
    registry.register(forward("Upload", vec![Format::Mp4, Format::Webm]));

    registry
}

//! Bridge to the recorder process that spawned this window.
//!
//! Both directions are one-way, fire-and-forget notifications carried as
//! newline-delimited JSON over stdio: the host writes events to our stdin,
//! we write notifications to stdout. No acknowledgments, no retries; the
//! host contract is at-most-once delivery per line.

use futures::SinkExt;
use iced::stream;
use iced::Subscription;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::AsyncBufReadExt;

use crate::message::Message;
use crate::share::ExportRequest;

/// Notification sent to the host. Serialized as one JSON line on stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostNotification {
    ToggleFullscreenEditorWindow,
    CloseEditorWindow,
    Export {
        service: String,
        #[serde(flatten)]
        request: ExportRequest,
    },
}

/// Event received from the host on stdin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostEvent {
    ToggleFormatButtons { enabled: bool },
    VideoSrc { src: PathBuf },
}

/// Outbound half of the host bridge.
pub trait HostChannel {
    fn notify(&self, notification: HostNotification);
}

/// Production channel: one JSON line per notification on stdout.
#[derive(Debug, Default)]
pub struct StdioHost;

impl HostChannel for StdioHost {
    fn notify(&self, notification: HostNotification) {
        match serde_json::to_string(&notification) {
            Ok(line) => {
                let stdout = std::io::stdout();
                let mut lock = stdout.lock();
                if let Err(e) = writeln!(lock, "{line}") {
                    log::error!("Failed to write host notification: {e}");
                }
            }
            Err(e) => log::error!("Failed to encode host notification: {e}"),
        }
    }
}

/// Parse one inbound line. Malformed or unknown lines are logged and skipped.
pub fn parse_host_line(line: &str) -> Option<HostEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str(trimmed) {
        Ok(event) => Some(event),
        Err(e) => {
            log::warn!("Ignoring unparseable host line {trimmed:?}: {e}");
            None
        }
    }
}

/// Creates a subscription that reads host events from stdin for the life of
/// the window.
pub fn host_event_subscription() -> Subscription<Message> {
    Subscription::run_with("host-events", |_| {
        stream::channel(
            100,
            |mut output: futures::channel::mpsc::Sender<Message>| async move {
            let stdin = tokio::io::stdin();
            let mut lines = tokio::io::BufReader::new(stdin).lines();

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if let Some(event) = parse_host_line(&line) {
                            log::debug!("Host event: {event:?}");
                            if output.send(Message::Host(event)).await.is_err() {
                                log::warn!("UI loop gone, stopping host reader");
                                return;
                            }
                        }
                    }
                    Ok(None) => {
                        log::info!("Host closed stdin, no further host events");
                        break;
                    }
                    Err(e) => {
                        log::error!("Host stdin read failed: {e}");
                        break;
                    }
                }
            }

            // Keep the subscription alive so the runtime does not restart it.
            futures::future::pending::<()>().await;
            },
        )
    })
}

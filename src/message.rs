use iced::Event;

use crate::host::HostEvent;
use crate::share::{Format, ServiceChoice};

/// Which of the two fps buttons is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FpsChoice {
    Fifteen,
    Max,
}

#[derive(Debug, Clone)]
pub enum Message {
    Play,
    Pause,
    Maximize,
    Unmaximize,
    WidthEdited(String),
    WidthCommitted,
    HeightEdited(String),
    HeightCommitted,
    FpsSelected(FpsChoice),
    LoopSelected(bool),
    ServicePicked(Format, ServiceChoice),
    Export(Format),
    PreviewFrame,
    PreviewEnded,
    ProgressTick,
    HeaderHoverChanged(bool),
    Host(HostEvent),
    EventOccurred(Event),
}

use iced::widget::{
    button, center, column, container, mouse_area, pick_list, progress_bar, row, stack, text,
    text_input,
};
use iced::{alignment, Color, Element, Length, Theme};
use iced_video_player::VideoPlayer;

use crate::message::{FpsChoice, Message};
use crate::share::Format;
use crate::state::Editor;
use crate::timecode;

/// Render the editor window.
pub fn render(editor: &Editor) -> Element<'_, Message> {
    column![preview_area(editor), controls_bar(editor)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The preview with the window header overlaid on hover. The header lives
/// inside the hover region, so moving the pointer onto the header (or any of
/// its children) does not hide it.
fn preview_area(editor: &Editor) -> Element<'_, Message> {
    let content: Element<'_, Message> = match &editor.preview {
        Some(preview) => container(
            VideoPlayer::new(preview.video())
                .on_new_frame(Message::PreviewFrame)
                .on_end_of_stream(Message::PreviewEnded),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),
        None => center(text(editor.status.as_str()).size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let mut layers = stack![content];
    if editor.session.header_visible() {
        layers = layers.push(window_header(editor));
    }

    mouse_area(layers)
        .on_enter(Message::HeaderHoverChanged(true))
        .on_exit(Message::HeaderHoverChanged(false))
        .into()
}

fn window_header(editor: &Editor) -> Element<'_, Message> {
    container(
        row![
            text("cutaway").size(14).color(Color::WHITE),
            container("").width(Length::Fill),
            text(timecode::format_position(editor.position))
                .size(14)
                .color(Color::WHITE),
        ]
        .padding(10)
        .align_y(alignment::Vertical::Center),
    )
    .style(|_theme: &Theme| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.7).into()),
        ..Default::default()
    })
    .width(Length::Fill)
    .into()
}

fn controls_bar(editor: &Editor) -> Element<'_, Message> {
    let session = &editor.session;

    let progress = row![
        progress_bar(
            0.0..=editor.duration.max(0.1) as f32,
            editor.position as f32
        )
        .girth(8),
        text(timecode::format_position(editor.position)).size(12),
    ]
    .spacing(10)
    .align_y(alignment::Vertical::Center);

    // Play/pause and maximize/unmaximize are each one visible button at a
    // time, swapped by state.
    let playing = editor.preview.as_ref().is_some_and(|p| !p.paused());
    let transport = if playing {
        button(text("Pause").size(12))
            .on_press(Message::Pause)
            .padding(8)
    } else {
        button(text("Play").size(12))
            .on_press_maybe(editor.preview.is_some().then_some(Message::Play))
            .padding(8)
    };
    let window_toggle = if session.maximized() {
        button(text("Unmaximize").size(12))
            .on_press(Message::Unmaximize)
            .padding(8)
    } else {
        button(text("Maximize").size(12))
            .on_press(Message::Maximize)
            .padding(8)
    };

    let size_controls = row![
        text("Size").size(12),
        dimension_input(
            "width",
            session.width_text(),
            session.width_shaking(),
            Message::WidthEdited,
            Message::WidthCommitted,
        ),
        text("x").size(12),
        dimension_input(
            "height",
            session.height_text(),
            session.height_shaking(),
            Message::HeightEdited,
            Message::HeightCommitted,
        ),
    ]
    .spacing(5)
    .align_y(alignment::Vertical::Center);

    let fps_group = row![
        group_button(
            "15 FPS".to_string(),
            session.fps_choice() == FpsChoice::Fifteen,
            Message::FpsSelected(FpsChoice::Fifteen),
        ),
        group_button(
            format!("{} FPS", session.max_fps()),
            session.fps_choice() == FpsChoice::Max,
            Message::FpsSelected(FpsChoice::Max),
        ),
    ]
    .spacing(2);

    let loop_group = row![
        group_button(
            "No Loop".to_string(),
            !session.loop_playback(),
            Message::LoopSelected(false),
        ),
        group_button(
            "Loop".to_string(),
            session.loop_playback(),
            Message::LoopSelected(true),
        ),
    ]
    .spacing(2);

    container(
        column![
            progress,
            row![transport, window_toggle, size_controls, fps_group, loop_group]
                .spacing(15)
                .align_y(alignment::Vertical::Center),
            export_controls(editor),
        ]
        .spacing(10),
    )
    .padding(10)
    .width(Length::Fill)
    .into()
}

fn dimension_input<'a>(
    placeholder: &'a str,
    value: &'a str,
    shaking: bool,
    on_input: fn(String) -> Message,
    on_submit: Message,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(on_input)
        .on_submit(on_submit)
        .size(12)
        .width(70)
        .style(move |theme: &Theme, status| {
            let mut style = text_input::default(theme, status);
            if shaking {
                style.border.color = theme.extended_palette().danger.base.color;
                style.border.width = 2.0;
            }
            style
        })
        .into()
}

fn group_button<'a>(label: String, active: bool, on_press: Message) -> Element<'a, Message> {
    button(text(label).size(12))
        .on_press(on_press)
        .style(if active {
            button::primary
        } else {
            button::secondary
        })
        .padding(8)
        .into()
}

/// One export button per format, each with its own share-service dropdown.
/// The dropdown is a sibling of the button so picking a service never
/// triggers the export itself. While exports are disabled (or before a
/// source arrives) the buttons take no presses.
fn export_controls(editor: &Editor) -> Element<'_, Message> {
    let mut buttons: Vec<Element<'_, Message>> = Vec::new();

    for format in Format::ALL {
        let choices = editor.registry.choices(format);
        let selected = choices.get(editor.session.picked_service(format)).cloned();
        let ready =
            editor.session.export_enabled() && editor.source.is_some() && !choices.is_empty();

        buttons.push(
            column![
                button(text(format.as_str().to_uppercase()).size(12))
                    .on_press_maybe(ready.then_some(Message::Export(format)))
                    .padding(8)
                    .width(Length::Fill),
                pick_list(choices, selected, move |choice| {
                    Message::ServicePicked(format, choice)
                })
                .text_size(11)
                .width(Length::Fill),
            ]
            .spacing(3)
            .width(Length::Fill)
            .into(),
        );
    }

    row(buttons).spacing(10).width(Length::Fill).into()
}

use crate::app::Message;
use crate::theme::DialogCard;
use crate::weather::FetchError;
use iced::{
    alignment, theme,
    widget::{button, column, container, row, text},
    Alignment, Element, Length,
};

/// Two-column label/value row, label right-aligned against the center
/// line.
pub fn create_stat_row<'a>(label: &'a str, value: String, size: u16) -> Element<'a, Message> {
    row![
        container(text(label).size(size))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right),
        container(text(value).size(size))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Left),
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}

/// Shown between startup and the first response.
pub fn create_loading_display<'a>() -> Element<'a, Message> {
    container(text("Fetching weather…").size(18))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
}

pub fn dialog_message(error: &FetchError) -> String {
    match error {
        FetchError::Connection => "No internet connection!".to_string(),
        FetchError::LocationNotFound => "Location not found.".to_string(),
        FetchError::Api(message) => message.clone(),
    }
}

/// Modal error card. While raised it is the only interactive surface in
/// the window; dismissing it or the next successful fetch clears it.
pub fn create_error_dialog(error: &FetchError) -> Element<'static, Message> {
    let card = container(
        column![
            text("Window Weather: Error!").size(18),
            text(dialog_message(error)).size(14),
            button(
                text("OK")
                    .size(14)
                    .horizontal_alignment(alignment::Horizontal::Center)
            )
            .on_press(Message::DismissDialog)
            .padding([8, 24])
            .style(theme::Button::Primary),
        ]
        .spacing(16)
        .align_items(Alignment::Center),
    )
    .padding(24)
    .style(theme::Container::Custom(Box::new(DialogCard)));

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_text_matches_the_failure_kind() {
        assert_eq!(
            dialog_message(&FetchError::Connection),
            "No internet connection!"
        );
        assert_eq!(
            dialog_message(&FetchError::LocationNotFound),
            "Location not found."
        );
        assert_eq!(
            dialog_message(&FetchError::Api("invalid API key".into())),
            "invalid API key"
        );
    }
}

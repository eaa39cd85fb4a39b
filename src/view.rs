use crate::app::{Message, WindowWeather};
use crate::assets;
use crate::clock;
use crate::components;
use crate::theme::{Backdrop, Panel};
use crate::weather::CurrentConditions;
use iced::widget::image::{self, Image};
use iced::{
    theme,
    widget::{column, container, row, text, Space},
    Alignment, Element, Length,
};
use std::path::Path;

pub fn view(app: &WindowWeather) -> Element<Message> {
    // The raised dialog is modal: while it is up it is the only surface
    // in the window.
    let content: Element<Message> = if let Some(error) = &app.dialog {
        components::create_error_dialog(error)
    } else if let Some(conditions) = &app.conditions {
        create_weather_panel(app, conditions)
    } else {
        components::create_loading_display()
    };

    let layout = column![
        container(content).width(Length::Fill).height(Length::Fill),
        create_bottom_bar(app),
    ];

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::Container::Custom(Box::new(Backdrop(
            app.time_of_day,
        ))))
        .into()
}

fn create_weather_panel<'a>(
    app: &'a WindowWeather,
    conditions: &'a CurrentConditions,
) -> Element<'a, Message> {
    let units = app.config.units;

    let icon = Image::new(image::Handle::from_path(assets::icon_path(
        Path::new(&app.config.res_dir),
        &conditions.icon,
    )))
    .width(Length::Fixed(100.0))
    .height(Length::Fixed(100.0));

    let headline = row![
        icon,
        text(conditions.temperature_label(units)).size(42)
    ]
    .spacing(8)
    .align_items(Alignment::Center);

    let panel = column![
        text(&conditions.location).size(24),
        headline,
        components::create_stat_row("Feels like", conditions.feels_like_label(units), 14),
        text(&conditions.description).size(20),
        components::create_stat_row("Humidity", conditions.humidity_label(), 14),
        components::create_stat_row("Wind speed", conditions.wind_speed_label(units), 14),
        components::create_stat_row("Wind deg.", conditions.wind_deg_label(), 14),
    ]
    .spacing(8)
    .padding(16)
    .align_items(Alignment::Center);

    container(container(panel).style(theme::Container::Custom(Box::new(Panel(app.time_of_day)))))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([40, 60])
        .center_x()
        .center_y()
        .into()
}

fn create_bottom_bar(app: &WindowWeather) -> Element<Message> {
    let updated = match app.last_updated {
        Some(at) => clock::last_updated_label(at),
        None => String::new(),
    };

    let bar = row![
        text(clock::greeting(app.now)).size(12),
        Space::with_width(Length::Fill),
        text(updated).size(12),
        Space::with_width(Length::Fixed(16.0)),
        text(clock::clock_label(app.now)).size(12),
    ]
    .align_items(Alignment::Center);

    container(bar)
        .width(Length::Fill)
        .padding([6, 10])
        .style(theme::Container::Box)
        .into()
}

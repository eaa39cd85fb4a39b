mod app;
mod assets;
mod clock;
mod components;
mod config;
mod theme;
mod view;
mod weather;

use app::WindowWeather;
use iced::{window, Application, Settings, Size};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match config::load() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("failed to load configuration: {error}");
            std::process::exit(1);
        }
    };

    let icon = window::icon::from_file(assets::window_icon_path(Path::new(&config.res_dir))).ok();

    let mut settings = Settings::with_flags(config);
    settings.window = window::Settings {
        size: Size::new(500.0, 535.0),
        position: window::Position::Centered,
        resizable: false,
        icon,
        ..window::Settings::default()
    };

    WindowWeather::run(settings)
}

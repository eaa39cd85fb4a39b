use crate::config::AppConfig;
use crate::theme::TimeOfDay;
use crate::weather::{self, CurrentConditions, FetchError};
use chrono::{DateTime, Local};
use iced::{Application, Command, Element, Subscription, Theme};
use std::time::Duration;

const CLOCK_TICK_SECS: u64 = 1;

#[derive(Debug, Clone)]
pub enum Message {
    /// Weather refresh timer fired; kick off a fetch.
    RefreshWeather,
    WeatherFetched(Result<CurrentConditions, FetchError>),
    /// 1 Hz tick driving the clock and greeting.
    ClockTick,
    DismissDialog,
}

pub struct WindowWeather {
    pub config: AppConfig,
    pub conditions: Option<CurrentConditions>,
    pub time_of_day: TimeOfDay,
    /// Raised error dialog; `None` while the window shows weather.
    pub dialog: Option<FetchError>,
    pub now: DateTime<Local>,
    pub last_updated: Option<DateTime<Local>>,
}

impl WindowWeather {
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            conditions: None,
            time_of_day: TimeOfDay::default(),
            dialog: None,
            now: Local::now(),
            last_updated: None,
        }
    }

    fn fetch_command(&self) -> Command<Message> {
        Command::perform(
            weather::fetch_current(
                self.config.base_url.clone(),
                self.config.api_key.clone(),
                self.config.location.clone(),
                self.config.units,
            ),
            Message::WeatherFetched,
        )
    }

    pub fn apply(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::RefreshWeather => self.fetch_command(),
            Message::WeatherFetched(Ok(conditions)) => {
                // Unknown trailing letters keep the current scheme.
                if let Some(time_of_day) = TimeOfDay::from_icon_code(&conditions.icon) {
                    self.time_of_day = time_of_day;
                }
                tracing::info!(
                    location = %conditions.location,
                    temperature = conditions.temperature,
                    "weather updated"
                );
                self.conditions = Some(conditions);
                self.dialog = None;
                self.last_updated = Some(Local::now());
                Command::none()
            }
            Message::WeatherFetched(Err(error)) => {
                tracing::warn!("weather fetch failed: {error}");
                self.dialog = Some(error);
                Command::none()
            }
            Message::ClockTick => {
                self.now = Local::now();
                Command::none()
            }
            Message::DismissDialog => {
                self.dialog = None;
                Command::none()
            }
        }
    }
}

use crate::view;

impl Application for WindowWeather {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppConfig;

    fn new(config: AppConfig) -> (WindowWeather, Command<Message>) {
        let app = WindowWeather::with_config(config);
        // First fetch fires immediately; the timer covers the rest.
        let command = app.fetch_command();
        (app, command)
    }

    fn title(&self) -> String {
        String::from("Window Weather")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.apply(message)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            iced::time::every(Duration::from_secs(self.config.refresh_secs))
                .map(|_| Message::RefreshWeather),
            iced::time::every(Duration::from_secs(CLOCK_TICK_SECS)).map(|_| Message::ClockTick),
        ])
    }

    fn theme(&self) -> Theme {
        match self.time_of_day {
            TimeOfDay::Day => Theme::Light,
            TimeOfDay::Night => Theme::Dark,
        }
    }

    fn view(&self) -> Element<Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            api_key: "test-key".into(),
            location: "London".into(),
            units: weather::Units::Metric,
            base_url: "http://127.0.0.1:1".into(),
            refresh_secs: 60,
            res_dir: "res".into(),
        }
    }

    fn conditions(icon: &str) -> CurrentConditions {
        CurrentConditions {
            location: "London, GB".into(),
            temperature: 12,
            feels_like: 8,
            humidity: 81,
            wind_speed: 4,
            wind_deg: 250,
            description: "Scattered Clouds".into(),
            icon: icon.into(),
        }
    }

    #[test]
    fn successful_fetch_replaces_conditions_and_clears_dialog() {
        let mut app = WindowWeather::with_config(test_config());
        app.dialog = Some(FetchError::Connection);

        let _ = app.apply(Message::WeatherFetched(Ok(conditions("03d"))));

        assert_eq!(app.conditions, Some(conditions("03d")));
        assert_eq!(app.dialog, None);
        assert!(app.last_updated.is_some());
    }

    #[test]
    fn night_icon_switches_the_scheme() {
        let mut app = WindowWeather::with_config(test_config());
        assert_eq!(app.time_of_day, TimeOfDay::Day);

        let _ = app.apply(Message::WeatherFetched(Ok(conditions("01n"))));
        assert_eq!(app.time_of_day, TimeOfDay::Night);

        let _ = app.apply(Message::WeatherFetched(Ok(conditions("01d"))));
        assert_eq!(app.time_of_day, TimeOfDay::Day);
    }

    #[test]
    fn unknown_icon_suffix_keeps_the_scheme() {
        let mut app = WindowWeather::with_config(test_config());
        let _ = app.apply(Message::WeatherFetched(Ok(conditions("01n"))));
        let _ = app.apply(Message::WeatherFetched(Ok(conditions("01x"))));
        assert_eq!(app.time_of_day, TimeOfDay::Night);
    }

    #[test]
    fn connection_failure_raises_the_no_connection_dialog() {
        let mut app = WindowWeather::with_config(test_config());
        let _ = app.apply(Message::WeatherFetched(Err(FetchError::Connection)));
        assert_eq!(app.dialog, Some(FetchError::Connection));
    }

    #[test]
    fn not_found_raises_the_not_found_dialog() {
        let mut app = WindowWeather::with_config(test_config());
        let _ = app.apply(Message::WeatherFetched(Err(FetchError::LocationNotFound)));
        assert_eq!(app.dialog, Some(FetchError::LocationNotFound));
    }

    #[test]
    fn failure_keeps_the_last_conditions_on_screen() {
        let mut app = WindowWeather::with_config(test_config());
        let _ = app.apply(Message::WeatherFetched(Ok(conditions("03d"))));
        let _ = app.apply(Message::WeatherFetched(Err(FetchError::Connection)));

        assert_eq!(app.conditions, Some(conditions("03d")));
        assert_eq!(app.dialog, Some(FetchError::Connection));
    }

    #[test]
    fn dismiss_clears_the_dialog() {
        let mut app = WindowWeather::with_config(test_config());
        let _ = app.apply(Message::WeatherFetched(Err(FetchError::LocationNotFound)));
        let _ = app.apply(Message::DismissDialog);
        assert_eq!(app.dialog, None);
    }
}

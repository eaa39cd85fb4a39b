use chrono::{DateTime, Local, Timelike};

/// Greeting for the bottom bar, by local hour.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        18..=19 => "Good Evening",
        _ => "Good Night",
    }
}

pub fn greeting(now: DateTime<Local>) -> &'static str {
    greeting_for_hour(now.hour())
}

/// 24-hour clock label, refreshed once a second.
pub fn clock_label(now: DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

pub fn last_updated_label(at: DateTime<Local>) -> String {
    format!("Updated {}", at.format("%H:%M"))
}

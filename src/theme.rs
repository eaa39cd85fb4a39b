use iced::widget::container;
use iced::{Background, Border, Color, Theme};

// Day #4472C4, night #203864.
pub const DAY_BACKGROUND: Color = Color {
    r: 0x44 as f32 / 255.0,
    g: 0x72 as f32 / 255.0,
    b: 0xC4 as f32 / 255.0,
    a: 1.0,
};
pub const DAY_TEXT: Color = Color::BLACK;

pub const NIGHT_BACKGROUND: Color = Color {
    r: 0x20 as f32 / 255.0,
    g: 0x38 as f32 / 255.0,
    b: 0x64 as f32 / 255.0,
    a: 1.0,
};
pub const NIGHT_TEXT: Color = Color::WHITE;

/// Color scheme selector, inferred from the trailing letter of the
/// weather icon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

impl TimeOfDay {
    /// `…d` is day, `…n` is night. Any other code leaves the scheme as
    /// it was, so this returns `None` for it.
    pub fn from_icon_code(code: &str) -> Option<Self> {
        match code.chars().last() {
            Some('d') => Some(TimeOfDay::Day),
            Some('n') => Some(TimeOfDay::Night),
            _ => None,
        }
    }

    pub fn background(self) -> Color {
        match self {
            TimeOfDay::Day => DAY_BACKGROUND,
            TimeOfDay::Night => NIGHT_BACKGROUND,
        }
    }

    pub fn text(self) -> Color {
        match self {
            TimeOfDay::Day => DAY_TEXT,
            TimeOfDay::Night => NIGHT_TEXT,
        }
    }
}

/// Full-window backdrop in the scheme's background color.
pub struct Backdrop(pub TimeOfDay);

impl container::StyleSheet for Backdrop {
    type Style = Theme;

    fn appearance(&self, _style: &Theme) -> container::Appearance {
        container::Appearance {
            text_color: Some(self.0.text()),
            background: Some(Background::Color(self.0.background())),
            ..Default::default()
        }
    }
}

/// White-edged panel framing the weather labels.
pub struct Panel(pub TimeOfDay);

impl container::StyleSheet for Panel {
    type Style = Theme;

    fn appearance(&self, _style: &Theme) -> container::Appearance {
        container::Appearance {
            text_color: Some(self.0.text()),
            background: Some(Background::Color(self.0.background())),
            border: Border {
                color: Color::WHITE,
                width: 2.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Raised card for the modal error dialog.
pub struct DialogCard;

impl container::StyleSheet for DialogCard {
    type Style = Theme;

    fn appearance(&self, _style: &Theme) -> container::Appearance {
        container::Appearance {
            text_color: Some(Color::BLACK),
            background: Some(Background::Color(Color::WHITE)),
            border: Border::with_radius(6.0),
            ..Default::default()
        }
    }
}

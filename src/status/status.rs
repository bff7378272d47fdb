use std::fmt::Display;

use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Invalid,
    Loading,
    Available,
    Unavailable,
}

impl Status {
    /// Style class of the result area, e.g. `status-available`.
    pub fn style_class(&self) -> String {
        format!("status-{}", self)
    }

    pub fn color(&self) -> Color {
        match self {
            Status::Invalid => Color::DarkYellow,
            Status::Loading => Color::DarkGrey,
            Status::Available => Color::Green,
            Status::Unavailable => Color::Red,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Status::Invalid => "invalid",
                Status::Loading => "loading",
                Status::Available => "available",
                Status::Unavailable => "unavailable",
            }
        )
    }
}

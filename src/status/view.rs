use crossterm::style::Stylize;

use super::Status;

/// The single piece of rendered state: what the result area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub message: String,
    pub status: Status,
}

impl StatusView {
    pub fn new(message: impl Into<String>, status: Status) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

/// Renders a status view into a single styled line.
pub fn render(view: &StatusView) -> String {
    let color = view.status.color();
    let tag = format!("[{}]", view.status);
    format!(
        "{} {}",
        tag.as_str().with(color).bold(),
        view.message.as_str().with(color)
    )
}

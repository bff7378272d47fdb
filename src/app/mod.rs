mod action;
mod app;

pub use action::Action;
pub use app::{exit_status, App};

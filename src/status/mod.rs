mod status;
mod view;

pub use status::Status;
pub use view::{render, StatusView};

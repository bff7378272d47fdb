mod checker;
mod error;

pub use checker::{Availability, Checker};
pub use error::CheckError;

mod nickname;
mod validate;
mod words;

pub use nickname::Nickname;
pub use validate::is_valid;

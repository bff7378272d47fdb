use regex::Regex;

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 16;

lazy_static::lazy_static! {
    static ref RE_NICKNAME: Regex =
        Regex::new(&format!(r"^[A-Za-z0-9_]{{{},{}}}$", MIN_LENGTH, MAX_LENGTH)).unwrap();
}

/// Reports whether `s` is an acceptable nickname: 3 to 16 ASCII letters,
/// digits or underscores.
pub fn is_valid(s: &str) -> bool {
    RE_NICKNAME.is_match(s)
}

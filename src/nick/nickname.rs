use rand::distributions::{Distribution, Standard};
use rand::seq::SliceRandom;
use rand::Rng;

use super::words::{NOUNS, PREFIXES, SUFFIXES};

/// The raw draw behind a generated nickname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub prefix: &'static str,
    pub noun: &'static str,
    pub suffix: &'static str,
    pub number: u8,
}

impl NameParts {
    pub fn compose(&self) -> Nickname {
        Nickname(format!("{}{}{}", self.prefix, self.noun, self.number))
    }
}

impl Distribution<NameParts> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NameParts {
        let prefix = PREFIXES.choose(rng).unwrap_or(&"Super");
        let noun = NOUNS.choose(rng).unwrap_or(&"Gamer");
        let suffix = SUFFIXES.choose(rng).unwrap_or(&"Pro");
        let number: u8 = rng.gen_range(0..100);

        NameParts {
            prefix,
            noun,
            suffix,
            number,
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Nickname(String);

impl Distribution<Nickname> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Nickname {
        let parts = Distribution::<NameParts>::sample(self, rng);
        log::debug!(
            "drew {} + {} + {}, suffix {} left out",
            parts.prefix,
            parts.noun,
            parts.number,
            parts.suffix
        );
        parts.compose()
    }
}

impl std::ops::Deref for Nickname {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Nickname> for String {
    fn from(value: Nickname) -> Self {
        value.0
    }
}

impl std::fmt::Display for Nickname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

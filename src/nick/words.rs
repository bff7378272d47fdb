pub static PREFIXES: [&str; 10] = [
    "Super", "Mega", "Hyper", "Dark", "Light", "Fire", "Ice", "Shadow", "Dragon", "Ghost",
];

pub static NOUNS: [&str; 10] = [
    "Gamer", "Hunter", "Knight", "Warrior", "Ninja", "Wizard", "King", "Lord", "Phantom", "Wolf",
];

/// Drawn on every generation but never appended: the longest prefix, noun
/// and suffix together would exceed the 16 character limit.
pub static SUFFIXES: [&str; 8] = ["BR", "PT", "Pro", "HD", "Extreme", "Legend", "Plays", "G4mes"];

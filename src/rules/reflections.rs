//! Default reflection entries.
//!
//! Each direction is its own entry. All defaults are single tokens: phrase
//! keys match as plain substrings and would fire inside ordinary words.

pub const ENTRIES: &[(&str, &str)] = &[
    // Indonesian pronouns
    ("saya", "kamu"),
    ("aku", "kamu"),
    ("gue", "kamu"),
    ("gua", "kamu"),
    ("kamu", "saya"),
    ("anda", "saya"),
    ("kami", "kalian"),
    ("kita", "kalian"),
    ("kalian", "kami"),
    // Indonesian possessives
    ("punyaku", "punyamu"),
    ("punyamu", "punyaku"),
    ("namaku", "namamu"),
    ("namamu", "namaku"),
    ("milikku", "milikmu"),
    ("milikmu", "milikku"),
    // English
    ("i", "you"),
    ("my", "your"),
    ("your", "my"),
    ("me", "you"),
    ("you", "me"),
    ("mine", "yours"),
    ("yours", "mine"),
    // Chat shorthand
    ("u", "saya"),
    ("ur", "mu"),
];

//! Pronoun and possessive reflection.
//!
//! Captured user text is echoed back from the bot's point of view: "saya"
//! becomes "kamu", "my" becomes "your", and so on. Reflection runs in two
//! passes over the lowercased, trimmed text:
//!
//! ```text
//! "Punya Saya rusak"
//!     │ lowercase + trim
//!     ▼
//! "punya saya rusak"
//!     │ phrase pass (entries containing a space, in configured order)
//!     ▼
//! "punya saya rusak"
//!     │ tokenize (\w+ | single punctuation char)
//!     ▼
//! ["punya", "saya", "rusak"]
//!     │ token pass
//!     ▼
//! "punya kamu rusak"
//! ```
//!
//! Each phrase entry replaces every occurrence of its key in the text left by
//! the entries before it, so phrase order matters when keys overlap. Phrase
//! keys are plain substrings and can fire inside longer words. The token pass
//! then looks up every token, including words a phrase wrote.
//!
//! Output is lossy: tokens are re-joined with single spaces, so the original
//! spacing around punctuation is not preserved.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::trace;

static DEFAULT_REFLECTIONS: Lazy<ReflectionMap> = Lazy::new(ReflectionMap::default);

/// Reflect `text` with the default map.
pub fn reflect(text: &str) -> String {
    DEFAULT_REFLECTIONS.reflect(text)
}

/// Ordered phrase entries plus a token lookup table. Keys are lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionMap {
    phrases: Vec<(String, String)>,
    tokens: HashMap<String, String>,
}

impl ReflectionMap {
    /// Build a map from `(from, to)` entries.
    ///
    /// Keys are trimmed and lowercased. A key containing a space becomes a
    /// phrase entry and keeps its position relative to other phrases; any
    /// other key becomes a token entry, where a repeated key overrides the
    /// earlier one. Empty keys are ignored.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut phrases: Vec<(String, String)> = Vec::new();
        let mut tokens = HashMap::new();

        for (from, to) in entries {
            let key = from.as_ref().trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            if key.contains(' ') {
                phrases.push((key, to.into()));
            } else {
                tokens.insert(key, to.into());
            }
        }

        ReflectionMap { phrases, tokens }
    }

    /// A map that reflects nothing; `reflect` then only normalizes.
    pub fn empty() -> Self {
        ReflectionMap { phrases: Vec::new(), tokens: HashMap::new() }
    }

    pub fn len(&self) -> usize {
        self.phrases.len() + self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty() && self.tokens.is_empty()
    }

    /// Phrase entries in the order they are applied.
    pub fn phrases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.phrases.iter().map(|(from, to)| (from.as_str(), to.as_str()))
    }

    /// Replacement for a single token, if any.
    pub fn token(&self, word: &str) -> Option<&str> {
        self.tokens.get(word).map(String::as_str)
    }

    /// Swap speaker perspective in `text`.
    pub fn reflect(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let phrased = self.apply_phrases(text.trim().to_lowercase());
        let reflected = regex!(r"\w+|[^\w\s]")
            .find_iter(&phrased)
            .map(|m| self.token(m.as_str()).unwrap_or(m.as_str()))
            .collect::<Vec<_>>()
            .join(" ");

        trace!(input = text, output = %reflected, "reflected");
        reflected
    }

    fn apply_phrases(&self, mut text: String) -> String {
        for (from, to) in &self.phrases {
            if text.contains(from.as_str()) {
                text = text.replace(from.as_str(), to);
            }
        }
        text
    }
}

impl Default for ReflectionMap {
    fn default() -> Self {
        ReflectionMap::new(crate::rules::reflections::ENTRIES.iter().copied())
    }
}

#[macro_use]
mod macros;
mod api;
mod config;
mod content;
mod engine;
mod error;
mod reflection;
mod rules;

pub use api::{Branch, ReplyDetails, ReplyResult, ResponderBuilder, reply, reply_verbose};
pub use config::{LogSettings, load_content, load_reflections, load_rules};
pub use content::{Act, FestivalContent, LineupDay, Parking, format_day, format_lineup};
pub use engine::{
    CompiledRule, InputFeatures, LookupStats, RenderOutcome, RenderStatus, Responder, RuleMatch, RuleTable, Template,
    TurnMetrics, VerbatimReason,
};
pub use error::ConfigError;
pub use reflection::{ReflectionMap, reflect};
pub use rules::festival::get as default_rules;

// --- Rule configuration -----------------------------------------------------

/// A rule as authored, before compilation.
///
/// Rules are only ever held in an ordered `Vec<RuleSpec>`: the position of a
/// rule in that list is its dispatch priority, and the first rule whose
/// pattern matches an input wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// Stable label used in logs and in `--explain` output.
    pub name: String,
    /// Regular expression source. Compiled case-insensitively and searched
    /// anywhere in the input.
    pub pattern: String,
    /// Response template; `{0}`, `{1}`, ... refer to capture groups.
    pub response: String,
    /// Coarse input features the pattern cannot match without.
    pub requires: InputFeatures,
}

impl RuleSpec {
    /// Create a rule without coarse input requirements.
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, response: impl Into<String>) -> Self {
        RuleSpec {
            name: name.into(),
            pattern: pattern.into(),
            response: response.into(),
            requires: InputFeatures::empty(),
        }
    }

    /// Declare input features this rule needs before its pattern is tried.
    pub fn requiring(mut self, features: InputFeatures) -> Self {
        self.requires |= features;
        self
    }
}

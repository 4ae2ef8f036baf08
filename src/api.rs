use crate::engine::{RenderStatus, Responder, RuleTable, TurnMetrics};
use crate::{ConfigError, FestivalContent, ReflectionMap, RuleSpec};
use once_cell::sync::Lazy;

static DEFAULT_RESPONDER: Lazy<Responder> =
    Lazy::new(|| Responder::new().expect("built-in rule table must compile"));

/// Which path a turn took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    /// Empty input: the introduction was sent.
    Intro,
    /// No rule matched: the default response was sent.
    Fallback,
    /// A rule matched.
    Matched { index: usize, rule: String },
    /// The turn panicked and the default response was sent instead.
    Fault,
}

/// How a reply was produced.
///
/// Meant for debugging and the CLI `--explain` report; answering a message
/// only needs [`ReplyResult::reply`].
#[derive(Debug, Clone)]
pub struct ReplyDetails {
    pub branch: Branch,
    /// Trimmed input as handed to the rule table.
    pub input: String,
    /// Raw capture groups of the winning rule.
    pub captures: Vec<String>,
    /// Capture groups after reflection, in the same order.
    pub reflected: Vec<String>,
    /// Render outcome; `None` unless a rule matched.
    pub render: Option<RenderStatus>,
    pub metrics: TurnMetrics,
}

impl ReplyDetails {
    pub(crate) fn bare(branch: Branch, input: &str, metrics: TurnMetrics) -> Self {
        ReplyDetails {
            branch,
            input: input.to_string(),
            captures: Vec::new(),
            reflected: Vec::new(),
            render: None,
            metrics,
        }
    }

    /// Name of the winning rule, if any.
    pub fn rule(&self) -> Option<&str> {
        match &self.branch {
            Branch::Matched { rule, .. } => Some(rule),
            _ => None,
        }
    }
}

/// Result from [`reply_verbose`] and [`Responder::reply_verbose`].
#[derive(Debug, Clone)]
pub struct ReplyResult {
    pub reply: String,
    pub details: ReplyDetails,
}

/// Builder for a [`Responder`].
///
/// Every part is optional. Unset parts fall back to the built-in festival
/// content, the default rule list generated from that content, and the
/// default reflection map.
///
/// # Example
/// ```
/// use festpal::Responder;
///
/// let bot = Responder::builder().bot_name("Pal").build().unwrap();
/// assert!(bot.reply("").contains("Pal"));
/// ```
#[derive(Debug, Default)]
pub struct ResponderBuilder {
    bot_name: Option<String>,
    content: Option<FestivalContent>,
    rules: Option<Vec<RuleSpec>>,
    reflections: Option<ReflectionMap>,
}

impl ResponderBuilder {
    pub fn bot_name(mut self, name: impl Into<String>) -> Self {
        self.bot_name = Some(name.into());
        self
    }

    pub fn content(mut self, content: FestivalContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Replace the default rule list. Order is dispatch priority.
    pub fn rules(mut self, rules: Vec<RuleSpec>) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn reflections(mut self, reflections: ReflectionMap) -> Self {
        self.reflections = Some(reflections);
        self
    }

    /// Compile the rules and assemble the responder.
    pub fn build(self) -> Result<Responder, ConfigError> {
        let content = self.content.unwrap_or_default();
        let rules = self.rules.unwrap_or_else(|| crate::default_rules(&content));
        let table = RuleTable::new(rules)?;
        let bot_name = self.bot_name.unwrap_or_else(|| "FestPal".to_string());
        let reflections = self.reflections.unwrap_or_default();

        Ok(Responder::from_parts(bot_name, content, table, reflections))
    }
}

/// Answer `text` with the default responder.
///
/// # Example
/// ```
/// let out = festpal::reply("berapa harga tiket");
/// assert!(out.contains("Rp350.000"));
/// ```
pub fn reply(text: &str) -> String {
    DEFAULT_RESPONDER.reply(text)
}

/// Answer `text` with the default responder and return the trace.
pub fn reply_verbose(text: &str) -> ReplyResult {
    DEFAULT_RESPONDER.reply_verbose(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_responder_builds() {
        let bot = Responder::new().unwrap();
        assert_eq!(bot.bot_name(), "FestPal");
        assert!(!bot.rules().is_empty());
        assert!(!bot.reflections().is_empty());
    }

    #[test]
    fn reply_verbose_reports_the_rule() {
        let res = reply_verbose("halo");
        assert_eq!(res.details.rule(), Some("greeting"));
        assert_eq!(res.details.input, "halo");
        assert!(res.details.metrics.total >= res.details.metrics.matching);
        assert_eq!(res.reply, reply("halo"));
    }

    #[test]
    fn builder_rejects_bad_patterns() {
        let err = Responder::builder().rules(vec![RuleSpec::new("bad", "[", "x")]).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn custom_reflections_are_used() {
        let bot = Responder::builder()
            .rules(vec![RuleSpec::new("echo", r"^say (.+)$", "{0}")])
            .reflections(ReflectionMap::new([("halo", "hai")]))
            .build()
            .unwrap();
        assert_eq!(bot.reply("say Halo dunia"), "hai dunia");
    }

    #[test]
    fn details_of_non_matches_have_no_rule() {
        assert_eq!(reply_verbose("").details.rule(), None);
        assert_eq!(reply_verbose("qwertyuiop").details.rule(), None);
        assert!(reply_verbose("qwertyuiop").details.render.is_none());
    }
}

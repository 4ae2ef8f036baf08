//! Per-turn metrics.
//!
//! Collected on every call to [`Responder::reply_verbose`]; the plain
//! [`Responder::reply`] path discards them. Durations are wall-clock and only
//! meant for debugging and the CLI `--explain` report.
//!
//! [`Responder::reply`]: super::Responder::reply
//! [`Responder::reply_verbose`]: super::Responder::reply_verbose

use std::time::Duration;

use super::rule_table::LookupStats;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TurnMetrics {
    /// Whole turn, from raw input to reply text.
    pub total: Duration,
    /// Time spent walking the rule table.
    pub matching: Duration,
    /// Time spent reflecting captures and rendering the template.
    pub render: Duration,
    /// Rules whose pattern was run.
    pub rules_evaluated: usize,
    /// Rules skipped by input-feature gating.
    pub rules_skipped: usize,
}

impl TurnMetrics {
    pub(crate) fn record_lookup(&mut self, elapsed: Duration, stats: LookupStats) {
        self.matching = elapsed;
        self.rules_evaluated = stats.evaluated;
        self.rules_skipped = stats.skipped;
    }
}

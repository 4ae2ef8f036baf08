//! One reply turn.
//!
//! ```text
//! input ──┬─ empty ─────────────────────────────▶ introduction
//!         └─ trim ─▶ RuleTable::find_match
//!                      ├─ None ─────────────────▶ default response
//!                      └─ Some(rule, groups)
//!                           │ reflect each group
//!                           ▼
//!                         Template::render ─────▶ rendered / verbatim template
//! ```
//!
//! A `Responder` is immutable once built and keeps no memory between turns,
//! so one instance can serve any number of threads by shared reference.

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use tracing::{debug, warn};

use super::metrics::TurnMetrics;
use super::rule_table::RuleTable;
use super::template::{RenderStatus, VerbatimReason};
use crate::api::{Branch, ReplyDetails, ReplyResult, ResponderBuilder};
use crate::{ConfigError, FestivalContent, ReflectionMap};

#[derive(Debug, Clone)]
pub struct Responder {
    bot_name: String,
    content: FestivalContent,
    table: RuleTable,
    reflections: ReflectionMap,
    intro: String,
    fallback: String,
}

impl Responder {
    /// Responder with the default name, content, rules and reflections.
    pub fn new() -> Result<Self, ConfigError> {
        Self::builder().build()
    }

    pub fn builder() -> ResponderBuilder {
        ResponderBuilder::default()
    }

    pub(crate) fn from_parts(
        bot_name: String,
        content: FestivalContent,
        table: RuleTable,
        reflections: ReflectionMap,
    ) -> Self {
        let intro = format!(
            "Hai, saya {bot_name} — bot panduan {}. Tanya saja: harga, jadwal, lokasi, refund, atau ketik 'help'.",
            content.name
        );
        let fallback = "Maaf, saya tidak mengerti. Coba tanyakan dengan kata kunci (contoh: 'harga tiket', 'jadwal', \
                        'bisa gopay ga', 'refund'), atau ketik 'help/bantuan' untuk daftar bantuan."
            .to_string();

        Responder { bot_name, content, table, reflections, intro, fallback }
    }

    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    pub fn content(&self) -> &FestivalContent {
        &self.content
    }

    pub fn rules(&self) -> &RuleTable {
        &self.table
    }

    pub fn reflections(&self) -> &ReflectionMap {
        &self.reflections
    }

    /// Reply to empty input.
    pub fn intro(&self) -> &str {
        &self.intro
    }

    /// Reply when no rule matches.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Answer one message. Always returns text.
    pub fn reply(&self, input: &str) -> String {
        self.reply_verbose(input).reply
    }

    /// Answer one message and report how the answer was chosen.
    ///
    /// A panic inside the turn is contained here and answered with the
    /// default response.
    pub fn reply_verbose(&self, input: &str) -> ReplyResult {
        let started = Instant::now();
        match panic::catch_unwind(AssertUnwindSafe(|| self.dispatch(input, started))) {
            Ok(result) => result,
            Err(_) => {
                warn!(input, "reply turn panicked, sending default response");
                let metrics = TurnMetrics { total: started.elapsed(), ..TurnMetrics::default() };
                ReplyResult {
                    reply: self.fallback.clone(),
                    details: ReplyDetails::bare(Branch::Fault, input.trim(), metrics),
                }
            }
        }
    }

    fn dispatch(&self, input: &str, started: Instant) -> ReplyResult {
        let mut metrics = TurnMetrics::default();

        if input.is_empty() {
            debug!("empty input, sending introduction");
            metrics.total = started.elapsed();
            return ReplyResult { reply: self.intro.clone(), details: ReplyDetails::bare(Branch::Intro, "", metrics) };
        }

        let text = input.trim();
        let lookup_start = Instant::now();
        let (found, stats) = self.table.find_match_with_stats(text);
        metrics.record_lookup(lookup_start.elapsed(), stats);

        let Some(found) = found else {
            debug!(input = text, evaluated = stats.evaluated, "no rule matched");
            metrics.total = started.elapsed();
            return ReplyResult {
                reply: self.fallback.clone(),
                details: ReplyDetails::bare(Branch::Fallback, text, metrics),
            };
        };

        let render_start = Instant::now();
        let reflected: Vec<String> = found.groups.iter().map(|g| self.reflections.reflect(g)).collect();
        let outcome = found.template().render(&reflected);
        let status = outcome.status();
        if let RenderStatus::Verbatim(
            reason @ (VerbatimReason::MissingGroup { .. } | VerbatimReason::Malformed { .. }),
        ) = status
        {
            debug!(
                rule = %found.rule.name,
                ?reason,
                arity = found.template().arity(),
                groups = found.groups.len(),
                "template left unrendered"
            );
        }
        let reply = outcome.into_text();
        metrics.render = render_start.elapsed();
        metrics.total = started.elapsed();

        debug!(rule = %found.rule.name, index = found.index, groups = found.groups.len(), "rule answered");

        ReplyResult {
            reply,
            details: ReplyDetails {
                branch: Branch::Matched { index: found.index, rule: found.rule.name.clone() },
                input: text.to_string(),
                captures: found.groups,
                reflected,
                render: Some(status),
                metrics,
            },
        }
    }
}

//! Rule compilation and first-match lookup.
//!
//! This module holds the *static* side of the engine. A `RuleTable` is built
//! once from an ordered list of [`RuleSpec`]s and never changes afterwards:
//!
//! ```text
//! Vec<RuleSpec> ──▶ RuleTable::new ──▶ [CompiledRule; n]   (same order)
//!                    ├─ regex, case-insensitive
//!                    └─ Template::parse
//! ```
//!
//! ## Invariants
//!
//! - The compiled rules keep the authored order exactly. Lookup walks them
//!   front to back and stops at the first pattern that matches anywhere in
//!   the input, so a specific rule placed before a broad one shadows it.
//! - Skipping a rule because the input lacks a required [`InputFeatures`] is
//!   equivalent to trying it and failing (see `trigger.rs`).
//! - Compilation fails as a whole: one bad pattern and there is no table.

use regex::{Regex, RegexBuilder};
use tracing::trace;

use super::template::Template;
use super::trigger::InputFeatures;
use crate::{ConfigError, RuleSpec};

/// One rule ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub name: String,
    pub regex: Regex,
    pub template: Template,
    pub requires: InputFeatures,
}

impl CompiledRule {
    fn compile(index: usize, spec: RuleSpec) -> Result<Self, ConfigError> {
        let regex = RegexBuilder::new(&spec.pattern).case_insensitive(true).build().map_err(|source| {
            ConfigError::InvalidPattern { rule: spec.name.clone(), index, source }
        })?;

        Ok(CompiledRule { name: spec.name, regex, template: Template::parse(spec.response), requires: spec.requires })
    }

    /// Capture groups of the first match in `text`, or `None`.
    ///
    /// Groups come back in index order without the whole-match group 0. A
    /// group that did not take part in the match is the empty string.
    pub fn captures(&self, text: &str) -> Option<Vec<String>> {
        let caps = self.regex.captures(text)?;
        Some((1..caps.len()).map(|i| caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default()).collect())
    }
}

/// The winning rule for an input.
#[derive(Debug, Clone)]
pub struct RuleMatch<'a> {
    /// Position of the rule in the table.
    pub index: usize,
    pub rule: &'a CompiledRule,
    /// Raw captured text, one entry per group.
    pub groups: Vec<String>,
}

impl RuleMatch<'_> {
    pub fn template(&self) -> &Template {
        &self.rule.template
    }
}

/// How much work a lookup did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LookupStats {
    /// Rules whose regex was run.
    pub evaluated: usize,
    /// Rules skipped by feature gating.
    pub skipped: usize,
}

/// Ordered, immutable rule list.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<CompiledRule>,
}

impl RuleTable {
    /// Compile `specs`, keeping their order.
    pub fn new<I>(specs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = RuleSpec>,
    {
        let rules = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| CompiledRule::compile(index, spec))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RuleTable { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    /// Rule names in dispatch order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    /// First rule whose pattern matches anywhere in `text`.
    pub fn find_match(&self, text: &str) -> Option<RuleMatch<'_>> {
        self.find_match_with_stats(text).0
    }

    /// Like [`find_match`](Self::find_match), also reporting how many rules
    /// were tried and how many were skipped.
    pub fn find_match_with_stats(&self, text: &str) -> (Option<RuleMatch<'_>>, LookupStats) {
        let features = InputFeatures::scan(text);
        let mut stats = LookupStats::default();

        for (index, rule) in self.rules.iter().enumerate() {
            if !features.satisfies(rule.requires) {
                trace!(rule = %rule.name, required = ?rule.requires, "rule gated out");
                stats.skipped += 1;
                continue;
            }

            stats.evaluated += 1;
            if let Some(groups) = rule.captures(text) {
                trace!(rule = %rule.name, index, groups = ?groups, "rule matched");
                return (Some(RuleMatch { index, rule, groups }), stats);
            }
        }

        (None, stats)
    }
}

//! Rule dispatch engine.
//!
//! ## How the parts work together
//!
//! ```text
//! Vec<RuleSpec> ──┐
//!                 │  RuleTable::new                (rule_table.rs)
//!                 │    - compile regexes, keep order
//!                 │    - Template::parse           (template.rs)
//!                 └───────────────┬─────────────
//!                                 │
//! input ── Responder::reply ──────┤                 (dispatch.rs)
//!                                 │  InputFeatures::scan (trigger.rs)
//!                                 │  RuleTable::find_match
//!                                 │    - first match wins
//!                                 v
//!                      ReflectionMap::reflect per group (reflection.rs)
//!                                 │
//!                                 v
//!                        Template::render ──▶ reply text
//! ```
//!
//! ## Responsibilities by module
//!
//! - `rule_table.rs`: compiled, ordered rules and first-match lookup.
//! - `trigger.rs`: coarse input features used to skip rules cheaply.
//! - `template.rs`: placeholder parsing and lenient rendering.
//! - `dispatch.rs`: the `Responder`, one turn from input to text.
//! - `metrics.rs`: optional per-turn timing for `reply_verbose`.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events: `debug` for the winning rule and render
//! fallbacks, `trace` for every rule tried or gated out.

#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/rule_table.rs"]
mod rule_table;
#[path = "engine/template.rs"]
mod template;
#[path = "engine/trigger.rs"]
mod trigger;

pub use dispatch::Responder;
pub use metrics::TurnMetrics;
pub use rule_table::{CompiledRule, LookupStats, RuleMatch, RuleTable};
pub use template::{RenderOutcome, RenderStatus, Template, VerbatimReason};
pub use trigger::InputFeatures;

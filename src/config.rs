//! Configuration files and logging settings.
//!
//! JSON files replace parts of the built-in setup: festival content, the
//! rule list, or the reflection map. Environment variables only affect
//! logging.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{ConfigError, FestivalContent, ReflectionMap, RuleSpec};

#[derive(Debug, Deserialize)]
struct RuleRecord {
    #[serde(default)]
    name: Option<String>,
    pattern: String,
    response: String,
}

#[derive(Debug, Deserialize)]
struct ReflectionRecord {
    from: String,
    to: String,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
}

/// Load festival content from a JSON object.
pub fn load_content(path: impl AsRef<Path>) -> Result<FestivalContent, ConfigError> {
    let path = path.as_ref();
    let content: FestivalContent = read_json(path)?;
    debug!(path = %path.display(), days = content.lineup.len(), "loaded festival content");
    Ok(content)
}

/// Load an ordered rule list from a JSON array.
///
/// Unnamed rules are called `rule-<index>`. Patterns are not compiled here;
/// that happens when the list is handed to a [`RuleTable`](crate::RuleTable).
pub fn load_rules(path: impl AsRef<Path>) -> Result<Vec<RuleSpec>, ConfigError> {
    let path = path.as_ref();
    let records: Vec<RuleRecord> = read_json(path)?;
    debug!(path = %path.display(), rules = records.len(), "loaded rules");

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(index, r)| {
            let name = r.name.unwrap_or_else(|| format!("rule-{index}"));
            RuleSpec::new(name, r.pattern, r.response)
        })
        .collect())
}

/// Load a reflection map from a JSON array of `{"from", "to"}` pairs.
pub fn load_reflections(path: impl AsRef<Path>) -> Result<ReflectionMap, ConfigError> {
    let path = path.as_ref();
    let records: Vec<ReflectionRecord> = read_json(path)?;
    debug!(path = %path.display(), entries = records.len(), "loaded reflections");
    Ok(ReflectionMap::new(records.into_iter().map(|r| (r.from, r.to))))
}

/// Log filter and optional log file for the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info` or `festpal=debug`.
    pub filter: String,
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings { filter: "info".to_string(), file: None }
    }
}

impl LogSettings {
    /// Read `FESTPAL_LOG`, then `LOG_LEVEL`, and `LOG_FILE` from the process
    /// environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let filter = non_empty("FESTPAL_LOG")
            .or_else(|| non_empty("LOG_LEVEL"))
            .map(|v| normalize_level(&v))
            .unwrap_or_else(|| "info".to_string());
        let file = non_empty("LOG_FILE").map(PathBuf::from);

        LogSettings { filter, file }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, level: Option<&str>, file: Option<&Path>) -> Self {
        if let Some(level) = level {
            self.filter = normalize_level(level);
        }
        if let Some(file) = file {
            self.file = Some(file.to_path_buf());
        }
        self
    }
}

// Accept the level names people tend to type (`WARNING`, `Info`) as well as
// full filter directives, which pass through untouched.
fn normalize_level(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    match lower.as_str() {
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        _ => lower,
    }
}

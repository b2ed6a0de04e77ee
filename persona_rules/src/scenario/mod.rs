//! Scenario definitions and the read-only scenario store.
//!
//! Scenarios are numbered practice levels loaded once at startup from a JSON
//! dataset. The store degrades to empty on any load failure; a missing or
//! corrupt dataset must never take the session down.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A numbered communication-practice level.
///
/// `situation`/`goal` carry the authored (localized) text; the `_en`
/// variants, when present, are preferred for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique positive level number, the primary key.
    pub level: u32,

    pub title: String,

    pub situation: String,

    #[serde(default)]
    pub situation_en: Option<String>,

    pub goal: String,

    #[serde(default)]
    pub goal_en: Option<String>,

    /// The persona's opening line when the level starts.
    pub sloane_line: String,
}

impl Scenario {
    /// Situation text for display, English preferred.
    pub fn situation_text(&self) -> &str {
        self.situation_en.as_deref().unwrap_or(&self.situation)
    }

    /// Goal text for display, English preferred.
    pub fn goal_text(&self) -> &str {
        self.goal_en.as_deref().unwrap_or(&self.goal)
    }
}

/// Failures that can occur while reading the dataset.
///
/// These never escape [`ScenarioStore::load`]; they exist so the fallible
/// path composes with `?` and can be logged with a cause.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read scenario dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered, read-only collection of scenarios.
#[derive(Debug, Clone, Default)]
pub struct ScenarioStore {
    scenarios: Vec<Scenario>,
}

impl ScenarioStore {
    /// Load scenarios from a JSON file.
    ///
    /// Any read or parse failure yields an empty store with a warning; the
    /// caller never sees an error.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => {
                tracing::debug!(
                    path = %path.display(),
                    count = store.scenarios.len(),
                    "loaded scenario dataset"
                );
                store
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "scenario dataset unavailable, starting with no levels"
                );
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        let scenarios: Vec<Scenario> = serde_json::from_str(&raw)?;
        Ok(Self { scenarios })
    }

    /// Build a store directly from scenarios (tests, embedded datasets).
    pub fn from_scenarios(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// The fixed dataset location relative to the running program:
    /// `scenarios.json` next to the executable, with a working-directory
    /// fallback for `cargo run`.
    pub fn default_path() -> PathBuf {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| Some(exe.parent()?.join("scenarios.json")));
        match beside_exe {
            Some(path) if path.exists() => path,
            _ => PathBuf::from("data/scenarios.json"),
        }
    }

    /// First scenario whose level matches, if any.
    ///
    /// Takes `i64` so user-supplied numbers outside the valid level range
    /// simply fail to match instead of failing to parse.
    pub fn find(&self, level: i64) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| i64::from(s.level) == level)
    }

    /// All scenarios in load order.
    pub fn list_all(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Level numbers in load order, for "available levels" messages.
    pub fn level_numbers(&self) -> Vec<u32> {
        self.scenarios.iter().map(|s| s.level).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample(level: u32, title: &str) -> Scenario {
        Scenario {
            level,
            title: title.to_string(),
            situation: "상황".to_string(),
            situation_en: Some("A networking event.".to_string()),
            goal: "목표".to_string(),
            goal_en: Some("Say something interesting.".to_string()),
            sloane_line: "Go.".to_string(),
        }
    }

    #[test]
    fn test_find_by_level() {
        let store = ScenarioStore::from_scenarios(vec![sample(1, "Ice"), sample(2, "Story")]);

        assert_eq!(store.find(2).unwrap().title, "Story");
        assert!(store.find(99).is_none());
        assert!(store.find(-1).is_none());
    }

    #[test]
    fn test_list_preserves_load_order() {
        let store = ScenarioStore::from_scenarios(vec![sample(3, "C"), sample(1, "A")]);

        let levels = store.level_numbers();
        assert_eq!(levels, vec![3, 1]);
        assert_eq!(store.list_all()[0].title, "C");
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let store = ScenarioStore::load("/nonexistent/scenarios.json");
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_json_degrades_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not valid json").unwrap();

        let store = ScenarioStore::load(file.path());
        assert!(store.is_empty());
    }

    #[test]
    fn test_valid_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&vec![sample(1, "Ice"), sample(2, "Story")]).unwrap();
        write!(file, "{}", json).unwrap();

        let store = ScenarioStore::load(file.path());
        assert_eq!(store.len(), 2);
        assert_eq!(store.find(1).unwrap().title, "Ice");
    }

    #[test]
    fn test_english_fields_preferred() {
        let with_en = sample(1, "Ice");
        assert_eq!(with_en.situation_text(), "A networking event.");
        assert_eq!(with_en.goal_text(), "Say something interesting.");

        let mut without_en = sample(1, "Ice");
        without_en.situation_en = None;
        without_en.goal_en = None;
        assert_eq!(without_en.situation_text(), "상황");
        assert_eq!(without_en.goal_text(), "목표");
    }
}

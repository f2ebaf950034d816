//! Fixture runner for checking a dataset and service end to end
//!
//! Results are collected in an explicit [`Summary`] that is passed into
//! [`run_suite`] and handed back, so several suites can be chained without any
//! shared counters.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::indexer::TranslationIndex;
use crate::service::TranslationService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ToText,
    ToEmojis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Any JSON value; coerced the same way request fields are
    #[serde(default)]
    pub input: Value,
    /// `null` means the input is absent and must pass through unchanged
    #[serde(default)]
    pub expected: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSuite {
    pub name: String,
    pub direction: Direction,
    pub cases: Vec<FixtureCase>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub suite: String,
    pub case: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<Failure>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn record_pass(&mut self) {
        self.passed += 1;
    }

    pub fn record_failure(&mut self, failure: Failure) {
        self.failed += 1;
        self.failures.push(failure);
    }
}

/// Load a fixture suite from a JSON file
pub fn load_fixture_file(path: &Path) -> Result<FixtureSuite> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse fixture file: {}", path.display()))
}

/// Round-trip suites for every dataset entry: emoji→text and text→emoji
pub fn round_trip_suites(index: &TranslationIndex) -> [FixtureSuite; 2] {
    let to_text = index
        .entries()
        .iter()
        .map(|entry| FixtureCase {
            input: Value::String(entry.emoji.clone()),
            expected: Some(entry.translation.clone()),
            description: None,
        })
        .collect();

    let to_emojis = index
        .entries()
        .iter()
        .map(|entry| FixtureCase {
            input: Value::String(entry.translation.clone()),
            expected: Some(entry.emoji.clone()),
            description: None,
        })
        .collect();

    [
        FixtureSuite {
            name: "Single emoji to text".to_string(),
            direction: Direction::ToText,
            cases: to_text,
        },
        FixtureSuite {
            name: "Text to single emoji".to_string(),
            direction: Direction::ToEmojis,
            cases: to_emojis,
        },
    ]
}

/// Run every case of `suite` through the service and add the outcomes to `summary`
pub fn run_suite(service: &TranslationService, suite: &FixtureSuite, mut summary: Summary) -> Summary {
    for case in &suite.cases {
        let result = match suite.direction {
            Direction::ToText => service.convert_to_text(&case.input),
            Direction::ToEmojis => service.convert_to_emojis(&case.input),
        };
        let actual = result.map(|r| r.as_str().to_string());

        if actual == case.expected {
            summary.record_pass();
        } else {
            summary.record_failure(Failure {
                suite: suite.name.clone(),
                case: case.description.clone().unwrap_or_else(|| case.input.to_string()),
                expected: case.expected.clone(),
                actual,
            });
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::indexer::build_index;
    use crate::models::DatasetEntry;

    fn service() -> TranslationService {
        TranslationService::new(
            build_index(vec![DatasetEntry::new("😀", "grinning face"), DatasetEntry::new("🔥", "fire")])
                .unwrap(),
        )
    }

    #[test]
    fn test_round_trip_passes() {
        let service = service();
        let index = service.index().unwrap();

        let summary = round_trip_suites(index)
            .iter()
            .fold(Summary::new(), |summary, suite| run_suite(&service, suite, summary));

        assert_eq!(summary.passed, 4);
        assert!(summary.is_success());
    }

    #[test]
    fn test_failures_are_recorded() {
        let suite: FixtureSuite = serde_json::from_value(json!({
            "name": "edge cases",
            "direction": "to_text",
            "cases": [
                {"input": null, "expected": null, "description": "Null input handling"},
                {"input": "   ", "expected": "   "},
                {"input": "🔥", "expected": "flame", "description": "wrong expectation"}
            ]
        }))
        .unwrap();

        let summary = run_suite(&service(), &suite, Summary::new());
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(
            summary.failures,
            vec![Failure {
                suite: "edge cases".to_string(),
                case: "wrong expectation".to_string(),
                expected: Some("flame".to_string()),
                actual: Some("fire".to_string()),
            }]
        );
    }

    #[test]
    fn test_summary_accumulates_across_suites() {
        let service = service();
        let suite = FixtureSuite {
            name: "phrases".to_string(),
            direction: Direction::ToEmojis,
            cases: vec![FixtureCase {
                input: json!("FIRE"),
                expected: Some("🔥".to_string()),
                description: None,
            }],
        };

        let summary = run_suite(&service, &suite, Summary::new());
        let summary = run_suite(&service, &suite, summary);
        assert_eq!(summary.passed, 2);
    }
}

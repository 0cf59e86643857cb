//! Scenario tables and resolved outcomes.

use serde::{Deserialize, Serialize};
use types::Tag;

// =============================================================================
// ScenarioTable
// =============================================================================

/// Ordered pair of narrative labels for one ownership state.
///
/// The positive entry corresponds to the classic table index 0, the
/// negative entry to index 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioTable {
    /// Label for the favorable outcome (index 0).
    pub positive: String,
    /// Label for the unfavorable outcome (index 1).
    pub negative: String,
}

impl ScenarioTable {
    /// Create a table from its two labels, positive first.
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
        }
    }
}

// =============================================================================
// ScenarioOutcome
// =============================================================================

/// Result of resolving one company's scenario for the year.
///
/// `text` carries the scenario label and the first price effect, `detail`
/// the compounding second effect. The `tag` drives front-end color coding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub text: String,
    pub detail: String,
    pub tag: Tag,
}

impl ScenarioOutcome {
    /// The no-op outcome of the defensive third branch.
    pub(crate) fn neutral() -> Self {
        Self {
            text: "Scenario: No significant price change.".to_string(),
            detail: String::new(),
            tag: Tag::Neutral,
        }
    }
}

//! Identifier and classification types shared across the game.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Money scale factor: 100 means amounts are stored in cents.
/// - `100` = $1.00
/// - `1` = $0.01 (smallest price increment)
pub const MONEY_SCALE: i64 = 100;

// =============================================================================
// Aliases
// =============================================================================

/// Company display name (e.g., "Orange", "Ezzon").
pub type Symbol = String;

/// Game year counter. Starts at 1 and increments once per year-advance.
pub type Year = u32;

// =============================================================================
// Category
// =============================================================================

/// Company classification determining its annual price-drift distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Established blue-chip: narrow drift.
    Large,
    /// High-growth upstart: wide drift skewed upward.
    Emerging,
    /// Declining business: drift skewed downward.
    Fading,
    /// Small cap: same drift as Large.
    Small,
}

impl Category {
    /// Uniform drift range applied once per year-advance.
    pub fn drift_range(self) -> (f64, f64) {
        match self {
            Category::Emerging => (-0.20, 0.50),
            Category::Fading => (-0.30, 0.10),
            Category::Large | Category::Small => (-0.10, 0.10),
        }
    }
}

// =============================================================================
// Tag
// =============================================================================

/// Display tag attached to a scenario outcome, used by front ends for
/// color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Positive,
    Negative,
    Neutral,
}

// =============================================================================
// Tests
// =============================================================================

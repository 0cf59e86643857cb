//! The command surface consumed by the presentation layer.

use serde::{Deserialize, Serialize};
use types::{Cash, Quantity, Symbol, Tag, Year};

// =============================================================================
// Page
// =============================================================================

/// The page the engine is currently presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    MainMenu,
    BuyPage,
    SellPage,
    ScenarioPage,
}

// =============================================================================
// Command
// =============================================================================

/// A single player command.
///
/// Front ends translate their input events (button clicks, key presses)
/// into these and feed them to [`crate::Engine::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Move between the main menu and the buy/sell pages.
    Navigate(Page),
    /// Buy shares of the company at `company` (roster index).
    Buy { company: usize, quantity: Quantity },
    /// Sell shares of the company at `company` (roster index).
    Sell { company: usize, quantity: Quantity },
    /// Resolve this year's scenarios and show the scenario page.
    AdvanceYear,
    /// Leave the scenario page: apply drift and start the next year.
    Acknowledge,
}

// =============================================================================
// Outcomes
// =============================================================================

/// Per-company scenario narrative for the scenario page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub symbol: Symbol,
    /// Scenario label plus the first price effect.
    pub text: String,
    /// The compounding second price effect.
    pub detail: String,
    /// Color-coding tag for display.
    pub tag: Tag,
}

/// Result of acknowledging the scenario page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearOutcome {
    /// A new year has begun; back to the main menu.
    Continue { year: Year },
    /// The horizon has been reached; the run is over.
    GameOver { profit_loss: Cash },
}

/// Result of one dispatched [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Navigation completed; now on this page.
    Navigated(Page),
    /// Trade outcome message, success or domain rejection.
    Message(String),
    /// Scenario page contents for the year just resolved.
    Scenario(Vec<ScenarioReport>),
    /// Year rollover result.
    Year(YearOutcome),
}

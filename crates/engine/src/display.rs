//! Read-only display snapshot handed to front ends.

use serde::{Deserialize, Serialize};
use types::{Cash, Price, Quantity, Symbol, Year};

/// One held position as shown on the main menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingView {
    pub symbol: Symbol,
    pub quantity: Quantity,
    /// Percent change vs the start of the most recent year-advance.
    pub change_pct: f64,
}

/// One roster entry as shown on the buy/sell pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyView {
    pub symbol: Symbol,
    pub price: Price,
}

/// Everything a front end needs to render the current turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub year: Year,
    pub balance: Cash,
    pub holdings: Vec<HoldingView>,
    pub companies: Vec<CompanyView>,
}

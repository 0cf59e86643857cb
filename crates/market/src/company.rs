//! One tradable company's market state and yearly price mutations.

use rand::Rng;
use serde::{Deserialize, Serialize};
use types::{Category, Price, Quantity, Symbol, Tag};

use crate::scenario::{ScenarioOutcome, ScenarioTable};

// =============================================================================
// Company
// =============================================================================

/// A single tradable company.
///
/// Created once at simulation start from the roster and mutated exactly
/// twice per year-advance: [`Company::choose_scenario`] first, then
/// [`Company::update_price`]. The price never drops below $1.00.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Display name, also the holdings key.
    pub symbol: Symbol,
    /// Classification determining the drift distribution.
    pub category: Category,
    /// Current market price.
    pub price: Price,
    /// Price as of the start of the most recent year-advance.
    /// Used solely for the display-only change percentage.
    pub previous_price: Price,
    /// Scenario labels used while the player holds this stock.
    pub scenarios_owned: ScenarioTable,
    /// Scenario labels used while the player does not hold it.
    pub scenarios_not_owned: ScenarioTable,
    /// Denormalized mirror of the portfolio's holding for this company.
    pub owned_shares: Quantity,
}

impl Company {
    /// Create a company at its starting price with no shares held.
    pub fn new(
        symbol: impl Into<Symbol>,
        category: Category,
        price: Price,
        scenarios_owned: ScenarioTable,
        scenarios_not_owned: ScenarioTable,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            category,
            price,
            previous_price: price,
            scenarios_owned,
            scenarios_not_owned,
            owned_shares: Quantity::ZERO,
        }
    }

    /// Percent change of the current price vs the start of the most
    /// recent year-advance.
    pub fn price_change_pct(&self) -> f64 {
        (self.price - self.previous_price).to_float() / self.previous_price.to_float() * 100.0
    }

    /// Annual drift update.
    ///
    /// Records the previous price, draws a multiplicative drift uniformly
    /// from the category range, rounds to cents, and floors at $1.00.
    pub fn update_price<R: Rng>(&mut self, rng: &mut R) {
        self.previous_price = self.price;
        let (lo, hi) = self.category.drift_range();
        let drift = rng.random_range(lo..=hi);
        self.price = self.price.apply_return(drift).max(Price::ONE);
    }

    /// Resolve this year's scenario and apply its price effect.
    ///
    /// Picks one of the two table entries uniformly. The favorable entry
    /// applies two independent compounding increases in [10%, 30%]; the
    /// unfavorable entry mirrors them as decreases, each floored at $1.00.
    pub fn choose_scenario<R: Rng>(&mut self, owned: bool, rng: &mut R) -> ScenarioOutcome {
        let table = if owned {
            &self.scenarios_owned
        } else {
            &self.scenarios_not_owned
        };
        match rng.random_range(0..2u32) {
            0 => {
                let label = table.positive.clone();
                let first = rng.random_range(0.10..=0.30);
                self.price = self.price.apply_return(first);
                let second = rng.random_range(0.10..=0.30);
                self.price = self.price.apply_return(second);
                ScenarioOutcome {
                    text: format!(
                        "Scenario: {label} - Stock price increased by {:.1}%",
                        first * 100.0
                    ),
                    detail: format!(" Additional increase: {:.1}%", second * 100.0),
                    tag: Tag::Positive,
                }
            }
            1 => {
                let label = table.negative.clone();
                let first = rng.random_range(0.10..=0.30);
                self.price = self.price.apply_return(-first).max(Price::ONE);
                let second = rng.random_range(0.10..=0.30);
                self.price = self.price.apply_return(-second).max(Price::ONE);
                ScenarioOutcome {
                    text: format!(
                        "Scenario: {label} - Stock price decreased by {:.1}%",
                        first * 100.0
                    ),
                    detail: format!(" Additional decrease: {:.1}%", second * 100.0),
                    tag: Tag::Negative,
                }
            }
            // Unreachable with two-entry tables; kept as an explicit no-op.
            _ => ScenarioOutcome::neutral(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

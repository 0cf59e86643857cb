//! Portfolio crate: the player's cash ledger and share holdings.
//!
//! The ledger is exact: balances are fixed-point cents, every buy/sell
//! either fully completes or leaves the portfolio untouched, and a
//! holdings entry exists if and only if its quantity is positive.

use std::collections::BTreeMap;

use market::Company;
use serde::{Deserialize, Serialize};
use types::{Cash, Price, Quantity, Symbol};

// =============================================================================
// Errors
// =============================================================================

/// Recoverable trade rejections.
///
/// Both variants are informational: the portfolio is left byte-for-byte
/// unchanged and the run continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TradeError {
    /// Buy cost exceeds the cash balance.
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Cash, available: Cash },

    /// Sell quantity exceeds the held quantity (or the holding is absent).
    #[error("insufficient holdings of {symbol}: requested {requested}, holding {held}")]
    InsufficientHoldings {
        symbol: Symbol,
        requested: Quantity,
        held: Quantity,
    },
}

impl TradeError {
    /// Short message shown to the player, matching the classic UI copy.
    pub fn player_message(&self) -> &'static str {
        match self {
            TradeError::InsufficientFunds { .. } => "Not enough funds.",
            TradeError::InsufficientHoldings { .. } => {
                "You don't own enough of this stock to sell."
            }
        }
    }
}

// =============================================================================
// TradeReceipt
// =============================================================================

/// Record of a completed buy or sell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeReceipt {
    pub symbol: Symbol,
    pub quantity: Quantity,
    /// Market price per share at execution time.
    pub price: Price,
    /// Total cash moved: debited on buys, credited on sells.
    pub total: Cash,
}

// =============================================================================
// Portfolio
// =============================================================================

/// The player's cash balance and share holdings.
///
/// Holdings map company symbols to positive quantities; zero-quantity
/// entries are removed, never kept. The map is ordered so iteration is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    balance: Cash,
    holdings: BTreeMap<Symbol, Quantity>,
}

impl Portfolio {
    /// Create a portfolio with the configured starting balance.
    pub fn new(initial_balance: Cash) -> Self {
        Self {
            balance: initial_balance,
            holdings: BTreeMap::new(),
        }
    }

    /// Current cash balance.
    pub fn balance(&self) -> Cash {
        self.balance
    }

    /// Quantity held of the given company, zero if absent.
    pub fn quantity_of(&self, symbol: &str) -> Quantity {
        self.holdings.get(symbol).copied().unwrap_or(Quantity::ZERO)
    }

    /// Whether the player holds any shares of the given company.
    pub fn holds(&self, symbol: &str) -> bool {
        self.holdings.contains_key(symbol)
    }

    /// Deterministic ordered iteration over (symbol, quantity).
    pub fn holdings(&self) -> impl Iterator<Item = (&Symbol, Quantity)> {
        self.holdings.iter().map(|(symbol, qty)| (symbol, *qty))
    }

    /// Number of distinct companies held.
    pub fn distinct_holdings(&self) -> usize {
        self.holdings.len()
    }

    /// Buy `quantity` shares of `company` at its current price.
    ///
    /// No partial fills: either the full cost is debited or the trade is
    /// rejected with [`TradeError::InsufficientFunds`]. Also increments the
    /// company's denormalized `owned_shares` counter.
    pub fn buy(
        &mut self,
        company: &mut Company,
        quantity: Quantity,
    ) -> Result<TradeReceipt, TradeError> {
        debug_assert!(!quantity.is_zero(), "buy quantity must be positive");

        let cost = company.price * quantity;
        if self.balance < cost {
            return Err(TradeError::InsufficientFunds {
                needed: cost,
                available: self.balance,
            });
        }

        self.balance -= cost;
        *self
            .holdings
            .entry(company.symbol.clone())
            .or_insert(Quantity::ZERO) += quantity;
        company.owned_shares += quantity;

        Ok(TradeReceipt {
            symbol: company.symbol.clone(),
            quantity,
            price: company.price,
            total: cost,
        })
    }

    /// Sell `quantity` shares of `company` at its current price.
    ///
    /// No partial sells: the full quantity must be held or the trade is
    /// rejected with [`TradeError::InsufficientHoldings`]. Removes the
    /// holdings entry entirely when it reaches zero.
    pub fn sell(
        &mut self,
        company: &mut Company,
        quantity: Quantity,
    ) -> Result<TradeReceipt, TradeError> {
        debug_assert!(!quantity.is_zero(), "sell quantity must be positive");

        let held = self.quantity_of(&company.symbol);
        if held < quantity {
            return Err(TradeError::InsufficientHoldings {
                symbol: company.symbol.clone(),
                requested: quantity,
                held,
            });
        }

        let proceeds = company.price * quantity;
        let remaining = held - quantity;
        if remaining.is_zero() {
            self.holdings.remove(&company.symbol);
        } else {
            self.holdings.insert(company.symbol.clone(), remaining);
        }
        self.balance += proceeds;
        company.owned_shares -= quantity;

        Ok(TradeReceipt {
            symbol: company.symbol.clone(),
            quantity,
            price: company.price,
            total: proceeds,
        })
    }

    /// Total portfolio value: cash plus the market value of every holding.
    ///
    /// Holdings whose symbol is missing from `companies` are skipped; this
    /// cannot happen under normal operation since holdings only reference
    /// roster companies.
    pub fn valuate(&self, companies: &[Company]) -> Cash {
        let mut total = self.balance;
        for (symbol, quantity) in &self.holdings {
            if let Some(company) = companies.iter().find(|c| &c.symbol == symbol) {
                total += company.price * *quantity;
            }
        }
        total
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Engine configuration and the default company roster.

use market::{Company, ScenarioTable};
use serde::{Deserialize, Serialize};
use types::{Cash, Category, Price, Year};

// =============================================================================
// CompanySpec
// =============================================================================

/// Blueprint for one roster entry, fixed at engine construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySpec {
    pub symbol: String,
    pub category: Category,
    pub starting_price: Price,
    /// Scenario labels used while the player holds the stock.
    pub scenarios_owned: ScenarioTable,
    /// Scenario labels used while the player does not.
    pub scenarios_not_owned: ScenarioTable,
}

impl CompanySpec {
    /// Convenience constructor taking `[positive, negative]` label pairs.
    ///
    /// The starting price is clamped to the $1.00 floor company prices
    /// honor for the rest of the run.
    pub fn new(
        symbol: impl Into<String>,
        category: Category,
        starting_price: f64,
        owned: [&str; 2],
        not_owned: [&str; 2],
    ) -> Self {
        Self {
            symbol: symbol.into(),
            category,
            starting_price: Price::from_float(starting_price).max(Price::ONE),
            scenarios_owned: ScenarioTable::new(owned[0], owned[1]),
            scenarios_not_owned: ScenarioTable::new(not_owned[0], not_owned[1]),
        }
    }

    pub(crate) fn build(&self) -> Company {
        // Clamp again: specs can also arrive via deserialization or
        // direct struct construction.
        Company::new(
            self.symbol.clone(),
            self.category,
            self.starting_price.max(Price::ONE),
            self.scenarios_owned.clone(),
            self.scenarios_not_owned.clone(),
        )
    }
}

// =============================================================================
// EngineConfig
// =============================================================================

/// Configuration fixed at engine construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Starting cash balance; also the baseline for final profit/loss.
    pub initial_balance: Cash,
    /// Total number of simulated years before the run terminates.
    pub horizon: Year,
    /// The tradable companies, in fixed display order.
    pub roster: Vec<CompanySpec>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_balance: Cash::from_float(10_000.0),
            horizon: 10,
            roster: default_roster(),
        }
    }
}

impl EngineConfig {
    /// Set the starting balance.
    pub fn with_initial_balance(mut self, balance: Cash) -> Self {
        self.initial_balance = balance;
        self
    }

    /// Set the horizon in years.
    pub fn with_horizon(mut self, horizon: Year) -> Self {
        self.horizon = horizon;
        self
    }

    /// Replace the company roster.
    pub fn with_roster(mut self, roster: Vec<CompanySpec>) -> Self {
        self.roster = roster;
        self
    }
}

// =============================================================================
// Default roster
// =============================================================================

/// The classic 11-company roster.
pub fn default_roster() -> Vec<CompanySpec> {
    vec![
        CompanySpec::new(
            "Orange",
            Category::Large,
            5000.00,
            ["New product launch", "Market competition"],
            ["Hit product keynote", "Flagship recall"],
        ),
        CompanySpec::new(
            "Ezzon",
            Category::Large,
            1000.00,
            ["Government contract", "Antitrust investigation"],
            ["Oil price rally", "Offshore spill fines"],
        ),
        CompanySpec::new(
            "Bamazon",
            Category::Large,
            2000.00,
            ["Holiday sales spike", "Warehouse strike"],
            ["Record online sales", "Regulatory probe"],
        ),
        CompanySpec::new(
            "Planetdollars",
            Category::Large,
            100.00,
            ["New lineup of drinks popular", "Boycott due to human rights concerns"],
            ["Viral seasonal menu", "Contamination recall"],
        ),
        CompanySpec::new(
            "RiseX",
            Category::Emerging,
            50.00,
            ["Venture capital funding", "Product failure"],
            ["Acquisition rumors", "Founder departure"],
        ),
        CompanySpec::new(
            "GreenTech",
            Category::Emerging,
            75.00,
            ["Environmental grant", "Technology setback"],
            ["Subsidy expansion", "Grid project cancelled"],
        ),
        CompanySpec::new(
            "FossilCorp",
            Category::Fading,
            50.00,
            ["Cost-cutting measures", "Loss of major client"],
            ["Fuel demand surge", "Stranded asset writedown"],
        ),
        CompanySpec::new(
            "RetailCo",
            Category::Small,
            100.00,
            ["Local expansion", "Supply chain issues"],
            ["Strong holiday footfall", "Mall traffic decline"],
        ),
        CompanySpec::new(
            "BioFuture",
            Category::Emerging,
            300.00,
            ["Breakthrough drug", "Clinical trial failure"],
            ["Fast-track approval", "Patent expiry"],
        ),
        CompanySpec::new(
            "TechGiant",
            Category::Large,
            1200.00,
            ["New AI product", "Data breach"],
            ["Cloud growth beat", "Chip shortage"],
        ),
        CompanySpec::new(
            "LegacyInd",
            Category::Fading,
            30.00,
            ["Asset liquidation", "Bankruptcy rumors"],
            ["Turnaround plan praised", "Factory closure"],
        ),
    ]
}

// =============================================================================
// Tests
// =============================================================================

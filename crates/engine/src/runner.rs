//! The engine: roster + portfolio + year counter behind a command interface.

use market::Company;
use portfolio::Portfolio;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use types::{Cash, Quantity, Year};

use crate::command::{Command, Outcome, Page, ScenarioReport, YearOutcome};
use crate::config::EngineConfig;
use crate::display::{CompanyView, DisplayState, HoldingView};
use crate::error::EngineError;

/// The simulation engine.
///
/// Exclusively owned by a single control loop; commands are processed one
/// at a time and each either fully completes or has no effect.
pub struct Engine {
    year: Year,
    horizon: Year,
    companies: Vec<Company>,
    portfolio: Portfolio,
    initial_balance: Cash,
    page: Page,
    /// Scenario narratives from the last year-advance, valid until the next.
    pending: Vec<ScenarioReport>,
    finished: bool,
    rng: StdRng,
}

impl Engine {
    /// Create an engine from its configuration and a random seed.
    ///
    /// The same seed and command sequence reproduce the same run.
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        let companies = config.roster.iter().map(|spec| spec.build()).collect();
        Self {
            year: 1,
            horizon: config.horizon,
            companies,
            portfolio: Portfolio::new(config.initial_balance),
            initial_balance: config.initial_balance,
            page: Page::MainMenu,
            pending: Vec::new(),
            finished: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn horizon(&self) -> Year {
        self.horizon
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Whether the run has reached its terminal state.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn balance(&self) -> Cash {
        self.portfolio.balance()
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Scenario narratives from the most recent year-advance.
    pub fn pending_report(&self) -> &[ScenarioReport] {
        &self.pending
    }

    // =========================================================================
    // Command dispatch
    // =========================================================================

    /// Dispatch one command.
    ///
    /// Domain rejections (not enough funds/shares) come back as
    /// [`Outcome::Message`]; errors mean the caller violated the command
    /// contract (wrong page, bad index, run already over).
    pub fn execute(&mut self, command: Command) -> Result<Outcome, EngineError> {
        if self.finished {
            return Err(EngineError::GameOver);
        }
        match command {
            Command::Navigate(target) => self.navigate(target).map(Outcome::Navigated),
            Command::Buy { company, quantity } => {
                self.buy(company, quantity).map(Outcome::Message)
            }
            Command::Sell { company, quantity } => {
                self.sell(company, quantity).map(Outcome::Message)
            }
            Command::AdvanceYear => self
                .advance_year()
                .map(|reports| Outcome::Scenario(reports.to_vec())),
            Command::Acknowledge => self.acknowledge_scenario().map(Outcome::Year),
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Pure navigation between the main menu and the trade pages.
    ///
    /// The scenario page is never a navigation target; it is entered only
    /// through [`Engine::advance_year`].
    pub fn navigate(&mut self, target: Page) -> Result<Page, EngineError> {
        let allowed = matches!(
            (self.page, target),
            (Page::MainMenu, Page::BuyPage)
                | (Page::MainMenu, Page::SellPage)
                | (Page::BuyPage, Page::MainMenu)
                | (Page::SellPage, Page::MainMenu)
        );
        if !allowed {
            return Err(EngineError::WrongPage(self.page));
        }
        self.page = target;
        Ok(target)
    }

    // =========================================================================
    // Trading
    // =========================================================================

    /// Buy shares of the company at `index`. Only legal on the buy page.
    pub fn buy(&mut self, index: usize, quantity: Quantity) -> Result<String, EngineError> {
        if self.page != Page::BuyPage {
            return Err(EngineError::WrongPage(self.page));
        }
        if quantity.is_zero() {
            return Err(EngineError::InvalidQuantity);
        }
        let company = self
            .companies
            .get_mut(index)
            .ok_or(EngineError::UnknownCompany(index))?;

        let message = match self.portfolio.buy(company, quantity) {
            Ok(receipt) => {
                debug!(symbol = %receipt.symbol, quantity = %receipt.quantity, total = %receipt.total, "buy filled");
                format!("Bought {} shares of {}.", receipt.quantity, receipt.symbol)
            }
            Err(err) => err.player_message().to_string(),
        };
        Ok(message)
    }

    /// Sell shares of the company at `index`. Only legal on the sell page.
    ///
    /// Pre-checks that the holding is non-empty, answering with a domain
    /// message instead of attempting the sale.
    pub fn sell(&mut self, index: usize, quantity: Quantity) -> Result<String, EngineError> {
        if self.page != Page::SellPage {
            return Err(EngineError::WrongPage(self.page));
        }
        if quantity.is_zero() {
            return Err(EngineError::InvalidQuantity);
        }
        let company = self
            .companies
            .get_mut(index)
            .ok_or(EngineError::UnknownCompany(index))?;

        if !self.portfolio.holds(&company.symbol) {
            return Ok(format!("You don't own any shares of {}.", company.symbol));
        }

        let message = match self.portfolio.sell(company, quantity) {
            Ok(receipt) => {
                debug!(symbol = %receipt.symbol, quantity = %receipt.quantity, total = %receipt.total, "sell filled");
                format!("Sold {} shares of {}.", receipt.quantity, receipt.symbol)
            }
            Err(err) => err.player_message().to_string(),
        };
        Ok(message)
    }

    // =========================================================================
    // Year progression
    // =========================================================================

    /// Resolve this year's scenario for every company and enter the
    /// scenario page. Drift is not applied yet; that happens on
    /// [`Engine::acknowledge_scenario`].
    ///
    /// A company counts as owned when the player holds it, or when the
    /// player holds every company in the roster (the all-in bonus).
    pub fn advance_year(&mut self) -> Result<&[ScenarioReport], EngineError> {
        if self.page != Page::MainMenu {
            return Err(EngineError::WrongPage(self.page));
        }

        let all_owned = self
            .companies
            .iter()
            .all(|company| self.portfolio.holds(&company.symbol));

        self.pending.clear();
        for company in &mut self.companies {
            let owned = all_owned || self.portfolio.holds(&company.symbol);
            let outcome = company.choose_scenario(owned, &mut self.rng);
            self.pending.push(ScenarioReport {
                symbol: company.symbol.clone(),
                text: outcome.text,
                detail: outcome.detail,
                tag: outcome.tag,
            });
        }
        self.page = Page::ScenarioPage;
        debug!(year = self.year, all_owned, "scenarios resolved");
        Ok(&self.pending)
    }

    /// Leave the scenario page: apply category drift to every company and
    /// roll the year counter.
    ///
    /// When the counter passes the horizon the run terminates and the
    /// final profit/loss against the initial balance is reported; no
    /// further commands are accepted.
    pub fn acknowledge_scenario(&mut self) -> Result<YearOutcome, EngineError> {
        if self.page != Page::ScenarioPage {
            return Err(EngineError::WrongPage(self.page));
        }

        for company in &mut self.companies {
            company.update_price(&mut self.rng);
        }
        self.year += 1;

        if self.year > self.horizon {
            self.finished = true;
            let final_value = self.portfolio.valuate(&self.companies);
            let profit_loss = final_value - self.initial_balance;
            info!(%final_value, %profit_loss, "horizon reached");
            Ok(YearOutcome::GameOver { profit_loss })
        } else {
            self.page = Page::MainMenu;
            debug!(year = self.year, "new year");
            Ok(YearOutcome::Continue { year: self.year })
        }
    }

    // =========================================================================
    // Display snapshot
    // =========================================================================

    /// Snapshot everything a front end needs to render the current turn.
    pub fn display_state(&self) -> DisplayState {
        let holdings = self
            .portfolio
            .holdings()
            .map(|(symbol, quantity)| {
                let change_pct = self
                    .companies
                    .iter()
                    .find(|company| &company.symbol == symbol)
                    .map(Company::price_change_pct)
                    .unwrap_or(0.0);
                HoldingView {
                    symbol: symbol.clone(),
                    quantity,
                    change_pct,
                }
            })
            .collect();
        let companies = self
            .companies
            .iter()
            .map(|company| CompanyView {
                symbol: company.symbol.clone(),
                price: company.price,
            })
            .collect();
        DisplayState {
            year: self.year,
            balance: self.portfolio.balance(),
            holdings,
            companies,
        }
    }
}

//! Engine crate: the game's state machine and command interface.
//!
//! The [`Engine`] owns the company roster, the player's [`portfolio`],
//! the year counter, and the seeded random source. A front end drives it
//! with [`Command`] values and renders the outcome values and the
//! [`DisplayState`] snapshot; the engine itself draws nothing.
//!
//! # Turn structure
//!
//! ```text
//! MainMenu --AdvanceYear--> ScenarioPage   (scenarios resolved, prices moved)
//! ScenarioPage --Acknowledge--> MainMenu   (drift applied, year += 1)
//!                           \-> game over  (year counter passed the horizon)
//! MainMenu <--Navigate--> BuyPage/SellPage (pure navigation)
//! ```
//!
//! Rejected trades are informational outcomes, never errors; the engine
//! state cannot be corrupted by a rejected command.

mod command;
mod config;
mod display;
mod error;
mod runner;

pub use command::{Command, Outcome, Page, ScenarioReport, YearOutcome};
pub use config::{CompanySpec, EngineConfig, default_roster};
pub use display::{CompanyView, DisplayState, HoldingView};
pub use error::EngineError;
pub use runner::Engine;

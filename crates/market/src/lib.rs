//! Market crate: company price model and scenario resolution.
//!
//! Each [`Company`] carries its own market state (current and previous
//! price, category) plus two narrative scenario tables, one used when the
//! player owns the stock and one when they don't.
//!
//! Randomness is threaded in as a `&mut impl Rng` handle rather than drawn
//! from an ambient source, so runs are reproducible given a seeded
//! generator and tests can inject fixed sequences.

mod company;
mod scenario;

pub use company::Company;
pub use scenario::{ScenarioOutcome, ScenarioTable};

//! Core types for the stock portfolio game.
//!
//! This crate provides the shared leaf types used across the simulation:
//! fixed-point monetary values, share quantities, and the classification
//! enums that drive the price model.

mod ids;
mod money;

pub use ids::{Category, MONEY_SCALE, Symbol, Tag, Year};
pub use money::{Cash, Price, Quantity};

//! Engine-level errors: caller contract violations, not domain outcomes.
//!
//! Domain rejections (not enough funds, not enough shares) are reported
//! as [`crate::Outcome::Message`] values. These errors mean the driver
//! itself misbehaved.

use crate::command::Page;

/// Errors raised by [`crate::Engine::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Roster index out of range (programming error in the caller).
    #[error("company index {0} is out of range")]
    UnknownCompany(usize),

    /// Zero trade quantity (programming error in the caller).
    #[error("trade quantity must be positive")]
    InvalidQuantity,

    /// Command is not legal on the current page.
    #[error("command not valid on the {0:?} page")]
    WrongPage(Page),

    /// The run reached its horizon; no further commands are accepted.
    #[error("the run is over; no further commands are accepted")]
    GameOver,
}

//! Errors raised when a view breaks its own contract.

use fod_engine::types::Player;
use thiserror::Error;

/// The view handed to an agent was inconsistent. Deciding on such data
/// could walk Dracula into a hunter, so the turn fails loudly instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("{0} has no location on the board")]
    UnplacedPlayer(Player),

    #[error("place id {0} is not on the board")]
    UnknownPlace(u8),
}

pub type Result<T> = std::result::Result<T, DecisionError>;

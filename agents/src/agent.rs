// ═══════════════════════════════════════════════════════════════════════
// Agent traits: what the chase runner asks of each side
//
// A Dracula agent only ever sees a `GameView`, never the raw GameState.
// Hunter agents are kept deliberately simple; they exist to put the
// Dracula agents under pressure in simulated chases.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::Result;
use crate::stronghold::Posture;
use fod_engine::types::*;
use fod_engine::visibility::GameView;
use serde::Serialize;

/// Which step of the policy produced a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rationale {
    OpeningPlacement,
    NoLegalMoves,
    SpecialOnly,
    Stronghold(Posture),
    Retreat,
    SafeMove,
    Random,
}

impl Rationale {
    /// Flavour line sent along with the play.
    pub fn message(self) -> &'static str {
        match self {
            Rationale::OpeningPlacement => "The night is young.",
            Rationale::NoLegalMoves => "Home, by other means.",
            Rationale::SpecialOnly => "I am the shadow on the wall.",
            Rationale::Stronghold(Posture::Leave) => "Too many guests at the castle.",
            Rationale::Stronghold(_) => "My castle awaits.",
            Rationale::Retreat => "Let them chase a ghost.",
            Rationale::SafeMove | Rationale::Random => "Mwahahaha.",
        }
    }
}

/// The single play an agent settles on for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub play: Move,
    pub message: String,
    pub rationale: Rationale,
}

impl Decision {
    pub fn new(play: Move, rationale: Rationale) -> Self {
        Decision { play, message: rationale.message().to_string(), rationale }
    }
}

/// Trait that every Dracula agent implements.
pub trait Agent: Send + Sync {
    /// Human-readable name for this agent (e.g. "Heuristic", "Random").
    fn name(&self) -> &str;

    /// Choose exactly one play for the current turn.
    fn decide(&mut self, view: &dyn GameView) -> Result<Decision>;
}

/// Trait for the hunters' side of a simulated chase.
pub trait HunterAgent: Send + Sync {
    fn name(&self) -> &str;

    /// Pick one of `options` for `hunter`. None only when there are none.
    fn choose(&mut self, hunter: Player, options: &[PlaceId]) -> Option<PlaceId>;
}

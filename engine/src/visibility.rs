// ═══════════════════════════════════════════════════════════════════════
// Visibility / Dracula's view of the game
//
// Dracula sees every hunter: where they stand, how healthy they are and
// where they could be after their next turn. The decision agents only
// ever talk to the `GameView` trait; `DraculaView` is the concrete,
// serialisable snapshot built from a GameState (or loaded from JSON).
// ═══════════════════════════════════════════════════════════════════════

use crate::navigation;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Read-only query surface handed to a Dracula agent each turn.
pub trait GameView {
    fn round(&self) -> Round;

    /// None while the player has not been placed.
    fn location_of(&self, player: Player) -> Option<PlaceId>;

    fn health_of(&self, player: Player) -> i32;

    /// Dracula's legal plays this turn, special actions included.
    fn legal_moves(&self) -> Vec<Move>;

    /// For Dracula: plain move-to-place options only.
    /// For a hunter: every place they could stand on after their next turn.
    fn reachable_destinations(&self, player: Player) -> Vec<PlaceId>;

    fn active_traps(&self) -> Vec<PlaceId>;
}

/// Per-player part of the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIntel {
    pub location: Option<PlaceId>,
    pub health: i32,
    #[serde(default)]
    pub reachable: Vec<PlaceId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraculaView {
    pub round: Round,
    /// Indexed by `Player::index()`.
    pub players: [PlayerIntel; 5],
    pub legal_moves: Vec<Move>,
    #[serde(default)]
    pub traps: Vec<PlaceId>,
}

impl DraculaView {
    pub fn from_json(json: &str) -> Result<DraculaView, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl GameView for DraculaView {
    fn round(&self) -> Round {
        self.round
    }

    fn location_of(&self, player: Player) -> Option<PlaceId> {
        self.players[player.index()].location
    }

    fn health_of(&self, player: Player) -> i32 {
        self.players[player.index()].health
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves.clone()
    }

    fn reachable_destinations(&self, player: Player) -> Vec<PlaceId> {
        self.players[player.index()].reachable.clone()
    }

    fn active_traps(&self) -> Vec<PlaceId> {
        self.traps.clone()
    }
}

/// Build Dracula's view of the state at the start of his turn.
/// Hunter reachability is computed for the round they next play in.
pub fn dracula_view(state: &GameState) -> DraculaView {
    let players = Player::ALL.map(|p| {
        let ps = state.player(p);
        let reachable = match (p, ps.location) {
            (Player::Dracula, _) => navigation::dracula_destinations(state),
            (_, Some(from)) => navigation::hunter_reachable(from, p, state.round + 1),
            (_, None) => Vec::new(),
        };
        PlayerIntel { location: ps.location, health: ps.health, reachable }
    });

    DraculaView {
        round: state.round,
        players,
        legal_moves: navigation::dracula_moves(state),
        traps: state.traps.clone(),
    }
}

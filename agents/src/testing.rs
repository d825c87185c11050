//! Builders for hand-made Dracula views used across the unit tests.

use crate::threat::HunterIntel;
use fod_engine::types::*;
use fod_engine::visibility::{DraculaView, PlayerIntel};

pub(crate) fn hunter_intel(player: Player, location: PlaceId, health: i32, reachable: &[PlaceId]) -> HunterIntel {
    HunterIntel { player, location, health, reachable: reachable.to_vec() }
}

pub(crate) fn intel(location: PlaceId, health: i32, reachable: &[PlaceId]) -> PlayerIntel {
    PlayerIntel { location: Some(location), health, reachable: reachable.to_vec() }
}

/// Mid-game view with Dracula at Castle Dracula and no moves.
pub(crate) fn view_with_hunters(hunters: [PlayerIntel; 4]) -> DraculaView {
    let [g, s, h, m] = hunters;
    DraculaView {
        round: 3,
        players: [g, s, h, m, intel(fod_engine::map::CASTLE_DRACULA, DRACULA_START_BLOOD, &[])],
        legal_moves: Vec::new(),
        traps: Vec::new(),
    }
}

/// Mid-game view with Dracula at `at`, whose plain destinations are
/// taken from the location moves in `moves`.
pub(crate) fn dracula_view(round: Round, at: PlaceId, blood: i32, moves: &[Move], hunters: [PlayerIntel; 4]) -> DraculaView {
    let destinations: Vec<PlaceId> = moves.iter().filter_map(|m| m.place()).collect();
    let mut view = view_with_hunters(hunters);
    view.round = round;
    view.players[Player::Dracula.index()] = intel(at, blood, &destinations);
    view.legal_moves = moves.to_vec();
    view
}

pub(crate) fn locations(places: &[PlaceId]) -> Vec<Move> {
    places.iter().map(|&p| Move::Location(p)).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Navigation: one-turn reachability for hunters, trail-restricted
// moves for Dracula
// ═══════════════════════════════════════════════════════════════════════

use crate::map::{self, HOSPITAL, NUM_PLACES};
use crate::types::*;
use std::collections::VecDeque;

/// How many rail hops a hunter may take in a given round.
pub fn rail_distance(round: Round, hunter: Player) -> usize {
    (round as usize + hunter.index()) % 4
}

/// Every place a hunter standing on `from` can end their turn on in `round`,
/// including staying put. Returned in id order.
pub fn hunter_reachable(from: PlaceId, hunter: Player, round: Round) -> Vec<PlaceId> {
    let mut reachable = vec![false; NUM_PLACES];
    reachable[from.0 as usize] = true;

    for transport in [Transport::Road, Transport::Boat] {
        for next in map::neighbours(from, transport) {
            reachable[next.0 as usize] = true;
        }
    }

    // BFS along the rail network, bounded by this round's rail distance
    let max_hops = rail_distance(round, hunter);
    if max_hops > 0 {
        let mut queue: VecDeque<(PlaceId, usize)> = VecDeque::new();
        let mut visited = vec![false; NUM_PLACES];
        visited[from.0 as usize] = true;
        queue.push_back((from, 0));

        while let Some((current, hops)) = queue.pop_front() {
            if hops == max_hops {
                continue;
            }
            for next in map::neighbours(current, Transport::Rail) {
                if visited[next.0 as usize] {
                    continue;
                }
                visited[next.0 as usize] = true;
                reachable[next.0 as usize] = true;
                queue.push_back((next, hops + 1));
            }
        }
    }

    collect_marked(&reachable)
}

/// Places a hunter may choose in round 0: any land place.
pub fn hunter_start_places() -> Vec<PlaceId> {
    map::PLACES.iter().filter(|p| p.is_land()).map(|p| p.id).collect()
}

/// Places Dracula may start on: any land place except the hospital.
pub fn dracula_start_places() -> Vec<PlaceId> {
    map::PLACES.iter()
        .filter(|p| p.is_land() && p.id != HOSPITAL)
        .map(|p| p.id)
        .collect()
}

/// Plain move-to-place options for Dracula: road and boat neighbours,
/// never the hospital, never a place still in his trail memory.
pub fn dracula_destinations(state: &GameState) -> Vec<PlaceId> {
    let from = match state.location(Player::Dracula) {
        Some(p) => p,
        None => return Vec::new(),
    };
    let remembered: Vec<PlaceId> = state.trail_memory().iter().map(|e| e.location).collect();

    let mut allowed = vec![false; NUM_PLACES];
    for transport in [Transport::Road, Transport::Boat] {
        for next in map::neighbours(from, transport) {
            if next != HOSPITAL && !remembered.contains(&next) {
                allowed[next.0 as usize] = true;
            }
        }
    }
    collect_marked(&allowed)
}

/// Every legal play for Dracula this turn: place moves in id order, then
/// hide, then double-backs from nearest to oldest. Empty means he must
/// teleport. In round 0 every start place is legal.
pub fn dracula_moves(state: &GameState) -> Vec<Move> {
    let from = match state.location(Player::Dracula) {
        Some(p) => p,
        None => return dracula_start_places().into_iter().map(Move::Location).collect(),
    };

    let mut moves: Vec<Move> = dracula_destinations(state)
        .into_iter()
        .map(Move::Location)
        .collect();

    let memory = state.trail_memory();
    let hid_recently = memory.iter().any(|e| e.play == Move::Hide);
    let doubled_back_recently = memory.iter().any(|e| matches!(e.play, Move::DoubleBack(_)));

    if !hid_recently && !map::is_sea(from) {
        moves.push(Move::Hide);
    }
    if !doubled_back_recently {
        for n in 1..=memory.len().min(MAX_DOUBLE_BACK as usize) {
            moves.push(Move::DoubleBack(n as u8));
        }
    }
    moves
}

/// The place a play leaves Dracula on. None for a double-back deeper than
/// the trail or any move before he is placed.
pub fn resolve_move(state: &GameState, play: Move) -> Option<PlaceId> {
    match play {
        Move::Location(p) => Some(p),
        Move::Teleport => Some(map::CASTLE_DRACULA),
        Move::Hide => state.location(Player::Dracula),
        Move::DoubleBack(n) => {
            let n = n as usize;
            if n == 0 || n > state.trail.len() {
                return None;
            }
            Some(state.trail[state.trail.len() - n].location)
        }
    }
}

fn collect_marked(marks: &[bool]) -> Vec<PlaceId> {
    marks.iter()
        .enumerate()
        .filter(|(_, m)| **m)
        .map(|(i, _)| PlaceId(i as u8))
        .collect()
}

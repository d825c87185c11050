// ═══════════════════════════════════════════════════════════════════════
// Retreat scoring: the least contested way out when nothing is safe
//
// A place is contested once for every hunter standing on it and once for
// every hunter able to reach it. A hunter who does both counts twice.
// ═══════════════════════════════════════════════════════════════════════

use crate::threat::HunterIntel;
use fod_engine::types::*;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetreatScore {
    pub place: PlaceId,
    pub contest_count: u32,
    /// Health of the weakest contesting hunter; full health if none.
    pub min_contestant_health: i32,
}

pub fn score(place: PlaceId, hunters: &[HunterIntel]) -> RetreatScore {
    let mut contest_count = 0;
    let mut min_contestant_health = HUNTER_MAX_HEALTH;
    for hunter in hunters {
        let contests = u32::from(hunter.location == place) + u32::from(hunter.reachable.contains(&place));
        if contests > 0 {
            contest_count += contests;
            min_contestant_health = min_contestant_health.min(hunter.health);
        }
    }
    RetreatScore { place, contest_count, min_contestant_health }
}

/// Fewest contests wins, then the weakest contestant. Remaining ties
/// go to the earliest candidate.
pub fn pick_retreat(candidates: &[PlaceId], hunters: &[HunterIntel]) -> Option<RetreatScore> {
    candidates
        .iter()
        .map(|&place| score(place, hunters))
        .min_by_key(|s| (s.contest_count, s.min_contestant_health))
}

/// Choose among special actions when there is no place to move to.
/// Staying put is ruled out while the current place is threatened; if
/// that rules out everything, any move will do.
pub fn pick_special_action<R: Rng>(moves: &[Move], current_threatened: bool, rng: &mut R) -> Option<Move> {
    moves
        .iter()
        .copied()
        .find(|m| !(current_threatened && m.stays_put()))
        .or_else(|| moves.choose(rng).copied())
}

//! Candidate filtering against the threat set.
//!
//! Sea places are never dropped: hunters cannot end a turn at sea, so a
//! threatened sea is still a safe place to be.

use crate::tables::HIGH_RISK_HUBS;
use crate::threat::ThreatSet;
use fod_engine::map;
use fod_engine::types::{Move, PlaceId};

/// Anything that may name a place on the board.
pub trait Candidate: Copy {
    fn target(self) -> Option<PlaceId>;
}

impl Candidate for PlaceId {
    fn target(self) -> Option<PlaceId> {
        Some(self)
    }
}

impl Candidate for Move {
    fn target(self) -> Option<PlaceId> {
        self.place()
    }
}

pub fn is_exposed(place: PlaceId, threats: &ThreatSet) -> bool {
    threats.contains(place) && !map::is_sea(place)
}

/// Drop exposed candidates, keeping the rest in their original order.
/// Special actions name no place and always pass.
pub fn filter_safe<T: Candidate>(candidates: &[T], threats: &ThreatSet) -> Vec<T> {
    candidates
        .iter()
        .copied()
        .filter(|c| c.target().map_or(true, |p| !is_exposed(p, threats)))
        .collect()
}

pub fn first_port(candidates: &[PlaceId]) -> Option<PlaceId> {
    candidates.iter().copied().find(|&p| map::is_port(p))
}

/// First land place that is not one of the hunters' favourite hubs.
pub fn first_open_land(candidates: &[PlaceId]) -> Option<PlaceId> {
    candidates
        .iter()
        .copied()
        .find(|p| map::is_land(*p) && !HIGH_RISK_HUBS.contains(p))
}

// ═══════════════════════════════════════════════════════════════════════
// Stronghold strategy: when near Castle Dracula, decide whether to
// flee the area or head home, and where to go for each.
// ═══════════════════════════════════════════════════════════════════════

use crate::filter::{first_open_land, first_port};
use crate::tables::*;
use crate::threat::HunterIntel;
use fod_engine::map::KLAUSENBURG;
use fod_engine::types::{Move, PlaceId};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Posture {
    Leave,
    Return,
    Neither,
}

/// What Dracula can do from where he stands, split the way the
/// destination rules need it.
#[derive(Debug, Clone, Copy)]
pub struct Options<'a> {
    pub current: PlaceId,
    pub safe_destinations: &'a [PlaceId],
    pub safe_moves: &'a [Move],
    pub legal_destinations: &'a [PlaceId],
}

/// Whether the stronghold posture applies at all from `place`.
pub fn near_stronghold(place: PlaceId) -> bool {
    place == STRONGHOLD || STRONGHOLD_APPROACHES.contains(&place)
}

/// Hunters currently inside the perimeter. Two hunters on the same
/// place count as two.
pub fn hunters_in_perimeter(hunters: &[HunterIntel]) -> usize {
    hunters.iter().filter(|h| STRONGHOLD_PERIMETER.contains(&h.location)).count()
}

pub fn inner_trap_count(traps: &[PlaceId]) -> usize {
    traps.iter().filter(|t| INNER_PERIMETER.contains(t)).count()
}

pub fn assess(hunters: &[HunterIntel], traps: &[PlaceId]) -> Posture {
    let pressure = hunters_in_perimeter(hunters);
    let inner_traps = inner_trap_count(traps);
    let posture = if pressure > 1 {
        Posture::Leave
    } else if inner_traps <= 1 {
        Posture::Return
    } else {
        Posture::Neither
    };
    debug!(pressure, inner_traps, ?posture, "stronghold posture");
    posture
}

pub fn leaving_destination(opts: &Options) -> Option<PlaceId> {
    if opts.current == STRONGHOLD {
        let [first, second] = CASTLE_ESCAPES;
        if opts.safe_moves.contains(&Move::Location(first)) {
            return Some(first);
        }
        if opts.legal_destinations.contains(&second) {
            return Some(second);
        }
    }
    if let Some(port) = first_port(opts.safe_destinations) {
        return Some(port);
    }
    if opts.current == KLAUSENBURG {
        if let Some(&onward) = opts.safe_destinations.iter().find(|p| KLAUSENBURG_ONWARD.contains(p)) {
            return Some(onward);
        }
    }
    first_open_land(opts.safe_destinations).or_else(|| opts.safe_destinations.first().copied())
}

pub fn returning_destination(opts: &Options) -> Option<PlaceId> {
    if opts.safe_destinations.contains(&STRONGHOLD) {
        return Some(STRONGHOLD);
    }
    if KLAUSENBURG_APPROACHES.contains(&opts.current) && opts.safe_destinations.contains(&KLAUSENBURG) {
        return Some(KLAUSENBURG);
    }
    first_open_land(opts.safe_destinations).or_else(|| opts.safe_destinations.first().copied())
}

/// Destination for `posture`, if it yields one.
pub fn plan(posture: Posture, opts: &Options) -> Option<PlaceId> {
    match posture {
        Posture::Leave => leaving_destination(opts),
        Posture::Return => returning_destination(opts),
        Posture::Neither => None,
    }
}

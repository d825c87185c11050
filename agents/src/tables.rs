// ═══════════════════════════════════════════════════════════════════════
// Policy tables: fixed places the Dracula heuristic reasons about
// ═══════════════════════════════════════════════════════════════════════

use fod_engine::map::*;
use fod_engine::types::PlaceId;

/// Dracula's home. Ending a turn here restores blood.
pub const STRONGHOLD: PlaceId = CASTLE_DRACULA;

/// Places from which the stronghold posture is assessed (besides the
/// stronghold itself).
pub static STRONGHOLD_APPROACHES: [PlaceId; 9] = [
    GALATZ, KLAUSENBURG, CONSTANTA, VARNA, BUCHAREST,
    SOFIA, SZEGED, BUDAPEST, BELGRADE,
];

/// Places close enough to the stronghold that a hunter there counts as
/// pressure on it.
pub static STRONGHOLD_PERIMETER: [PlaceId; 20] = [
    KLAUSENBURG, CASTLE_DRACULA, GALATZ, CONSTANTA, BLACK_SEA,
    VARNA, SOFIA, SZEGED, BELGRADE, BUCHAREST,
    SALONICA, VALONA, IONIAN_SEA, SARAJEVO, ST_JOSEPH_AND_ST_MARY,
    VIENNA, ZAGREB, BUDAPEST, PRAGUE, VENICE,
];

/// Innermost ring; traps here mean the hunters are already working the
/// castle.
pub static INNER_PERIMETER: [PlaceId; 6] = [
    KLAUSENBURG, CASTLE_DRACULA, BUCHAREST, GALATZ, CONSTANTA, VARNA,
];

/// Where an incapacitated hunter is likely to turn up next: the places
/// one step from the hospital.
pub static QUARANTINE_ZONE: [PlaceId; 4] = [SARAJEVO, SZEGED, ZAGREB, BELGRADE];

/// Well-connected cities the hunters tend to sweep through.
pub static HIGH_RISK_HUBS: [PlaceId; 4] = [BERLIN, PRAGUE, VIENNA, BUDAPEST];

/// Ways out of the castle, best first.
pub static CASTLE_ESCAPES: [PlaceId; 2] = [GALATZ, KLAUSENBURG];

/// Onward places when leaving through Klausenburg.
pub static KLAUSENBURG_ONWARD: [PlaceId; 2] = [BUCHAREST, GALATZ];

/// Approaches from which the way home runs through Klausenburg.
pub static KLAUSENBURG_APPROACHES: [PlaceId; 3] = [SZEGED, BELGRADE, BUDAPEST];

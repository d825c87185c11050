// ═══════════════════════════════════════════════════════════════════════
// Core types: places, players, moves and the full game state
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Identifiers ────────────────────────────────────────────────────────

/// Index into the static `PLACES` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlaceId(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceType {
    Land,
    Sea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    Road,
    Rail,
    Boat,
}

pub type Round = u32;

// ── Players ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    LordGodalming,
    DrSeward,
    VanHelsing,
    MinaHarker,
    Dracula,
}

impl Player {
    /// Turn order within a round.
    pub const ALL: [Player; 5] = [
        Player::LordGodalming,
        Player::DrSeward,
        Player::VanHelsing,
        Player::MinaHarker,
        Player::Dracula,
    ];

    pub const HUNTERS: [Player; 4] = [
        Player::LordGodalming,
        Player::DrSeward,
        Player::VanHelsing,
        Player::MinaHarker,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_hunter(self) -> bool {
        self != Player::Dracula
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::LordGodalming => write!(f, "Lord Godalming"),
            Player::DrSeward => write!(f, "Dr Seward"),
            Player::VanHelsing => write!(f, "Van Helsing"),
            Player::MinaHarker => write!(f, "Mina Harker"),
            Player::Dracula => write!(f, "Dracula"),
        }
    }
}

// ── Health ─────────────────────────────────────────────────────────────

pub const HUNTER_MAX_HEALTH: i32 = 9;
pub const HUNTER_MIN_HEALTH: i32 = 0;
pub const DRACULA_START_BLOOD: i32 = 40;

pub const LIFE_LOSS_SEA: i32 = 2;
pub const LIFE_GAIN_CASTLE_DRACULA: i32 = 10;
pub const LIFE_LOSS_HUNTER_ENCOUNTER: i32 = 10;
pub const LIFE_LOSS_DRACULA_ENCOUNTER: i32 = 4;
pub const LIFE_LOSS_TRAP_ENCOUNTER: i32 = 2;

// ── Trail ──────────────────────────────────────────────────────────────

/// Dracula remembers his last six moves.
pub const TRAIL_SIZE: usize = 6;
/// Moves that still constrain the next move (the oldest is about to drop off).
pub const TRAIL_MEMORY: usize = TRAIL_SIZE - 1;
pub const MAX_TRAPS_PER_PLACE: usize = 3;
pub const MAX_DOUBLE_BACK: u8 = 5;

// ── Moves ──────────────────────────────────────────────────────────────

/// A single play. Only `Location` names a place directly; the special
/// actions resolve against Dracula's trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Location(PlaceId),
    Hide,
    /// Return to the place visited `n` moves ago (1 = current place).
    DoubleBack(u8),
    Teleport,
}

impl Move {
    pub fn place(self) -> Option<PlaceId> {
        match self {
            Move::Location(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_special(self) -> bool {
        self.place().is_none()
    }

    /// Keeps Dracula where he stands.
    pub fn stays_put(self) -> bool {
        matches!(self, Move::Hide | Move::DoubleBack(1))
    }

    pub fn code(self) -> String {
        match self {
            Move::Location(p) => crate::map::place_code(p).to_string(),
            Move::Hide => "HI".to_string(),
            Move::DoubleBack(n) => format!("D{}", n),
            Move::Teleport => "TP".to_string(),
        }
    }

    pub fn from_code(code: &str) -> Option<Move> {
        match code {
            "HI" => Some(Move::Hide),
            "TP" => Some(Move::Teleport),
            _ => {
                if let Some(n) = code.strip_prefix('D').and_then(|n| n.parse::<u8>().ok()) {
                    if (1..=MAX_DOUBLE_BACK).contains(&n) {
                        return Some(Move::DoubleBack(n));
                    }
                }
                crate::map::place_by_code(code).map(Move::Location)
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

// ── Game state ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// None until the player is placed in round 0.
    pub location: Option<PlaceId>,
    pub health: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailEntry {
    pub play: Move,
    pub location: PlaceId,
    /// Whether this move left a trap behind.
    pub trap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Hunters,
    Dracula,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Hunters => write!(f, "Hunters"),
            Side::Dracula => write!(f, "Dracula"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub round: Round,
    /// Indexed by `Player::index()`.
    pub players: [PlayerState; 5],
    /// Oldest first, newest last; never longer than `TRAIL_SIZE`.
    pub trail: Vec<TrailEntry>,
    /// One entry per trap; a place may appear more than once.
    pub traps: Vec<PlaceId>,
    pub winner: Option<Side>,
}

impl GameState {
    pub fn player(&self, p: Player) -> &PlayerState {
        &self.players[p.index()]
    }

    pub fn player_mut(&mut self, p: Player) -> &mut PlayerState {
        &mut self.players[p.index()]
    }

    pub fn location(&self, p: Player) -> Option<PlaceId> {
        self.player(p).location
    }

    pub fn health(&self, p: Player) -> i32 {
        self.player(p).health
    }

    /// The trail entries that still restrict Dracula's next move, newest last.
    pub fn trail_memory(&self) -> &[TrailEntry] {
        let start = self.trail.len().saturating_sub(TRAIL_MEMORY);
        &self.trail[start..]
    }

    pub fn traps_at(&self, place: PlaceId) -> usize {
        self.traps.iter().filter(|&&t| t == place).count()
    }
}

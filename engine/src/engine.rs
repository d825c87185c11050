// ═══════════════════════════════════════════════════════════════════════
// Rules engine: applies hunter and Dracula moves to a GameState
//
// The rules are a simplified chase: no encounters deck, no vampires,
// no combat rounds. Enough to put the Dracula agents under pressure.
// ═══════════════════════════════════════════════════════════════════════

use crate::map::{self, CASTLE_DRACULA, HOSPITAL};
use crate::navigation;
use crate::types::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("{player} cannot play {play} in round {round}")]
    IllegalMove { player: Player, play: Move, round: Round },
    #[error("{0} is not a hunter")]
    NotAHunter(Player),
    #[error("the chase is already over ({0} won)")]
    GameOver(Side),
}

/// Legal places for a hunter's next turn.
pub fn hunter_options(state: &GameState, hunter: Player) -> Vec<PlaceId> {
    match state.location(hunter) {
        None => navigation::hunter_start_places(),
        // A hunter in hospital leaves from there once restored
        Some(from) => navigation::hunter_reachable(from, hunter, state.round),
    }
}

/// Move a hunter, resolving traps and any meeting with Dracula.
pub fn apply_hunter_move(state: &mut GameState, hunter: Player, to: PlaceId) -> Result<(), RuleError> {
    if let Some(side) = state.winner {
        return Err(RuleError::GameOver(side));
    }
    if !hunter.is_hunter() {
        return Err(RuleError::NotAHunter(hunter));
    }
    if !hunter_options(state, hunter).contains(&to) {
        return Err(RuleError::IllegalMove { player: hunter, play: Move::Location(to), round: state.round });
    }

    // Incapacitated hunters recover at the start of their turn
    if state.health(hunter) <= HUNTER_MIN_HEALTH {
        state.player_mut(hunter).health = HUNTER_MAX_HEALTH;
    }
    state.player_mut(hunter).location = Some(to);

    // Traps
    let sprung = state.traps_at(to);
    if sprung > 0 {
        state.traps.retain(|&t| t != to);
        for entry in state.trail.iter_mut().filter(|e| e.location == to) {
            entry.trap = false;
        }
        state.player_mut(hunter).health -= LIFE_LOSS_TRAP_ENCOUNTER * sprung as i32;
    }

    // Dracula
    if state.location(Player::Dracula) == Some(to) && state.health(hunter) > HUNTER_MIN_HEALTH {
        state.player_mut(hunter).health -= LIFE_LOSS_DRACULA_ENCOUNTER;
        state.player_mut(Player::Dracula).health -= LIFE_LOSS_HUNTER_ENCOUNTER;
    }

    if state.health(hunter) <= HUNTER_MIN_HEALTH {
        let p = state.player_mut(hunter);
        p.health = HUNTER_MIN_HEALTH;
        p.location = Some(HOSPITAL);
    }
    check_winner(state);
    Ok(())
}

/// Apply Dracula's play and close the round.
pub fn apply_dracula_move(state: &mut GameState, play: Move) -> Result<(), RuleError> {
    if let Some(side) = state.winner {
        return Err(RuleError::GameOver(side));
    }
    let legal = navigation::dracula_moves(state);
    let allowed = match play {
        Move::Teleport => legal.is_empty() && state.location(Player::Dracula).is_some(),
        _ => legal.contains(&play),
    };
    let illegal = RuleError::IllegalMove { player: Player::Dracula, play, round: state.round };
    if !allowed {
        return Err(illegal);
    }
    let to = navigation::resolve_move(state, play).ok_or(illegal)?;

    // Trap laying happens on land only
    let trap = map::is_land(to) && state.traps_at(to) < MAX_TRAPS_PER_PLACE;
    if trap {
        state.traps.push(to);
    }
    state.trail.push(TrailEntry { play, location: to, trap });
    if state.trail.len() > TRAIL_SIZE {
        let expired = state.trail.remove(0);
        if expired.trap {
            if let Some(i) = state.traps.iter().position(|&t| t == expired.location) {
                state.traps.remove(i);
            }
        }
    }

    state.player_mut(Player::Dracula).location = Some(to);

    if map::is_sea(to) {
        state.player_mut(Player::Dracula).health -= LIFE_LOSS_SEA;
    }
    for hunter in Player::HUNTERS {
        if state.location(hunter) == Some(to) && state.health(hunter) > HUNTER_MIN_HEALTH {
            state.player_mut(hunter).health -= LIFE_LOSS_DRACULA_ENCOUNTER;
            state.player_mut(Player::Dracula).health -= LIFE_LOSS_HUNTER_ENCOUNTER;
            if state.health(hunter) <= HUNTER_MIN_HEALTH {
                let p = state.player_mut(hunter);
                p.health = HUNTER_MIN_HEALTH;
                p.location = Some(HOSPITAL);
            }
        }
    }
    if to == CASTLE_DRACULA {
        state.player_mut(Player::Dracula).health += LIFE_GAIN_CASTLE_DRACULA;
    }

    state.round += 1;
    check_winner(state);
    Ok(())
}

fn check_winner(state: &mut GameState) {
    if state.health(Player::Dracula) <= 0 {
        state.winner = Some(Side::Hunters);
    }
}

/// Close a chase that hit its round limit with Dracula still standing.
pub fn declare_survival(state: &mut GameState) {
    if state.winner.is_none() {
        state.winner = Some(Side::Dracula);
    }
}

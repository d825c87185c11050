// ═══════════════════════════════════════════════════════════════════════
// Game setup: initial state and seeded random positions
// ═══════════════════════════════════════════════════════════════════════

use crate::engine::{self, hunter_options, RuleError};
use crate::navigation;
use crate::types::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Round 0, nobody on the board, everyone at full health.
pub fn create_initial_state() -> GameState {
    let hunter = PlayerState { location: None, health: HUNTER_MAX_HEALTH };
    GameState {
        round: 0,
        players: [
            hunter.clone(),
            hunter.clone(),
            hunter.clone(),
            hunter,
            PlayerState { location: None, health: DRACULA_START_BLOOD },
        ],
        trail: Vec::new(),
        traps: Vec::new(),
        winner: None,
    }
}

/// Play `rounds` full rounds with every side moving at random, then place
/// the hunters for the following round so the state sits on Dracula's turn.
/// Stops early if the hunters win.
pub fn random_position(seed: u64, rounds: u32) -> Result<GameState, RuleError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = create_initial_state();

    for _ in 0..rounds {
        random_hunter_turns(&mut state, &mut rng)?;
        if state.winner.is_some() {
            return Ok(state);
        }
        let moves = navigation::dracula_moves(&state);
        let play = moves.choose(&mut rng).copied().unwrap_or(Move::Teleport);
        engine::apply_dracula_move(&mut state, play)?;
        if state.winner.is_some() {
            return Ok(state);
        }
    }
    random_hunter_turns(&mut state, &mut rng)?;
    Ok(state)
}

fn random_hunter_turns(state: &mut GameState, rng: &mut ChaCha8Rng) -> Result<(), RuleError> {
    for hunter in Player::HUNTERS {
        let options = hunter_options(state, hunter);
        if let Some(&to) = options.choose(rng) {
            engine::apply_hunter_move(state, hunter, to)?;
        }
        if state.winner.is_some() {
            break;
        }
    }
    Ok(())
}

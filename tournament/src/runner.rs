// ═══════════════════════════════════════════════════════════════════════
// Chase Runner: plays one complete headless chase with agents
// ═══════════════════════════════════════════════════════════════════════

use fod_agents::{Agent, DecisionError, HunterAgent, Rationale};
use fod_engine::engine::{self, RuleError};
use fod_engine::setup::create_initial_state;
use fod_engine::types::*;
use fod_engine::visibility::dracula_view;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ChaseError {
    #[error("Dracula could not decide in round {round}: {source}")]
    Decision {
        round: Round,
        #[source]
        source: DecisionError,
    },
    #[error(transparent)]
    Rules(#[from] RuleError),
    #[error("{0} had somewhere to go but did not move")]
    HunterStuck(Player),
}

/// One Dracula turn as it was played.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionRecord {
    pub round: Round,
    pub play: Move,
    pub place: Option<PlaceId>,
    pub rationale: Rationale,
    pub blood_before: i32,
}

/// Result of a completed chase.
#[derive(Debug, Clone, Serialize)]
pub struct ChaseResult {
    pub seed: u64,
    pub dracula_agent: String,
    pub winner: Side,
    pub rounds_played: Round,
    pub final_blood: i32,
    pub hunter_health: [i32; 4],
    pub decisions: Vec<DecisionRecord>,
}

/// Run a chase until Dracula is destroyed or survives `max_rounds`.
/// `seed` only labels the result; the agents carry their own RNGs.
pub fn run_chase(
    dracula: &mut dyn Agent,
    hunters: &mut dyn HunterAgent,
    seed: u64,
    max_rounds: Round,
) -> Result<ChaseResult, ChaseError> {
    let mut state = create_initial_state();
    let mut decisions = Vec::new();

    while state.winner.is_none() {
        for hunter in Player::HUNTERS {
            let options = engine::hunter_options(&state, hunter);
            match hunters.choose(hunter, &options) {
                Some(to) => engine::apply_hunter_move(&mut state, hunter, to)?,
                None if options.is_empty() => {}
                None => return Err(ChaseError::HunterStuck(hunter)),
            }
            if state.winner.is_some() {
                break;
            }
        }
        if state.winner.is_some() {
            break;
        }

        let round = state.round;
        let view = dracula_view(&state);
        let decision = dracula
            .decide(&view)
            .map_err(|source| ChaseError::Decision { round, source })?;
        let blood_before = state.health(Player::Dracula);
        engine::apply_dracula_move(&mut state, decision.play)?;

        let place = state.location(Player::Dracula);
        debug!(
            round,
            play = %decision.play,
            blood = state.health(Player::Dracula),
            rationale = ?decision.rationale,
            "dracula moved"
        );
        decisions.push(DecisionRecord { round, play: decision.play, place, rationale: decision.rationale, blood_before });

        if state.round >= max_rounds {
            engine::declare_survival(&mut state);
        }
    }

    let winner = state.winner.unwrap_or(Side::Dracula);
    info!(seed, %winner, rounds = state.round, blood = state.health(Player::Dracula), "chase finished");
    Ok(ChaseResult {
        seed,
        dracula_agent: dracula.name().to_string(),
        winner,
        rounds_played: state.round,
        final_blood: state.health(Player::Dracula),
        hunter_health: Player::HUNTERS.map(|h| state.health(h)),
        decisions,
    })
}

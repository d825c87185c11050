// ═══════════════════════════════════════════════════════════════════════
// Random agents: baselines for both sides of the chase.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::{Agent, Decision, HunterAgent, Rationale};
use crate::error::Result;
use fod_engine::types::*;
use fod_engine::visibility::GameView;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Dracula playing any legal move.
pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        RandomAgent { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str { "Random" }

    fn decide(&mut self, view: &dyn GameView) -> Result<Decision> {
        let play = match view.legal_moves().choose(&mut self.rng) {
            Some(&play) => play,
            None => return Ok(Decision::new(Move::Teleport, Rationale::NoLegalMoves)),
        };
        Ok(Decision::new(play, Rationale::Random))
    }
}

pub struct RandomHunter {
    rng: ChaCha8Rng,
}

impl RandomHunter {
    pub fn new(seed: u64) -> Self {
        RandomHunter { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl HunterAgent for RandomHunter {
    fn name(&self) -> &str { "Random" }

    fn choose(&mut self, _hunter: Player, options: &[PlaceId]) -> Option<PlaceId> {
        options.choose(&mut self.rng).copied()
    }
}

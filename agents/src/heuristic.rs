// ═══════════════════════════════════════════════════════════════════════
// Heuristic Agent: Dracula's per-turn move selector
//
// Steps, first match wins:
//   1. Round 0: a random port no hunter threatens.
//   2. No legal moves: teleport.
//   3. No plain destinations: a special action.
//   4. Near the castle: leave or return per the stronghold posture.
//   5. Nothing safe, or low on blood with only the sea left: retreat.
//   6. Otherwise a safe port, then safe open land, then anything safe.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::{Agent, Decision, Rationale};
use crate::error::{DecisionError, Result};
use crate::filter::{filter_safe, first_open_land, first_port};
use crate::retreat::{pick_retreat, pick_special_action};
use crate::stronghold::{self, Options};
use crate::threat::{check_place, survey_hunters, HunterIntel, ThreatSet};
use crate::tables::STRONGHOLD;
use fod_engine::map;
use fod_engine::types::*;
use fod_engine::visibility::GameView;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// At or below this much blood a sea crossing is too costly.
pub const CRITICAL_BLOOD: i32 = LIFE_LOSS_SEA;

pub struct HeuristicAgent {
    rng: ChaCha8Rng,
}

impl HeuristicAgent {
    pub fn new(seed: u64) -> Self {
        HeuristicAgent { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    fn opening_place(&mut self, threats: &ThreatSet) -> PlaceId {
        let safe: Vec<PlaceId> = map::ports().filter(|&p| !threats.contains(p)).collect();
        let pool = if safe.is_empty() { map::ports().collect() } else { safe };
        pool.choose(&mut self.rng).copied().unwrap_or(STRONGHOLD)
    }

    fn special_action(&mut self, moves: &[Move], current: PlaceId, threats: &ThreatSet) -> Decision {
        let play = pick_special_action(moves, threats.contains(current), &mut self.rng).unwrap_or(Move::Teleport);
        Decision::new(play, Rationale::SpecialOnly)
    }

    fn retreat(
        &mut self,
        destinations: &[PlaceId],
        hunters: &[HunterIntel],
        moves: &[Move],
        current: PlaceId,
        threats: &ThreatSet,
    ) -> Decision {
        match pick_retreat(destinations, hunters) {
            Some(score) => {
                debug!(
                    place = map::place_code(score.place),
                    contests = score.contest_count,
                    weakest = score.min_contestant_health,
                    "retreat"
                );
                Decision::new(Move::Location(score.place), Rationale::Retreat)
            }
            None => self.special_action(moves, current, threats),
        }
    }

    fn choose(&mut self, view: &dyn GameView) -> Result<Decision> {
        let hunters = survey_hunters(view)?;
        let threats = ThreatSet::build(&hunters);
        debug!(round = view.round(), threatened = threats.len(), "threats surveyed");

        if view.round() == 0 {
            let place = self.opening_place(&threats);
            return Ok(Decision::new(Move::Location(place), Rationale::OpeningPlacement));
        }

        let moves = view.legal_moves();
        if moves.is_empty() {
            return Ok(Decision::new(Move::Teleport, Rationale::NoLegalMoves));
        }
        for m in &moves {
            if let Some(place) = m.place() {
                check_place(place)?;
            }
        }
        let current = view
            .location_of(Player::Dracula)
            .ok_or(DecisionError::UnplacedPlayer(Player::Dracula))?;
        check_place(current)?;
        let destinations = view.reachable_destinations(Player::Dracula);
        for &place in &destinations {
            check_place(place)?;
        }

        if destinations.is_empty() {
            return Ok(self.special_action(&moves, current, &threats));
        }

        let safe_moves = filter_safe(&moves, &threats);
        let safe_destinations = filter_safe(&destinations, &threats);

        if stronghold::near_stronghold(current) {
            let traps = view.active_traps();
            for &place in &traps {
                check_place(place)?;
            }
            let posture = stronghold::assess(&hunters, &traps);
            let opts = Options {
                current,
                safe_destinations: &safe_destinations,
                safe_moves: &safe_moves,
                legal_destinations: &destinations,
            };
            if let Some(place) = stronghold::plan(posture, &opts) {
                return Ok(Decision::new(Move::Location(place), Rationale::Stronghold(posture)));
            }
        }

        let blood = view.health_of(Player::Dracula);
        let only_sea = safe_destinations.iter().all(|&p| map::is_sea(p));
        let cornered = safe_destinations.is_empty() || (blood <= CRITICAL_BLOOD && only_sea);
        if !cornered {
            let preferred = first_port(&safe_destinations)
                .or_else(|| first_open_land(&safe_destinations))
                .or_else(|| safe_destinations.first().copied());
            if let Some(place) = preferred {
                return Ok(Decision::new(Move::Location(place), Rationale::SafeMove));
            }
        }

        Ok(self.retreat(&destinations, &hunters, &moves, current, &threats))
    }
}

impl Agent for HeuristicAgent {
    fn name(&self) -> &str {
        "Heuristic"
    }

    fn decide(&mut self, view: &dyn GameView) -> Result<Decision> {
        let decision = self.choose(view)?;
        debug!(
            round = view.round(),
            play = %decision.play,
            rationale = ?decision.rationale,
            "dracula decision"
        );
        Ok(decision)
    }
}

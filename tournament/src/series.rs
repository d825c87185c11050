// ═══════════════════════════════════════════════════════════════════════
// Series: many independent chases in parallel, plus a summary
// ═══════════════════════════════════════════════════════════════════════

use crate::runner::{run_chase, ChaseError, ChaseResult};
use fod_agents::{Agent, HeuristicAgent, RandomAgent, RandomHunter};
use fod_engine::types::{Round, Side};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraculaKind {
    Heuristic,
    Random,
}

impl DraculaKind {
    pub fn parse(name: &str) -> Option<DraculaKind> {
        match name {
            "heuristic" => Some(DraculaKind::Heuristic),
            "random" => Some(DraculaKind::Random),
            _ => None,
        }
    }

    pub fn build(self, seed: u64) -> Box<dyn Agent> {
        match self {
            DraculaKind::Heuristic => Box::new(HeuristicAgent::new(seed)),
            DraculaKind::Random => Box::new(RandomAgent::new(seed)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub chases: u32,
    pub errors: u32,
    pub dracula_wins: u32,
    pub hunter_wins: u32,
    pub mean_rounds: f64,
    pub mean_final_blood: f64,
    /// How often each policy step produced the play, keyed by its debug name.
    pub rationales: BTreeMap<String, u32>,
}

impl SeriesSummary {
    pub fn from_results(results: &[Result<ChaseResult, ChaseError>]) -> SeriesSummary {
        let mut summary = SeriesSummary { chases: results.len() as u32, ..Default::default() };
        let mut rounds = 0u64;
        let mut blood = 0i64;
        for result in results {
            let chase = match result {
                Ok(chase) => chase,
                Err(_) => {
                    summary.errors += 1;
                    continue;
                }
            };
            match chase.winner {
                Side::Dracula => summary.dracula_wins += 1,
                Side::Hunters => summary.hunter_wins += 1,
            }
            rounds += u64::from(chase.rounds_played);
            blood += i64::from(chase.final_blood);
            for record in &chase.decisions {
                *summary.rationales.entry(format!("{:?}", record.rationale)).or_insert(0) += 1;
            }
        }
        let finished = summary.chases - summary.errors;
        if finished > 0 {
            summary.mean_rounds = rounds as f64 / finished as f64;
            summary.mean_final_blood = blood as f64 / finished as f64;
        }
        summary
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn dracula_win_rate(&self) -> f64 {
        let finished = self.chases - self.errors;
        if finished == 0 { 0.0 } else { self.dracula_wins as f64 / finished as f64 }
    }
}

/// Seed used for chase `index` of a series starting at `base_seed`.
pub fn chase_seed(base_seed: u64, index: u32) -> u64 {
    base_seed + index as u64 * 1000
}

/// Run `chases` chases across the rayon pool. Results come back in chase
/// order, so a series is reproducible from its base seed.
pub fn run_series(
    kind: DraculaKind,
    chases: u32,
    base_seed: u64,
    max_rounds: Round,
) -> (Vec<Result<ChaseResult, ChaseError>>, SeriesSummary) {
    let results: Vec<Result<ChaseResult, ChaseError>> = (0..chases)
        .into_par_iter()
        .map(|i| {
            let seed = chase_seed(base_seed, i);
            let mut dracula = kind.build(seed);
            let mut hunters = RandomHunter::new(seed.wrapping_add(1));
            let result = run_chase(dracula.as_mut(), &mut hunters, seed, max_rounds);
            if let Err(e) = &result {
                warn!(seed, error = %e, "chase failed");
            }
            result
        })
        .collect();
    let summary = SeriesSummary::from_results(&results);
    (results, summary)
}

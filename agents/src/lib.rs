pub mod agent;
pub mod error;
pub mod tables;
pub mod threat;
pub mod filter;
pub mod retreat;
pub mod stronghold;
pub mod heuristic;
pub mod random;

#[cfg(test)]
mod testing;

pub use agent::{Agent, Decision, HunterAgent, Rationale};
pub use error::DecisionError;
pub use heuristic::HeuristicAgent;
pub use random::{RandomAgent, RandomHunter};

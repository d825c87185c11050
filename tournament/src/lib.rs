pub mod runner;
pub mod series;

pub use runner::{run_chase, ChaseError, ChaseResult, DecisionRecord};
pub use series::{run_series, DraculaKind, SeriesSummary};

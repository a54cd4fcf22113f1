pub mod eval;
pub mod ordering;
pub mod rollout;
pub mod search;
pub mod table;

pub use eval::{Evaluator, WeightedEvaluator, Weights};
pub use rollout::RolloutConfig;
pub use search::{Search, SearchConfig, SearchResult, TieBreak, WIN};
pub use table::{Bound, Entry, TranspositionTable};

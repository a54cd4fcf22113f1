use anyhow::Result;
use log::debug;

use super::traits::Player;
use crate::ai::{Evaluator, RolloutConfig, Search, SearchConfig, SearchResult, WeightedEvaluator};
use crate::core::{Action, Simulator};

/// Drives every phase through the same game tree search, so removals
/// are chosen with the same lookahead as placements.
pub struct SearchPlayer<E: Evaluator = WeightedEvaluator> {
    search: Search<E>,
}

impl SearchPlayer<WeightedEvaluator> {
    /// Plain alpha-beta at the given depth, no transposition table.
    pub fn minimax(depth: u8) -> Self {
        Self::new(SearchConfig::minimax(depth), WeightedEvaluator::default())
    }

    /// Alpha-beta with a transposition table and symmetry probing.
    pub fn with_table(depth: u8) -> Self {
        let config = SearchConfig {
            depth,
            table: true,
            symmetry: true,
            ..SearchConfig::minimax(depth)
        };
        Self::new(config, WeightedEvaluator::default())
    }

    /// Monte Carlo playouts at the leaves instead of static evaluation.
    pub fn rollout(depth: u8, rollout: RolloutConfig) -> Self {
        let config = SearchConfig {
            depth,
            rollout: Some(rollout),
            ..SearchConfig::default()
        };
        Self::new(config, WeightedEvaluator::default())
    }
}

impl<E: Evaluator> SearchPlayer<E> {
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self {
            search: Search::new(config, evaluator),
        }
    }

    fn decide(&mut self, sim: &mut Simulator) -> Result<Action> {
        let SearchResult { action, score, nodes } = self.search.decide(sim)?;
        debug!(
            "{} in {} picks {} (score {}, {} nodes)",
            sim.active(),
            sim.state(),
            action,
            score,
            nodes
        );
        Ok(action)
    }
}

impl<E: Evaluator> Player for SearchPlayer<E> {
    fn decide_move(&mut self, sim: &mut Simulator) -> Result<Action> {
        self.decide(sim)
    }

    fn decide_removal(&mut self, sim: &mut Simulator) -> Result<Action> {
        self.decide(sim)
    }

    fn decide_removal_or_pass(&mut self, sim: &mut Simulator) -> Result<Action> {
        self.decide(sim)
    }
}

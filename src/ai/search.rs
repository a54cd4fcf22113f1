//! Adversarial game tree search
//!
//! Depth-limited minimax from the searching side's fixed perspective,
//! with alpha-beta pruning, a per-decision transposition table, move
//! ordering and an optional rollout leaf. The removal phases let one
//! side act several plies in a row, so each node picks maximize or
//! minimize by comparing its active side against the searcher rather
//! than negating between plies.

use anyhow::{ensure, Result};
use rand::prelude::*;
use rand::rngs::StdRng;

use super::eval::Evaluator;
use super::ordering::order_actions;
use super::rollout::{self, RolloutConfig};
use super::table::{Bound, Entry, TranspositionTable};
use crate::core::{Action, GameState, Side, Simulator};
use crate::utils::make_rng;

/// Terminal win value; wins found closer to the root score higher.
pub const WIN: i32 = 100_000;
const INF: i32 = i32::MAX / 2;

/// Policy when several root actions share the best score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// First best in generation/ordering order
    Deterministic,
    /// Uniform random among the best
    RandomAmongBest,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Plies of lookahead
    pub depth: u8,
    pub table: bool,
    pub symmetry: bool,
    pub ordering: bool,
    /// Alpha-beta cutoffs; disabled only to compare against full-width
    /// minimax
    pub prune: bool,
    pub rollout: Option<RolloutConfig>,
    pub tie_break: TieBreak,
}

impl SearchConfig {
    pub fn minimax(depth: u8) -> Self {
        Self {
            depth,
            table: false,
            symmetry: false,
            ordering: true,
            prune: true,
            rollout: None,
            tie_break: TieBreak::Deterministic,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            table: true,
            ..Self::minimax(4)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub action: Action,
    /// Value from the searching side's perspective
    pub score: i32,
    pub nodes: u64,
}

pub struct Search<E: Evaluator> {
    config: SearchConfig,
    evaluator: E,
    table: TranspositionTable,
    rng: StdRng,
    nodes: u64,
}

impl<E: Evaluator> Search<E> {
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            table: TranspositionTable::new(),
            rng: make_rng(),
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose the best action for the active side. The table is cleared
    /// here: entries from prior decisions were computed against a
    /// different horizon.
    pub fn decide(&mut self, sim: &mut Simulator) -> Result<SearchResult> {
        ensure!(
            !sim.is_terminal(),
            "search invoked on terminal state {}",
            sim.state()
        );
        self.table.clear();
        self.nodes = 0;
        let me = sim.active();

        let mut actions = Vec::new();
        sim.legal_actions(&mut actions);
        ensure!(
            !actions.is_empty(),
            "no legal action in non-terminal state {} for {:?}",
            sim.state(),
            me
        );
        if self.config.ordering {
            order_actions(sim.board(), me, &mut actions);
        }

        let mut best_score = -INF;
        let mut best = Vec::new();
        let mut alpha = -INF;
        for &action in &actions {
            let undo = sim.apply(action);
            let value = self.visit(sim, me, 1, alpha, INF);
            sim.undo(action, undo);
            let value = value?;
            if value > best_score {
                best_score = value;
                best.clear();
            }
            if value == best_score {
                best.push(action);
            }
            if self.config.prune && self.config.tie_break == TieBreak::Deterministic {
                alpha = alpha.max(best_score);
            }
        }

        let action = match self.config.tie_break {
            TieBreak::Deterministic => best[0],
            TieBreak::RandomAmongBest => *best.choose(&mut self.rng).expect("non-empty best set"),
        };
        Ok(SearchResult {
            action,
            score: best_score,
            nodes: self.nodes,
        })
    }

    fn visit(&mut self, sim: &mut Simulator, me: Side, ply: u8, alpha: i32, beta: i32) -> Result<i32> {
        self.nodes += 1;
        match sim.state() {
            GameState::Completed => {
                let value = WIN - i32::from(ply);
                return Ok(if sim.winner() == Some(me) { value } else { -value });
            }
            GameState::Draw | GameState::Aborted => return Ok(0),
            _ => {}
        }
        if ply >= self.config.depth {
            return self.leaf(sim, me);
        }

        let remaining = self.config.depth - ply;
        let key = sim.key();
        let mut alpha = alpha;
        let mut beta = beta;
        if self.config.table {
            let probed = if self.config.symmetry {
                self.table.get_symmetric(key)
            } else {
                self.table.get(key)
            };
            if let Some(entry) = probed.filter(|e| e.depth >= remaining) {
                match entry.bound {
                    Bound::Exact => return Ok(entry.value),
                    Bound::Lower => alpha = alpha.max(entry.value),
                    Bound::Upper => beta = beta.min(entry.value),
                }
                if self.config.prune && alpha >= beta {
                    return Ok(entry.value);
                }
            }
        }

        let mut actions = Vec::new();
        sim.legal_actions(&mut actions);
        ensure!(
            !actions.is_empty(),
            "no legal action in non-terminal state {} for {:?}",
            sim.state(),
            sim.active()
        );
        if self.config.ordering {
            order_actions(sim.board(), sim.active(), &mut actions);
        }

        let maximizing = sim.active() == me;
        let (alpha_in, beta_in) = (alpha, beta);
        let mut best = if maximizing { -INF } else { INF };
        for &action in &actions {
            let undo = sim.apply(action);
            let value = self.visit(sim, me, ply + 1, alpha, beta);
            sim.undo(action, undo);
            let value = value?;
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if self.config.prune && alpha >= beta {
                break;
            }
        }

        if self.config.table {
            let bound = if best <= alpha_in {
                Bound::Upper
            } else if best >= beta_in {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.table.insert(
                key,
                Entry {
                    depth: remaining,
                    value: best,
                    bound,
                },
            );
        }
        Ok(best)
    }

    fn leaf(&mut self, sim: &mut Simulator, me: Side) -> Result<i32> {
        match self.config.rollout {
            Some(config) => rollout::sample(sim, me, &self.evaluator, config, &mut self.rng),
            None => Ok(self.evaluator.evaluate(sim.board(), me)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::eval::WeightedEvaluator;
    use crate::core::{Board, Loc};

    fn engine(config: SearchConfig) -> Search<WeightedEvaluator> {
        Search::new(config, WeightedEvaluator::default())
    }

    #[test]
    fn test_decide_on_terminal_state_is_an_error() {
        let mut board = Board::new();
        let mut sim = Simulator::new(&mut board);
        sim.abort();
        assert!(engine(SearchConfig::minimax(2)).decide(&mut sim).is_err());
    }

    #[test]
    fn test_decide_restores_the_position() {
        let mut board = Board::new();
        let mut sim = Simulator::new(&mut board);
        let key = sim.key();
        let result = engine(SearchConfig::default()).decide(&mut sim).unwrap();
        assert_eq!(sim.key(), key);
        assert!(result.nodes > 0);
        assert!(matches!(result.action, Action::Place { .. }));
    }

    #[test]
    fn test_apex_win_found() {
        let mut board = Board::new();
        // fill everything below the apex, alternating so no square is
        // ever completed: rows of layer 0 split between the sides
        for y in 0..4 {
            for x in 0..4 {
                let side = if (x + y) % 2 == 0 { Side::Light } else { Side::Dark };
                board.occupy(Loc::new(x, y, 0), side);
                board.reserve_take(side);
            }
        }
        for y in 0..3 {
            for x in 0..3 {
                let side = if (x + y) % 2 == 0 { Side::Dark } else { Side::Light };
                board.occupy(Loc::new(x, y, 1), side);
                board.reserve_take(side);
            }
        }
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            let side = if (x + y) % 2 == 0 { Side::Light } else { Side::Dark };
            board.occupy(Loc::new(x, y, 2), side);
            board.reserve_take(side);
        }
        let mut sim = Simulator::resume(&mut board, GameState::Move, Side::Light);
        let result = engine(SearchConfig::minimax(3)).decide(&mut sim).unwrap();
        assert_eq!(result.action, Action::Place { to: Loc::APEX });
        assert_eq!(result.score, WIN - 1);
    }
}

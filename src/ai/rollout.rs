//! Monte Carlo playout sampling
//!
//! In place of static leaf evaluation, run a handful of short random
//! playouts from the leaf and average the outcomes. Every simulated
//! action is fully undone before returning, and the simulator's
//! terminal outcome is saved and restored around each playout.

use anyhow::{bail, Result};
use rand::prelude::*;
use rand::rngs::StdRng;

use super::eval::Evaluator;
use super::search::WIN;
use crate::core::{Action, GameState, Side, Simulator, Undo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloutConfig {
    /// Playouts per leaf
    pub playouts: u32,
    /// Plies before falling back to the static evaluator
    pub horizon: u32,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            playouts: 12,
            horizon: 24,
        }
    }
}

/// Average outcome of `config.playouts` random continuations from the
/// current position, from `me`'s perspective.
pub fn sample<E: Evaluator>(
    sim: &mut Simulator,
    me: Side,
    evaluator: &E,
    config: RolloutConfig,
    rng: &mut StdRng,
) -> Result<i32> {
    let mut total: i64 = 0;
    for _ in 0..config.playouts.max(1) {
        total += i64::from(playout(sim, me, evaluator, config.horizon, rng)?);
    }
    Ok((total / i64::from(config.playouts.max(1))) as i32)
}

fn playout<E: Evaluator>(
    sim: &mut Simulator,
    me: Side,
    evaluator: &E,
    horizon: u32,
    rng: &mut StdRng,
) -> Result<i32> {
    let saved = sim.terminal_outcome();
    let mut trail: Vec<(Action, Undo)> = Vec::new();

    let walked = walk(sim, horizon, rng, &mut trail);
    let score = match sim.state() {
        GameState::Completed => {
            if sim.winner() == Some(me) {
                WIN
            } else {
                -WIN
            }
        }
        GameState::Draw | GameState::Aborted => 0,
        _ => evaluator.evaluate(sim.board(), me),
    };

    while let Some((action, undo)) = trail.pop() {
        sim.undo(action, undo);
    }
    sim.set_terminal_outcome(saved);
    walked?;
    Ok(score)
}

fn walk(
    sim: &mut Simulator,
    horizon: u32,
    rng: &mut StdRng,
    trail: &mut Vec<(Action, Undo)>,
) -> Result<()> {
    let mut actions = Vec::new();
    for _ in 0..horizon {
        if sim.is_terminal() {
            return Ok(());
        }
        sim.legal_actions(&mut actions);
        let Some(&action) = actions.choose(rng) else {
            bail!(
                "no legal action in non-terminal state {} during playout",
                sim.state()
            );
        };
        trail.push((action, sim.apply(action)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::eval::WeightedEvaluator;
    use crate::core::Board;
    use crate::utils::make_rng;

    #[test]
    fn test_playouts_leave_position_untouched() {
        let mut board = Board::new();
        let mut sim = Simulator::new(&mut board);
        let key = sim.key();
        let mut rng = make_rng();
        let evaluator = WeightedEvaluator::default();
        let config = RolloutConfig {
            playouts: 8,
            horizon: 40,
        };
        sample(&mut sim, Side::Light, &evaluator, config, &mut rng).unwrap();
        assert_eq!(sim.key(), key);
        assert_eq!(sim.state(), GameState::Move);
        assert_eq!(sim.winner(), None);
        assert_eq!(*sim.board(), Board::new());
    }

    #[test]
    fn test_terminal_leaf_scores_win() {
        let mut board = Board::new();
        let mut sim = Simulator::new(&mut board);
        sim.set_terminal_outcome(Some(Side::Dark));
        sim.abort();
        // aborted counts as neutral, not a win
        let mut rng = make_rng();
        let evaluator = WeightedEvaluator::default();
        let score = sample(
            &mut sim,
            Side::Dark,
            &evaluator,
            RolloutConfig::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(score, 0);
    }
}

//! Leaf evaluation
//!
//! The search treats evaluation as opaque: any pure function of
//! (board, side) with bounded latency works, whether the weighted
//! heuristic below or an externally trained model behind the same trait.

use crate::core::{moves, Board, Loc, Side, NUM_SQUARES};

/// Scalar value of a non-terminal position from `side`'s perspective
pub trait Evaluator {
    fn evaluate(&self, board: &Board, side: Side) -> i32;
}

/// Feature weights for [`WeightedEvaluator`]. Strategy configuration,
/// not part of the search contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub reserve: i32,
    pub height: i32,
    pub square: i32,
    pub mobility: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            reserve: 100,
            height: 50,
            square: 30,
            mobility: 10,
        }
    }
}

/// Weighted linear combination of reserve difference, height-weighted
/// occupancy, near-complete squares and mobility.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedEvaluator {
    pub weights: Weights,
}

impl WeightedEvaluator {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }
}

impl Evaluator for WeightedEvaluator {
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        let w = &self.weights;
        let reserve = i32::from(board.reserve(side)) - i32::from(board.reserve(!side));
        w.reserve * reserve
            + w.height * height_advantage(board, side)
            + w.square * square_potential(board, side)
            + w.mobility * mobility(board, side)
    }
}

/// Spheres weighted 2^layer, signed for `side`
fn height_advantage(board: &Board, side: Side) -> i32 {
    Loc::all()
        .filter_map(|loc| board.get(loc).map(|s| (loc, s)))
        .map(|(loc, s)| {
            let weight = 1 << loc.z();
            if s == side {
                weight
            } else {
                -weight
            }
        })
        .sum()
}

/// 3-of-4 with no opponent scores 5, 2-of-4 with 2 empty scores 2,
/// mirrored for the opponent.
fn square_potential(board: &Board, side: Side) -> i32 {
    let mut score = 0;
    for sq in 0..NUM_SQUARES {
        let mine = board.square_count(sq, side);
        let theirs = board.square_count(sq, !side);
        let empty = 4 - mine - theirs;
        if theirs == 0 {
            if mine == 3 && empty == 1 {
                score += 5;
            } else if mine == 2 && empty == 2 {
                score += 2;
            }
        } else if mine == 0 {
            if theirs == 3 && empty == 1 {
                score -= 5;
            } else if theirs == 2 && empty == 2 {
                score -= 2;
            }
        }
    }
    score
}

fn mobility(board: &Board, side: Side) -> i32 {
    moves::count_moves(board, side) as i32 - moves::count_moves(board, !side) as i32
}

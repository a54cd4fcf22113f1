//! Move ordering for earlier cutoffs
//!
//! Square-completing actions first, then height-gaining promotions,
//! then placements blocking an opponent square, then the rest.
//! Heuristic only; pruning stays correct in any order.

use crate::core::{Action, Board, Side};

pub fn order_actions(board: &Board, side: Side, actions: &mut [Action]) {
    actions.sort_by_cached_key(|a| -priority(board, side, *a));
}

fn priority(board: &Board, side: Side, action: Action) -> i32 {
    match action {
        Action::Place { to } | Action::Promote { to, .. } => {
            let mut p = 10 * to.z() as i32;
            for &sq in to.squares() {
                if board.square_count(sq, side) == 3 {
                    p += 1000;
                } else if board.square_count(sq, !side) == 3 {
                    p += 400;
                }
            }
            if matches!(action, Action::Promote { .. }) {
                p += 600;
            }
            p
        }
        Action::RemoveFirst { .. } | Action::RemoveSecond { .. } => 1,
        Action::Pass => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Loc;

    #[test]
    fn test_square_completion_ordered_first() {
        let mut board = Board::new();
        for (x, y) in [(0, 0), (1, 0), (0, 1)] {
            board.occupy(Loc::new(x, y, 0), Side::Light);
        }
        let completing = Action::Place {
            to: Loc::new(1, 1, 0),
        };
        let mut actions = vec![
            Action::Place {
                to: Loc::new(3, 3, 0),
            },
            Action::Place {
                to: Loc::new(2, 2, 0),
            },
            completing,
        ];
        order_actions(&board, Side::Light, &mut actions);
        assert_eq!(actions[0], completing);
    }

    #[test]
    fn test_blocking_before_plain_placement() {
        let mut board = Board::new();
        for (x, y) in [(2, 2), (3, 2), (2, 3)] {
            board.occupy(Loc::new(x, y, 0), Side::Dark);
        }
        let blocking = Action::Place {
            to: Loc::new(3, 3, 0),
        };
        let mut actions = vec![
            Action::Place {
                to: Loc::new(0, 0, 0),
            },
            blocking,
        ];
        order_actions(&board, Side::Light, &mut actions);
        assert_eq!(actions[0], blocking);
    }
}

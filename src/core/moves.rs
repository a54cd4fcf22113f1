//! Legal action generation

use super::action::Action;
use super::board::Board;
use super::loc::Loc;
use super::side::Side;
use super::state::GameState;

/// Fill `out` with every legal action for `side` in `state`.
/// Terminal states yield no actions.
pub fn legal_actions(board: &Board, state: GameState, side: Side, out: &mut Vec<Action>) {
    out.clear();
    match state {
        GameState::Move => {
            if board.reserve(side) > 0 {
                for to in Loc::all() {
                    if board.is_usable(to) {
                        out.push(Action::Place { to });
                    }
                }
            }
            for from in Loc::all() {
                if board.get(from) == Some(side) && board.is_removable(from) {
                    for to in Loc::all() {
                        if board.can_promote(from, to) {
                            out.push(Action::Promote { from, to });
                        }
                    }
                }
            }
        }
        GameState::RemoveFirst => {
            for loc in Loc::all() {
                if board.get(loc) == Some(side) && board.is_removable(loc) {
                    out.push(Action::RemoveFirst { loc });
                }
            }
        }
        GameState::RemoveSecond => {
            for loc in Loc::all() {
                if board.get(loc) == Some(side) && board.is_removable(loc) {
                    out.push(Action::RemoveSecond { loc });
                }
            }
            out.push(Action::Pass);
        }
        _ => {}
    }
}

/// Whether `side` could act at all in the move phase. A side with no
/// reserve and no promotion loses by exhaustion.
pub fn has_any_move(board: &Board, side: Side) -> bool {
    if board.reserve(side) > 0 && Loc::all().any(|to| board.is_usable(to)) {
        return true;
    }
    Loc::all().any(|from| {
        board.get(from) == Some(side)
            && board.is_removable(from)
            && Loc::all().any(|to| board.can_promote(from, to))
    })
}

/// Number of legal move-phase actions for `side`; the mobility feature
/// of the evaluator.
pub fn count_moves(board: &Board, side: Side) -> usize {
    let mut n = 0;
    if board.reserve(side) > 0 {
        n += Loc::all().filter(|&to| board.is_usable(to)).count();
    }
    for from in Loc::all() {
        if board.get(from) == Some(side) && board.is_removable(from) {
            n += Loc::all().filter(|&to| board.can_promote(from, to)).count();
        }
    }
    n
}

//! Reversible move simulator
//!
//! Applies exactly one action to a (board, state, active side) triple,
//! mutating in place, and supplies its exact inverse. Searches visit
//! millions of nodes per decision and never copy the board, so apply
//! and undo must be exact inverses down to the encoded key and reserve
//! counts. `Undo` captures the prior state, active side and winner;
//! promotions and removals recover the prior location from the action
//! itself.

use super::action::Action;
use super::board::Board;
use super::loc::Loc;
use super::moves;
use super::side::Side;
use super::state::GameState;

pub struct Simulator<'a> {
    board: &'a mut Board,
    state: GameState,
    active: Side,
    winner: Option<Side>,
}

/// Everything needed to reverse one applied action
#[derive(Debug, Clone, Copy)]
pub struct Undo {
    state: GameState,
    active: Side,
    winner: Option<Side>,
}

impl<'a> Simulator<'a> {
    /// Fresh game: light to move
    pub fn new(board: &'a mut Board) -> Self {
        Self::resume(board, GameState::Move, Side::Light)
    }

    /// Wrap a board mid-game. Terminal states carry a winner the
    /// simulator cannot reconstruct, so they are not resumable.
    pub fn resume(board: &'a mut Board, state: GameState, active: Side) -> Self {
        debug_assert!(!state.is_terminal());
        Self {
            board,
            state,
            active,
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn active(&self) -> Side {
        self.active
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Winner bookkeeping, exposed so rollouts can save and restore
    /// terminal detection around a simulated continuation.
    pub fn terminal_outcome(&self) -> Option<Side> {
        self.winner
    }

    pub fn set_terminal_outcome(&mut self, winner: Option<Side>) {
        self.winner = winner;
    }

    /// Threefold repetition, decided by the game runner
    pub fn declare_draw(&mut self) {
        self.state = GameState::Draw;
    }

    /// Illegal action or player failure
    pub fn abort(&mut self) {
        self.state = GameState::Aborted;
    }

    pub fn legal_actions(&self, out: &mut Vec<Action>) {
        moves::legal_actions(self.board, self.state, self.active, out);
    }

    /// Packed transposition key: 60-bit board encoding, state tag,
    /// active-side tag. A single integer, no allocation.
    pub fn key(&self) -> u64 {
        self.board.encode() | self.state.tag() << 60 | (self.active.index() as u64) << 62
    }

    /// Apply a legal action. Legality is the caller's responsibility;
    /// the game runner validates player-supplied actions against the
    /// generated set, searches only apply generated ones.
    pub fn apply(&mut self, action: Action) -> Undo {
        debug_assert!(!self.is_terminal());
        let undo = Undo {
            state: self.state,
            active: self.active,
            winner: self.winner,
        };
        match action {
            Action::Place { to } => {
                self.board.reserve_take(self.active);
                self.board.occupy(to, self.active);
                self.settle_placement(to);
            }
            Action::Promote { from, to } => {
                let side = self.board.vacate(from);
                debug_assert_eq!(side, self.active);
                self.board.occupy(to, self.active);
                self.settle_placement(to);
            }
            Action::RemoveFirst { loc } => {
                self.board.vacate(loc);
                self.board.reserve_return(self.active);
                self.state = GameState::RemoveSecond;
            }
            Action::RemoveSecond { loc } => {
                self.board.vacate(loc);
                self.board.reserve_return(self.active);
                self.end_turn();
            }
            Action::Pass => self.end_turn(),
        }
        undo
    }

    /// Exact inverse of `apply(action)`
    pub fn undo(&mut self, action: Action, undo: Undo) {
        match action {
            Action::Place { to } => {
                self.board.vacate(to);
                self.board.reserve_return(undo.active);
            }
            Action::Promote { from, to } => {
                self.board.vacate(to);
                self.board.occupy(from, undo.active);
            }
            Action::RemoveFirst { loc } | Action::RemoveSecond { loc } => {
                self.board.reserve_take(undo.active);
                self.board.occupy(loc, undo.active);
            }
            Action::Pass => {}
        }
        self.state = undo.state;
        self.active = undo.active;
        self.winner = undo.winner;
    }

    fn settle_placement(&mut self, to: Loc) {
        if to == Loc::APEX {
            self.state = GameState::Completed;
            self.winner = Some(self.active);
        } else if self.board.in_complete_square(to, self.active) {
            self.state = GameState::RemoveFirst;
        } else {
            self.end_turn();
        }
    }

    fn end_turn(&mut self) {
        self.active = !self.active;
        self.state = GameState::Move;
        if !moves::has_any_move(self.board, self.active) {
            self.state = GameState::Completed;
            self.winner = Some(!self.active);
        }
    }
}

//! Game phase state machine
//!
//! The phase is always paired with an active side. The active side
//! alternates only across `Move -> Move` and `RemoveSecond -> Move`
//! transitions; within the removal phases it stays fixed.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Active side places a reserve sphere or promotes an on-board one
    Move,
    /// Mandatory removal after completing a square
    RemoveFirst,
    /// Optional second removal, or pass
    RemoveSecond,
    Completed,
    Draw,
    Aborted,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameState::Completed | GameState::Draw | GameState::Aborted
        )
    }

    /// 2-bit tag for transposition keys; terminal states share a tag
    /// since they are never searched through.
    pub(crate) fn tag(self) -> u64 {
        match self {
            GameState::Move => 0,
            GameState::RemoveFirst => 1,
            GameState::RemoveSecond => 2,
            _ => 3,
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameState::Move => "move",
            GameState::RemoveFirst => "remove-first",
            GameState::RemoveSecond => "remove-second",
            GameState::Completed => "completed",
            GameState::Draw => "draw",
            GameState::Aborted => "aborted",
        };
        write!(f, "{}", name)
    }
}

pub mod game;
pub mod harness;
pub mod result;

pub use game::{play_game, FinishedGame, GameOutcome};
pub use harness::{play, play_with_deadline, DeadlineExceeded, SECS_PER_GAME};
pub use result::BattleResult;

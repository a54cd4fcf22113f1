pub mod first_fit;
pub mod random;
pub mod search;
pub mod traits;

pub use first_fit::FirstFit;
pub use random::RandomPlayer;
pub use search::SearchPlayer;
pub use traits::{Player, PlayerSpec};

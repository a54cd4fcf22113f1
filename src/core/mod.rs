//! Core game representations and rules

pub mod action;
pub mod board;
pub mod display;
pub mod loc;
pub mod moves;
pub mod side;
pub mod sim;
pub mod state;

pub use action::Action;
pub use board::{Board, SPHERES_PER_SIDE};
pub use loc::{Loc, LAYERS, NUM_LOCS, NUM_SQUARES};
pub use side::{Side, SideArray};
pub use sim::{Simulator, Undo};
pub use state::GameState;

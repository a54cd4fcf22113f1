//! Pylos
//!
//! Engine for the Pylos board game: board model and rules, a reversible
//! game simulator, an alpha-beta search engine with transposition table
//! and symmetry reduction, and a parallel harness for pitting players
//! against each other.

pub mod ai;
pub mod battle;
pub mod core;
pub mod players;
pub mod utils;

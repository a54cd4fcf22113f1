//! Player abstraction
//!
//! A player is asked for one action at a time, with the game phase
//! made explicit by which method is called. Implementations may keep
//! internal state (search tables, rngs) between calls; the simulator
//! they receive must be returned in the position it arrived in.

use std::sync::Arc;

use anyhow::Result;

use crate::core::{Action, Simulator};

pub trait Player {
    /// Pick a placement or promotion in the Move phase.
    fn decide_move(&mut self, sim: &mut Simulator) -> Result<Action>;

    /// Pick the mandatory first removal after completing a square.
    fn decide_removal(&mut self, sim: &mut Simulator) -> Result<Action>;

    /// Pick the optional second removal, or pass.
    fn decide_removal_or_pass(&mut self, sim: &mut Simulator) -> Result<Action>;
}

type Factory = Arc<dyn Fn() -> Box<dyn Player> + Send + Sync>;

/// Named recipe for building fresh player instances, one per game, so
/// concurrent games never share mutable player state.
#[derive(Clone)]
pub struct PlayerSpec {
    name: String,
    build: Factory,
}

impl PlayerSpec {
    pub fn new<P, F>(name: impl Into<String>, build: F) -> Self
    where
        P: Player + 'static,
        F: Fn() -> P + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            build: Arc::new(move || Box::new(build())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn create(&self) -> Box<dyn Player> {
        (self.build)()
    }
}

impl std::fmt::Debug for PlayerSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerSpec").field("name", &self.name).finish()
    }
}

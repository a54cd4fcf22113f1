use anyhow::{Context, Result};

use super::traits::Player;
use crate::core::{Action, Simulator};

/// Takes the first legal action in generation order and never exercises
/// the optional second removal. Deterministic baseline opponent.
#[derive(Debug, Default)]
pub struct FirstFit {
    actions: Vec<Action>,
}

impl FirstFit {
    pub fn new() -> Self {
        Self::default()
    }

    fn first(&mut self, sim: &mut Simulator) -> Result<Action> {
        sim.legal_actions(&mut self.actions);
        self.actions
            .first()
            .copied()
            .with_context(|| format!("no legal action in state {}", sim.state()))
    }
}

impl Player for FirstFit {
    fn decide_move(&mut self, sim: &mut Simulator) -> Result<Action> {
        self.first(sim)
    }

    fn decide_removal(&mut self, sim: &mut Simulator) -> Result<Action> {
        self.first(sim)
    }

    fn decide_removal_or_pass(&mut self, _sim: &mut Simulator) -> Result<Action> {
        Ok(Action::Pass)
    }
}

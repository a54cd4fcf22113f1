use anyhow::{Context, Result};
use rand::prelude::*;
use rand::rngs::StdRng;

use super::traits::Player;
use crate::core::{Action, Simulator};
use crate::utils::make_rng;

/// Uniform random choice among the legal actions of the moment.
pub struct RandomPlayer {
    rng: StdRng,
    actions: Vec<Action>,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: make_rng(),
            actions: Vec::new(),
        }
    }

    fn pick(&mut self, sim: &mut Simulator) -> Result<Action> {
        sim.legal_actions(&mut self.actions);
        self.actions
            .choose(&mut self.rng)
            .copied()
            .with_context(|| format!("no legal action in state {}", sim.state()))
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn decide_move(&mut self, sim: &mut Simulator) -> Result<Action> {
        self.pick(sim)
    }

    fn decide_removal(&mut self, sim: &mut Simulator) -> Result<Action> {
        self.pick(sim)
    }

    fn decide_removal_or_pass(&mut self, sim: &mut Simulator) -> Result<Action> {
        self.pick(sim)
    }
}

//! Single game driver
//!
//! Runs two players against each other from the empty board, validating
//! every returned action against the legal set. An illegal action or a
//! player error forfeits the game for the side that produced it. A
//! position seen three times is declared drawn.

use std::collections::HashMap;

use log::warn;

use crate::core::{Action, Board, GameState, Side, Simulator};
use crate::players::Player;

const REPETITION_LIMIT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
    /// Forfeited by the named side
    Aborted(Side),
}

#[derive(Debug)]
pub struct FinishedGame {
    pub outcome: GameOutcome,
    pub plies: u32,
    /// Phase, mover and action for every ply in order
    pub log: Vec<(GameState, Side, Action)>,
}

pub fn play_game(light: &mut dyn Player, dark: &mut dyn Player) -> FinishedGame {
    let mut board = Board::new();
    let mut sim = Simulator::new(&mut board);
    let mut log = Vec::new();
    let mut seen: HashMap<u64, u32> = HashMap::new();
    let mut legal = Vec::new();
    let mut offender = None;

    while !sim.is_terminal() {
        let state = sim.state();
        let active = sim.active();
        let player: &mut dyn Player = match active {
            Side::Light => &mut *light,
            Side::Dark => &mut *dark,
        };
        let picked = match state {
            GameState::Move => player.decide_move(&mut sim),
            GameState::RemoveFirst => player.decide_removal(&mut sim),
            GameState::RemoveSecond => player.decide_removal_or_pass(&mut sim),
            GameState::Completed | GameState::Draw | GameState::Aborted => break,
        };
        let action = match picked {
            Ok(action) => action,
            Err(err) => {
                warn!("{active} failed to act in {state}: {err:#}");
                offender = Some(active);
                sim.abort();
                break;
            }
        };
        sim.legal_actions(&mut legal);
        if !legal.contains(&action) {
            warn!("{active} played illegal {action} in {state}");
            offender = Some(active);
            sim.abort();
            break;
        }
        sim.apply(action);
        log.push((state, active, action));

        let count = seen.entry(sim.key()).or_insert(0);
        *count += 1;
        if *count >= REPETITION_LIMIT && !sim.is_terminal() {
            sim.declare_draw();
        }
    }

    let outcome = match (sim.state(), sim.winner()) {
        (GameState::Completed, Some(side)) => GameOutcome::Winner(side),
        (GameState::Draw, _) | (GameState::Completed, None) => GameOutcome::Draw,
        _ => GameOutcome::Aborted(offender.unwrap_or(sim.active())),
    };
    FinishedGame {
        outcome,
        plies: log.len() as u32,
        log,
    }
}

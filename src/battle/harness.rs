//! Parallel battle harness
//!
//! Plays a fixed number of games between two player specs on a rayon
//! pool, alternating colors so each spec plays both sides equally over
//! an even run count. The whole battle carries a wall-clock budget of
//! [`SECS_PER_GAME`] per game. The pool runs on its own thread and the
//! caller waits on a channel with a timeout, so the call returns
//! `DeadlineExceeded` the moment the budget runs out even with a game
//! still in flight; abandoned workers notice the deadline before their
//! next game and wind down. A partial battle is reported as an error,
//! never as a truncated tally.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, ensure, Result};
use log::{debug, info};
use rayon::prelude::*;

use crate::core::Side;
use crate::players::PlayerSpec;

use super::game::play_game;
use super::result::BattleResult;

pub const SECS_PER_GAME: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineExceeded {
    pub limit: Duration,
}

impl std::fmt::Display for DeadlineExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "battle exceeded its {:.0?} budget", self.limit)
    }
}

impl std::error::Error for DeadlineExceeded {}

/// Run `runs` games of `a` against `b` on `threads` workers.
pub fn play(a: &PlayerSpec, b: &PlayerSpec, runs: usize, threads: usize) -> Result<BattleResult> {
    let limit = Duration::from_secs(SECS_PER_GAME * runs as u64);
    play_with_deadline(a, b, runs, threads, limit)
}

pub fn play_with_deadline(
    a: &PlayerSpec,
    b: &PlayerSpec,
    runs: usize,
    threads: usize,
    limit: Duration,
) -> Result<BattleResult> {
    ensure!(runs > 0, "battle needs at least one game");
    ensure!(threads > 0, "battle needs at least one worker");
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;

    info!(
        "battle: {} vs {}, {} games on {} threads, budget {:.0?}",
        a.name(),
        b.name(),
        runs,
        threads,
        limit
    );
    let start = Instant::now();
    let deadline = start + limit;

    let (tx, rx) = mpsc::channel();
    let (a_spec, b_spec) = (a.clone(), b.clone());
    thread::spawn(move || {
        let finished = AtomicUsize::new(0);
        let partials: Result<Vec<BattleResult>> = pool.install(|| {
            (0..runs)
                .into_par_iter()
                .map(|index| {
                    ensure!(Instant::now() <= deadline, DeadlineExceeded { limit });
                    // alternate colors so neither spec monopolizes the first move
                    let a_color = if index % 2 == 0 { Side::Light } else { Side::Dark };
                    let mut a_player = a_spec.create();
                    let mut b_player = b_spec.create();
                    let (light, dark) = match a_color {
                        Side::Light => (&mut a_player, &mut b_player),
                        Side::Dark => (&mut b_player, &mut a_player),
                    };
                    let game = play_game(light.as_mut(), dark.as_mut());

                    let mut partial = BattleResult::empty(a_spec.name(), b_spec.name());
                    partial.record(a_color, &game);
                    let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
                    debug!("game {}/{} done after {} plies", done, runs, game.plies);
                    Ok(partial)
                })
                .collect()
        });
        let _ = tx.send(partials);
    });

    let remaining = deadline.saturating_duration_since(Instant::now());
    let partials = match rx.recv_timeout(remaining) {
        Ok(partials) => partials?,
        Err(mpsc::RecvTimeoutError::Timeout) => return Err(DeadlineExceeded { limit }.into()),
        Err(mpsc::RecvTimeoutError::Disconnected) => bail!("battle runner exited without reporting"),
    };

    let mut result = BattleResult::empty(a.name(), b.name());
    for partial in partials {
        result.absorb(&partial);
    }
    result.elapsed = start.elapsed();
    ensure!(
        result.games as usize == runs,
        "battle tallied {} of {} games",
        result.games,
        runs
    );
    Ok(result)
}

use std::time::Duration;

use colored::Colorize;

use crate::core::{Side, SideArray};

use super::game::{FinishedGame, GameOutcome};

/// Tally of a battle between two named players. Wins are split by the
/// color the winner played, so a first-move advantage shows up in the
/// numbers.
#[derive(Debug)]
pub struct BattleResult {
    pub name_a: String,
    pub name_b: String,
    pub wins_a: SideArray<u32>,
    pub wins_b: SideArray<u32>,
    pub draws: u32,
    pub aborts: u32,
    pub games: u32,
    pub elapsed: Duration,
}

impl BattleResult {
    pub fn empty(name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        Self {
            name_a: name_a.into(),
            name_b: name_b.into(),
            wins_a: SideArray::new(0, 0),
            wins_b: SideArray::new(0, 0),
            draws: 0,
            aborts: 0,
            games: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Record one finished game in which player A played `a_color`.
    pub fn record(&mut self, a_color: Side, game: &FinishedGame) {
        self.games += 1;
        match game.outcome {
            GameOutcome::Winner(side) if side == a_color => self.wins_a[side] += 1,
            GameOutcome::Winner(side) => self.wins_b[side] += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Aborted(_) => self.aborts += 1,
        }
    }

    pub fn total_a(&self) -> u32 {
        self.wins_a[Side::Light] + self.wins_a[Side::Dark]
    }

    pub fn total_b(&self) -> u32 {
        self.wins_b[Side::Light] + self.wins_b[Side::Dark]
    }

    pub fn absorb(&mut self, other: &BattleResult) {
        for side in Side::all() {
            self.wins_a[side] += other.wins_a[side];
            self.wins_b[side] += other.wins_b[side];
        }
        self.draws += other.draws;
        self.aborts += other.aborts;
        self.games += other.games;
        self.elapsed += other.elapsed;
    }

    pub fn print(&self) {
        println!(
            "{} vs {}: {} games in {:.2?}",
            self.name_a.bold(),
            self.name_b.bold(),
            self.games,
            self.elapsed
        );
        println!(
            "  {} {} ({} as {}, {} as {})",
            self.name_a.bold(),
            self.total_a().to_string().bright_green(),
            self.wins_a[Side::Light],
            Side::Light,
            self.wins_a[Side::Dark],
            Side::Dark,
        );
        println!(
            "  {} {} ({} as {}, {} as {})",
            self.name_b.bold(),
            self.total_b().to_string().bright_green(),
            self.wins_b[Side::Light],
            Side::Light,
            self.wins_b[Side::Dark],
            Side::Dark,
        );
        println!("  draws {}, aborts {}", self.draws, self.aborts);
    }
}

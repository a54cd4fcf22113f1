use colored::Colorize;
use std::fmt;

use super::board::Board;
use super::loc::{Loc, LAYERS};
use super::side::Side;

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Light => write!(f, "{}", "Light".bright_yellow()),
            Side::Dark => write!(f, "{}", "Dark".bright_blue()),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "reserves: {} | {}",
            self.reserve(Side::Light).to_string().bright_yellow(),
            self.reserve(Side::Dark).to_string().bright_blue()
        )?;
        for z in 0..LAYERS {
            let len = 4 - z;
            writeln!(f, "layer {}:", z)?;
            for y in 0..len {
                write!(f, "{}", " ".repeat(z + 1))?;
                for x in 0..len {
                    match self.get(Loc::new(x, y, z)) {
                        Some(Side::Light) => write!(f, " {}", "o".bright_yellow())?,
                        Some(Side::Dark) => write!(f, " {}", "o".bright_blue())?,
                        None => write!(f, " ·")?,
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

//! Game actions
//!
//! Actions are transient values: generated, applied to the simulator,
//! and discarded (or used once more as the key for their own undo).
//! Spheres are identified by the location they occupy, since spheres of
//! one color are interchangeable.

use super::loc::Loc;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place a reserve sphere on a usable location
    Place { to: Loc },
    /// Move an on-board sphere to a higher, fully supported location
    Promote { from: Loc, to: Loc },
    /// Mandatory removal after completing a square
    RemoveFirst { loc: Loc },
    /// Optional second removal
    RemoveSecond { loc: Loc },
    /// Decline the second removal
    Pass,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place { to } => write!(f, "place {}", to),
            Action::Promote { from, to } => write!(f, "promote {} {}", from, to),
            Action::RemoveFirst { loc } => write!(f, "remove {}", loc),
            Action::RemoveSecond { loc } => write!(f, "remove2 {}", loc),
            Action::Pass => write!(f, "pass"),
        }
    }
}

//! Transposition table and board symmetries
//!
//! Keys are the single packed integer produced by `Simulator::key`.
//! Entries are depth-tagged and carry an alpha-beta bound type so they
//! can be reused safely inside a narrower window. The table is cleared
//! at every top-level decision.
//!
//! The pyramid has the symmetries of the square: probing the mirrored
//! and rotated variants of a position lets the search skip subtrees it
//! has effectively seen already. Each symmetry is a precomputed
//! permutation of location indices acting on the 60-bit encoding.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::core::{Loc, NUM_LOCS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub depth: u8,
    pub value: i32,
    pub bound: Bound,
}

#[derive(Debug, Default)]
pub struct TranspositionTable {
    map: HashMap<u64, Entry>,
}

const BOARD_MASK: u64 = (1 << 60) - 1;

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, key: u64) -> Option<&Entry> {
        self.map.get(&key)
    }

    /// Probe the key itself and, failing that, its five symmetric
    /// variants (mirror over either axis, rotation by 90/180/270).
    pub fn get_symmetric(&self, key: u64) -> Option<&Entry> {
        if let Some(entry) = self.map.get(&key) {
            return Some(entry);
        }
        let board = key & BOARD_MASK;
        let tags = key & !BOARD_MASK;
        SYMMETRIES
            .iter()
            .find_map(|perm| self.map.get(&(transform(board, perm) | tags)))
    }

    pub fn insert(&mut self, key: u64, entry: Entry) {
        self.map.insert(key, entry);
    }
}

/// Apply a location permutation to a 60-bit board encoding
pub fn transform(board: u64, perm: &[usize; NUM_LOCS]) -> u64 {
    let mut out = 0;
    for (i, &dest) in perm.iter().enumerate() {
        let cell = (board >> (2 * i)) & 0b11;
        out |= cell << (2 * dest);
    }
    out
}

fn permutation(map: impl Fn(usize, usize, usize) -> (usize, usize)) -> [usize; NUM_LOCS] {
    let mut perm = [0; NUM_LOCS];
    for loc in Loc::all() {
        let (x, y, z) = (loc.x(), loc.y(), loc.z());
        let (nx, ny) = map(x, y, 4 - z);
        perm[loc.index()] = Loc::new(nx, ny, z).index();
    }
    perm
}

lazy_static! {
    /// mirror x, mirror y, rot90, rot180, rot270
    pub static ref SYMMETRIES: [[usize; NUM_LOCS]; 5] = [
        permutation(|x, y, s| (s - 1 - x, y)),
        permutation(|x, y, s| (x, s - 1 - y)),
        permutation(|x, y, s| (y, s - 1 - x)),
        permutation(|x, y, s| (s - 1 - x, s - 1 - y)),
        permutation(|x, y, s| (s - 1 - y, x)),
    ];
}

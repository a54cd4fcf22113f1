//! Board model: cells, reserve pools and square bookkeeping
//!
//! All queries are O(1) or O(4). The 2-bit-per-location encoding is
//! maintained incrementally so `encode` is a field read; it is the basis
//! of transposition keys and symmetry detection.

use super::loc::{Loc, NUM_LOCS, NUM_SQUARES};
use super::side::{Side, SideArray};

pub const SPHERES_PER_SIDE: u8 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Side>; NUM_LOCS],
    reserves: SideArray<u8>,
    on_board: SideArray<u8>,
    square_counts: [SideArray<u8>; NUM_SQUARES],
    bits: u64,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_LOCS],
            reserves: SideArray::new(SPHERES_PER_SIDE, SPHERES_PER_SIDE),
            on_board: SideArray::new(0, 0),
            square_counts: [SideArray::new(0, 0); NUM_SQUARES],
            bits: 0,
        }
    }

    pub fn get(&self, loc: Loc) -> Option<Side> {
        self.cells[loc.index()]
    }

    pub fn is_empty(&self, loc: Loc) -> bool {
        self.cells[loc.index()].is_none()
    }

    pub fn occupy(&mut self, loc: Loc, side: Side) {
        debug_assert!(self.is_empty(loc));
        self.cells[loc.index()] = Some(side);
        self.on_board[side] += 1;
        for &sq in loc.squares() {
            self.square_counts[sq][side] += 1;
        }
        self.bits |= cell_code(side) << (2 * loc.index());
    }

    pub fn vacate(&mut self, loc: Loc) -> Side {
        let side = self.cells[loc.index()].take().expect("vacating empty location");
        self.on_board[side] -= 1;
        for &sq in loc.squares() {
            self.square_counts[sq][side] -= 1;
        }
        self.bits &= !(0b11 << (2 * loc.index()));
        side
    }

    pub fn reserve_take(&mut self, side: Side) {
        debug_assert!(self.reserves[side] > 0);
        self.reserves[side] -= 1;
    }

    pub fn reserve_return(&mut self, side: Side) {
        self.reserves[side] += 1;
    }

    pub fn reserve(&self, side: Side) -> u8 {
        self.reserves[side]
    }

    pub fn on_board(&self, side: Side) -> u8 {
        self.on_board[side]
    }

    /// Empty and either on the ground or resting on 4 occupied supports
    pub fn is_usable(&self, loc: Loc) -> bool {
        self.is_empty(loc)
            && (loc.is_ground() || loc.below().iter().all(|&s| !self.is_empty(s)))
    }

    /// Occupied with nothing resting on top
    pub fn is_removable(&self, loc: Loc) -> bool {
        !self.is_empty(loc) && loc.above().iter().all(|&u| self.is_empty(u))
    }

    /// Whether the sphere at `from` could legally move up to `to`.
    /// Ownership and freeness of `from` are the caller's concern.
    pub fn can_promote(&self, from: Loc, to: Loc) -> bool {
        to.z() > from.z() && self.is_usable(to) && !to.below().contains(&from)
    }

    /// Occupancy of square `sq` by `side`, 0..=4
    pub fn square_count(&self, sq: usize, side: Side) -> u8 {
        self.square_counts[sq][side]
    }

    /// Whether `loc` currently sits in a square fully owned by `side`
    pub fn in_complete_square(&self, loc: Loc, side: Side) -> bool {
        loc.squares()
            .iter()
            .any(|&sq| self.square_counts[sq][side] == 4)
    }

    /// 2 bits per location: 0 empty, 1 light, 2 dark. Low 60 bits.
    pub fn encode(&self) -> u64 {
        self.bits
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_code(side: Side) -> u64 {
    match side {
        Side::Light => 1,
        Side::Dark => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_board() {
        let board = Board::new();
        assert_eq!(board.encode(), 0);
        for side in Side::all() {
            assert_eq!(board.reserve(side), SPHERES_PER_SIDE);
            assert_eq!(board.on_board(side), 0);
        }
        for loc in Loc::all() {
            assert_eq!(board.is_usable(loc), loc.is_ground());
            assert!(!board.is_removable(loc));
        }
    }

    #[test]
    fn test_occupy_vacate_roundtrip() {
        let mut board = Board::new();
        let loc = Loc::new(1, 2, 0);
        board.occupy(loc, Side::Dark);
        assert_eq!(board.get(loc), Some(Side::Dark));
        assert_eq!(board.on_board(Side::Dark), 1);
        assert_ne!(board.encode(), 0);
        assert_eq!(board.vacate(loc), Side::Dark);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_usability_above_supports() {
        let mut board = Board::new();
        let upper = Loc::new(0, 0, 1);
        for (i, &support) in upper.below().iter().enumerate() {
            assert!(!board.is_usable(upper));
            board.occupy(support, if i % 2 == 0 { Side::Light } else { Side::Dark });
        }
        assert!(board.is_usable(upper));
        // the supports are now pinned
        for &support in upper.below() {
            assert!(board.is_removable(support));
        }
        board.occupy(upper, Side::Light);
        for &support in upper.below() {
            assert!(!board.is_removable(support));
        }
    }

    #[test]
    fn test_square_counts() {
        let mut board = Board::new();
        let sq = Loc::new(0, 0, 0).squares()[0];
        board.occupy(Loc::new(0, 0, 0), Side::Light);
        board.occupy(Loc::new(1, 0, 0), Side::Light);
        board.occupy(Loc::new(0, 1, 0), Side::Dark);
        assert_eq!(board.square_count(sq, Side::Light), 2);
        assert_eq!(board.square_count(sq, Side::Dark), 1);
        board.occupy(Loc::new(1, 1, 0), Side::Light);
        assert!(!board.in_complete_square(Loc::new(1, 1, 0), Side::Light));
        let dark = board.vacate(Loc::new(0, 1, 0));
        assert_eq!(dark, Side::Dark);
        board.occupy(Loc::new(0, 1, 0), Side::Light);
        assert!(board.in_complete_square(Loc::new(1, 1, 0), Side::Light));
    }

    #[test]
    fn test_encoding_distinguishes_sides() {
        let mut light = Board::new();
        let mut dark = Board::new();
        light.occupy(Loc::new(2, 2, 0), Side::Light);
        dark.occupy(Loc::new(2, 2, 0), Side::Dark);
        assert_ne!(light.encode(), dark.encode());
    }
}

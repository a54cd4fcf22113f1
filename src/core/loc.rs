//! Pyramid locations and square topology
//!
//! The board is a pyramid of four square layers of side 4, 3, 2 and 1,
//! 30 placement sites in total. Every site knows the up-to-4 sites
//! directly below it (its supports), the sites directly above it, and
//! the 2x2 squares it belongs to. All of this is static and precomputed
//! once.

use lazy_static::lazy_static;
use std::fmt::Display;

pub const NUM_LOCS: usize = 30;
pub const NUM_SQUARES: usize = 14;
pub const LAYERS: usize = 4;

const LAYER_OFFSET: [usize; LAYERS] = [0, 16, 25, 29];

const fn layer_len(z: usize) -> usize {
    4 - z
}

/// A placement site in the pyramid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc(u8);

impl Loc {
    /// The single top location; placing here ends the game
    pub const APEX: Loc = Loc(29);

    pub fn new(x: usize, y: usize, z: usize) -> Self {
        debug_assert!(z < LAYERS && x < layer_len(z) && y < layer_len(z));
        Loc((LAYER_OFFSET[z] + y * layer_len(z) + x) as u8)
    }

    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < NUM_LOCS);
        Loc(index as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = Loc> {
        (0..NUM_LOCS as u8).map(Loc)
    }

    pub fn x(self) -> usize {
        TOPOLOGY.coords[self.index()].0
    }

    pub fn y(self) -> usize {
        TOPOLOGY.coords[self.index()].1
    }

    /// Layer, 0 = ground
    pub fn z(self) -> usize {
        TOPOLOGY.coords[self.index()].2
    }

    pub fn is_ground(self) -> bool {
        self.index() < LAYER_OFFSET[1]
    }

    /// The locations directly beneath this one (empty on the ground layer)
    pub fn below(self) -> &'static [Loc] {
        &TOPOLOGY.below[self.index()]
    }

    /// The locations resting directly on this one
    pub fn above(self) -> &'static [Loc] {
        &TOPOLOGY.above[self.index()]
    }

    /// Indices into [`squares`] of the squares this location belongs to
    pub fn squares(self) -> &'static [usize] {
        &TOPOLOGY.memberships[self.index()]
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}:{}", (self.x() as u8 + b'a') as char, self.y(), self.z())
    }
}

/// All 14 squares, each a fixed group of 4 locations on one layer
pub fn squares() -> &'static [[Loc; 4]] {
    &TOPOLOGY.squares
}

struct Topology {
    coords: Vec<(usize, usize, usize)>,
    below: Vec<Vec<Loc>>,
    above: Vec<Vec<Loc>>,
    squares: Vec<[Loc; 4]>,
    memberships: Vec<Vec<usize>>,
}

impl Topology {
    fn build() -> Self {
        let mut coords = Vec::with_capacity(NUM_LOCS);
        for z in 0..LAYERS {
            for y in 0..layer_len(z) {
                for x in 0..layer_len(z) {
                    coords.push((x, y, z));
                }
            }
        }

        let mut below = vec![Vec::new(); NUM_LOCS];
        let mut above = vec![Vec::new(); NUM_LOCS];
        for (i, &(x, y, z)) in coords.iter().enumerate() {
            if z == 0 {
                continue;
            }
            for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                let support = Loc::new(x + dx, y + dy, z - 1);
                below[i].push(support);
                above[support.index()].push(Loc::from_index(i));
            }
        }

        let mut squares = Vec::with_capacity(NUM_SQUARES);
        let mut memberships = vec![Vec::new(); NUM_LOCS];
        for z in 0..LAYERS - 1 {
            for y in 0..layer_len(z) - 1 {
                for x in 0..layer_len(z) - 1 {
                    let members = [
                        Loc::new(x, y, z),
                        Loc::new(x + 1, y, z),
                        Loc::new(x, y + 1, z),
                        Loc::new(x + 1, y + 1, z),
                    ];
                    for m in members {
                        memberships[m.index()].push(squares.len());
                    }
                    squares.push(members);
                }
            }
        }

        Self {
            coords,
            below,
            above,
            squares,
            memberships,
        }
    }
}

lazy_static! {
    static ref TOPOLOGY: Topology = Topology::build();
}

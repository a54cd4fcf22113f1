use std::ops::{Index, IndexMut, Not};

/// Side/player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    pub fn all() -> [Side; 2] {
        [Side::Light, Side::Dark]
    }

    pub fn sign(&self) -> i32 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::Light => 0,
            Side::Dark => 1,
        }
    }

    pub fn opponent(self) -> Self {
        !self
    }
}

impl Not for Side {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }
}

/// Array indexed by game side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideArray<T> {
    pub values: [T; 2],
}

impl<T> SideArray<T> {
    pub fn new(light: T, dark: T) -> Self {
        Self {
            values: [light, dark],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.values.iter_mut()
    }
}

impl<T> Index<Side> for SideArray<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.values[side.index()]
    }
}

impl<T> IndexMut<Side> for SideArray<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.values[side.index()]
    }
}

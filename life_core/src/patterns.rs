// patterns.rs - Preset Game of Life shapes

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Coord;

/// A named shape, stored as (dx, dy) offsets from the cell it is anchored on.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

impl Pattern {
    /// Absolute positions of the pattern when anchored at `anchor`, paired
    /// with whether they fit on a `size` x `size` grid.
    pub fn placed(&self, anchor: Coord, size: usize) -> impl Iterator<Item = Result<Coord, (i64, i64)>> + '_ {
        let (ax, ay) = (anchor.x as i64, anchor.y as i64);
        let n = size as i64;
        self.cells.iter().map(move |&(dx, dy)| {
            let (x, y) = (ax + dx, ay + dy);
            if (0..n).contains(&x) && (0..n).contains(&y) {
                Ok(Coord::new(x as usize, y as usize))
            } else {
                Err((x, y))
            }
        })
    }
}

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 0), (1, 0), (2, 0), (1, 1), (2, 1), (3, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (-2, -2), (-1, -2), (-2, -1), (-1, -1)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 0), (1, 0), (1, -1), (1, -2), (-1, -1)],
};

pub const LIGHTWEIGHT_SPACESHIP: Pattern = Pattern {
    name: "LWSS",
    cells: &[
        (0, 0), (1, 0), (2, 0), (3, 0),
        (3, -1), (3, -2),
        (2, -3), (-1, -3),
        (-1, -1),
    ],
};

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    cells: &[
        // Top half
        (-4, -6), (-3, -6), (-2, -6), (2, -6), (3, -6), (4, -6),
        (-6, -4), (-1, -4), (1, -4), (6, -4),
        (-6, -3), (-1, -3), (1, -3), (6, -3),
        (-6, -2), (-1, -2), (1, -2), (6, -2),
        (-4, -1), (-3, -1), (-2, -1), (2, -1), (3, -1), (4, -1),
        // Bottom half (mirrored)
        (-4, 1), (-3, 1), (-2, 1), (2, 1), (3, 1), (4, 1),
        (-6, 2), (-1, 2), (1, 2), (6, 2),
        (-6, 3), (-1, 3), (1, 3), (6, 3),
        (-6, 4), (-1, 4), (1, 4), (6, 4),
        (-4, 6), (-3, 6), (-2, 6), (2, 6), (3, 6), (4, 6),
    ],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, -1), (1, -1), (-1, 0), (0, 0), (0, 1)],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        // Left block
        (-18, 0), (-18, 1), (-17, 0), (-17, 1),
        // Left ship
        (-8, 0), (-8, 1), (-8, 2), (-7, -1), (-7, 3), (-6, -2), (-6, 4),
        (-5, -2), (-5, 4), (-4, 1), (-3, -1), (-3, 3), (-2, 0), (-2, 1),
        (-2, 2), (-1, 1),
        // Right ship
        (2, -2), (2, -1), (2, 0), (3, -2), (3, -1), (3, 0), (4, -3), (4, 1),
        (6, -4), (6, -3), (6, 1), (6, 2),
        // Right block
        (16, -2), (16, -1), (17, -2), (17, -1),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    BLINKER,
    TOAD,
    BEACON,
    GLIDER,
    LIGHTWEIGHT_SPACESHIP,
    BLOCK,
    PULSAR,
    R_PENTOMINO,
    GOSPER_GLIDER_GUN,
];

/// Looks a preset up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

/// A deterministic soup: roughly half of all cells of a `size` x `size` grid.
pub fn random_soup(size: usize, seed_value: u64) -> Vec<Coord> {
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    let mut alive = Vec::new();
    for y in 0..size {
        for x in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            // Low bits of an LCG cycle with short periods, so read the top one.
            if seed >> 63 == 1 {
                alive.push(Coord::new(x, y));
            }
        }
    }
    alive
}

// grid.rs - Cell storage for Conway's Game of Life

use std::fmt::{self, Display, Write};
use std::str::FromStr;

use crate::error::{LifeError, ParseGridError};

/// Largest side length a grid may have (16M cells).
pub const MAX_GRID_SIZE: usize = 4096;

/// Moore neighborhood, as (dx, dy).
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

/// Life/death status of every cell of an N x N bounded grid.
///
/// Storage is a flat row-major vector (`y * N + x`) that always holds exactly
/// `N * N` entries; nothing ever grows or shrinks it after construction.
/// Everything outside the grid reads as dead, there is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    size: usize,
    cells: Vec<CellState>,
}

impl GridState {
    /// An all-dead grid of `size` x `size` cells.
    pub fn new(size: usize) -> Result<Self, LifeError> {
        let len = size
            .checked_mul(size)
            .filter(|_| size <= MAX_GRID_SIZE)
            .ok_or(LifeError::GridTooLarge { size, max: MAX_GRID_SIZE })?;
        Ok(Self {
            size,
            cells: vec![CellState::Dead; len],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// True when the signed position lies inside the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let n = self.size as i64;
        (0..n).contains(&x) && (0..n).contains(&y)
    }

    fn index(&self, coord: Coord) -> Result<usize, LifeError> {
        if coord.x < self.size && coord.y < self.size {
            Ok(coord.y * self.size + coord.x)
        } else {
            Err(LifeError::OutOfBounds {
                x: coord.x as i64,
                y: coord.y as i64,
                size: self.size,
            })
        }
    }

    pub fn state(&self, coord: Coord) -> Result<CellState, LifeError> {
        Ok(self.cells[self.index(coord)?])
    }

    pub fn is_alive(&self, coord: Coord) -> Result<bool, LifeError> {
        Ok(self.state(coord)?.is_alive())
    }

    /// Dead -> alive. Already alive is a no-op.
    pub fn set_alive(&mut self, coord: Coord) -> Result<(), LifeError> {
        let i = self.index(coord)?;
        self.cells[i] = CellState::Alive;
        Ok(())
    }

    /// Alive -> dead. Already dead is a no-op.
    pub fn set_dead(&mut self, coord: Coord) -> Result<(), LifeError> {
        let i = self.index(coord)?;
        self.cells[i] = CellState::Dead;
        Ok(())
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, coord: Coord) -> Result<CellState, LifeError> {
        let next = match self.state(coord)? {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        };
        let i = self.index(coord)?;
        self.cells[i] = next;
        Ok(next)
    }

    /// Number of live cells among the eight neighbors of `coord`, in `0..=8`.
    pub fn count_live_neighbors(&self, coord: Coord) -> Result<u8, LifeError> {
        self.index(coord)?;
        Ok(self.live_neighbors(coord))
    }

    // Caller guarantees `coord` is in bounds.
    pub(crate) fn live_neighbors(&self, coord: Coord) -> u8 {
        let (x, y) = (coord.x as i64, coord.y as i64);
        let mut count = 0;
        for &(dx, dy) in &NEIGHBOR_OFFSETS {
            let (nx, ny) = (x + dx, y + dy);
            if self.contains(nx, ny) && self.cells[ny as usize * self.size + nx as usize].is_alive() {
                count += 1;
            }
        }
        count
    }

    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Every cell with its state, row by row from the top-left corner.
    /// Call again to restart.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (Coord::new(i % n, i / n), state))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

impl Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if row_index > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(if cell.is_alive() { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}

/// Reads a square picture, one row per line, `o` alive and `.` dead.
/// Surrounding whitespace and blank lines are ignored so pictures can be indented.
impl FromStr for GridState {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let size = rows.len();
        if size == 0 {
            return Err(ParseGridError::Empty);
        }

        let mut grid = GridState::new(size)?;
        for (y, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != size {
                return Err(ParseGridError::Ragged { row: y, expected: size, found });
            }
            for (x, c) in line.chars().enumerate() {
                match c {
                    '.' => (),
                    'o' => grid.cells[y * size + x] = CellState::Alive,
                    _ => return Err(ParseGridError::UnexpectedChar(c)),
                }
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_coords(n: usize) -> Vec<Coord> {
        (0..n).flat_map(|y| (0..n).map(move |x| Coord::new(x, y))).collect()
    }

    #[test]
    fn new_grid_is_total_and_dead() {
        let grid = GridState::new(7).unwrap();
        let seen: Vec<Coord> = grid.cells().map(|(c, _)| c).collect();
        assert_eq!(seen, all_coords(7));
        assert!(grid.cells().all(|(_, s)| s == CellState::Dead));
    }

    #[test]
    fn set_alive_and_dead_are_idempotent() {
        let mut grid = GridState::new(5).unwrap();
        let c = Coord::new(2, 3);

        grid.set_alive(c).unwrap();
        let once = grid.clone();
        grid.set_alive(c).unwrap();
        assert_eq!(grid, once);
        assert!(grid.is_alive(c).unwrap());

        grid.set_dead(c).unwrap();
        let once = grid.clone();
        grid.set_dead(c).unwrap();
        assert_eq!(grid, once);
        assert!(!grid.is_alive(c).unwrap());
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut grid = GridState::new(4).unwrap();
        let err = LifeError::OutOfBounds { x: 4, y: 0, size: 4 };
        assert_eq!(grid.is_alive(Coord::new(4, 0)), Err(err));
        assert_eq!(grid.set_alive(Coord::new(4, 0)), Err(err));
        assert_eq!(grid.set_dead(Coord::new(4, 0)), Err(err));
        assert!(grid.count_live_neighbors(Coord::new(0, 9)).is_err());
        assert!(grid.toggle(Coord::new(9, 9)).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn oversized_grid_is_refused() {
        let too_big = LifeError::GridTooLarge { size: MAX_GRID_SIZE + 1, max: MAX_GRID_SIZE };
        assert_eq!(GridState::new(MAX_GRID_SIZE + 1), Err(too_big));
        assert_eq!(
            GridState::new(usize::MAX),
            Err(LifeError::GridTooLarge { size: usize::MAX, max: MAX_GRID_SIZE })
        );

        let grid = GridState::new(MAX_GRID_SIZE).unwrap();
        assert_eq!(grid.cells().count(), MAX_GRID_SIZE * MAX_GRID_SIZE);
        assert_eq!(grid.is_alive(Coord::new(MAX_GRID_SIZE - 1, MAX_GRID_SIZE - 1)), Ok(false));
    }

    #[test]
    fn toggle_flips() {
        let mut grid = GridState::new(3).unwrap();
        let c = Coord::new(1, 1);
        assert_eq!(grid.toggle(c), Ok(CellState::Alive));
        assert_eq!(grid.toggle(c), Ok(CellState::Dead));
    }

    #[test]
    fn full_neighborhood_counts_eight_without_self() {
        let mut grid: GridState = "
            ooo
            ooo
            ooo
        "
        .parse()
        .unwrap();
        assert_eq!(grid.count_live_neighbors(Coord::new(1, 1)), Ok(8));
        grid.set_dead(Coord::new(1, 1)).unwrap();
        assert_eq!(grid.count_live_neighbors(Coord::new(1, 1)), Ok(8));
    }

    #[test]
    fn neighbor_counts_stay_in_range() {
        let grid: GridState = "
            o.oo
            .oo.
            oo.o
            o..o
        "
        .parse()
        .unwrap();
        for c in all_coords(4) {
            let n = grid.count_live_neighbors(c).unwrap();
            assert!(n <= 8);
        }
    }

    #[test]
    fn edges_do_not_wrap() {
        let grid: GridState = "
            ...o
            ....
            ....
            o..o
        "
        .parse()
        .unwrap();
        // On a torus (0,0) would see all three.
        assert_eq!(grid.count_live_neighbors(Coord::new(0, 0)), Ok(0));
        assert_eq!(grid.count_live_neighbors(Coord::new(3, 2)), Ok(1));
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid: GridState = "
            oo
            .o
        "
        .parse()
        .unwrap();
        assert_eq!(grid.population(), 3);
        grid.clear();
        assert!(grid.cells().all(|(_, s)| !s.is_alive()));
        assert_eq!(grid.cells().count(), 4);
    }

    #[test]
    fn display_matches_parse() {
        let picture = "o..\n.o.\n..o";
        let grid: GridState = picture.parse().unwrap();
        assert_eq!(grid.to_string(), picture);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<GridState>(), Err(ParseGridError::Empty));
        assert_eq!(
            "oo\no".parse::<GridState>(),
            Err(ParseGridError::Ragged { row: 1, expected: 2, found: 1 })
        );
        assert_eq!("ox\n..".parse::<GridState>(), Err(ParseGridError::UnexpectedChar('x')));
    }
}

use rand::Rng;

use super::{Cell, GridError};

/// Square cell matrix backing the simulation.
///
/// Cells are stored row-major in a flat vector, so the matrix always holds
/// exactly `size * size` entries. Coordinates outside `[0, size)` are never
/// stored; reads of such coordinates come back dead because the grid does
/// not wrap at its edges.
#[derive(Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid. Fails on a zero side length before any
    /// allocation happens.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize);
        }
        Ok(Self::empty(size))
    }

    /// Create a grid where each cell is independently alive with
    /// probability 0.5.
    pub fn random(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize);
        }
        Ok(Self::randomized(size))
    }

    /// Infallible all-dead constructor for sizes that were already
    /// validated (e.g. taken from an existing grid).
    pub(crate) fn empty(size: usize) -> Self {
        debug_assert!(size > 0);
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Rebuild a grid from an already computed cell vector. The engine
    /// uses this after a full-grid sweep; `cells` must hold `size * size`
    /// entries.
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Infallible randomized constructor, same caller contract as `empty`.
    pub(crate) fn randomized(size: usize) -> Self {
        let mut grid = Self::empty(size);
        let mut rng = rand::rng();
        for cell in &mut grid.cells {
            if rng.random_bool(0.5) {
                *cell = Cell::Alive;
            }
        }
        grid
    }

    /// Side length of the square matrix.
    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        let side = self.size as i32;
        (0..side).contains(&x) && (0..side).contains(&y)
    }

    /// Read a cell. Off-grid coordinates read as dead, which lets neighbor
    /// counting at the edges skip any special casing.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if self.contains(x, y) {
            self.cells[self.index(x as usize, y as usize)]
        } else {
            Cell::Dead
        }
    }

    /// Write a cell, silently ignoring off-grid targets. Pattern stamping
    /// leans on this: a pattern that overhangs a small grid is truncated
    /// rather than rejected.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.contains(x, y) {
            let idx = self.index(x as usize, y as usize);
            self.cells[idx] = cell;
        }
    }

    /// Flip the cell at (x, y) between dead and alive. Unlike `set`, the
    /// coordinates must be in range; callers are expected to clamp first.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        if x >= self.size || y >= self.size {
            return Err(GridError::OutOfBounds { x, y, size: self.size });
        }
        let idx = self.index(x, y);
        self.cells[idx] = self.cells[idx].toggled();
        Ok(())
    }

    /// Visit every cell with its coordinates, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.size)
            .flat_map(move |y| (0..self.size).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.index(x, y)]))
    }

    /// Number of alive cells on the whole grid.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

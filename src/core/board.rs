//! Board module - the square tile grid
//!
//! The board is an N×N grid of u32 values stored row-major in a flat vector.
//! 0 means empty; every other value is a power of two ≥ 2. The engine never
//! edits a board it was given; mutation happens only on freshly built boards
//! (and inside the session when placing a spawned tile).

use crate::types::BOARD_SIZE;

/// The game board - a square grid using flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Create a new empty board with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Get the value at (row, col). Returns `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the value at (row, col). Returns false when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u32] {
        let start = row * self.size;
        &mut self.cells[start..start + self.size]
    }

    /// The whole grid as a flat row-major slice.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Flat indices of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Largest tile on the board (0 when the board is empty).
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// True if any cell holds `value` or more.
    pub fn has_tile(&self, value: u32) -> bool {
        self.cells.iter().any(|&v| v >= value)
    }

    /// A new board with rows and columns swapped.
    pub fn transposed(&self) -> Board {
        let mut out = Board::new(self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                out.cells[col * self.size + row] = self.cells[row * self.size + col];
            }
        }
        out
    }

    /// A new board with every row reversed.
    pub fn mirrored(&self) -> Board {
        let mut out = self.clone();
        for row in 0..self.size {
            out.row_mut(row).reverse();
        }
        out
    }

    /// Build a board from nested rows (panics on non-square input).
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|row| row.len() == size));

        let mut board = Board::new(size);
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                board.set(r, c, value);
            }
        }
        board
    }

    /// Convert to nested rows for assertions/display.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.size).map(|r| self.row(r).to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

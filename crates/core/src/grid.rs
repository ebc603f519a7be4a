//! Grid module - settled-cell occupancy
//!
//! The grid stores only whether a cell is occupied; no per-cell piece kind is kept.
//! Uses a flat row-major vector so dimensions can be chosen at construction.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height (top to bottom)

use crate::pieces::CellPos;

/// Occupancy grid of settled cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// Both dimensions must fit in a signed cell coordinate.
    pub fn new(width: u8, height: u8) -> Self {
        debug_assert!(width <= i8::MAX as u8 && height <= i8::MAX as u8);
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Occupancy at (x, y), or None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set occupancy at (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(false))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || y < 0 || x >= self.width as i8 || y >= self.height as i8
    }

    /// True if every cell is in bounds and empty
    pub fn fits(&self, cells: &[CellPos]) -> bool {
        cells.iter().all(|&(x, y)| self.is_valid(x, y))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let width = self.width as usize;
        let start = y * width;
        self.cells[start..start + width].iter().all(|&cell| cell)
    }

    /// Remove every full row at once, dropping the rows above into place.
    ///
    /// Empty rows are inserted at the top so the height never changes.
    /// Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        // Scan from bottom to top, compacting kept rows downwards
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = false;
        }

        cleared
    }

    /// Mark all cells occupied
    /// Returns false (and writes nothing) if any cell is out of bounds or already occupied
    pub fn lock_cells(&mut self, cells: &[CellPos]) -> bool {
        if !self.fits(cells) {
            return false;
        }
        for &(x, y) in cells {
            self.set(x, y, true);
        }
        true
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Build a grid from text rows, `#` marking an occupied cell.
    ///
    /// Rows shorter than the widest row are padded with empty cells.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        debug_assert!(
            width <= i8::MAX as usize && rows.len() <= i8::MAX as usize,
            "grid of {}x{} cells is too large",
            width,
            rows.len()
        );
        let mut grid = Self::new(width as u8, rows.len() as u8);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid.set(x as i8, y as i8, ch == '#');
            }
        }
        grid
    }
}

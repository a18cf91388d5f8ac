//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of
//! the piece that was locked there (the renderer colors cells by kind).
//! Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Test whether `shape` placed with its top-left cell at (x, y) hits a
    /// wall, the floor, or a filled cell.
    ///
    /// Cells above the top edge (negative rows) never collide: pieces spawn
    /// flush with row 0 and only move sideways or down.
    pub fn is_collision(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.minos().iter().any(|&(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return true;
            }
            py >= 0 && self.is_occupied(px, py)
        })
    }

    /// Write `kind` into every cell covered by `shape` at (x, y)
    ///
    /// The caller must have checked [`Board::is_collision`] first.
    ///
    /// # Panics
    ///
    /// Panics if any covered cell lies outside the board.
    pub fn place(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for (dx, dy) in shape.minos() {
            let (px, py) = (x + dx, y + dy);
            let Some(idx) = Self::index(px, py) else {
                panic!("placing {kind:?} covers ({px}, {py}), outside the board");
            };
            debug_assert!(
                self.cells[idx].is_none(),
                "placing {kind:?} over filled cell ({px}, {py})"
            );
            self.cells[idx] = Some(kind);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove all full rows and return how many were removed
    ///
    /// Rows are scanned bottom to top with a read and a write cursor: kept
    /// rows are copied down over the removed ones and the vacated rows at the
    /// top are emptied, so relative order of kept rows never changes.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Encode the board as a u8 grid (0 = empty, kind index + 1 = filled)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, row) in out.iter_mut().zip(self.rows()) {
            for (d, cell) in dst.iter_mut().zip(row) {
                *d = cell.map_or(0, |kind| kind.index() as u8 + 1);
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::get_shape;

    fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(kind));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_collision_ignores_rows_above_top() {
        let mut board = Board::new();
        fill_row(&mut board, 0, PieceKind::I);
        // Vertical I with three cells above the board and one on row 0.
        let vertical_i = get_shape(PieceKind::I, 1);
        assert!(board.is_collision(&vertical_i, 3, -3));
        // Entirely above the board never collides, even over a filled column.
        assert!(!board.is_collision(&vertical_i, 3, -4));
        // But the side walls still apply above the board.
        assert!(board.is_collision(&vertical_i, -1, -4));
        assert!(board.is_collision(&vertical_i, 10, -4));
    }

    #[test]
    fn test_place_writes_kind() {
        let mut board = Board::new();
        board.place(&get_shape(PieceKind::S, 0), 0, 18, PieceKind::S);
        assert_eq!(board.get(1, 18), Some(Some(PieceKind::S)));
        assert_eq!(board.get(2, 18), Some(Some(PieceKind::S)));
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::S)));
        assert_eq!(board.get(1, 19), Some(Some(PieceKind::S)));
        assert_eq!(board.get(0, 18), Some(None));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 4);
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_place_outside_board_panics() {
        let mut board = Board::new();
        board.place(&get_shape(PieceKind::O, 0), 9, 0, PieceKind::O);
    }

    #[test]
    fn test_clear_full_rows_shifts_rows_down() {
        let mut board = Board::new();
        board.set(0, 17, Some(PieceKind::T));
        fill_row(&mut board, 18, PieceKind::I);
        board.set(5, 19, Some(PieceKind::Z));

        assert_eq!(board.clear_full_rows(), 1);
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::T)));
        assert_eq!(board.get(5, 19), Some(Some(PieceKind::Z)));
        assert_eq!(board.get(0, 17), Some(None));
        assert!(!board.is_row_full(18));
    }

    #[test]
    fn test_u8_grid_encoding() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::I));
        board.set(9, 19, Some(PieceKind::Z));

        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[0][0], 1);
        assert_eq!(grid[19][9], 7);
        assert_eq!(grid[10][5], 0);
    }
}

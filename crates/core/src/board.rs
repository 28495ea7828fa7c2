//! The game board: a fixed 10x20 grid of cells.
//!
//! Flat row-major storage for cache locality. Coordinates are (x, y) with x
//! in 0..10 left to right and y in 0..20 top to bottom.
//!
//! Mutating transforms (`lock`, `clear_rows`) are pure: they return a new
//! board value and leave the input untouched, so no caller can ever observe
//! a half-updated grid.

use arrayvec::ArrayVec;

use blockfall_types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

use crate::piece::ActivePiece;

/// Total number of cells on the board.
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices cleared by one [`Board::clear_rows`] call, in top-to-bottom
/// order.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The 10x20 game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat cell array, row-major (`y * WIDTH + x`).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// An all-empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

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

    /// Cell at (x, y); `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether the in-range cell at (x, y) is occupied. Out-of-bounds
    /// coordinates answer `false`; bounds policy belongs to the placement
    /// predicate, not the board.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Write a cell directly. Returns `false` when out of bounds.
    ///
    /// For fixtures and benches; gameplay mutation goes through [`lock`]
    /// and [`clear_rows`].
    ///
    /// [`lock`]: Board::lock
    /// [`clear_rows`]: Board::clear_rows
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether every cell in row `y` is occupied.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Row `y` as a cell slice.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write every filled cell of `piece` into a copy of the board, tagged
    /// with the piece's kind, and return the copy.
    ///
    /// Cells that land on a negative row are dropped: pieces may overlap the
    /// hidden rows above the well right after spawning. The caller is
    /// responsible for having validated the position; in-range overwrites of
    /// occupied cells indicate a validation bug upstream.
    pub fn lock(&self, piece: &ActivePiece) -> Board {
        let mut next = self.clone();
        for (x, y) in piece.cells() {
            if y < 0 {
                continue;
            }
            debug_assert!(!next.is_occupied(x, y), "lock over occupied cell");
            let wrote = next.set(x, y, Some(piece.kind));
            debug_assert!(wrote, "lock outside the board");
        }
        next
    }

    /// Remove every completed row at once and return the compacted board
    /// together with the indices of the removed rows.
    ///
    /// Surviving rows keep their relative order and one empty row is
    /// inserted at the top per removed row, so the result is always exactly
    /// 20 rows tall.
    pub fn clear_rows(&self) -> (Board, ClearedRows) {
        let mut cleared = ClearedRows::new();
        let mut next = Board::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                let src = read_y * width;
                let dst = write_y * width;
                next.cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
            }
        }

        // Scanned bottom-up; report top-to-bottom.
        cleared.reverse();
        (next, cleared)
    }

    /// Number of occupied cells on the whole board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

//! Placement validation.
//!
//! [`can_place`] is the single source of truth for position validity. Every
//! movement, rotation, hard-drop, spawn, and game-over decision in the
//! engine goes through it; no other code re-derives bounds or collision
//! rules.

use blockfall_types::{BOARD_HEIGHT, BOARD_WIDTH};

use crate::board::Board;
use crate::shape::PieceShape;

/// Whether `shape` fits on `board` with its top-left corner at (x, y).
///
/// A filled cell is rejected when its absolute column leaves `[0, W)`, its
/// absolute row reaches `H`, or it lands on an occupied in-range cell. Rows
/// above the board (negative) are always allowed so a freshly spawned piece
/// may overlap the hidden area.
pub fn can_place(board: &Board, shape: &PieceShape, x: i8, y: i8) -> bool {
    shape.filled().all(|(dx, dy)| {
        let px = x + dx;
        let py = y + dy;

        if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
            return false;
        }
        py < 0 || !board.is_occupied(px, py)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::shape_of;
    use blockfall_types::PieceKind;

    #[test]
    fn fits_on_empty_board() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(can_place(&board, &shape_of(kind), 3, 0), "{:?}", kind);
        }
    }

    #[test]
    fn rejects_left_and_right_walls() {
        let board = Board::new();
        let shape = shape_of(PieceKind::I); // 4 wide

        assert!(can_place(&board, &shape, 0, 0));
        assert!(!can_place(&board, &shape, -1, 0));
        assert!(can_place(&board, &shape, 6, 0));
        assert!(!can_place(&board, &shape, 7, 0));
    }

    #[test]
    fn rejects_the_floor() {
        let board = Board::new();
        let shape = shape_of(PieceKind::O); // 2 tall

        assert!(can_place(&board, &shape, 4, 18));
        assert!(!can_place(&board, &shape, 4, 19));
    }

    #[test]
    fn allows_rows_above_the_board() {
        let board = Board::new();
        let shape = shape_of(PieceKind::T); // 2 tall

        // Top row of the matrix above the well, bottom row at y=0.
        assert!(can_place(&board, &shape, 4, -1));
        // Entirely above the well is fine too; nothing is out of column range.
        assert!(can_place(&board, &shape, 4, -2));
    }

    #[test]
    fn rejects_occupied_cells() {
        let mut board = Board::new();
        board.set(4, 19, Some(PieceKind::L));

        let shape = shape_of(PieceKind::O); // covers (x..x+2, y..y+2)
        assert!(!can_place(&board, &shape, 4, 18));
        assert!(!can_place(&board, &shape, 3, 18));
        assert!(can_place(&board, &shape, 5, 18));
    }

    #[test]
    fn cells_above_the_board_never_collide() {
        // Row 0 fully occupied: an I bar collides at y=0 but is fine one
        // row higher, where all of its cells are in the hidden area.
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 0, Some(PieceKind::Z));
        }

        let shape = shape_of(PieceKind::I);
        assert!(!can_place(&board, &shape, 3, 0));
        assert!(can_place(&board, &shape, 3, -1));
    }
}

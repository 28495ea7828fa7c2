//! The active falling piece.

use blockfall_types::{PieceKind, BOARD_WIDTH};

use crate::shape::{shape_of, PieceShape};

/// The piece currently under gravity: a kind, its current rotation state,
/// and the board position of the shape matrix's top-left corner.
///
/// Replaced wholesale when it locks (by the buffered next piece) or on
/// restart; only `x`, `y`, and `shape` change in between, and only through
/// validated moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A fresh piece at its spawn position: horizontally centered (rounded
    /// down) on row 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = shape_of(kind);
        let x = (BOARD_WIDTH as i8) / 2 - (shape.width() as i8) / 2;
        Self { kind, shape, x, y: 0 }
    }

    /// Absolute board coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_centers_each_kind() {
        // 4 wide -> x = 5 - 2 = 3; 3 wide -> x = 5 - 1 = 4; 2 wide -> x = 4.
        assert_eq!(ActivePiece::spawn(PieceKind::I).x, 3);
        assert_eq!(ActivePiece::spawn(PieceKind::T).x, 4);
        assert_eq!(ActivePiece::spawn(PieceKind::O).x, 4);
        for kind in PieceKind::ALL {
            assert_eq!(ActivePiece::spawn(kind).y, 0);
        }
    }

    #[test]
    fn cells_are_absolute() {
        let piece = ActivePiece::spawn(PieceKind::I);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 0), (4, 0), (5, 0), (6, 0)]);
    }
}

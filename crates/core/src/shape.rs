//! Piece geometry: the shape catalog and clockwise rotation.
//!
//! A shape is a small rectangular matrix of booleans. Rotation is the naive
//! transpose-and-reverse transform with no offset correction: if the rotated
//! shape does not fit at the piece's current anchor, the caller rejects the
//! rotation and keeps the old shape.

use arrayvec::ArrayVec;

use blockfall_types::PieceKind;

/// Maximum shape extent in either axis.
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// One rotation state of a piece: a rectangular boolean matrix, row-major,
/// row 0 on top. Never empty; the filled-cell count is invariant under
/// rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceShape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl PieceShape {
    fn from_rows(rows: &[&[bool]]) -> Self {
        debug_assert!(!rows.is_empty() && !rows[0].is_empty());
        let rows = rows
            .iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        Self { rows }
    }

    /// Width of the bounding matrix in cells.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Height of the bounding matrix in cells.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix cell at (x, y) is filled. Out-of-matrix
    /// coordinates read as unfilled.
    pub fn filled_at(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// Iterate the (dx, dy) offsets of every filled cell.
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &cell)| cell)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }
}

/// The canonical (spawn) shape for a piece kind.
pub fn shape_of(kind: PieceKind) -> PieceShape {
    const F: bool = false;
    const T: bool = true;
    match kind {
        PieceKind::I => PieceShape::from_rows(&[&[T, T, T, T]]),
        PieceKind::O => PieceShape::from_rows(&[&[T, T], &[T, T]]),
        PieceKind::T => PieceShape::from_rows(&[&[F, T, F], &[T, T, T]]),
        PieceKind::S => PieceShape::from_rows(&[&[F, T, T], &[T, T, F]]),
        PieceKind::Z => PieceShape::from_rows(&[&[T, T, F], &[F, T, T]]),
        PieceKind::J => PieceShape::from_rows(&[&[T, F, F], &[T, T, T]]),
        PieceKind::L => PieceShape::from_rows(&[&[F, F, T], &[T, T, T]]),
    }
}

/// Rotate a shape 90 degrees clockwise: transpose the matrix, then reverse
/// each resulting row. A h x w matrix becomes w x h.
pub fn rotate_cw(shape: &PieceShape) -> PieceShape {
    let w = shape.width();
    let h = shape.height();

    let rows = (0..w)
        .map(|x| (0..h).map(|y| shape.filled_at(x, h - 1 - y)).collect())
        .collect();
    PieceShape { rows }
}

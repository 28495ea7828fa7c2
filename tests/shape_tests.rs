//! Piece shape and rotation behavior through the public facade.

use blockfall::core::{rotate_cw, shape_of, ActivePiece};
use blockfall::types::PieceKind;

#[test]
fn test_every_shape_has_four_cells() {
    for kind in PieceKind::ALL {
        let shape = shape_of(kind);
        assert_eq!(shape.filled_count(), 4, "{kind:?}");
    }
}

#[test]
fn test_shape_dimensions() {
    assert_eq!(
        (shape_of(PieceKind::I).width(), shape_of(PieceKind::I).height()),
        (4, 1)
    );
    assert_eq!(
        (shape_of(PieceKind::O).width(), shape_of(PieceKind::O).height()),
        (2, 2)
    );
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        let shape = shape_of(kind);
        assert_eq!((shape.width(), shape.height()), (3, 2), "{kind:?}");
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let shape = shape_of(kind);
        let rotated = rotate_cw(&shape);
        assert_eq!(rotated.width(), shape.height(), "{kind:?}");
        assert_eq!(rotated.height(), shape.width(), "{kind:?}");
        assert_eq!(rotated.filled_count(), 4, "{kind:?}");
    }
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let original = shape_of(kind);
        let mut shape = original.clone();
        for _ in 0..4 {
            shape = rotate_cw(&shape);
        }
        assert_eq!(shape, original, "{kind:?}");
    }
}

#[test]
fn test_spawn_is_horizontally_centered() {
    assert_eq!(ActivePiece::spawn(PieceKind::I).x, 3);
    assert_eq!(ActivePiece::spawn(PieceKind::O).x, 4);
    assert_eq!(ActivePiece::spawn(PieceKind::T).x, 4);
    for kind in PieceKind::ALL {
        assert_eq!(ActivePiece::spawn(kind).y, 0, "{kind:?}");
    }
}

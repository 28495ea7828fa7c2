//! Read-only view of the game state for rendering collaborators.

use blockfall_types::{Cell, Phase, BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH, PieceKind, START_LEVEL};

use crate::piece::ActivePiece;
use crate::shape::{shape_of, PieceShape};

/// A piece as a renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceView {
    pub kind: PieceKind,
    pub shape: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl From<&ActivePiece> for PieceView {
    fn from(piece: &ActivePiece) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape.clone(),
            x: piece.x,
            y: piece.y,
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// The board grid holds only locked cells; the active piece is reported
/// separately so views can overlay it (and drop it when the game is over).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<PieceView>,
    pub next: Option<PieceView>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: Phase,
    /// Gravity interval the driver should tick at, in milliseconds.
    pub drop_interval_ms: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            phase: Phase::Idle,
            drop_interval_ms: BASE_DROP_MS,
        }
    }
}

impl GameSnapshot {
    /// The upcoming piece's spawn shape, for preview panels.
    pub fn next_shape(&self) -> Option<PieceShape> {
        self.next.as_ref().map(|piece| shape_of(piece.kind))
    }
}

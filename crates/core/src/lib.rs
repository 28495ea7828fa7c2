//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains the whole game-state engine: board, piece geometry,
//! placement validation, locking, line clearing, and the score/level state
//! machine. It has **zero dependencies** on UI, timers, or I/O:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Synchronous**: every command is a bounded computation over a 10x20
//!   grid; the engine never blocks and holds no locks
//! - **Value-oriented**: board transforms return new boards, so a caller can
//!   never observe a half-updated grid
//!
//! # Module structure
//!
//! - [`shape`]: the 7-piece shape catalog and clockwise rotation
//! - [`board`]: the 10x20 grid with locking and line clearing
//! - [`placement`]: the single placement-validity predicate
//! - [`piece`]: the active falling piece
//! - [`rng`]: seedable uniform piece sampling
//! - [`scoring`]: score, level, and gravity-interval arithmetic
//! - [`engine`]: the command-driven game state machine
//! - [`snapshot`]: the read-only state view handed to renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//! use blockfall_types::{Command, Phase};
//!
//! let mut game = Game::new(12345);
//! game.apply(Command::Start);
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.apply(Command::MoveLeft);
//! game.apply(Command::HardDrop);
//! game.tick(); // gravity finds no room below: the piece locks
//! assert_eq!(game.score(), 10);
//! ```

pub mod board;
pub mod engine;
pub mod piece;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use engine::Game;
pub use piece::ActivePiece;
pub use placement::can_place;
pub use rng::{PieceSampler, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, lock_score};
pub use shape::{rotate_cw, shape_of, PieceShape};
pub use snapshot::{GameSnapshot, PieceView};

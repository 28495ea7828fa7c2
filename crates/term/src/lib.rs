//! Terminal rendering for the game.
//!
//! A small game-oriented rendering layer: the [`GameView`] maps an engine
//! snapshot into a [`FrameBuffer`] of styled character cells (pure, unit
//! testable), and the [`TerminalRenderer`] flushes framebuffers to a raw-mode
//! alternate screen.

pub mod fb;
pub mod renderer;
pub mod view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{GameView, Viewport};

//! Terminal input mapping.
//!
//! Maps `crossterm` key events into abstract [`Command`]s so the engine
//! never sees a device-specific event. The pause key is context-sensitive
//! (pause vs. resume), so the mapper takes the current phase.
//!
//! [`Command`]: blockfall_types::Command

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};

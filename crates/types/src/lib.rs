//! Shared types and constants.
//!
//! Pure data with no dependencies, usable from the core engine, the input
//! mapper, and the terminal renderer alike.

/// Board dimensions. Row 0 is the top of the well.
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity timing (milliseconds).
///
/// The drop interval for a level is `BASE_DROP_MS - (level - 1) * DROP_STEP_MS`,
/// floored at `DROP_FLOOR_MS`. The driver owns the timer; the engine only
/// surfaces the interval.
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_STEP_MS: u32 = 100;
pub const DROP_FLOOR_MS: u32 = 100;

/// Scoring constants.
///
/// Every lock awards `LANDING_BONUS`; each simultaneously cleared row adds
/// `LINE_VALUE * level` on top. Level advances once per `LINES_PER_LEVEL`
/// cumulative cleared lines, starting from `START_LEVEL`.
pub const LANDING_BONUS: u32 = 10;
pub const LINE_VALUE: u32 = 100;
pub const LINES_PER_LEVEL: u32 = 10;
pub const START_LEVEL: u32 = 1;

/// The seven piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalog order. Index order matters to the uniform sampler.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Lifecycle phase of a game.
///
/// `Idle` → `Running` on start; `Running` ⇄ `Paused`; `Running` → `Over` on a
/// failed spawn. `Over` is terminal except for a fresh start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Over,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Over => "over",
        }
    }
}

/// Abstract commands issued to the engine by input mappers and drivers.
///
/// Gravity is not a command: the driver calls `tick()` directly from its
/// timer. `Pause` and `Resume` are distinct so that callers never have to
/// guess which way a toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Pause,
    Resume,
}

/// A board cell: empty, or tagged with the kind of the piece that locked there.
pub type Cell = Option<PieceKind>;

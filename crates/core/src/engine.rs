//! The game state machine.
//!
//! [`Game`] owns the whole game state: board, active and next piece,
//! score/level/lines, and lifecycle phase. All transitions happen through
//! its command methods, which are synchronous and atomic from the caller's
//! perspective: a command either fully applies or leaves the state
//! untouched. Invalid moves and rotations are policy rejections, not
//! errors.
//!
//! The engine keeps no timers. An external driver calls [`Game::tick`] at
//! the interval reported by [`Game::drop_interval_ms`] and stops calling it
//! while the game is paused.

use blockfall_types::{Cell, Command, Phase, START_LEVEL};

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::placement::can_place;
use crate::rng::PieceSampler;
use crate::scoring::{drop_interval_ms, level_for_lines, lock_score};
use crate::shape::rotate_cw;
use crate::snapshot::{GameSnapshot, PieceView};

/// The falling-block game engine.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// `None` only while `Idle`; a running, paused, or finished game always
    /// has exactly one active and one buffered next piece.
    active: Option<ActivePiece>,
    next: Option<ActivePiece>,
    score: u32,
    level: u32,
    lines: u32,
    phase: Phase,
    sampler: PieceSampler,
}

impl Game {
    /// A fresh engine in the `Idle` phase. No piece exists until
    /// [`start`](Game::start).
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            phase: Phase::Idle,
            sampler: PieceSampler::new(seed),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn next(&self) -> Option<&ActivePiece> {
        self.next.as_ref()
    }

    /// Gravity interval for the current level, in milliseconds. The driver
    /// re-reads this after every lock since the level may have changed.
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Start (or restart) a game: empty board, fresh active and next piece,
    /// score/level/lines reset, phase `Running`. Valid from any phase and
    /// always succeeds; the spawn cannot collide on an empty board.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.active = Some(ActivePiece::spawn(self.sampler.draw()));
        self.next = Some(ActivePiece::spawn(self.sampler.draw()));
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.phase = Phase::Running;
    }

    /// One gravity step: move the active piece down a row, or lock it when
    /// there is no room. No-op unless `Running`. Returns `true` when the
    /// state advanced.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            debug_assert!(false, "running game without an active piece");
            return false;
        };

        if can_place(&self.board, &active.shape, active.x, active.y + 1) {
            active.y += 1;
        } else {
            self.lock_active();
        }
        true
    }

    /// Move the active piece by (dx, dy) if the target position is valid.
    /// Invalid moves are silently rejected. No-op unless `Running`.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let x = active.x + dx;
        let y = active.y + dy;
        if can_place(&self.board, &active.shape, x, y) {
            active.x = x;
            active.y = y;
            true
        } else {
            false
        }
    }

    /// Rotate the active piece clockwise if the rotated shape fits at the
    /// current anchor. No kick attempts: a rotation that does not fit is
    /// rejected outright. No-op unless `Running`.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let rotated = rotate_cw(&active.shape);
        if can_place(&self.board, &rotated, active.x, active.y) {
            active.shape = rotated;
            true
        } else {
            false
        }
    }

    /// Drop the active piece to the lowest valid row without locking it;
    /// the next gravity tick performs the lock. Returns the number of rows
    /// descended. No-op unless `Running`.
    pub fn hard_drop(&mut self) -> u32 {
        if self.phase != Phase::Running {
            return 0;
        }
        let Some(active) = self.active.as_mut() else {
            return 0;
        };

        let mut dropped = 0;
        while can_place(&self.board, &active.shape, active.x, active.y + 1) {
            active.y += 1;
            dropped += 1;
        }
        dropped
    }

    /// `Running` → `Paused`. No-op from any other phase.
    pub fn pause(&mut self) -> bool {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
            true
        } else {
            false
        }
    }

    /// `Paused` → `Running`. No-op from any other phase.
    pub fn resume(&mut self) -> bool {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
            true
        } else {
            false
        }
    }

    /// Dispatch an abstract command. Returns `true` when the state changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => {
                self.start();
                true
            }
            Command::MoveLeft => self.move_piece(-1, 0),
            Command::MoveRight => self.move_piece(1, 0),
            Command::SoftDrop => self.move_piece(0, 1),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop() > 0,
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
        }
    }

    /// The lock sequence: write the active piece into the board, clear
    /// completed rows, update lines/score/level, promote the next piece,
    /// and detect game over.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            debug_assert!(false, "lock without an active piece");
            return;
        };

        let locked = self.board.lock(&active);
        let (board, cleared_rows) = locked.clear_rows();
        self.board = board;

        let cleared = cleared_rows.len();
        self.lines += cleared as u32;
        // Scored at the pre-clear level; the level update comes after.
        self.score += lock_score(cleared, self.level);
        self.level = level_for_lines(self.lines);

        let promoted = self.next.take();
        debug_assert!(promoted.is_some(), "lock without a buffered next piece");
        let promoted = promoted.unwrap_or_else(|| ActivePiece::spawn(self.sampler.draw()));
        self.next = Some(ActivePiece::spawn(self.sampler.draw()));

        // Sole game-over condition: the promoted piece cannot spawn. It
        // stays the active piece either way.
        if !can_place(&self.board, &promoted.shape, promoted.x, promoted.y) {
            self.phase = Phase::Over;
        }
        self.active = Some(promoted);
    }

    /// Fill a snapshot in place; reusable across frames.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (y, row) in out.board.iter_mut().enumerate() {
            let cells: &[Cell] = self.board.row(y);
            row.copy_from_slice(cells);
        }
        out.active = self.active.as_ref().map(PieceView::from);
        out.next = self.next.as_ref().map(PieceView::from);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.phase = self.phase;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

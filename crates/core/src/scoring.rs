//! Score, level, and gravity-interval arithmetic.
//!
//! The rules are deliberately simple and linear:
//!
//! - every lock awards a flat 10-point landing bonus;
//! - each simultaneously cleared row adds `100 * level`, with no extra
//!   multiplier for doubles/triples/tetrises;
//! - the level is recomputed from the cumulative line count after every
//!   lock rather than incremented at threshold crossings.
//!
//! These match the behavior this engine is specified against; do not "fix"
//! them toward conventional scoring tables.

use blockfall_types::{
    BASE_DROP_MS, DROP_FLOOR_MS, DROP_STEP_MS, LANDING_BONUS, LINES_PER_LEVEL, LINE_VALUE,
    START_LEVEL,
};

/// Points awarded by one lock that cleared `cleared` rows at `level`.
pub fn lock_score(cleared: usize, level: u32) -> u32 {
    (cleared as u32) * LINE_VALUE * level + LANDING_BONUS
}

/// Level for a cumulative cleared-line count: one level per 10 lines,
/// starting at 1.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval for a level, in milliseconds: 1000ms at level 1,
/// 100ms faster per level, floored at 100ms.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(START_LEVEL).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(DROP_FLOOR_MS)
}

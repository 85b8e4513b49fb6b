#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::ops::Range;

/// Weighted average every course must reach to pass.
pub const PASSING_AVERAGE: f64 = 3.0;

/// Weight of each of the first two cuts.
pub const CUT_WEIGHT: f64 = 0.33;

/// Weight of the third and final cut.
pub const FINAL_CUT_WEIGHT: f64 = 0.34;

/// Lowest grade a cut can receive.
pub const GRADE_MIN: f64 = 0.0;

/// Highest grade a cut can receive.
pub const GRADE_MAX: f64 = 5.0;

/// Number of decorative symbols kept alive in the background layer.
pub const SYMBOL_COUNT: usize = 50;

/// Glyphs the background layer draws from, uniformly.
pub const SYMBOLS: [&str; 14] =
    ["0", "1", "2", "3", "4", "5", "+", "-", "*", "=", "∑", "∫", "d/dx", "√"];

/// Horizontal sprite position, as a percentage of the viewport width.
pub const SPRITE_LEFT_VW: Range<f64> = 0.0..100.0;

/// Sprite font size, in rem.
pub const SPRITE_FONT_REM: Range<f64> = 0.8..2.3;

/// Sprite animation duration, in seconds.
pub const SPRITE_DURATION_SECS: Range<f64> = 10.0..30.0;

/// Sprite animation start offset, in seconds. Negative so freshly spawned
/// sprites appear mid-animation instead of all starting in lockstep.
pub const SPRITE_START_OFFSET_SECS: Range<f64> = -10.0..0.0;

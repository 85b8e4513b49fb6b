#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;

use crate::{
    config,
    constants::{
        CUT_WEIGHT, FINAL_CUT_WEIGHT, GRADE_MAX, GRADE_MIN, PASSING_AVERAGE, SYMBOL_COUNT, SYMBOLS,
    },
};

/// A serializable pair describing a half-open sampling range.
#[derive(Serialize)]
pub struct RangeSpec {
    /// Inclusive lower bound.
    min: f64,
    /// Exclusive upper bound.
    max: f64,
}

impl From<std::ops::Range<f64>> for RangeSpec {
    fn from(range: std::ops::Range<f64>) -> Self {
        Self {
            min: range.start,
            max: range.end,
        }
    }
}

/// The fixed grading contract, for `parcial info`.
#[derive(Serialize)]
pub struct FormulaInfo {
    /// The weighted average a course must reach.
    passing_average:  f64,
    /// Weight of each of the first two cuts.
    cut_weight:       f64,
    /// Weight of the final cut.
    final_cut_weight: f64,
    /// Lowest acceptable grade.
    grade_min:        f64,
    /// Highest acceptable grade.
    grade_max:        f64,
}

/// The decorative symbol field's fixed parameters, for `parcial info`.
#[derive(Serialize)]
pub struct AmbientInfo {
    /// Population size held constant by replacement.
    symbol_count:      usize,
    /// The glyph palette.
    symbols:           Vec<&'static str>,
    /// Horizontal position range, viewport-width percent.
    left_vw:           RangeSpec,
    /// Font size range, rem.
    font_rem:          RangeSpec,
    /// Animation duration range, seconds.
    duration_secs:     RangeSpec,
    /// Animation start offset range, seconds.
    start_offset_secs: RangeSpec,
    /// Configured playback length, seconds.
    playback_seconds:  f64,
    /// Configured playback frame rate.
    playback_fps:      u32,
}

/// A JSON-serializable description of everything this tool hardcodes.
#[derive(Serialize)]
pub struct InfoReport {
    /// Package name.
    name:    &'static str,
    /// Package version.
    version: &'static str,
    /// The grading formula.
    formula: FormulaInfo,
    /// The decorative symbol field.
    ambient: AmbientInfo,
}

impl InfoReport {
    /// Gathers the report from the crate's constants and configuration.
    pub fn gather() -> Self {
        use crate::constants::{
            SPRITE_DURATION_SECS, SPRITE_FONT_REM, SPRITE_LEFT_VW, SPRITE_START_OFFSET_SECS,
        };

        Self {
            name:    env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            formula: FormulaInfo {
                passing_average:  PASSING_AVERAGE,
                cut_weight:       CUT_WEIGHT,
                final_cut_weight: FINAL_CUT_WEIGHT,
                grade_min:        GRADE_MIN,
                grade_max:        GRADE_MAX,
            },
            ambient: AmbientInfo {
                symbol_count:      SYMBOL_COUNT,
                symbols:           SYMBOLS.to_vec(),
                left_vw:           SPRITE_LEFT_VW.into(),
                font_rem:          SPRITE_FONT_REM.into(),
                duration_secs:     SPRITE_DURATION_SECS.into(),
                start_offset_secs: SPRITE_START_OFFSET_SECS.into(),
                playback_seconds:  config::ambient_seconds(),
                playback_fps:      config::ambient_fps(),
            },
        }
    }
}

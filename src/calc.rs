#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use tracing::debug;

use crate::{
    constants::{CUT_WEIGHT, FINAL_CUT_WEIGHT, GRADE_MAX, GRADE_MIN, PASSING_AVERAGE},
    document::{Document, FieldSlot, StyleBundle},
    guard::parse_decimal,
};

/// Rendered when either field is still blank.
pub const MSG_EMPTY: &str = "Please enter the grades for the first two cuts.";

/// Rendered when either field holds only a dash.
pub const MSG_LONE_DASH: &str =
    "Error: a lone dash is not a valid number. Please enter a grade between 0 and 5.";

/// Rendered when either field fails to parse as a number.
pub const MSG_MALFORMED: &str =
    "Invalid number format. Check the grades you entered (example: \"3.4\").";

/// Rendered when either grade falls outside the grade range.
pub const MSG_OUT_OF_RANGE: &str = "Grades must be between 0 and 5.";

/// How one field's trimmed text classifies, in fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationOutcome {
    /// The field is blank.
    Empty,
    /// The field holds exactly "-".
    LoneDash,
    /// The text does not parse as a finite number.
    MalformedNumber,
    /// The number parses but falls outside the grade range.
    OutOfRange,
    /// A usable grade.
    Valid(f64),
}

/// Classifies one field's text. Checks run empty, lone-dash, malformed,
/// out-of-range; only the first applicable outcome is reported.
pub fn validate(text: &str) -> ValidationOutcome {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return ValidationOutcome::Empty;
    }
    if trimmed == "-" {
        return ValidationOutcome::LoneDash;
    }

    match parse_decimal(trimmed) {
        None => ValidationOutcome::MalformedNumber,
        Some(value) if !(GRADE_MIN..=GRADE_MAX).contains(&value) => ValidationOutcome::OutOfRange,
        Some(value) => ValidationOutcome::Valid(value),
    }
}

/// The minimum final-cut grade needed to reach the passing average, given
/// the first two cuts. May fall outside the grade range; tier
/// classification decides how that is presented.
pub fn required_grade(cut1: f64, cut2: f64) -> f64 {
    (PASSING_AVERAGE - CUT_WEIGHT * cut1 - CUT_WEIGHT * cut2) / FINAL_CUT_WEIGHT
}

/// Formats a required grade to two decimal places.
pub fn format_grade(value: f64) -> String {
    format!("{value:.2}")
}

/// Presentation tier for a computed required grade, decided on the
/// unrounded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// More than 5 would be needed; the course cannot be passed.
    Impossible,
    /// Zero or less is needed; the course is already passed.
    AlreadyPassed,
    /// A reachable grade in (0, 5].
    Achievable,
}

impl Tier {
    /// Classifies an unrounded required grade.
    pub fn classify(required: f64) -> Self {
        if required > GRADE_MAX {
            Tier::Impossible
        } else if required <= 0.0 {
            Tier::AlreadyPassed
        } else {
            Tier::Achievable
        }
    }

    /// The style bundle this tier renders with.
    pub fn style(&self) -> StyleBundle {
        match self {
            Tier::Impossible => StyleBundle::Error,
            Tier::AlreadyPassed => StyleBundle::Success,
            Tier::Achievable => StyleBundle::Info,
        }
    }

    /// The status message for this tier, given the formatted value.
    pub fn message(&self, formatted: &str) -> String {
        match self {
            Tier::Impossible => {
                format!("You would need {formatted}. Passing is impossible! 😥")
            }
            Tier::AlreadyPassed => {
                "Congratulations! 🎉 You have already passed. You need a 0.00.".to_string()
            }
            Tier::Achievable => {
                format!("To pass, you need {formatted} on the final cut. 💪")
            }
        }
    }
}

/// Computes the required final-cut grade from the two entered cuts and
/// renders the outcome into the result panel.
pub struct GradeCalculator;

impl GradeCalculator {
    /// Runs one full trigger activation. Every path ends in a rendered
    /// message; nothing is thrown to the caller.
    pub fn trigger(document: &mut Document) {
        document.result.show();
        document.result.reset();

        let cut1 = document.field(FieldSlot::Cut1).text().trim().to_string();
        let cut2 = document.field(FieldSlot::Cut2).text().trim().to_string();

        if cut1.is_empty() || cut2.is_empty() {
            document.result.render(MSG_EMPTY, StyleBundle::Error);
            return;
        }

        if cut1 == "-" || cut2 == "-" {
            document.result.render(MSG_LONE_DASH, StyleBundle::Error);
            return;
        }

        let (parsed1, parsed2) = (parse_decimal(&cut1), parse_decimal(&cut2));
        let (Some(grade1), Some(grade2)) = (parsed1, parsed2) else {
            document.result.render(MSG_MALFORMED, StyleBundle::Error);
            return;
        };

        let range = GRADE_MIN..=GRADE_MAX;
        if !range.contains(&grade1) || !range.contains(&grade2) {
            document.result.render(MSG_OUT_OF_RANGE, StyleBundle::Error);
            return;
        }

        let required = required_grade(grade1, grade2);
        let tier = Tier::classify(required);
        debug!("required {required} for cuts {grade1} and {grade2}, tier {tier:?}");

        document.result.render(tier.message(&format_grade(required)), tier.style());
        document.trigger.complete();
    }
}

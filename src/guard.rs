#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use tracing::debug;

use crate::{
    constants::{GRADE_MAX, GRADE_MIN},
    document::{Document, FieldSlot},
};

/// Interprets field text as a decimal number, accepting either "." or ","
/// as the separator. Returns `None` for anything that is not a finite
/// number.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Returns whether a character may remain in a field mid-edit.
fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c == ',' || c == '.'
}

/// Decides what a field's text should become after one edit. `None` means
/// the text is left untouched.
///
/// A lone "-" is tolerated so the user can begin typing a negative number,
/// even though negatives are clamped the moment they parse. Unparseable
/// text is stripped down to digits, commas, and periods; parseable values
/// are clamped into the grade range. Valid in-range text is never
/// reformatted, even mid-typing.
pub fn constrain(raw: &str) -> Option<String> {
    if raw.trim() == "-" {
        return None;
    }

    match parse_decimal(raw) {
        None => {
            let stripped: String = raw.chars().filter(|c| is_allowed(*c)).collect();
            (stripped != raw).then_some(stripped)
        }
        Some(value) if value < GRADE_MIN => Some("0".to_string()),
        Some(value) if value > GRADE_MAX => Some("5".to_string()),
        Some(_) => None,
    }
}

/// Keeps each grade field syntactically close to a valid decimal in the
/// grade range as the user types, without being unpleasantly intrusive.
pub struct InputGuard;

impl InputGuard {
    /// Handles one content-change event: stores the new text in the slot's
    /// field, then rewrites it in place if the guard demands it.
    pub fn on_edit(document: &mut Document, slot: FieldSlot, text: &str) {
        let field = document.field_mut(slot);
        field.set_text(text);

        if let Some(rewritten) = constrain(field.text()) {
            debug!("guard rewrote {slot}: {:?} -> {rewritten:?}", field.text());
            field.set_text(rewritten);
        }
    }
}

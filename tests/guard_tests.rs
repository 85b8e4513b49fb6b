use parcial::{
    document::{Document, FieldSlot},
    guard::{InputGuard, constrain, parse_decimal},
};

/// Applies one guard pass, returning the text the field ends up with.
fn settle(raw: &str) -> String {
    constrain(raw).unwrap_or_else(|| raw.to_string())
}

#[test]
fn comma_and_period_parse_identically() {
    assert_eq!(parse_decimal("3,5"), Some(3.5));
    assert_eq!(parse_decimal("3.5"), Some(3.5));
    assert_eq!(parse_decimal("0,0"), Some(0.0));
}

#[test]
fn non_numeric_text_is_stripped_to_the_allowed_alphabet() {
    assert_eq!(constrain("abc"), Some(String::new()));
    assert_eq!(constrain("abc3.5x"), Some("3.5".to_string()));
    assert_eq!(constrain("a-b"), Some(String::new()));
    assert_eq!(constrain(" 4"), Some("4".to_string()));
}

#[test]
fn text_already_in_the_alphabet_is_not_rewritten() {
    // "3.4.5" never parses, but stripping removes nothing, so no action.
    assert_eq!(constrain("3.4.5"), None);
    assert_eq!(constrain(".."), None);
    assert_eq!(constrain(""), None);
}

#[test]
fn parseable_values_are_clamped_into_the_grade_range() {
    assert_eq!(constrain("-2"), Some("0".to_string()));
    assert_eq!(constrain("-0.01"), Some("0".to_string()));
    assert_eq!(constrain("7"), Some("5".to_string()));
    assert_eq!(constrain("5.01"), Some("5".to_string()));
    assert_eq!(constrain("6,5"), Some("5".to_string()));
}

#[test]
fn in_range_values_are_left_untouched() {
    assert_eq!(constrain("0"), None);
    assert_eq!(constrain("5"), None);
    assert_eq!(constrain("4.9"), None);
    assert_eq!(constrain("3,5"), None);
}

#[test]
fn mid_typing_states_are_tolerated() {
    // A trailing separator still parses, so the text survives as typed.
    assert_eq!(constrain("3."), None);
    assert_eq!(constrain("3,"), None);
}

#[test]
fn a_lone_dash_is_allowed_to_stand() {
    assert_eq!(constrain("-"), None);
    assert_eq!(constrain(" - "), None);
}

#[test]
fn a_dash_with_digits_is_a_negative_number_and_clamps_to_zero() {
    assert_eq!(constrain("-3"), Some("0".to_string()));
    assert_eq!(constrain("-0,5"), Some("0".to_string()));
}

#[test]
fn the_guard_is_idempotent() {
    let inputs = [
        "", "-", " - ", "abc", "abc3.5x", "3.4.5", "-2", "7", "6,5", "3,5", "4.9", "3.", "NaN",
        "inf", "1e3", "  2  ",
    ];

    for raw in inputs {
        let once = settle(raw);
        assert_eq!(settle(&once), once, "second pass over {raw:?} changed {once:?}");
    }
}

#[test]
fn textual_nan_and_infinity_are_stripped_not_parsed() {
    assert_eq!(constrain("NaN"), Some(String::new()));
    assert_eq!(constrain("inf"), Some(String::new()));
}

#[test]
fn exponent_notation_clamps_through_the_numeric_path() {
    // "1e3" parses as 1000, which exceeds the range.
    assert_eq!(constrain("1e3"), Some("5".to_string()));
}

#[test]
fn edit_events_mutate_the_field_in_place() {
    let mut document = Document::new();

    InputGuard::on_edit(&mut document, FieldSlot::Cut1, "x4y");
    assert_eq!(document.field(FieldSlot::Cut1).text(), "4");

    InputGuard::on_edit(&mut document, FieldSlot::Cut2, "-1");
    assert_eq!(document.field(FieldSlot::Cut2).text(), "0");

    InputGuard::on_edit(&mut document, FieldSlot::Cut2, "4,2");
    assert_eq!(document.field(FieldSlot::Cut2).text(), "4,2");
}

use parcial::{
    calc::{
        GradeCalculator, MSG_EMPTY, MSG_LONE_DASH, MSG_MALFORMED, MSG_OUT_OF_RANGE, Tier,
        ValidationOutcome, format_grade, required_grade, validate,
    },
    document::{Document, FieldSlot, StyleBundle, TriggerScheme},
};

/// Builds a document with both field texts already in place.
fn document_with(cut1: &str, cut2: &str) -> Document {
    let mut document = Document::new();
    document.field_mut(FieldSlot::Cut1).set_text(cut1);
    document.field_mut(FieldSlot::Cut2).set_text(cut2);
    document
}

/// Triggers the calculator over a fresh document and returns it.
fn triggered(cut1: &str, cut2: &str) -> Document {
    let mut document = document_with(cut1, cut2);
    GradeCalculator::trigger(&mut document);
    document
}

#[test]
fn validation_priority_is_fixed() {
    assert_eq!(validate(""), ValidationOutcome::Empty);
    assert_eq!(validate("   "), ValidationOutcome::Empty);
    assert_eq!(validate("-"), ValidationOutcome::LoneDash);
    assert_eq!(validate("3.4.5"), ValidationOutcome::MalformedNumber);
    assert_eq!(validate(".."), ValidationOutcome::MalformedNumber);
    assert_eq!(validate("6"), ValidationOutcome::OutOfRange);
    assert_eq!(validate("-0.1"), ValidationOutcome::OutOfRange);
    assert_eq!(validate("3,5"), ValidationOutcome::Valid(3.5));
    assert_eq!(validate(" 4.0 "), ValidationOutcome::Valid(4.0));
}

#[test]
fn zeros_make_passing_impossible() {
    let required = required_grade(0.0, 0.0);
    assert!(required > 5.0);
    assert_eq!(format_grade(required), "8.82");
    assert_eq!(Tier::classify(required), Tier::Impossible);
}

#[test]
fn perfect_cuts_have_already_passed() {
    let required = required_grade(5.0, 5.0);
    assert!(required <= 0.0);
    assert_eq!(Tier::classify(required), Tier::AlreadyPassed);
}

#[test]
fn three_three_needs_exactly_three() {
    let required = required_grade(3.0, 3.0);
    assert_eq!(format_grade(required), "3.00");
    assert_eq!(Tier::classify(required), Tier::Achievable);
}

#[test]
fn empty_fields_report_the_incomplete_message() {
    let document = triggered("", "2");
    assert!(!document.result.is_hidden());
    assert_eq!(document.result.message(), MSG_EMPTY);
    assert_eq!(document.result.style(), StyleBundle::Error);
}

#[test]
fn a_lone_dash_gets_its_own_message_not_the_malformed_one() {
    let document = triggered("-", "4");
    assert_eq!(document.result.message(), MSG_LONE_DASH);
    assert_eq!(document.result.style(), StyleBundle::Error);
}

#[test]
fn malformed_numbers_are_reported() {
    let document = triggered("3.4.5", "2");
    assert_eq!(document.result.message(), MSG_MALFORMED);
    assert_eq!(document.result.style(), StyleBundle::Error);
}

#[test]
fn out_of_range_grades_are_reported() {
    let document = triggered("6", "2");
    assert_eq!(document.result.message(), MSG_OUT_OF_RANGE);
    assert_eq!(document.result.style(), StyleBundle::Error);
}

#[test]
fn achievable_grades_render_the_informational_message() {
    let document = triggered("3", "3");
    assert!(document.result.message().contains("3.00"));
    assert_eq!(document.result.style(), StyleBundle::Info);
}

#[test]
fn already_passed_renders_success_with_a_zero_requirement() {
    let document = triggered("5", "5");
    assert!(document.result.message().contains("0.00"));
    assert_eq!(document.result.style(), StyleBundle::Success);
}

#[test]
fn impossible_renders_the_formatted_requirement_in_error_style() {
    let document = triggered("0", "0");
    assert!(document.result.message().contains("8.82"));
    assert_eq!(document.result.style(), StyleBundle::Error);
}

#[test]
fn comma_and_period_inputs_compute_identically() {
    let with_comma = triggered("3,5", "2,0");
    let with_period = triggered("3.5", "2.0");
    assert_eq!(with_comma.result.message(), with_period.result.message());
    assert_eq!(with_comma.result.style(), with_period.result.style());
}

#[test]
fn field_whitespace_is_trimmed_before_validation() {
    let document = triggered("  3  ", " 3 ");
    assert!(document.result.message().contains("3.00"));
}

#[test]
fn errors_leave_the_trigger_scheme_untouched() {
    let document = triggered("", "");
    assert_eq!(document.trigger.scheme(), TriggerScheme::Initial);
}

#[test]
fn the_first_completed_calculation_switches_the_scheme_for_good() {
    let mut document = document_with("", "2");
    GradeCalculator::trigger(&mut document);
    assert_eq!(document.trigger.scheme(), TriggerScheme::Initial);

    document.field_mut(FieldSlot::Cut1).set_text("3");
    GradeCalculator::trigger(&mut document);
    assert_eq!(document.trigger.scheme(), TriggerScheme::Completed);

    // A later error neither reverts the scheme nor hides the panel.
    document.field_mut(FieldSlot::Cut2).set_text("-");
    GradeCalculator::trigger(&mut document);
    assert_eq!(document.trigger.scheme(), TriggerScheme::Completed);
    assert!(!document.result.is_hidden());
    assert_eq!(document.result.message(), MSG_LONE_DASH);
    assert_eq!(document.result.style(), StyleBundle::Error);
}

#[test]
fn every_trigger_resets_the_panel_before_evaluating() {
    let mut document = document_with("3", "3");
    GradeCalculator::trigger(&mut document);
    assert_eq!(document.result.style(), StyleBundle::Info);

    document.field_mut(FieldSlot::Cut1).set_text("");
    GradeCalculator::trigger(&mut document);
    assert_eq!(document.result.style(), StyleBundle::Error);
    assert_eq!(document.result.message(), MSG_EMPTY);
}

#[test]
fn tiers_are_decided_on_the_unrounded_value() {
    // 1.97 and 1.97 require 4.9994..., which formats to "5.00" but is
    // still achievable because the unrounded value stays at or below 5.
    let required = required_grade(1.97, 1.97);
    assert_eq!(format_grade(required), "5.00");
    assert_eq!(Tier::classify(required), Tier::Achievable);

    // 1.96 and 1.96 require 5.0188..., just over the ceiling.
    let boundary = required_grade(1.96, 1.96);
    assert!(boundary > 5.0);
    assert_eq!(Tier::classify(boundary), Tier::Impossible);
}

use diabolo_judge::error::JudgeError;
use diabolo_judge::rules::standard::TIME_VIOLATION;
use diabolo_judge::rules::{RuleBook, Tier};
use diabolo_judge::selection::{Attempt, Selection};
use rstest::{fixture, rstest};

#[fixture]
fn rules() -> RuleBook {
    RuleBook::standard()
}

fn with_trick(rules: &RuleBook) -> Selection {
    Selection::new()
        .select_trick(rules, "Toss/High", Tier::D2)
        .unwrap()
        .toggle_level(rules, 2)
        .unwrap()
        .toggle_feature(rules, "Turn-360")
        .unwrap()
        .set_execution_grade(rules, 1)
        .unwrap()
}

// --- TRICK ---

#[rstest]
fn test_select_same_trick_toggles_off(rules: RuleBook) {
    let s = Selection::new()
        .select_trick(&rules, "Sun", Tier::D1)
        .unwrap()
        .select_trick(&rules, "Sun", Tier::D1)
        .unwrap();
    assert!(s.trick().is_none());
    assert!(s.is_empty());
}

#[rstest]
fn test_select_other_tier_replaces(rules: RuleBook) {
    let s = Selection::new()
        .select_trick(&rules, "Sun", Tier::D1)
        .unwrap()
        .select_trick(&rules, "Sun", Tier::D2)
        .unwrap();
    assert_eq!(s.trick().unwrap().tier, Tier::D2);
}

#[rstest]
fn test_toggling_trick_off_keeps_modifiers(rules: RuleBook) {
    let s = with_trick(&rules)
        .select_trick(&rules, "Toss/High", Tier::D2)
        .unwrap();
    assert!(s.trick().is_none());
    assert_eq!(s.level(), Some(2));
    assert_eq!(s.features(), ["Turn-360".to_string()]);
    assert_eq!(s.grade(), 1);
    // Modifiers without a trick score as nothing.
    assert_eq!(s.attempt(), Attempt::Empty);
}

#[rstest]
fn test_select_not_offered_is_rejected(rules: RuleBook) {
    let err = Selection::new()
        .select_trick(&rules, "Orbit", Tier::D1)
        .unwrap_err();
    assert!(matches!(err, JudgeError::NotOffered { .. }));
}

// --- FEATURES ---

#[rstest]
fn test_turn_features_are_exclusive(rules: RuleBook) {
    let s = Selection::new()
        .toggle_feature(&rules, "Leg Pass")
        .unwrap()
        .toggle_feature(&rules, "Turn-360")
        .unwrap()
        .toggle_feature(&rules, "Turn-720")
        .unwrap();
    assert_eq!(s.features(), ["Leg Pass".to_string(), "Turn-720".to_string()]);
}

#[rstest]
fn test_reselected_turn_goes_last(rules: RuleBook) {
    let s = Selection::new()
        .toggle_feature(&rules, "Turn-360")
        .unwrap()
        .toggle_feature(&rules, "Blind")
        .unwrap()
        .toggle_feature(&rules, "Turn-1080")
        .unwrap();
    assert_eq!(s.features(), ["Blind".to_string(), "Turn-1080".to_string()]);
}

#[rstest]
#[case("Leg Pass")]
#[case("Turn-720")]
#[case("Cartwheel")]
fn test_feature_toggle_removes(rules: RuleBook, #[case] name: &str) {
    let s = Selection::new()
        .toggle_feature(&rules, name)
        .unwrap()
        .toggle_feature(&rules, name)
        .unwrap();
    assert!(s.features().is_empty());
}

#[rstest]
fn test_other_features_keep_selection_order(rules: RuleBook) {
    let s = Selection::new()
        .toggle_feature(&rules, "Blind")
        .unwrap()
        .toggle_feature(&rules, "Leg Pass")
        .unwrap()
        .toggle_feature(&rules, "Back Catch")
        .unwrap();
    assert_eq!(s.features(), ["Blind", "Leg Pass", "Back Catch"].map(String::from));
}

// --- LEVEL / GRADE ---

#[rstest]
fn test_level_toggle(rules: RuleBook) {
    let s = Selection::new().toggle_level(&rules, 3).unwrap();
    assert_eq!(s.level(), Some(3));
    let s = s.toggle_level(&rules, 4).unwrap();
    assert_eq!(s.level(), Some(4));
    let s = s.toggle_level(&rules, 4).unwrap();
    assert_eq!(s.level(), None);
}

#[rstest]
#[case(0)]
#[case(6)]
fn test_unknown_level_rejected(rules: RuleBook, #[case] level: u8) {
    assert!(matches!(
        Selection::new().toggle_level(&rules, level),
        Err(JudgeError::UnknownLevel(_))
    ));
}

#[rstest]
fn test_grade_out_of_range_rejected(rules: RuleBook) {
    assert!(matches!(
        Selection::new().set_execution_grade(&rules, -4),
        Err(JudgeError::UnknownGrade(-4))
    ));
}

// --- DEDUCTIONS ---

#[rstest]
fn test_deductions_accumulate_and_toggle(rules: RuleBook) {
    let s = Selection::new()
        .toggle_deduction(&rules, "Tangle")
        .unwrap()
        .toggle_deduction(&rules, "Stick Drop")
        .unwrap();
    assert_eq!(s.deductions(), ["Tangle", "Stick Drop"].map(String::from));
    assert!(matches!(s.attempt(), Attempt::DeductionOnly { .. }));

    let s = s.toggle_deduction(&rules, "Tangle").unwrap();
    assert_eq!(s.deductions(), ["Stick Drop".to_string()]);
}

#[rstest]
fn test_time_violation_clears_trick_state(rules: RuleBook) {
    let s = with_trick(&rules)
        .toggle_deduction(&rules, "Unintentional Drop")
        .unwrap()
        .toggle_deduction(&rules, TIME_VIOLATION)
        .unwrap();

    assert!(s.trick().is_none());
    assert!(s.features().is_empty());
    assert_eq!(s.level(), None);
    assert_eq!(s.grade(), 0);
    // Other deductions survive.
    assert_eq!(
        s.deductions(),
        ["Unintentional Drop".to_string(), TIME_VIOLATION.to_string()]
    );
}

#[rstest]
fn test_time_violation_without_trick_has_no_side_effects(rules: RuleBook) {
    let s = Selection::new()
        .toggle_level(&rules, 2)
        .unwrap()
        .toggle_deduction(&rules, TIME_VIOLATION)
        .unwrap();
    assert_eq!(s.level(), Some(2));
    assert_eq!(s.deductions(), [TIME_VIOLATION.to_string()]);
}

// The exclusion is one-way: picking a trick after a time violation keeps the
// deduction. Kept as-is until the rule owners say otherwise.
#[rstest]
fn test_selecting_trick_keeps_time_violation(rules: RuleBook) {
    let s = Selection::new()
        .toggle_deduction(&rules, TIME_VIOLATION)
        .unwrap()
        .select_trick(&rules, "Whip", Tier::D3)
        .unwrap();
    assert_eq!(s.trick().unwrap().name, "Whip");
    assert_eq!(s.deductions(), [TIME_VIOLATION.to_string()]);
}

#[rstest]
fn test_unknown_deduction_rejected(rules: RuleBook) {
    assert!(matches!(
        Selection::new().toggle_deduction(&rules, "Sneeze"),
        Err(JudgeError::UnknownDeduction(_))
    ));
}

#[rstest]
fn test_cleared_resets_everything(rules: RuleBook) {
    let s = with_trick(&rules)
        .toggle_deduction(&rules, "Tangle")
        .unwrap()
        .cleared();
    assert_eq!(s, Selection::new());
}

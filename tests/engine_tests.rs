use diabolo_judge::rules::standard::TIME_VIOLATION;
use diabolo_judge::rules::{RuleBook, Tier};
use diabolo_judge::scorer::{resolve, Scorer, Step};
use diabolo_judge::selection::Selection;
use rstest::rstest;

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn scorer() -> Scorer {
    Scorer::default()
}

fn worked_example(rules: &RuleBook) -> Selection {
    Selection::new()
        .select_trick(rules, "Toss/High", Tier::D2)
        .unwrap()
        .toggle_level(rules, 2)
        .unwrap()
        .toggle_feature(rules, "Turn-360")
        .unwrap()
        .set_execution_grade(rules, 1)
        .unwrap()
        .toggle_deduction(rules, "Unintentional Drop")
        .unwrap()
}

// --- FINAL SCORE ---

#[test]
fn test_worked_example() {
    let scorer = scorer();
    let s = worked_example(&scorer.rules);

    // 1.0 * 4 * 1.7 * 1.05 - 0.3
    assert_close(scorer.final_score(&s).unwrap(), 6.84);
    assert_eq!(scorer.identifier(&s).unwrap(), "2TL2T1E+1Drop");
    assert_eq!(
        scorer.description(&s).unwrap(),
        "Toss/High(2D) ×L2 ×Turn-360 ×E+1 +Unintentional Drop(-0.3)"
    );
}

#[test]
fn test_empty_selection_scores_zero() {
    let scorer = scorer();
    let preview = scorer.preview(&Selection::new()).unwrap();
    assert_eq!(preview.final_score, 0.0);
    assert_eq!(preview.identifier, "");
    assert_eq!(preview.description, "");
    assert!(scorer.record(&Selection::new()).unwrap().is_none());
}

#[test]
fn test_trick_only_is_base_score() {
    let scorer = scorer();
    let s = Selection::new()
        .select_trick(&scorer.rules, "Vertax", Tier::Variable)
        .unwrap();
    assert_close(scorer.final_score(&s).unwrap(), 3.0);
    assert_eq!(scorer.identifier(&s).unwrap(), "V");
    assert_eq!(scorer.description(&s).unwrap(), "Vertax(VD)");
}

#[test]
fn test_deduction_only_attempt() {
    let scorer = scorer();
    let rules = &scorer.rules;
    let s = Selection::new()
        .toggle_level(rules, 3)
        .unwrap()
        .toggle_deduction(rules, "Stick Drop")
        .unwrap()
        .toggle_deduction(rules, "Tangle")
        .unwrap();

    // The level is ignored without a trick.
    assert_close(scorer.final_score(&s).unwrap(), -0.7);
    assert_eq!(scorer.identifier(&s).unwrap(), "SD+TG");
    assert_eq!(
        scorer.description(&s).unwrap(),
        "Stick Drop(-0.5) + Tangle(-0.2)"
    );
}

#[test]
fn test_time_violation_scores_as_deduction_only() {
    let scorer = scorer();
    let s = worked_example(&scorer.rules)
        .toggle_deduction(&scorer.rules, TIME_VIOLATION)
        .unwrap();
    assert_close(scorer.final_score(&s).unwrap(), -1.3);
    assert_eq!(scorer.identifier(&s).unwrap(), "Drop+TV");
}

#[test]
fn test_deductions_are_never_multiplied() {
    let scorer = scorer();
    let rules = &scorer.rules;
    let base = Selection::new()
        .select_trick(rules, "Whip", Tier::D1)
        .unwrap()
        .toggle_level(rules, 5)
        .unwrap();
    let with_drop = base.clone().toggle_deduction(rules, "Out of Bounds").unwrap();

    let diff = scorer.final_score(&with_drop).unwrap() - scorer.final_score(&base).unwrap();
    assert_close(diff, -0.5);
}

// --- ORDER OF OPERATIONS ---

#[test]
fn test_feature_order_changes_score() {
    let scorer = scorer();
    let rules = &scorer.rules;
    let trick = Selection::new()
        .select_trick(rules, "Sun", Tier::D1)
        .unwrap();

    let add_first = trick
        .clone()
        .toggle_feature(rules, "Cartwheel")
        .unwrap()
        .toggle_feature(rules, "Leg Pass")
        .unwrap();
    let mul_first = trick
        .toggle_feature(rules, "Leg Pass")
        .unwrap()
        .toggle_feature(rules, "Cartwheel")
        .unwrap();

    // (0.6 + 1.0) * 1.2 vs 0.6 * 1.2 + 1.0
    assert_close(scorer.final_score(&add_first).unwrap(), 1.92);
    assert_close(scorer.final_score(&mul_first).unwrap(), 1.72);
    assert_eq!(scorer.identifier(&add_first).unwrap(), "1SCWLP");
    assert_eq!(scorer.identifier(&mul_first).unwrap(), "1SLPCW");
}

#[test]
fn test_level_applies_before_additive_feature() {
    let scorer = scorer();
    let rules = &scorer.rules;
    let s = Selection::new()
        .toggle_feature(rules, "Blind")
        .unwrap()
        .select_trick(rules, "Cradle", Tier::D2)
        .unwrap()
        .toggle_level(rules, 1)
        .unwrap();
    // 0.7 * 2 + 0.5, whatever order the judge clicked
    assert_close(scorer.final_score(&s).unwrap(), 1.9);
    assert_eq!(
        scorer.description(&s).unwrap(),
        "Cradle(2D) ×L1 +Blind"
    );
}

#[rstest]
#[case(-3, "E-3", 0.7)]
#[case(-1, "E-1", 0.9)]
#[case(2, "E+2", 1.1)]
fn test_execution_grade_encoding(#[case] grade: i8, #[case] code: &str, #[case] factor: f64) {
    let scorer = scorer();
    let s = Selection::new()
        .select_trick(&scorer.rules, "Orbit", Tier::D3)
        .unwrap()
        .set_execution_grade(&scorer.rules, grade)
        .unwrap();
    assert_eq!(scorer.identifier(&s).unwrap(), format!("3O{}", code));
    assert_close(scorer.final_score(&s).unwrap(), 1.6 * factor);
}

#[test]
fn test_resolved_steps_follow_fixed_order() {
    let rules = RuleBook::standard();
    let s = worked_example(&rules);
    let resolved = resolve(&rules, &s).unwrap();

    let kinds: Vec<&str> = resolved
        .steps
        .iter()
        .map(|step| match step {
            Step::Base { .. } => "base",
            Step::Level { .. } => "level",
            Step::Feature(_) => "feature",
            Step::Execution { .. } => "execution",
            Step::Deduction(_) => "deduction",
        })
        .collect();
    assert_eq!(kinds, vec!["base", "level", "feature", "execution", "deduction"]);
}

// --- RECORDS ---

#[test]
fn test_record_snapshots_selection() {
    let scorer = scorer();
    let record = scorer
        .record(&worked_example(&scorer.rules))
        .unwrap()
        .expect("non-empty selection produces a record");

    assert_eq!(record.trick_name.as_deref(), Some("Toss/High"));
    assert_eq!(record.tier, Some(Tier::D2));
    assert_eq!(record.base_score, 1.0);
    assert_eq!(record.level, Some(2));
    assert_eq!(record.execution_grade, 1);
    assert_eq!(record.features.len(), 1);
    assert_eq!(record.features[0].abbreviation, "T1");
    assert_eq!(record.deductions[0].points, -0.3);
    assert_eq!(record.identifier, "2TL2T1E+1Drop");
    assert_close(record.final_score, 6.84);
    assert!(!record.is_deduction_only());
}

#[test]
fn test_records_get_distinct_ids() {
    let scorer = scorer();
    let s = worked_example(&scorer.rules);
    let a = scorer.record(&s).unwrap().unwrap();
    let b = scorer.record(&s).unwrap().unwrap();
    assert_ne!(a.id, b.id);
}

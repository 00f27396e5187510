use diabolo_judge::error::JudgeError;
use diabolo_judge::ranking::panel::load_panel_sheet_from_file;
use diabolo_judge::ranking::load_panel_sheet;
use diabolo_judge::rules::loader::load_trick_catalog;
use diabolo_judge::rules::{RuleBook, Tier};
use std::io::{Cursor, Write};

// --- TRICK CATALOG ---

#[test]
fn test_catalog_parses_offered_tiers() {
    let data = "name,abbreviation,1D,2D,3D,4D,VD\n\
                Toss/High,T,0.5,1.0,1.5,2.0,\n\
                Vertax,V,0,,2.5,3.5,3.0\n";
    let tricks = load_trick_catalog(Cursor::new(data)).unwrap();

    assert_eq!(tricks.len(), 2);
    assert_eq!(tricks[0].base_score(Tier::D4), Some(2.0));
    assert_eq!(tricks[0].base_score(Tier::Variable), None);
    // Zero and blank cells are both "not offered".
    assert_eq!(tricks[1].offered_tiers(), vec![Tier::D3, Tier::D4, Tier::Variable]);
}

#[test]
fn test_catalog_columns_in_any_order_and_case() {
    let data = "name,abbreviation,vd,1d\nSun,S,1.0,0.6\n";
    let tricks = load_trick_catalog(Cursor::new(data)).unwrap();
    assert_eq!(tricks[0].base_score(Tier::Variable), Some(1.0));
    assert_eq!(tricks[0].base_score(Tier::D1), Some(0.6));
}

#[test]
fn test_catalog_rejects_non_numeric_cell() {
    let data = "name,abbreviation,1D\nSun,S,lots\n";
    let err = load_trick_catalog(Cursor::new(data)).unwrap_err();
    match err {
        JudgeError::Validation(msg) => assert!(msg.contains("Row 1"), "{}", msg),
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn test_catalog_without_tier_columns() {
    let data = "name,abbreviation\nSun,S\n";
    assert!(matches!(
        load_trick_catalog(Cursor::new(data)),
        Err(JudgeError::Validation(_))
    ));
}

#[test]
fn test_rule_book_from_csv_catalog() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "name,abbreviation,1D,2D,3D,4D,VD").unwrap();
    writeln!(file, "Genie,G,,0.9,,,").unwrap();

    let path = file.path().to_str().unwrap();
    let book = RuleBook::load_or_standard(Some(path)).unwrap();
    assert_eq!(book.tricks.len(), 1);
    assert_eq!(book.base_score("Genie", Tier::D2).unwrap(), 0.9);
    // Everything but the trick list comes from the standard tables.
    assert_eq!(book.levels, RuleBook::standard().levels);
}

// --- PANEL SHEET ---

#[test]
fn test_panel_sheet_parses_rows() {
    let data = "name,tech1,tech2,tech3,perf1,perf2,disqualified\n\
                Ana,10,10,15,20,22,\n\
                Ben,20,15,10,25,27,no\n\
                Cal,40,40,40,30,30,DQ\n";
    let entries = load_panel_sheet(Cursor::new(data)).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].combined_technical(), 35.0);
    assert_eq!(entries[1].performance, [25.0, 27.0]);
    assert!(!entries[1].disqualified);
    assert!(entries[2].disqualified);
}

#[test]
fn test_panel_sheet_without_flag_column() {
    let data = "name,tech1,tech2,tech3,perf1,perf2\nAna,1,2,3,4,5\n";
    let entries = load_panel_sheet(Cursor::new(data)).unwrap();
    assert!(!entries[0].disqualified);
}

#[test]
fn test_panel_sheet_rejects_short_rows() {
    let data = "name,tech1,tech2,tech3,perf1,perf2\nAna,1,2,3\n";
    assert!(matches!(
        load_panel_sheet(Cursor::new(data)),
        Err(JudgeError::Validation(_))
    ));
}

#[test]
fn test_panel_sheet_rejects_bad_flag() {
    let data = "name,tech1,tech2,tech3,perf1,perf2,dq\nAna,1,2,3,4,5,maybe\n";
    assert!(matches!(
        load_panel_sheet(Cursor::new(data)),
        Err(JudgeError::Validation(_))
    ));
}

#[test]
fn test_panel_sheet_rejects_non_finite_cells() {
    for cell in ["NaN", "inf", "-inf"] {
        let data = format!(
            "name,tech1,tech2,tech3,perf1,perf2\nAna,20,18,22,25,27\nBen,{},0,0,1,1\n",
            cell
        );
        match load_panel_sheet(Cursor::new(data)) {
            Err(JudgeError::Validation(msg)) => assert!(msg.contains("Panel row 2"), "{}", msg),
            other => panic!("expected Validation for '{}', got {:?}", cell, other),
        }
    }
}

#[test]
fn test_panel_sheet_missing_file_is_io_error() {
    assert!(matches!(
        load_panel_sheet_from_file("/definitely/not/here.csv"),
        Err(JudgeError::Io(_))
    ));
}

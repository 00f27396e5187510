use super::types::Tier::{Variable, D1, D2, D3, D4};
use super::{
    Capability, DeductionDefinition, FeatureDefinition, FeatureEffect, GradeDefinition,
    LevelDefinition, RuleBook, TrickDefinition,
};

pub const TIME_VIOLATION: &str = "Time Violation";

/// (level, factor)
const LEVELS: [(u8, f64); 5] = [(1, 2.0), (2, 4.0), (3, 6.0), (4, 8.0), (5, 10.0)];

/// (grade, factor). Monotonic; grade 0 is neutral.
const GRADES: [(i8, f64); 7] = [
    (-3, 0.7),
    (-2, 0.8),
    (-1, 0.9),
    (0, 1.0),
    (1, 1.05),
    (2, 1.1),
    (3, 1.15),
];

impl RuleBook {
    /// The built-in competition tables.
    pub fn standard() -> Self {
        let tricks = vec![
            TrickDefinition::new("Toss/High", "T", &[(D1, 0.5), (D2, 1.0), (D3, 1.5), (D4, 2.0)]),
            TrickDefinition::new("Sun", "S", &[(D1, 0.6), (D2, 1.2), (Variable, 1.0)]),
            TrickDefinition::new("Whip", "W", &[(D1, 0.4), (D2, 0.8), (D3, 1.3)]),
            TrickDefinition::new("Orbit", "O", &[(D2, 1.1), (D3, 1.6), (D4, 2.2)]),
            TrickDefinition::new("Cradle", "C", &[(D1, 0.3), (D2, 0.7), (Variable, 0.9)]),
            TrickDefinition::new("Vertax", "V", &[(D3, 2.5), (D4, 3.5), (Variable, 3.0)]),
            TrickDefinition::new("Stick Release", "R", &[(D2, 1.4), (D3, 2.0), (D4, 2.8)]),
            TrickDefinition::new("Multi", "M", &[(D3, 2.4), (D4, 3.2), (Variable, 2.6)]),
        ];

        let features = vec![
            feature("Turn-360", "T1", Capability::Turn, FeatureEffect::Multiply(1.7)),
            feature("Turn-720", "T2", Capability::Turn, FeatureEffect::Multiply(2.2)),
            feature("Turn-1080", "T3", Capability::Turn, FeatureEffect::Multiply(2.8)),
            feature("Leg Pass", "LP", Capability::Other, FeatureEffect::Multiply(1.2)),
            feature("Back Catch", "BC", Capability::Other, FeatureEffect::Multiply(1.3)),
            feature("Blind", "BL", Capability::Other, FeatureEffect::Add(0.5)),
            feature("Cartwheel", "CW", Capability::Other, FeatureEffect::Add(1.0)),
        ];

        let deductions = vec![
            deduction("Unintentional Drop", "Drop", -0.3, false),
            deduction("Stick Drop", "SD", -0.5, false),
            deduction("Tangle", "TG", -0.2, false),
            deduction("Out of Bounds", "OB", -0.5, false),
            deduction(TIME_VIOLATION, "TV", -1.0, true),
        ];

        Self {
            tricks,
            levels: LEVELS
                .iter()
                .map(|&(level, factor)| LevelDefinition { level, factor })
                .collect(),
            features,
            grades: GRADES
                .iter()
                .map(|&(grade, factor)| GradeDefinition { grade, factor })
                .collect(),
            deductions,
        }
    }
}

fn feature(
    name: &str,
    abbreviation: &str,
    capability: Capability,
    effect: FeatureEffect,
) -> FeatureDefinition {
    FeatureDefinition {
        name: name.to_string(),
        abbreviation: abbreviation.to_string(),
        capability,
        effect,
    }
}

fn deduction(name: &str, abbreviation: &str, points: f64, excludes_trick: bool) -> DeductionDefinition {
    DeductionDefinition {
        name: name.to_string(),
        abbreviation: abbreviation.to_string(),
        points,
        excludes_trick,
    }
}

pub mod loader;
pub mod standard;
pub mod types;

pub use self::types::{
    Capability, DeductionDefinition, FeatureDefinition, FeatureEffect, GradeDefinition,
    LevelDefinition, Tier, TrickDefinition,
};
use crate::error::{JudgeError, JudgeResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const LEVEL_RANGE: std::ops::RangeInclusive<u8> = 1..=5;
pub const GRADE_RANGE: std::ops::RangeInclusive<i8> = -3..=3;

/// Static reference data for one competition: tricks, levels, features,
/// execution grades and deductions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleBook {
    pub tricks: Vec<TrickDefinition>,
    pub levels: Vec<LevelDefinition>,
    pub features: Vec<FeatureDefinition>,
    pub grades: Vec<GradeDefinition>,
    pub deductions: Vec<DeductionDefinition>,
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleBook {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> JudgeResult<Self> {
        let path = path.as_ref();
        info!("Loading rule book from {:?}", path);
        let content = fs::read_to_string(path)?;
        let book: RuleBook = serde_json::from_str(&content)?;
        book.validate()?;
        Ok(book)
    }

    /// Standard tables with the trick list replaced by a CSV catalog.
    pub fn with_trick_catalog<P: AsRef<Path>>(path: P) -> JudgeResult<Self> {
        let book = RuleBook {
            tricks: loader::load_trick_catalog_from_file(path)?,
            ..Self::standard()
        };
        book.validate()?;
        Ok(book)
    }

    /// Resolves the optional rule-book path used by the binary. A `.csv` path
    /// is read as a trick catalog, anything else as a JSON rule book.
    pub fn load_or_standard(path: Option<&str>) -> JudgeResult<Self> {
        match path {
            Some(p) if p.to_ascii_lowercase().ends_with(".csv") => Self::with_trick_catalog(p),
            Some(p) => Self::load_from_file(p),
            None => {
                debug!("No rule book given, using standard tables");
                Ok(Self::standard())
            }
        }
    }

    pub fn trick(&self, name: &str) -> JudgeResult<&TrickDefinition> {
        self.tricks
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| JudgeError::UnknownTrick(name.to_string()))
    }

    /// Base score of an offered trick/tier combination.
    pub fn base_score(&self, name: &str, tier: Tier) -> JudgeResult<f64> {
        self.trick(name)?
            .base_score(tier)
            .ok_or_else(|| JudgeError::NotOffered {
                trick: name.to_string(),
                tier,
            })
    }

    pub fn tricks_offered_at(&self, tier: Tier) -> Vec<&TrickDefinition> {
        self.tricks
            .iter()
            .filter(|t| t.base_score(tier).is_some())
            .collect()
    }

    pub fn level_factor(&self, level: u8) -> JudgeResult<f64> {
        self.levels
            .iter()
            .find(|l| l.level == level)
            .map(|l| l.factor)
            .ok_or(JudgeError::UnknownLevel(level))
    }

    pub fn feature(&self, name: &str) -> JudgeResult<&FeatureDefinition> {
        self.features
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| JudgeError::UnknownFeature(name.to_string()))
    }

    pub fn execution_factor(&self, grade: i8) -> JudgeResult<f64> {
        self.grades
            .iter()
            .find(|g| g.grade == grade)
            .map(|g| g.factor)
            .ok_or(JudgeError::UnknownGrade(grade))
    }

    pub fn deduction(&self, name: &str) -> JudgeResult<&DeductionDefinition> {
        self.deductions
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| JudgeError::UnknownDeduction(name.to_string()))
    }

    pub fn validate(&self) -> JudgeResult<()> {
        let mut names = HashSet::new();
        let mut abbreviations = HashSet::new();
        for t in &self.tricks {
            if !names.insert(t.name.as_str()) || !abbreviations.insert(t.abbreviation.as_str()) {
                return Err(invalid(format!("Duplicate trick '{}'", t.name)));
            }
            if t.base_scores.values().any(|&s| s < 0.0 || !s.is_finite()) {
                return Err(invalid(format!("Trick '{}' has a negative base score", t.name)));
            }
            if t.offered_tiers().is_empty() {
                return Err(invalid(format!("Trick '{}' is not offered at any tier", t.name)));
            }
        }

        for level in LEVEL_RANGE {
            let factor = self.level_factor(level)?;
            if factor <= 0.0 {
                return Err(invalid(format!("Level {} factor must be positive", level)));
            }
        }
        if self.levels.len() != LEVEL_RANGE.count() {
            return Err(invalid("Levels must be exactly 1..=5".to_string()));
        }

        for grade in GRADE_RANGE {
            let factor = self.execution_factor(grade)?;
            if factor <= 0.0 {
                return Err(invalid(format!("Grade {} factor must be positive", grade)));
            }
        }
        if self.grades.len() != GRADE_RANGE.count() {
            return Err(invalid("Grades must be exactly -3..=3".to_string()));
        }
        if self.execution_factor(0)? != 1.0 {
            return Err(invalid("Grade 0 must have factor 1.0".to_string()));
        }

        let mut feature_names = HashSet::new();
        for f in &self.features {
            if !feature_names.insert(f.name.as_str()) {
                return Err(invalid(format!("Duplicate feature '{}'", f.name)));
            }
        }

        let mut deduction_names = HashSet::new();
        for d in &self.deductions {
            if !deduction_names.insert(d.name.as_str()) {
                return Err(invalid(format!("Duplicate deduction '{}'", d.name)));
            }
            if d.points >= 0.0 {
                return Err(invalid(format!(
                    "Deduction '{}' must carry negative points",
                    d.name
                )));
            }
        }
        if self.deductions.iter().filter(|d| d.excludes_trick).count() > 1 {
            return Err(invalid(
                "At most one deduction may exclude trick selection".to_string(),
            ));
        }

        debug!(
            "Rule book valid: {} tricks, {} features, {} deductions",
            self.tricks.len(),
            self.features.len(),
            self.deductions.len()
        );
        Ok(())
    }
}

fn invalid(msg: String) -> JudgeError {
    JudgeError::Validation(msg)
}

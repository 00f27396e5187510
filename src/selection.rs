//! The judge's in-progress choices for one attempt.
//!
//! Every operation takes the current selection by value and returns the next
//! one. Unknown identifiers are rejected with an error instead of being
//! ignored, so integration bugs in the calling layer surface immediately.

use crate::error::{JudgeError, JudgeResult};
use crate::rules::{RuleBook, Tier, TrickDefinition};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickChoice {
    pub name: String,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    trick: Option<TrickChoice>,
    level: Option<u8>,
    features: Vec<String>,
    grade: i8,
    deductions: Vec<String>,
}

/// What a selection scores as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attempt<'a> {
    /// Nothing selected. Scores 0 and is not submittable.
    Empty,
    /// Deductions without a trick. Levels, features and grade do not apply.
    DeductionOnly { deductions: &'a [String] },
    Trick {
        trick: &'a TrickChoice,
        level: Option<u8>,
        features: &'a [String],
        grade: i8,
        deductions: &'a [String],
    },
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trick(&self) -> Option<&TrickChoice> {
        self.trick.as_ref()
    }

    pub fn level(&self) -> Option<u8> {
        self.level
    }

    /// Selected features, in selection order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn grade(&self) -> i8 {
        self.grade
    }

    /// Selected deductions, in selection order.
    pub fn deductions(&self) -> &[String] {
        &self.deductions
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.attempt(), Attempt::Empty)
    }

    pub fn attempt(&self) -> Attempt<'_> {
        match &self.trick {
            Some(trick) => Attempt::Trick {
                trick,
                level: self.level,
                features: &self.features,
                grade: self.grade,
                deductions: &self.deductions,
            },
            None if self.deductions.is_empty() => Attempt::Empty,
            None => Attempt::DeductionOnly {
                deductions: &self.deductions,
            },
        }
    }

    /// Selects a trick, or clears it when the same trick and tier is already selected.
    ///
    /// A trick-excluding deduction (Time Violation) already in the set stays
    /// there. The exclusion only runs from the deduction side.
    pub fn select_trick(mut self, rules: &RuleBook, name: &str, tier: Tier) -> JudgeResult<Self> {
        rules.base_score(name, tier)?;

        let already = self
            .trick
            .as_ref()
            .is_some_and(|t| t.name == name && t.tier == tier);
        if already {
            debug!("Trick {} ({}) toggled off", name, tier);
            self.trick = None;
            return Ok(self);
        }

        self.trick = Some(TrickChoice {
            name: name.to_string(),
            tier,
        });
        Ok(self)
    }

    /// Adds or removes a deduction.
    ///
    /// Adding a trick-excluding deduction while a trick is selected resets the
    /// trick, level, features and grade first.
    pub fn toggle_deduction(mut self, rules: &RuleBook, name: &str) -> JudgeResult<Self> {
        let def = rules.deduction(name)?;

        if let Some(pos) = self.deductions.iter().position(|d| d == name) {
            self.deductions.remove(pos);
            return Ok(self);
        }

        if def.excludes_trick && self.trick.is_some() {
            debug!("{} clears the selected trick", name);
            self.trick = None;
            self.level = None;
            self.features.clear();
            self.grade = 0;
        }
        self.deductions.push(name.to_string());
        Ok(self)
    }

    /// Turn features replace each other; other features toggle independently.
    pub fn toggle_feature(mut self, rules: &RuleBook, name: &str) -> JudgeResult<Self> {
        let def = rules.feature(name)?;

        if let Some(pos) = self.features.iter().position(|f| f == name) {
            self.features.remove(pos);
            return Ok(self);
        }

        if def.is_turn() {
            self.features.retain(|f| {
                rules
                    .feature(f)
                    .map(|other| !other.is_turn())
                    .unwrap_or(true)
            });
        }
        self.features.push(name.to_string());
        Ok(self)
    }

    pub fn toggle_level(mut self, rules: &RuleBook, level: u8) -> JudgeResult<Self> {
        rules.level_factor(level)?;
        self.level = if self.level == Some(level) {
            None
        } else {
            Some(level)
        };
        Ok(self)
    }

    pub fn set_execution_grade(mut self, rules: &RuleBook, grade: i8) -> JudgeResult<Self> {
        rules.execution_factor(grade)?;
        self.grade = grade;
        Ok(self)
    }

    /// Back to the empty selection.
    pub fn cleared(self) -> Self {
        Self::default()
    }
}

impl TrickChoice {
    /// Looks up the trick definition and its base score at the chosen tier.
    pub fn resolve<'r>(&self, rules: &'r RuleBook) -> JudgeResult<(&'r TrickDefinition, f64)> {
        let def = rules.trick(&self.name)?;
        let base = def.base_score(self.tier).ok_or_else(|| JudgeError::NotOffered {
            trick: self.name.clone(),
            tier: self.tier,
        })?;
        Ok((def, base))
    }
}

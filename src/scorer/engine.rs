use super::encode;
use super::types::{ScorePreview, ScoreRecord};
use crate::error::JudgeResult;
use crate::rules::{DeductionDefinition, FeatureDefinition, RuleBook, Tier, TrickDefinition};
use crate::selection::{Attempt, Selection};
use tracing::debug;
use uuid::Uuid;

/// One term of the scoring pipeline, resolved against the rule book.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step<'r> {
    Base {
        trick: &'r TrickDefinition,
        tier: Tier,
        score: f64,
    },
    Level {
        level: u8,
        factor: f64,
    },
    Feature(&'r FeatureDefinition),
    Execution {
        grade: i8,
        factor: f64,
    },
    Deduction(&'r DeductionDefinition),
}

impl Step<'_> {
    pub fn apply(&self, score: f64) -> f64 {
        match self {
            Step::Base { score: base, .. } => *base,
            Step::Level { factor, .. } => score * factor,
            Step::Feature(def) => def.effect.apply(score),
            Step::Execution { factor, .. } => score * factor,
            Step::Deduction(def) => score + def.points,
        }
    }
}

/// A selection resolved into its ordered steps.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttempt<'r> {
    pub has_trick: bool,
    pub steps: Vec<Step<'r>>,
}

impl ResolvedAttempt<'_> {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn final_score(&self) -> f64 {
        self.steps.iter().fold(0.0, |score, step| step.apply(score))
    }
}

/// Orders a selection as trick, level, features, execution, deductions.
///
/// Deductions are additive and always come last so that no multiplier ever
/// scales them.
pub fn resolve<'r>(rules: &'r RuleBook, selection: &Selection) -> JudgeResult<ResolvedAttempt<'r>> {
    match selection.attempt() {
        Attempt::Empty => Ok(ResolvedAttempt {
            has_trick: false,
            steps: Vec::new(),
        }),
        Attempt::DeductionOnly { deductions } => Ok(ResolvedAttempt {
            has_trick: false,
            steps: deduction_steps(rules, deductions)?,
        }),
        Attempt::Trick {
            trick,
            level,
            features,
            grade,
            deductions,
        } => {
            let (def, base) = trick.resolve(rules)?;
            let mut steps = vec![Step::Base {
                trick: def,
                tier: trick.tier,
                score: base,
            }];

            if let Some(level) = level {
                steps.push(Step::Level {
                    level,
                    factor: rules.level_factor(level)?,
                });
            }

            for name in features {
                steps.push(Step::Feature(rules.feature(name)?));
            }

            // Grade 0 is a no-op factor but stays in the pipeline.
            steps.push(Step::Execution {
                grade,
                factor: rules.execution_factor(grade)?,
            });

            steps.extend(deduction_steps(rules, deductions)?);

            Ok(ResolvedAttempt {
                has_trick: true,
                steps,
            })
        }
    }
}

fn deduction_steps<'r>(rules: &'r RuleBook, names: &[String]) -> JudgeResult<Vec<Step<'r>>> {
    names
        .iter()
        .map(|name| rules.deduction(name).map(Step::Deduction))
        .collect()
}

pub fn compute_final_score(rules: &RuleBook, selection: &Selection) -> JudgeResult<f64> {
    Ok(resolve(rules, selection)?.final_score())
}

pub fn preview(rules: &RuleBook, selection: &Selection) -> JudgeResult<ScorePreview> {
    let resolved = resolve(rules, selection)?;
    Ok(ScorePreview {
        final_score: resolved.final_score(),
        identifier: encode::identifier(&resolved),
        description: encode::description(&resolved),
    })
}

/// Finalizes a selection. Returns `None` for an empty selection.
pub fn build_record(rules: &RuleBook, selection: &Selection) -> JudgeResult<Option<ScoreRecord>> {
    let resolved = resolve(rules, selection)?;
    if resolved.is_empty() {
        return Ok(None);
    }

    let mut record = ScoreRecord {
        id: Uuid::new_v4(),
        trick_name: None,
        tier: None,
        base_score: 0.0,
        features: Vec::new(),
        execution_grade: 0,
        level: None,
        deductions: Vec::new(),
        final_score: resolved.final_score(),
        description: encode::description(&resolved),
        identifier: encode::identifier(&resolved),
    };

    for step in &resolved.steps {
        match *step {
            Step::Base { trick, tier, score } => {
                record.trick_name = Some(trick.name.clone());
                record.tier = Some(tier);
                record.base_score = score;
            }
            Step::Level { level, .. } => record.level = Some(level),
            Step::Feature(def) => record.features.push(def.clone()),
            Step::Execution { grade, .. } => record.execution_grade = grade,
            Step::Deduction(def) => record.deductions.push(def.clone()),
        }
    }

    debug!(
        "Record {} -> {} ({})",
        record.identifier, record.final_score, record.description
    );
    Ok(Some(record))
}

pub mod encode;
pub mod engine;
pub mod format;
pub mod types;

pub use self::engine::{resolve, ResolvedAttempt, Step};
pub use self::format::format_score;
pub use self::types::{ScorePreview, ScoreRecord};
use crate::error::JudgeResult;
use crate::rules::RuleBook;
use crate::selection::Selection;

/// Applies selections against one rule book.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub rules: RuleBook,
}

impl Scorer {
    pub fn new(rules: RuleBook) -> Self {
        Self { rules }
    }

    pub fn final_score(&self, selection: &Selection) -> JudgeResult<f64> {
        engine::compute_final_score(&self.rules, selection)
    }

    pub fn identifier(&self, selection: &Selection) -> JudgeResult<String> {
        Ok(encode::identifier(&resolve(&self.rules, selection)?))
    }

    pub fn description(&self, selection: &Selection) -> JudgeResult<String> {
        Ok(encode::description(&resolve(&self.rules, selection)?))
    }

    pub fn preview(&self, selection: &Selection) -> JudgeResult<ScorePreview> {
        engine::preview(&self.rules, selection)
    }

    pub fn record(&self, selection: &Selection) -> JudgeResult<Option<ScoreRecord>> {
        engine::build_record(&self.rules, selection)
    }
}

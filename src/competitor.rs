use crate::config::RankingParams;
use crate::error::{JudgeError, JudgeResult};
use crate::ranking::{performance_total, reported_total, snap_performance_score, technical_total};
use crate::scorer::ScoreRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// The two disjoint judging categories. A competitor belongs to exactly one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Technical,
    Performance,
}

pub const PERFORMANCE_CATEGORY_NAMES: [&str; 6] = [
    "Choreography",
    "Musicality",
    "Flow",
    "Stage Presence",
    "Creativity",
    "Variety",
];

/// A competitor's in-progress entries before they are saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorSheet {
    pub name: String,
    pub category: Category,
    pub records: Vec<ScoreRecord>,
    pub performance_scores: Vec<f64>,
    pub disqualified: bool,
}

impl CompetitorSheet {
    pub fn new(name: &str, category: Category, params: &RankingParams) -> Self {
        Self {
            name: name.to_string(),
            category,
            records: Vec::new(),
            performance_scores: vec![0.0; params.performance_categories],
            disqualified: false,
        }
    }

    pub fn push(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }

    pub fn remove(&mut self, id: Uuid) -> Option<ScoreRecord> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(pos))
    }

    /// Stores a category score snapped onto the configured grid.
    pub fn set_performance_score(
        &mut self,
        index: usize,
        value: f64,
        params: &RankingParams,
    ) -> JudgeResult<f64> {
        if !value.is_finite() {
            return Err(JudgeError::Validation(format!(
                "Performance score {} is not a finite number",
                value
            )));
        }
        let count = self.performance_scores.len();
        let slot = self.performance_scores.get_mut(index).ok_or_else(|| {
            JudgeError::Validation(format!(
                "Performance category {} out of range (0..{})",
                index, count
            ))
        })?;
        *slot = snap_performance_score(value, params);
        Ok(*slot)
    }

    /// Running total for the sheet's category, ignoring disqualification.
    pub fn raw_total(&self) -> f64 {
        match self.category {
            Category::Technical => technical_total(&self.records),
            Category::Performance => performance_total(&self.performance_scores),
        }
    }

    pub fn finalize(self) -> CompetitorRecord {
        CompetitorRecord {
            id: Uuid::new_v4(),
            name: self.name,
            category: self.category,
            records: self.records,
            performance_scores: self.performance_scores,
            disqualified: self.disqualified,
            saved_at: Utc::now(),
        }
    }
}

/// A saved competitor. Disqualification zeroes the reported total but keeps
/// every underlying record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRecord {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub records: Vec<ScoreRecord>,
    #[serde(default)]
    pub performance_scores: Vec<f64>,
    #[serde(default)]
    pub disqualified: bool,
    pub saved_at: DateTime<Utc>,
}

impl CompetitorRecord {
    pub fn raw_total(&self) -> f64 {
        match self.category {
            Category::Technical => technical_total(&self.records),
            Category::Performance => performance_total(&self.performance_scores),
        }
    }

    pub fn reported_total(&self) -> f64 {
        reported_total(self.raw_total(), self.disqualified)
    }
}

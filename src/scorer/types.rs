use crate::rules::{DeductionDefinition, FeatureDefinition, Tier};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A finalized attempt. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: Uuid,
    // None for deduction-only entries
    pub trick_name: Option<String>,
    pub tier: Option<Tier>,
    pub base_score: f64,

    // Snapshots, in application order
    pub features: Vec<FeatureDefinition>,
    pub execution_grade: i8,
    pub level: Option<u8>,
    pub deductions: Vec<DeductionDefinition>,

    pub final_score: f64,
    pub description: String,
    pub identifier: String,
}

impl ScoreRecord {
    pub fn is_deduction_only(&self) -> bool {
        self.trick_name.is_none()
    }
}

/// Live result for the selection being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePreview {
    pub final_score: f64,
    pub identifier: String,
    pub description: String,
}

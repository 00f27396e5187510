use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// Difficulty classification of a trick.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Tier {
    #[strum(serialize = "1D")]
    #[serde(rename = "1D")]
    D1,
    #[strum(serialize = "2D")]
    #[serde(rename = "2D")]
    D2,
    #[strum(serialize = "3D")]
    #[serde(rename = "3D")]
    D3,
    #[strum(serialize = "4D")]
    #[serde(rename = "4D")]
    D4,
    /// Variable difficulty. Carries no numeric prefix in identifiers.
    #[strum(serialize = "VD")]
    #[serde(rename = "VD")]
    Variable,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::D1 => "1D",
            Self::D2 => "2D",
            Self::D3 => "3D",
            Self::D4 => "4D",
            Self::Variable => "VD",
        }
    }

    /// Leading digits of the label ("3D" -> "3", "VD" -> "").
    pub fn prefix(&self) -> &'static str {
        let label = self.label();
        let end = label
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(label.len());
        &label[..end]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickDefinition {
    pub name: String,
    pub abbreviation: String,
    /// Base score per tier. A score of 0 (or a missing tier) means "not offered".
    pub base_scores: BTreeMap<Tier, f64>,
}

impl TrickDefinition {
    pub fn new(name: &str, abbreviation: &str, scores: &[(Tier, f64)]) -> Self {
        Self {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            base_scores: scores.iter().copied().collect(),
        }
    }

    pub fn base_score(&self, tier: Tier) -> Option<f64> {
        self.base_scores
            .get(&tier)
            .copied()
            .filter(|&score| score > 0.0)
    }

    pub fn offered_tiers(&self) -> Vec<Tier> {
        self.base_scores
            .iter()
            .filter(|(_, score)| **score > 0.0)
            .map(|(tier, _)| *tier)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub level: u8,
    pub factor: f64,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Capability {
    /// Rotations. At most one turn feature per attempt.
    Turn,
    Other,
}

/// A feature modifies the running score either by a factor or by points, never both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureEffect {
    Multiply(f64),
    Add(f64),
}

impl FeatureEffect {
    pub fn apply(&self, score: f64) -> f64 {
        match *self {
            Self::Multiply(factor) => score * factor,
            Self::Add(points) => score + points,
        }
    }

    /// The factor or the points, whichever this effect carries.
    pub fn value(&self) -> f64 {
        match *self {
            Self::Multiply(v) | Self::Add(v) => v,
        }
    }

    pub fn operator(&self) -> char {
        match self {
            Self::Multiply(_) => '×',
            Self::Add(_) => '+',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDefinition {
    pub name: String,
    pub abbreviation: String,
    pub capability: Capability,
    pub effect: FeatureEffect,
}

impl FeatureDefinition {
    pub fn is_turn(&self) -> bool {
        self.capability == Capability::Turn
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeDefinition {
    pub grade: i8,
    pub factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionDefinition {
    pub name: String,
    pub abbreviation: String,
    pub points: f64,
    /// Set on the Time Violation deduction: selecting it discards the trick.
    #[serde(default)]
    pub excludes_trick: bool,
}

//! Competitor totals, normalization onto fixed ceilings, and the ranking order
//! shared by every standings view.

pub mod panel;

pub use self::panel::{load_panel_sheet, panel_standings, PanelEntry, PanelStanding};
use crate::config::RankingParams;
use crate::scorer::ScoreRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Technical totals are rescaled so the best one lands here.
pub const TECHNICAL_CEILING: f64 = 70.0;

pub trait Ranked {
    fn is_disqualified(&self) -> bool;
}

/// Disqualified entrants last, then by score descending. Equal keys compare
/// as equal so a stable sort keeps input order.
pub fn ranking_order<T, F>(a: &T, b: &T, score: F) -> Ordering
where
    T: Ranked,
    F: Fn(&T) -> f64,
{
    a.is_disqualified()
        .cmp(&b.is_disqualified())
        .then_with(|| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal))
}

pub fn rank_by<T, F>(items: &mut [T], score: F)
where
    T: Ranked,
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| ranking_order(a, b, &score));
}

pub fn technical_total(records: &[ScoreRecord]) -> f64 {
    records.iter().map(|r| r.final_score).sum()
}

pub fn performance_total(scores: &[f64]) -> f64 {
    scores.iter().sum()
}

/// The total a competitor is shown with. Zero when disqualified.
pub fn reported_total(total: f64, disqualified: bool) -> f64 {
    if disqualified {
        0.0
    } else {
        total
    }
}

/// Clamps a performance category score into `[0, max]` on the configured step grid.
pub fn snap_performance_score(value: f64, params: &RankingParams) -> f64 {
    let clamped = value.clamp(0.0, params.performance_max);
    let snapped = (clamped / params.performance_step).round() * params.performance_step;
    snapped.min(params.performance_max)
}

/// `total / highest * ceiling`; 0 when there is no positive highest total.
pub fn scale_to_ceiling(total: f64, highest: f64, ceiling: f64) -> f64 {
    if highest <= 0.0 {
        return 0.0;
    }
    total / highest * ceiling
}

pub fn adjusted_score(total: f64, highest_seen: f64) -> f64 {
    scale_to_ceiling(total, highest_seen, TECHNICAL_CEILING)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalScore {
    pub normalized_technical: f64,
    pub average_performance: f64,
    pub final_score: f64,
}

/// Blends three technical judges and two performance judges.
pub fn final_ranking_score(
    technical: [f64; 3],
    performance: [f64; 2],
    highest_combined_technical: f64,
    disqualified: bool,
) -> FinalScore {
    final_ranking_score_with_ceiling(
        technical,
        performance,
        highest_combined_technical,
        disqualified,
        TECHNICAL_CEILING,
    )
}

pub fn final_ranking_score_with_ceiling(
    technical: [f64; 3],
    performance: [f64; 2],
    highest_combined_technical: f64,
    disqualified: bool,
    ceiling: f64,
) -> FinalScore {
    if disqualified {
        return FinalScore::default();
    }
    let combined: f64 = technical.iter().sum();
    let normalized_technical = scale_to_ceiling(combined, highest_combined_technical, ceiling);
    let average_performance = performance.iter().sum::<f64>() / performance.len() as f64;
    FinalScore {
        normalized_technical,
        average_performance,
        final_score: normalized_technical + average_performance,
    }
}

/// Highest value among qualified entrants; 0 when there are none.
pub fn highest_qualified<I>(entries: I) -> f64
where
    I: IntoIterator<Item = (f64, bool)>,
{
    entries
        .into_iter()
        .filter(|&(_, disqualified)| !disqualified)
        .map(|(total, _)| total)
        .fold(0.0, f64::max)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalStanding {
    pub name: String,
    pub total: f64,
    pub adjusted: f64,
    pub disqualified: bool,
}

impl Ranked for TechnicalStanding {
    fn is_disqualified(&self) -> bool {
        self.disqualified
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStanding {
    pub name: String,
    pub total: f64,
    pub disqualified: bool,
}

impl Ranked for PerformanceStanding {
    fn is_disqualified(&self) -> bool {
        self.disqualified
    }
}

use diabolo_judge::competitor::Category;
use diabolo_judge::error::JudgeResult;
use diabolo_judge::ranking::{PanelStanding, PerformanceStanding, TechnicalStanding};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct StandingRow<'a> {
    category: Category,
    // Empty for disqualified competitors
    rank: Option<usize>,
    name: &'a str,
    total: f64,
    adjusted: Option<f64>,
    disqualified: bool,
}

#[derive(Debug, Serialize)]
struct PanelRow<'a> {
    rank: Option<usize>,
    name: &'a str,
    normalized_technical: f64,
    average_performance: f64,
    final_score: f64,
    disqualified: bool,
}

fn rank(position: usize, disqualified: bool) -> Option<usize> {
    (!disqualified).then_some(position + 1)
}

/// Both standings in one file, technical first, each in ranked order.
pub fn standings<P: AsRef<Path>>(
    path: P,
    technical: &[TechnicalStanding],
    performance: &[PerformanceStanding],
) -> JudgeResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for (i, s) in technical.iter().enumerate() {
        wtr.serialize(StandingRow {
            category: Category::Technical,
            rank: rank(i, s.disqualified),
            name: &s.name,
            total: s.total,
            adjusted: Some(s.adjusted),
            disqualified: s.disqualified,
        })?;
    }
    for (i, s) in performance.iter().enumerate() {
        wtr.serialize(StandingRow {
            category: Category::Performance,
            rank: rank(i, s.disqualified),
            name: &s.name,
            total: s.total,
            adjusted: None,
            disqualified: s.disqualified,
        })?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn panel<P: AsRef<Path>>(path: P, standings: &[PanelStanding]) -> JudgeResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for (i, s) in standings.iter().enumerate() {
        wtr.serialize(PanelRow {
            rank: rank(i, s.disqualified),
            name: &s.name,
            normalized_technical: s.score.normalized_technical,
            average_performance: s.score.average_performance,
            final_score: s.score.final_score,
            disqualified: s.disqualified,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

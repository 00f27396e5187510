use super::{final_ranking_score_with_ceiling, highest_qualified, rank_by, FinalScore, Ranked};
use crate::error::{JudgeError, JudgeResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// One entrant as seen by the full panel: three technical judges, two performance judges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelEntry {
    pub name: String,
    pub technical: [f64; 3],
    pub performance: [f64; 2],
    #[serde(default)]
    pub disqualified: bool,
}

impl PanelEntry {
    pub fn combined_technical(&self) -> f64 {
        self.technical.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelStanding {
    pub name: String,
    #[serde(flatten)]
    pub score: FinalScore,
    pub disqualified: bool,
}

impl Ranked for PanelStanding {
    fn is_disqualified(&self) -> bool {
        self.disqualified
    }
}

/// Scores every entrant against the best qualified combined technical total and ranks them.
pub fn panel_standings(entries: &[PanelEntry], ceiling: f64) -> Vec<PanelStanding> {
    let highest = highest_qualified(
        entries
            .iter()
            .map(|e| (e.combined_technical(), e.disqualified)),
    );
    debug!("Panel: {} entrants, highest technical {}", entries.len(), highest);

    let mut standings: Vec<PanelStanding> = entries
        .iter()
        .map(|e| PanelStanding {
            name: e.name.clone(),
            score: final_ranking_score_with_ceiling(
                e.technical,
                e.performance,
                highest,
                e.disqualified,
                ceiling,
            ),
            disqualified: e.disqualified,
        })
        .collect();

    rank_by(&mut standings, |s| s.score.final_score);
    standings
}

/// Reads `name,tech1,tech2,tech3,perf1,perf2[,disqualified]` rows.
pub fn load_panel_sheet<R: Read>(reader: R) -> JudgeResult<Vec<PanelEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() < 6 {
            return Err(JudgeError::Validation(format!(
                "Panel row {}: expected at least 6 columns, found {}",
                row_idx + 1,
                rec.len()
            )));
        }

        // "NaN" and "inf" parse as f64 but would poison the ranking.
        let num = |col: usize| -> JudgeResult<f64> {
            rec[col]
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    JudgeError::Validation(format!(
                        "Panel row {}: '{}' is not a number",
                        row_idx + 1,
                        &rec[col]
                    ))
                })
        };

        let disqualified = match rec.get(6).unwrap_or("") {
            "" => false,
            flag => parse_flag(flag).ok_or_else(|| {
                JudgeError::Validation(format!(
                    "Panel row {}: invalid disqualified flag '{}'",
                    row_idx + 1,
                    flag
                ))
            })?,
        };

        entries.push(PanelEntry {
            name: rec[0].to_string(),
            technical: [num(1)?, num(2)?, num(3)?],
            performance: [num(4)?, num(5)?],
            disqualified,
        });
    }

    Ok(entries)
}

pub fn load_panel_sheet_from_file<P: AsRef<Path>>(path: P) -> JudgeResult<Vec<PanelEntry>> {
    info!("Loading panel sheet from {:?}", path.as_ref());
    load_panel_sheet(File::open(path)?)
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "dq" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

use super::{Tier, TrickDefinition};
use crate::error::{JudgeError, JudgeResult};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// Reads a trick catalog with header `name,abbreviation,1D,2D,3D,4D,VD`.
/// Blank or zero cells mark a tier as not offered.
pub fn load_trick_catalog<R: Read>(reader: R) -> JudgeResult<Vec<TrickDefinition>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut tier_columns = Vec::new();
    for tier in Tier::iter() {
        if let Some(idx) = headers.iter().position(|h| h.eq_ignore_ascii_case(tier.label())) {
            tier_columns.push((tier, idx));
        }
    }
    if tier_columns.is_empty() {
        return Err(JudgeError::Validation(
            "Trick catalog has no tier columns".to_string(),
        ));
    }

    let mut tricks = Vec::new();
    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() < 2 || rec[0].is_empty() {
            debug!("Skipping short catalog row {}", row_idx + 1);
            continue;
        }

        let mut base_scores = BTreeMap::new();
        for &(tier, idx) in &tier_columns {
            let cell = rec.get(idx).unwrap_or("");
            if cell.is_empty() {
                continue;
            }
            let score: f64 = cell.parse().map_err(|_| {
                JudgeError::Validation(format!(
                    "Row {}: invalid base score '{}' for {} at {}",
                    row_idx + 1,
                    cell,
                    &rec[0],
                    tier
                ))
            })?;
            if score > 0.0 {
                base_scores.insert(tier, score);
            }
        }

        tricks.push(TrickDefinition {
            name: rec[0].to_string(),
            abbreviation: rec[1].to_string(),
            base_scores,
        });
    }

    Ok(tricks)
}

pub fn load_trick_catalog_from_file<P: AsRef<Path>>(path: P) -> JudgeResult<Vec<TrickDefinition>> {
    info!("Loading trick catalog from {:?}", path.as_ref());
    let file = File::open(path)?;
    load_trick_catalog(file)
}

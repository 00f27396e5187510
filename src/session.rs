//! Orchestration around the pure core: one editing session per competitor
//! being judged, plus the roster of saved competitors. Persistence happens
//! only when the caller asks for it.

use crate::competitor::{Category, CompetitorRecord, CompetitorSheet};
use crate::config::RankingParams;
use crate::error::{JudgeError, JudgeResult};
use crate::ranking::{
    highest_qualified, rank_by, scale_to_ceiling, PerformanceStanding, TechnicalStanding,
};
use crate::rules::{RuleBook, Tier};
use crate::scorer::{ScorePreview, ScoreRecord, Scorer};
use crate::selection::Selection;
use crate::store::RecordStore;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct JudgingSession {
    scorer: Arc<Scorer>,
    params: RankingParams,
    selection: Selection,
    sheet: CompetitorSheet,
}

impl JudgingSession {
    pub fn new(scorer: Arc<Scorer>, params: RankingParams, name: &str, category: Category) -> Self {
        let sheet = CompetitorSheet::new(name, category, &params);
        Self {
            scorer,
            params,
            selection: Selection::new(),
            sheet,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn sheet(&self) -> &CompetitorSheet {
        &self.sheet
    }

    fn rules(&self) -> &RuleBook {
        &self.scorer.rules
    }

    // The selection only changes when the transition succeeds.
    fn transition<F>(&mut self, op: F) -> JudgeResult<()>
    where
        F: FnOnce(Selection, &RuleBook) -> JudgeResult<Selection>,
    {
        let next = op(self.selection.clone(), self.rules())?;
        self.selection = next;
        Ok(())
    }

    pub fn select_trick(&mut self, name: &str, tier: Tier) -> JudgeResult<()> {
        self.transition(|s, rules| s.select_trick(rules, name, tier))
    }

    pub fn toggle_level(&mut self, level: u8) -> JudgeResult<()> {
        self.transition(|s, rules| s.toggle_level(rules, level))
    }

    pub fn toggle_feature(&mut self, name: &str) -> JudgeResult<()> {
        self.transition(|s, rules| s.toggle_feature(rules, name))
    }

    pub fn toggle_deduction(&mut self, name: &str) -> JudgeResult<()> {
        self.transition(|s, rules| s.toggle_deduction(rules, name))
    }

    pub fn set_execution_grade(&mut self, grade: i8) -> JudgeResult<()> {
        self.transition(|s, rules| s.set_execution_grade(rules, grade))
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::new();
    }

    pub fn preview(&self) -> JudgeResult<ScorePreview> {
        self.scorer.preview(&self.selection)
    }

    /// Turns the current selection into a record on the sheet and resets it.
    ///
    /// An empty selection produces `None` and leaves everything untouched.
    pub fn submit(&mut self) -> JudgeResult<Option<ScoreRecord>> {
        let Some(record) = self.scorer.record(&self.selection)? else {
            debug!("Empty selection, nothing submitted");
            return Ok(None);
        };
        self.sheet.push(record.clone());
        self.selection = Selection::new();
        Ok(Some(record))
    }

    pub fn remove_record(&mut self, id: Uuid) -> Option<ScoreRecord> {
        self.sheet.remove(id)
    }

    pub fn set_performance_score(&mut self, index: usize, value: f64) -> JudgeResult<f64> {
        self.sheet.set_performance_score(index, value, &self.params)
    }

    pub fn set_disqualified(&mut self, disqualified: bool) {
        self.sheet.disqualified = disqualified;
    }

    /// Total as it would be reported right now.
    pub fn running_total(&self) -> f64 {
        crate::ranking::reported_total(self.sheet.raw_total(), self.sheet.disqualified)
    }

    pub fn finalize(self) -> CompetitorRecord {
        if !self.selection.is_empty() {
            warn!(
                "Finalizing '{}' with an unsubmitted selection; it is discarded",
                self.sheet.name
            );
        }
        self.sheet.finalize()
    }
}

/// All saved competitors, in the order they were saved.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    competitors: Vec<CompetitorRecord>,
    params: RankingParams,
}

impl Roster {
    pub fn new(params: RankingParams) -> Self {
        Self {
            competitors: Vec::new(),
            params,
        }
    }

    pub fn load_from(store: &dyn RecordStore, params: RankingParams) -> JudgeResult<Self> {
        Ok(Self {
            competitors: store.load()?,
            params,
        })
    }

    pub fn save_to(&self, store: &mut dyn RecordStore) -> JudgeResult<()> {
        store.save(&self.competitors)
    }

    pub fn competitors(&self) -> &[CompetitorRecord] {
        &self.competitors
    }

    pub fn add(&mut self, record: CompetitorRecord) {
        info!("Saving competitor '{}' ({})", record.name, record.category);
        self.competitors.push(record);
    }

    /// Folds a finalized sheet into the saved competitor with the same name
    /// and category, or adds it when there is none.
    ///
    /// New attempts are appended after the saved ones. Performance scores are
    /// replaced. The saved disqualification flag is kept.
    pub fn merge(&mut self, record: CompetitorRecord) {
        let existing = self.competitors.iter_mut().find(|c| {
            c.category == record.category && c.name.eq_ignore_ascii_case(&record.name)
        });
        match existing {
            Some(saved) => {
                debug!("Merging {} attempts into '{}'", record.records.len(), saved.name);
                saved.records.extend(record.records);
                if record.category == Category::Performance {
                    saved.performance_scores = record.performance_scores;
                }
                saved.saved_at = record.saved_at;
            }
            None => self.add(record),
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Option<CompetitorRecord> {
        let pos = self.competitors.iter().position(|c| c.id == id)?;
        Some(self.competitors.remove(pos))
    }

    pub fn find(&self, name: &str, category: Category) -> Option<&CompetitorRecord> {
        self.competitors
            .iter()
            .find(|c| c.category == category && c.name.eq_ignore_ascii_case(name))
    }

    /// Categories in which a competitor of this name is saved, in save order.
    pub fn categories_of(&self, name: &str) -> Vec<Category> {
        self.competitors
            .iter()
            .filter(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.category)
            .collect()
    }

    pub fn set_disqualified(
        &mut self,
        name: &str,
        category: Category,
        disqualified: bool,
    ) -> JudgeResult<()> {
        let record = self
            .competitors
            .iter_mut()
            .find(|c| c.category == category && c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                JudgeError::Validation(format!("No saved {} competitor '{}'", category, name))
            })?;
        record.disqualified = disqualified;
        info!("'{}' ({}) disqualified: {}", record.name, category, disqualified);
        Ok(())
    }

    /// Best technical total among qualified technical competitors; 0 when none.
    pub fn highest_technical_total(&self) -> f64 {
        highest_qualified(
            self.competitors
                .iter()
                .filter(|c| c.category == Category::Technical)
                .map(|c| (c.raw_total(), c.disqualified)),
        )
    }

    pub fn technical_standings(&self) -> Vec<TechnicalStanding> {
        let highest = self.highest_technical_total();
        let mut standings: Vec<TechnicalStanding> = self
            .competitors
            .iter()
            .filter(|c| c.category == Category::Technical)
            .map(|c| {
                let total = c.reported_total();
                TechnicalStanding {
                    name: c.name.clone(),
                    total,
                    adjusted: scale_to_ceiling(total, highest, self.params.technical_ceiling),
                    disqualified: c.disqualified,
                }
            })
            .collect();
        rank_by(&mut standings, |s| s.total);
        standings
    }

    pub fn performance_standings(&self) -> Vec<PerformanceStanding> {
        let mut standings: Vec<PerformanceStanding> = self
            .competitors
            .iter()
            .filter(|c| c.category == Category::Performance)
            .map(|c| PerformanceStanding {
                name: c.name.clone(),
                total: c.reported_total(),
                disqualified: c.disqualified,
            })
            .collect();
        rank_by(&mut standings, |s| s.total);
        standings
    }
}

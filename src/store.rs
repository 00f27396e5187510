use crate::competitor::CompetitorRecord;
use crate::error::JudgeResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Persistence for the ordered list of saved competitors.
///
/// `load` returns what was last saved (empty when nothing was); `save`
/// overwrites the whole list.
pub trait RecordStore {
    fn load(&self) -> JudgeResult<Vec<CompetitorRecord>>;
    fn save(&mut self, records: &[CompetitorRecord]) -> JudgeResult<()>;
}

/// Pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> JudgeResult<Vec<CompetitorRecord>> {
        if !self.path.exists() {
            debug!("Store {:?} does not exist yet", self.path);
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<CompetitorRecord> = serde_json::from_str(&content)?;
        info!("Loaded {} competitors from {:?}", records.len(), self.path);
        Ok(records)
    }

    fn save(&mut self, records: &[CompetitorRecord]) -> JudgeResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        info!("Saved {} competitors to {:?}", records.len(), self.path);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<CompetitorRecord>,
}

impl RecordStore for MemoryStore {
    fn load(&self) -> JudgeResult<Vec<CompetitorRecord>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[CompetitorRecord]) -> JudgeResult<()> {
        self.records = records.to_vec();
        Ok(())
    }
}

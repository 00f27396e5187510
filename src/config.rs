use crate::error::{JudgeError, JudgeResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub ranking: RankingParams,
    #[command(flatten)]
    pub display: DisplayParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingParams {
    /// Ceiling the best technical total is scaled to.
    #[arg(long, default_value_t = 70.0)]
    pub technical_ceiling: f64,

    // === PERFORMANCE SHEET ===
    #[arg(long, default_value_t = 6)]
    pub performance_categories: usize,
    #[arg(long, default_value_t = 5.0)]
    pub performance_max: f64,
    #[arg(long, default_value_t = 0.5)]
    pub performance_step: f64,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self {
            technical_ceiling: 70.0,
            performance_categories: 6,
            performance_max: 5.0,
            performance_step: 0.5,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayParams {
    #[arg(long, default_value_t = 3)]
    pub display_decimals: usize,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            display_decimals: 3,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> JudgeResult<Self> {
        let path = path.as_ref();
        info!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)
            .map_err(|e| JudgeError::Config(format!("Failed to read {:?}: {}", path, e)))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| JudgeError::Config(format!("Failed to parse {:?}: {}", path, e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> JudgeResult<()> {
        let r = &self.ranking;
        if r.technical_ceiling <= 0.0 {
            return Err(JudgeError::Config(
                "technical_ceiling must be positive".to_string(),
            ));
        }
        if r.performance_categories == 0 {
            return Err(JudgeError::Config(
                "performance_categories must be at least 1".to_string(),
            ));
        }
        if r.performance_step <= 0.0 || r.performance_step > r.performance_max {
            return Err(JudgeError::Config(format!(
                "performance_step {} must be in (0, {}]",
                r.performance_step, r.performance_max
            )));
        }
        Ok(())
    }

    /// Copies values the user typed on the command line over file values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(ranking, technical_ceiling);
        update_if_present!(ranking, performance_categories);
        update_if_present!(ranking, performance_max);
        update_if_present!(ranking, performance_step);

        update_if_present!(display, display_decimals);
    }
}

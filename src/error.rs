use crate::rules::Tier;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown trick '{0}'")]
    UnknownTrick(String),

    #[error("Trick '{trick}' is not offered at tier {tier}")]
    NotOffered { trick: String, tier: Tier },

    #[error("Unknown feature '{0}'")]
    UnknownFeature(String),

    #[error("Unknown deduction '{0}'")]
    UnknownDeduction(String),

    #[error("Unknown level {0}")]
    UnknownLevel(u8),

    #[error("Unknown execution grade {0}")]
    UnknownGrade(i8),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type JudgeResult<T> = Result<T, JudgeError>;

pub mod disqualify;
pub mod panel;
pub mod perform;
pub mod rules;
pub mod score;
pub mod standings;

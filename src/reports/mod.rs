mod export;
mod tables;

pub use self::export::{panel as export_panel_csv, standings as export_standings_csv};
pub use self::tables::{
    attempt as print_attempt, competitor as print_competitor, modifiers as print_modifier_tables,
    panel as print_panel_standings, performance as print_performance_standings,
    technical as print_technical_standings, tricks as print_trick_table,
};

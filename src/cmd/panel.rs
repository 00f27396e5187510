use crate::reports;
use clap::Args;
use diabolo_judge::config::Config;
use diabolo_judge::error::JudgeResult;
use diabolo_judge::ranking::panel::load_panel_sheet_from_file;
use diabolo_judge::ranking::panel_standings;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PanelArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV with `name,tech1,tech2,tech3,perf1,perf2[,disqualified]` rows.
    pub sheet: String,

    #[arg(long)]
    pub csv: Option<String>,
}

pub fn run(args: PanelArgs, config: &Config) -> JudgeResult<()> {
    let entries = load_panel_sheet_from_file(&args.sheet)?;
    info!("🧑‍⚖️ {} entrants on the panel sheet", entries.len());

    let standings = panel_standings(&entries, config.ranking.technical_ceiling);
    reports::print_panel_standings(&standings, config.display.display_decimals);

    if let Some(path) = &args.csv {
        reports::export_panel_csv(path, &standings)?;
        info!("📄 Panel ranking written to {}", path);
    }
    Ok(())
}

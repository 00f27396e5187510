use crate::reports;
use clap::Args;
use diabolo_judge::config::Config;
use diabolo_judge::error::JudgeResult;
use diabolo_judge::session::Roster;
use diabolo_judge::store::RecordStore;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct StandingsArgs {
    #[command(flatten)]
    pub config: Config,

    /// Also write both standings to this CSV file.
    #[arg(long)]
    pub csv: Option<String>,
}

pub fn run(args: StandingsArgs, config: &Config, store: &dyn RecordStore) -> JudgeResult<()> {
    let roster = Roster::load_from(store, config.ranking.clone())?;
    let decimals = config.display.display_decimals;

    let technical = roster.technical_standings();
    let performance = roster.performance_standings();
    info!(
        "🏆 {} technical, {} performance competitors",
        technical.len(),
        performance.len()
    );

    reports::print_technical_standings(&technical, decimals);
    reports::print_performance_standings(&performance, decimals);

    if let Some(path) = &args.csv {
        reports::export_standings_csv(path, &technical, &performance)?;
        info!("📄 Standings written to {}", path);
    }
    Ok(())
}

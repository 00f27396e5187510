use crate::reports;
use clap::Args;
use diabolo_judge::competitor::Category;
use diabolo_judge::config::Config;
use diabolo_judge::error::JudgeResult;
use diabolo_judge::rules::Tier;
use diabolo_judge::scorer::Scorer;
use diabolo_judge::session::{JudgingSession, Roster};
use diabolo_judge::store::RecordStore;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long)]
    pub trick: Option<String>,

    #[arg(long, default_value = "1D")]
    pub tier: Tier,

    #[arg(long)]
    pub level: Option<u8>,

    /// Repeat in the order the features were performed.
    #[arg(long = "feature")]
    pub features: Vec<String>,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub grade: i8,

    #[arg(long = "deduction")]
    pub deductions: Vec<String>,

    /// Append the attempt to this technical competitor and save the store.
    #[arg(long)]
    pub competitor: Option<String>,
}

pub fn run(
    args: ScoreArgs,
    config: &Config,
    scorer: Arc<Scorer>,
    store: &mut dyn RecordStore,
) -> JudgeResult<()> {
    let decimals = config.display.display_decimals;
    let name = args.competitor.clone().unwrap_or_default();
    let mut session =
        JudgingSession::new(scorer, config.ranking.clone(), &name, Category::Technical);

    // Same order a judge would click through the attempt.
    if let Some(trick) = &args.trick {
        session.select_trick(trick, args.tier)?;
    }
    if let Some(level) = args.level {
        session.toggle_level(level)?;
    }
    for feature in &args.features {
        session.toggle_feature(feature)?;
    }
    session.set_execution_grade(args.grade)?;
    for deduction in &args.deductions {
        session.toggle_deduction(deduction)?;
    }

    let preview = session.preview()?;
    reports::print_attempt(&preview, decimals);

    let Some(competitor) = args.competitor else {
        return Ok(());
    };
    if session.submit()?.is_none() {
        warn!("⚠️  Nothing selected; '{}' left unchanged", competitor);
        return Ok(());
    }

    let mut roster = Roster::load_from(&*store, config.ranking.clone())?;
    roster.merge(session.finalize());
    roster.save_to(store)?;
    info!("💾 Attempt saved for '{}'", competitor);

    if let Some(saved) = roster.find(&competitor, Category::Technical) {
        reports::print_competitor(saved, decimals);
    }
    Ok(())
}

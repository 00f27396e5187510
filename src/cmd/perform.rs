use crate::reports;
use clap::Args;
use diabolo_judge::competitor::Category;
use diabolo_judge::config::Config;
use diabolo_judge::error::{JudgeError, JudgeResult};
use diabolo_judge::scorer::Scorer;
use diabolo_judge::session::{JudgingSession, Roster};
use diabolo_judge::store::RecordStore;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PerformArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long)]
    pub competitor: String,

    /// Category scores in sheet order; missing trailing categories stay 0.
    #[arg(long = "score", num_args = 1.., allow_negative_numbers = true)]
    pub scores: Vec<f64>,
}

pub fn run(
    args: PerformArgs,
    config: &Config,
    scorer: Arc<Scorer>,
    store: &mut dyn RecordStore,
) -> JudgeResult<()> {
    let categories = config.ranking.performance_categories;
    if args.scores.len() > categories {
        return Err(JudgeError::Validation(format!(
            "Got {} performance scores but the sheet has {} categories",
            args.scores.len(),
            categories
        )));
    }

    let mut session = JudgingSession::new(
        scorer,
        config.ranking.clone(),
        &args.competitor,
        Category::Performance,
    );
    for (index, &value) in args.scores.iter().enumerate() {
        let stored = session.set_performance_score(index, value)?;
        if stored != value {
            info!("Category {}: {} snapped to {}", index + 1, value, stored);
        }
    }

    let mut roster = Roster::load_from(&*store, config.ranking.clone())?;
    roster.merge(session.finalize());
    roster.save_to(store)?;
    info!("💾 Performance sheet saved for '{}'", args.competitor);

    if let Some(saved) = roster.find(&args.competitor, Category::Performance) {
        reports::print_competitor(saved, config.display.display_decimals);
    }
    Ok(())
}

use clap::Args;
use diabolo_judge::competitor::Category;
use diabolo_judge::config::Config;
use diabolo_judge::error::{JudgeError, JudgeResult};
use diabolo_judge::session::Roster;
use diabolo_judge::store::RecordStore;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct DisqualifyArgs {
    #[command(flatten)]
    pub config: Config,

    /// Saved competitor whose flag is toggled.
    pub name: String,

    /// Needed when the name is saved in both categories.
    #[arg(long)]
    pub category: Option<Category>,
}

pub fn run(args: DisqualifyArgs, config: &Config, store: &mut dyn RecordStore) -> JudgeResult<()> {
    let mut roster = Roster::load_from(&*store, config.ranking.clone())?;

    let category = match args.category {
        Some(category) => category,
        None => match roster.categories_of(&args.name).as_slice() {
            [] => {
                return Err(JudgeError::Validation(format!(
                    "No saved competitor '{}'",
                    args.name
                )))
            }
            [only] => *only,
            _ => {
                return Err(JudgeError::Validation(format!(
                    "'{}' is saved in more than one category; pass --category",
                    args.name
                )))
            }
        },
    };

    let current = roster
        .find(&args.name, category)
        .map(|c| c.disqualified)
        .ok_or_else(|| {
            JudgeError::Validation(format!("No saved {} competitor '{}'", category, args.name))
        })?;

    roster.set_disqualified(&args.name, category, !current)?;
    roster.save_to(store)?;

    if current {
        info!("✅ '{}' ({}) reinstated", args.name, category);
    } else {
        info!("🚫 '{}' ({}) disqualified; reported total is now 0", args.name, category);
    }
    Ok(())
}

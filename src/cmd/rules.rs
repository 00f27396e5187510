use crate::reports;
use clap::Args;
use diabolo_judge::config::Config;
use diabolo_judge::error::JudgeResult;
use diabolo_judge::rules::{RuleBook, Tier};

#[derive(Args, Debug, Clone)]
pub struct RulesArgs {
    #[command(flatten)]
    pub config: Config,

    /// Only list tricks offered at this tier.
    #[arg(long)]
    pub tier: Option<Tier>,
}

pub fn run(args: RulesArgs, config: &Config, rules: &RuleBook) -> JudgeResult<()> {
    let decimals = config.display.display_decimals;
    reports::print_trick_table(rules, args.tier, decimals);
    reports::print_modifier_tables(rules, decimals);
    Ok(())
}

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use diabolo_judge::config::Config;
use diabolo_judge::rules::RuleBook;
use diabolo_judge::scorer::Scorer;
use diabolo_judge::store::JsonFileStore;
use std::process;
use std::sync::Arc;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON rule book, or a CSV trick catalog over the standard tables.
    #[arg(global = true, short, long)]
    rules: Option<String>,

    #[arg(global = true, short, long, default_value = "data/competitors.json")]
    store: String,

    /// JSON config file. Flags given on the command line win over it.
    #[arg(global = true, long = "config")]
    config_file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Rules(cmd::rules::RulesArgs),
    Score(cmd::score::ScoreArgs),
    Perform(cmd::perform::PerformArgs),
    Standings(cmd::standings::StandingsArgs),
    Panel(cmd::panel::PanelArgs),
    Disqualify(cmd::disqualify::DisqualifyArgs),
}

impl Commands {
    fn config(&self) -> &Config {
        match self {
            Commands::Rules(args) => &args.config,
            Commands::Score(args) => &args.config,
            Commands::Perform(args) => &args.config,
            Commands::Standings(args) => &args.config,
            Commands::Panel(args) => &args.config,
            Commands::Disqualify(args) => &args.config,
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Flattened config flags live in the subcommand's matches, not the root.
    let Some((_, sub_matches)) = matches.subcommand() else {
        error!("❌ No subcommand given");
        process::exit(2);
    };

    let config = match &cli.config_file {
        Some(path) => {
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(cli.command.config(), sub_matches);
            file_config
        }
        None => cli.command.config().clone(),
    };
    if let Err(e) = config.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }

    let rules = RuleBook::load_or_standard(cli.rules.as_deref()).unwrap_or_else(|e| {
        error!("\n❌ FATAL ERROR LOADING RULE BOOK:");
        error!("   {}", e);
        process::exit(1);
    });
    info!(
        "📖 Rule book: {} tricks, {} features, {} deductions",
        rules.tricks.len(),
        rules.features.len(),
        rules.deductions.len()
    );
    let scorer = Arc::new(Scorer::new(rules));
    let mut store = JsonFileStore::new(&cli.store);

    let result = match cli.command {
        Commands::Rules(args) => cmd::rules::run(args, &config, &scorer.rules),
        Commands::Score(args) => cmd::score::run(args, &config, scorer, &mut store),
        Commands::Perform(args) => cmd::perform::run(args, &config, scorer, &mut store),
        Commands::Standings(args) => cmd::standings::run(args, &config, &store),
        Commands::Panel(args) => cmd::panel::run(args, &config),
        Commands::Disqualify(args) => cmd::disqualify::run(args, &config, &mut store),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

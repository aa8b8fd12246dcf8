//! Wordle FSM - CLI
//!
//! Console Wordle with a menu loop, or a single round with `round`.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use wordle_fsm::{
    commands::{Console, run_menu, run_round},
    game::GameConfig,
    logging,
    wordlists::loader::parse_word_list,
};

#[derive(Parser)]
#[command(
    name = "wordle_fsm",
    about = "Console Wordle driven by a finite state machine",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Fixed secret word for every round (default: random from the word list)
    #[arg(short, long, global = true)]
    secret: Option<String>,

    /// Comma-separated word list replacing the built-in 26 words
    #[arg(short, long, global = true)]
    words: Option<String>,

    /// Seed for secret word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Diagnostic log filter written to stderr, e.g. 'debug'
    #[arg(long, global = true, default_value = logging::DEFAULT_FILTER)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Main menu: play rounds until you leave (default)
    Menu,

    /// Play a single round and exit
    Round,
}

/// Build the round configuration from CLI flags
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::default();

    if let Some(list) = &cli.words {
        let words = parse_word_list(list);
        if words.is_empty() {
            bail!("--words contains no valid five-letter words: '{list}'");
        }
        config = config.with_words(words)?;
    }

    if let Some(secret) = &cli.secret {
        config = config.with_secret(secret)?;
    }

    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level)?;

    let config = build_config(&cli)?;
    let mut rng = config.rng();
    let mut console = Console::stdio();

    // Default to the menu if no command given
    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            run_menu(&mut console, &config, &mut rng)?;
        }
        Commands::Round => {
            run_round(&mut console, &config, &mut rng)?;
        }
    }

    Ok(())
}

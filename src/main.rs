//! Character Sheet - Entry Point
//!
//! Loads the roster from the remote collection, then runs a line-oriented
//! editor: add characters, adjust attributes, check class eligibility, roll
//! skill checks and save back.

use character_sheet::command::{parse_command, CommandExecutor, ExecutionResult, HELP};
use character_sheet::core::error::Result;
use character_sheet::core::{ConfigOverrides, SheetConfig};
use character_sheet::persistence::CharacterGateway;
use character_sheet::rules::{load_rulebook, RuleBook};
use character_sheet::sheet::Roster;
use character_sheet::ui::render_roster;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Character sheet editor
#[derive(Parser, Debug)]
#[command(name = "character-sheet")]
#[command(about = "Create characters, spend attribute points, check classes and roll skills")]
struct Args {
    /// Collection URL to load from and save to
    #[arg(long)]
    endpoint: Option<String>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML rulebook replacing the built-in classes and skills
    #[arg(long)]
    rulebook: Option<PathBuf>,

    /// Random seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Don't load or save; work on a local roster only
    #[arg(long)]
    offline: bool,

    /// Disable coloured class eligibility
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = build_config(&args)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    config.validate()?;
    tracing::info!("Character sheet starting (endpoint {})", config.endpoint);

    let rules = match &config.rulebook {
        Some(path) => load_rulebook(path)?,
        None => RuleBook::standard(),
    };
    let mut roster = Roster::from_config(&config, rules);

    // Network calls are awaited one at a time from the input loop
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let gateway = if args.offline {
        tracing::warn!("Offline mode - load and save are disabled");
        None
    } else {
        Some(CharacterGateway::from_config(&config))
    };

    if let Some(gateway) = &gateway {
        let characters = rt.block_on(gateway.load());
        roster.replace_all(characters);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!("Dice seed {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let color = !args.no_color && io::stdout().is_terminal();

    println!("\n=== CHARACTER SHEET ===");
    println!();
    println!("{}", HELP);
    println!();
    print!("{}", render_roster(&roster, color));

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        let command = match parse_command(&input) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let result = {
            let mut executor = CommandExecutor::new(&mut roster, gateway.as_ref(), color);
            rt.block_on(executor.execute(&mut rng, &command))
        };

        match result {
            ExecutionResult::Render => print!("{}", render_roster(&roster, color)),
            ExecutionResult::Info(text) => println!("{}", text.trim_end()),
            ExecutionResult::Rejected(reason) => println!("! {}", reason),
            ExecutionResult::Quit => break,
        }
    }

    tracing::info!("Character sheet exiting");
    Ok(())
}

/// Defaults, then config file, then environment, then flags
fn build_config(args: &Args) -> Result<SheetConfig> {
    let overrides = ConfigOverrides {
        endpoint: args.endpoint.clone(),
        rulebook: args.rulebook.clone(),
    };
    SheetConfig::layered(args.config.as_deref(), |key| std::env::var(key).ok(), &overrides)
}

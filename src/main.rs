use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use loteria_lib::config;
use loteria_lib::utils::format_numbers;
use loteria_lib::{Filter, Game, GeneratorError, GeneratorSession};

#[derive(Parser)]
#[command(name = "loteria", about = "Random number generator for Brazilian lotteries")]
struct Cli {
    /// Game to play: mega-sena, lotofacil, quina or lotomania
    #[arg(short, long, default_value = "mega-sena")]
    game: Game,

    /// Skip downloading past results (no filters, no duplicate check)
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate games
    Generate {
        /// How many games to generate
        #[arg(short = 'n', long, default_value = "1")]
        games: usize,

        /// Numbers per game (defaults to the game's usual amount)
        #[arg(short = 'k', long)]
        numbers: Option<usize>,

        /// Leave out numbers drawn recently: light or heavy
        #[arg(short, long)]
        filter: Option<Filter>,
    },

    /// Show the latest draws
    History {
        #[arg(short, long, default_value = "20")]
        last: usize,
    },

    /// Show the numbers a filter leaves out
    Blocked {
        #[arg(short, long)]
        filter: Filter,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let game = cli.game.config();
    let mut session = GeneratorSession::new(game.clone(), config.windows);

    if cli.offline {
        session.mark_failed("offline mode requested");
    } else if let Some(source) = config.history_source(&game) {
        if let Err(e) = session.initialize(&source).await {
            tracing::error!("❌ {}", e);
        }
    } else {
        session.mark_failed("no results feed configured");
    }
    println!("{}", session.status_message());

    match cli.command {
        Command::Generate {
            games,
            numbers,
            filter,
        } => {
            let count = numbers.unwrap_or(game.default_count());
            if game.has_fixed_count() && count != game.default_count() {
                println!("ℹ️ {} games always have {} numbers.", game.name(), game.default_count());
                return Ok(());
            }

            match session.generate_games(games, count, filter) {
                Ok(generated) => {
                    println!();
                    for (i, generated_game) in generated.iter().enumerate() {
                        println!("GAME {}: {}", i + 1, generated_game.combination);
                        if let Some(draw) = &generated_game.previous_draw {
                            println!("   ⚠️ ALREADY DRAWN IN CONTEST {} ({})", draw.id, draw.date);
                        }
                    }
                }
                Err(e @ GeneratorError::FilterTooRestrictive { .. }) => {
                    println!("⚠️ {}", e);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::History { last } => {
            let draws = session.recent_draws(last);
            if draws.is_empty() {
                println!("⚠ No draws available.");
            }
            for draw in draws {
                let numbers = format_numbers(&draw.numbers, game.display_zero());
                let numbers = if numbers.is_empty() {
                    "-".to_string()
                } else {
                    numbers.join(" ")
                };
                println!("{:>6} | {:<12} | {}", draw.id, draw.date, numbers);
            }
        }
        Command::Blocked { filter } => {
            let blocked = session.blocked_numbers(filter);
            println!("Showing {} blocked numbers ({} filter):", blocked.len(), filter);
            if !blocked.is_empty() {
                println!("{}", blocked.join(" "));
            }
        }
    }

    Ok(())
}

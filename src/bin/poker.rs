use std::process::ExitCode;

use clap::{Parser, Subcommand};
use poker_eval::core::{Hand, PokerError, Rank, Rankable, Showdown};
use serde::Serialize;
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "poker")]
#[command(about = "Texas Hold'em poker hand evaluator")]
#[command(after_help = "Cards are a suit H, D, C, S followed by a value 2-9, T, J, Q, K, A.\n\
    Example: poker compare \"H2 SQ C2 D2 CQ\" \"H5 S6 C7 D8 H9\"")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a 5 card hand
    Eval {
        /// Cards separated by spaces, e.g. "H2 SQ C2 D2 CQ"
        hand: String,
    },
    /// Compare two hands
    Compare {
        /// The first hand
        first: String,
        /// The second hand
        second: String,
    },
    /// Find the best 5 card hand out of 7 cards
    Best {
        /// Seven cards separated by spaces
        cards: String,
    },
}

#[derive(Serialize)]
struct Evaluation<'a> {
    hand: &'a Hand,
    rank: Rank,
}

#[derive(Serialize)]
struct Comparison<'a> {
    first: Evaluation<'a>,
    second: Evaluation<'a>,
    result: Showdown,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    ExitCode::from(exit_status(run(&cli)))
}

/// Report a failed command on stderr. Failures exit with status 1.
fn exit_status(result: Result<(), CliError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            event!(Level::DEBUG, error = ?e, "command_failed");
            eprintln!("Error: {e}");
            1
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Eval { hand } => {
            let hand = parse(hand, "hand")?;
            print_evaluation(cli.json, &hand)
        }
        Commands::Compare { first, second } => {
            let first = parse(first, "hand 1")?;
            let second = parse(second, "hand 2")?;
            print_comparison(cli.json, &first, &second)
        }
        Commands::Best { cards } => {
            let hand = parse(cards, "hand")?;
            if hand.len() != Hand::MAX_CARDS {
                return Err(CliError::NotSevenCards(hand.len()));
            }
            print_evaluation(cli.json, &hand)
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unable to parse {which}: {source}")]
    Parse {
        which: &'static str,
        source: PokerError,
    },
    #[error("exactly 7 cards are required, got {0}")]
    NotSevenCards(usize),
    #[error("unable to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse(text: &str, which: &'static str) -> Result<Hand, CliError> {
    Hand::new_from_str(text).map_err(|source| CliError::Parse { which, source })
}

fn kickers_text(rank: &Rank) -> String {
    rank.kickers
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_evaluation(json: bool, hand: &Hand) -> Result<(), CliError> {
    let rank = hand.rank();
    if json {
        println!("{}", serde_json::to_string_pretty(&Evaluation { hand, rank })?);
    } else {
        println!("Hand: {hand}");
        println!("Rank: {}", rank.category);
        println!("Kickers: {}", kickers_text(&rank));
    }
    Ok(())
}

fn print_comparison(json: bool, first: &Hand, second: &Hand) -> Result<(), CliError> {
    let first_rank = first.rank();
    let second_rank = second.rank();
    let result = Showdown::from(first_rank.cmp(&second_rank));

    if json {
        let comparison = Comparison {
            first: Evaluation {
                hand: first,
                rank: first_rank,
            },
            second: Evaluation {
                hand: second,
                rank: second_rank,
            },
            result,
        };
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!("Hand 1: {first} ({})", first_rank.category);
    println!("Hand 2: {second} ({})", second_rank.category);
    println!();
    match result {
        Showdown::FirstWins => println!("Result: Hand 1 wins!"),
        Showdown::SecondWins => println!("Result: Hand 2 wins!"),
        Showdown::Tie => println!("Result: Tie!"),
    }
    Ok(())
}

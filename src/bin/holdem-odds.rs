use anyhow::Context;
use clap::{Parser, ValueEnum};
use holdem_odds::cards::{parse_cards, Card};
use holdem_odds::evaluator::Locale;
use holdem_odds::odds::{analyze_hand, calculate_odds, calculate_odds_seeded, SimulationResult};

/// Trials used when the board is complete; only the opponents' cards vary.
const RIVER_SIMULATIONS: usize = 1_000;
/// Trials used while community cards are still to come.
const DRAWING_SIMULATIONS: usize = 5_000;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LocaleArg {
    English,
    Hebrew,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::English => Locale::English,
            LocaleArg::Hebrew => Locale::Hebrew,
        }
    }
}

/// Estimate Texas Hold'em win probability against random opponents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The player's two hole cards, e.g. "As Kd" or "A♠ K♦"
    #[arg(long)]
    hole: String,

    /// Known community cards (0-5)
    #[arg(long, default_value = "")]
    board: String,

    /// Number of opponents holding random hands
    #[arg(short, long, default_value_t = 1, env = "HOLDEM_ODDS_OPPONENTS")]
    opponents: usize,

    /// Trials to run; defaults to 1000 on a complete board and 5000 otherwise
    #[arg(short, long, env = "HOLDEM_ODDS_SIMULATIONS")]
    simulations: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Language for hand names
    #[arg(long, value_enum, default_value_t = LocaleArg::English)]
    locale: LocaleArg,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn simulations_for(board: &[Card], requested: Option<usize>) -> usize {
    requested.unwrap_or(if board.len() == 5 { RIVER_SIMULATIONS } else { DRAWING_SIMULATIONS })
}

fn print_odds(odds: &SimulationResult) {
    println!("Win rate:     {:.1}%", odds.win_rate);
    println!("Wins:         {}", odds.wins);
    println!("Ties:         {}", odds.ties);
    println!("Losses:       {}", odds.losses);
    println!("Trials:       {}", odds.simulations);
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let hole = parse_cards(&args.hole).context("parsing --hole")?;
    let board = parse_cards(&args.board).context("parsing --board")?;
    let locale = Locale::from(args.locale);
    let simulations = simulations_for(&board, args.simulations);
    log::info!("hole {:?}, board {:?}, {} opponents", args.hole, args.board, args.opponents);

    let report = analyze_hand(&hole, &board).context("unable to analyze hand")?;
    println!("Current hand: {}", report.current_hand.localized_name(locale));
    for draw in &report.draws {
        println!("Draw:         {}", draw);
    }

    let odds = match args.seed {
        Some(seed) => calculate_odds_seeded(&hole, &board, args.opponents, simulations, seed),
        None => calculate_odds(&hole, &board, args.opponents, simulations),
    }
    .context("unable to compute odds")?;
    print_odds(&odds);

    Ok(())
}

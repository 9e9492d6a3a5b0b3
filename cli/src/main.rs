use anyhow::{Context, Result};
use briefcase_core::{BoardConfig, GameEngine, PriorTotals};
use clap::Parser;
use std::io;

mod command;
mod session;

/// Deal or No Deal in the terminal.
///
/// On exit the running totals are printed on stdout, one per line, ready to be
/// passed back with `--prior` on the next launch.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Totals from earlier sessions
    #[arg(long, num_args = 2, value_names = ["EARNINGS", "POSSIBLE"], allow_negative_numbers = true)]
    prior: Option<Vec<String>>,

    /// Print the final statistics as JSON instead of plain totals
    #[arg(long)]
    json: bool,

    /// Cash values to put in the cases, the classic 26-case board if omitted
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
}

fn init_logger(level: log::LevelFilter) -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("Error initializing logger")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose.log_level_filter())?;

    let config = if args.values.is_empty() {
        BoardConfig::default()
    } else {
        BoardConfig::parse(&args.values).context("Invalid cash values")?
    };
    let prior = match args.prior.as_deref() {
        Some([earnings, possible]) => {
            Some(PriorTotals::parse(earnings, possible).context("Invalid prior totals")?)
        }
        _ => None,
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}, {} cases", config.size());

    let mut engine = GameEngine::new(config, seed);
    if let Some(prior) = prior {
        engine.seed_totals(prior)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = session::Session::new(engine, stdin.lock(), stdout.lock());
    session.run()?;
    session.report(args.json)?;
    Ok(())
}

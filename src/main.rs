//! Portfolio game - headless driver.
//!
//! Plays a scripted run of the turn-based stock portfolio game against the
//! simulation engine and prints each year's scenario page, exactly the way
//! a graphical front end would consume the command interface. Useful for
//! demos and for eyeballing the price model.
//!
//! ```text
//! portfolio-game --seed 42 --years 10 --balance 10000
//! portfolio-game --json        # dump the final display state as JSON
//! ```

use clap::Parser;
use engine::{Command, Engine, EngineConfig, Outcome, Page, YearOutcome};
use rand::Rng;
use tracing_subscriber::EnvFilter;
use types::{Cash, Quantity, Tag};

#[derive(Parser, Debug)]
#[command(name = "portfolio-game", about = "Turn-based stock portfolio game, headless")]
struct Args {
    /// Random seed; omit for a fresh run each time.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of simulated years.
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Starting cash balance in dollars.
    #[arg(long, default_value_t = 10_000.0)]
    balance: f64,

    /// Shares bought per affordable company before the first year.
    #[arg(long, default_value_t = 1)]
    lot: u64,

    /// Print the final display state as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());

    let config = EngineConfig::default()
        .with_horizon(args.years)
        .with_initial_balance(Cash::from_float(args.balance));
    let mut engine = Engine::new(config, seed);

    println!("Stock Portfolio Game (seed {seed})");
    println!("--------------------------------------------------");

    // Opening move: spread one lot across every affordable company.
    buy_opening_lots(&mut engine, Quantity(args.lot));

    while !engine.is_finished() {
        print_main_menu(&engine);
        play_year(&mut engine);
    }

    if args.json {
        match serde_json::to_string_pretty(&engine.display_state()) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("failed to serialize display state: {err}"),
        }
    }
}

/// Buy `lot` shares of each company the balance still covers.
fn buy_opening_lots(engine: &mut Engine, lot: Quantity) {
    if lot.is_zero() {
        return;
    }
    let count = engine.companies().len();
    run(engine, Command::Navigate(Page::BuyPage));
    for company in 0..count {
        run(engine, Command::Buy {
            company,
            quantity: lot,
        });
    }
    run(engine, Command::Navigate(Page::MainMenu));
}

/// One advance + acknowledge cycle, printing the scenario page.
fn play_year(engine: &mut Engine) {
    let year = engine.year();
    if let Outcome::Scenario(reports) = run(engine, Command::AdvanceYear) {
        println!("Year {year} scenarios:");
        for report in reports {
            let marker = match report.tag {
                Tag::Positive => "+",
                Tag::Negative => "-",
                Tag::Neutral => " ",
            };
            println!("  [{marker}] {}: {}{}", report.symbol, report.text, report.detail);
        }
    }

    match run(engine, Command::Acknowledge) {
        Outcome::Year(YearOutcome::Continue { year }) => {
            println!("--- entering year {year} ---");
        }
        Outcome::Year(YearOutcome::GameOver { profit_loss }) => {
            println!("==================================================");
            println!("Final Profit/Loss: {profit_loss}");
        }
        _ => {}
    }
}

fn print_main_menu(engine: &Engine) {
    let state = engine.display_state();
    println!("Year: {} | Balance: {}", state.year, state.balance);
    for holding in &state.holdings {
        println!(
            "  {}: {} shares | Change: {:.2}%",
            holding.symbol, holding.quantity, holding.change_pct
        );
    }
}

/// Execute a command, treating contract violations as driver bugs.
fn run(engine: &mut Engine, command: Command) -> Outcome {
    match engine.execute(command) {
        Ok(outcome) => {
            if let Outcome::Message(message) = &outcome {
                tracing::debug!(%message, "trade outcome");
            }
            outcome
        }
        Err(err) => {
            // The scripted driver never issues an illegal command.
            unreachable!("driver issued an illegal command: {err}")
        }
    }
}

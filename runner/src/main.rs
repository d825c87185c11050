// ═══════════════════════════════════════════════════════════════════════
// Runner: CLI entry point for chases, series and single decisions
// ═══════════════════════════════════════════════════════════════════════

use clap::{Parser, Subcommand};
use fod_agents::{Agent, HeuristicAgent, RandomHunter};
use fod_engine::map;
use fod_engine::setup;
use fod_engine::visibility::{dracula_view, DraculaView};
use fod_tournament::{run_chase, run_series, DraculaKind};
use std::error::Error;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "fod-runner", about = "Fury of Dracula strategy lab")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single chase
    Play {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value_t = 100)]
        rounds: u32,
        /// Dracula agent: "heuristic" or "random"
        #[arg(short, long, default_value = "heuristic")]
        agent: String,
    },
    /// Run many chases in parallel and summarise them
    Series {
        #[arg(short, long, default_value_t = 100)]
        games: u32,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value_t = 100)]
        rounds: u32,
        #[arg(short, long, default_value = "heuristic")]
        agent: String,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play random rounds and print Dracula's view as JSON
    Snapshot {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value_t = 10)]
        rounds: u32,
    },
    /// Load a view from JSON and print the heuristic's play
    Decide {
        #[arg(long)]
        snapshot: String,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Print the whole decision as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("logging disabled: {}", e);
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Play { seed, rounds, agent } => cmd_play(seed, rounds, &agent),
        Commands::Series { games, seed, rounds, agent, json } => cmd_series(games, seed, rounds, &agent, json),
        Commands::Snapshot { seed, rounds } => cmd_snapshot(seed, rounds),
        Commands::Decide { snapshot, seed, json } => cmd_decide(&snapshot, seed, json),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn parse_kind(agent: &str) -> Result<DraculaKind, Box<dyn Error>> {
    DraculaKind::parse(agent).ok_or_else(|| format!("unknown agent '{}' (expected heuristic or random)", agent).into())
}

fn cmd_play(seed: u64, rounds: u32, agent: &str) -> Result<(), Box<dyn Error>> {
    let kind = parse_kind(agent)?;
    println!("=== Fury of Dracula Strategy Lab ===\n");
    println!("Running single chase: seed={}, rounds={}, agent={}\n", seed, rounds, agent);

    let mut dracula = kind.build(seed);
    let mut hunters = RandomHunter::new(seed.wrapping_add(1));
    let result = run_chase(dracula.as_mut(), &mut hunters, seed, rounds)?;

    for record in &result.decisions {
        let place = record.place.map(map::place_code).unwrap_or("??");
        println!("  round {:>3}: {:<3} -> {}  ({:?}, blood {})",
            record.round, record.play.code(), place, record.rationale, record.blood_before);
    }
    println!();
    println!("Chase finished!");
    println!("  Winner:        {}", result.winner);
    println!("  Rounds played: {}", result.rounds_played);
    println!("  Dracula blood: {}", result.final_blood);
    println!("  Hunter health: {:?}", result.hunter_health);
    Ok(())
}

fn cmd_series(games: u32, seed: u64, rounds: u32, agent: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let kind = parse_kind(agent)?;
    info!(games, seed, rounds, agent, "series started");
    let (_, summary) = run_series(kind, games, seed, rounds);

    if json {
        println!("{}", summary.to_json()?);
        return Ok(());
    }
    println!("=== Series: {} chases, agent={}, round limit {} ===\n", games, agent, rounds);
    println!("  Dracula wins: {:>5} ({:.1}%)", summary.dracula_wins, summary.dracula_win_rate() * 100.0);
    println!("  Hunter wins:  {:>5}", summary.hunter_wins);
    println!("  Errors:       {:>5}", summary.errors);
    println!("  Mean rounds:  {:>8.1}", summary.mean_rounds);
    println!("  Mean blood:   {:>8.1}", summary.mean_final_blood);
    println!("\n  Decisions by rationale:");
    for (rationale, count) in &summary.rationales {
        println!("    {:<28} {:>7}", rationale, count);
    }
    Ok(())
}

fn cmd_snapshot(seed: u64, rounds: u32) -> Result<(), Box<dyn Error>> {
    let state = setup::random_position(seed, rounds)?;
    println!("{}", dracula_view(&state).to_json()?);
    Ok(())
}

fn cmd_decide(path: &str, seed: u64, json: bool) -> Result<(), Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    let view = DraculaView::from_json(&text)?;
    let decision = HeuristicAgent::new(seed).decide(&view)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("{} {}", decision.play.code(), decision.message);
    }
    Ok(())
}

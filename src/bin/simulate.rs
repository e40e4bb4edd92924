//! Classroom balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze the trivia and hack economy.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 12 agents, 200 rounds
//!   cargo run --bin simulate -- -n 30 -r 500      # A bigger classroom, longer session
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use brain_heist::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              BRAIN HEIST BALANCE SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Agents:         {}", config.num_agents);
    println!("  Rounds:         {}", config.rounds);
    println!("  Accuracy:       {:.0}%", config.accuracy * 100.0);
    println!("  Hack rate:      {:.0}%", config.hack_rate * 100.0);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--agents" => {
                if i + 1 < args.len() {
                    config.num_agents = args[i + 1].parse().unwrap_or(12);
                    i += 1;
                }
            }
            "-r" | "--rounds" => {
                if i + 1 < args.len() {
                    config.rounds = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-a" | "--accuracy" => {
                if i + 1 < args.len() {
                    config.accuracy = args[i + 1].parse().unwrap_or(0.7);
                    i += 1;
                }
            }
            "--hack-rate" => {
                if i + 1 < args.len() {
                    config.hack_rate = args[i + 1].parse().unwrap_or(0.25);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config.num_agents = 6;
                config.rounds = 50;
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Brain Heist Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --agents <N>      Agents in the classroom (default: 12)");
    println!("    -r, --rounds <R>      Rounds to simulate (default: 200)");
    println!("    -a, --accuracy <A>    Correct-answer probability 0..1 (default: 0.7)");
    println!("    --hack-rate <H>       Per-round hack probability 0..1 (default: 0.25)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    --json                Save JSON report");
    println!("    --quick               Quick check (6 agents, 50 rounds)");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                      # Default run");
    println!("    cargo run --bin simulate -- -n 30 -r 500      # Bigger classroom");
    println!("    cargo run --bin simulate -- --seed 42         # Reproducible");
    println!("    cargo run --bin simulate -- --quick --json    # Quick check with JSON");
}

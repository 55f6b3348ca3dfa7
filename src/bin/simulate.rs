//! Economy balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 1000 tycoon runs
//!   cargo run --bin simulate -- -n 100 --variant classic
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use tracing_subscriber::EnvFilter;

use hooked::simulator::{run_simulation, SimConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = parse_args(&args)?;

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              HOOKED ECONOMY SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Rules:          {}", config.variant);
    println!("  Max Actions:    {}", config.max_actions_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())
            .with_context(|| format!("writing {}", filename))?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<SimConfig> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-n" | "--runs" => {
                config.num_runs = parse_value(args, i)?;
                i += 1;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_value(args, i)?);
                i += 1;
            }
            "-a" | "--actions" => {
                config.max_actions_per_run = parse_value(args, i)?;
                i += 1;
            }
            "--variant" => {
                config.variant = parse_value(args, i)?;
                i += 1;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {}
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => bail!("unknown argument: {}", other),
        }
        i += 1;
    }

    Ok(config)
}

/// Parses the value following the flag at `args[i]`.
fn parse_value<T>(args: &[String], i: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let flag = &args[i];
    let raw = args
        .get(i + 1)
        .with_context(|| format!("{} needs a value", flag))?;
    raw.parse()
        .map_err(|e| anyhow!("invalid value '{}' for {}: {}", raw, flag, e))
}

fn print_help() {
    println!("Hooked Economy Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Number of simulated sessions (default: 1000)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    -a, --actions <A>    Max actions per session (default: 20,000)");
    println!("    --variant <NAME>     Rules: classic, tycoon, reflex (default: tycoon)");
    println!("    -v, --verbose        Print every run");
    println!("    --json               Save JSON report");
    println!("    -h, --help           Show this help");
}

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hooked::core::rng::session_rng;
use hooked::game_loop::{read_player_name, run_game};
use hooked::input::Console;
use hooked::{ConfigFile, GameState, Variant};

struct CliArgs {
    variant: Option<Variant>,
    config_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'hooked --help' for usage.");
            std::process::exit(1);
        }
    };

    // Logs go to stderr so the menu on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config_path {
        Some(path) => ConfigFile::load(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => ConfigFile::default(),
    };
    let rules = config.into_rules(cli.variant)?;
    info!(variant = %rules.variant, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut rng = session_rng(None);

    let name = read_player_name(&mut console)?;
    let mut state = GameState::new(name, rules);
    run_game(&mut console, &mut state, &mut rng)?;

    Ok(())
}

fn parse_args(args: &[String]) -> std::result::Result<CliArgs, String> {
    let mut cli = CliArgs {
        variant: None,
        config_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--variant" => {
                let value = args.get(i + 1).ok_or("--variant needs a value")?;
                cli.variant = Some(value.parse().map_err(|e| format!("{}", e))?);
                i += 1;
            }
            "-c" | "--config" => {
                let value = args.get(i + 1).ok_or("--config needs a file path")?;
                cli.config_path = Some(PathBuf::from(value));
                i += 1;
            }
            "--version" | "-v" => {
                println!("hooked {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(cli)
}

fn print_help() {
    println!("Hooked - Text-Menu Fishing Tycoon\n");
    println!("Usage: hooked [options]\n");
    println!("Options:");
    println!("  --variant <NAME>    Rule set: classic, tycoon, reflex (default: reflex)");
    println!("  -c, --config <FILE> Load rules from a TOML file");
    println!("  -v, --version       Show version information");
    println!("  -h, --help          Show this help message");
    println!();
    println!("Set RUST_LOG=debug to log every catch to stderr.");
}

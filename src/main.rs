use std::io;
use std::path::PathBuf;
use std::process;

use adventure::{Session, SessionEnd, WorldConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: adventure [--config <path>] [--seed <n>]";

struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
}

fn parse_args() -> Args {
    let mut args = Args {
        config: None,
        seed: None,
    };
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("adventure {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "--help" | "-h" => {
                println!("Adventure - Text-Driven Turn-Based RPG\n");
                println!("{}\n", USAGE);
                println!("Options:");
                println!("  --config <path>  Load hero, enemies and town from a JSON file");
                println!("  --seed <n>       Seed loot and enemy selection");
                println!("  --version        Show version information");
                println!("  --help           Show this help message");
                println!("\nSet RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr.");
                process::exit(0);
            }
            "--config" => match iter.next() {
                Some(path) => args.config = Some(PathBuf::from(path)),
                None => usage_error("--config needs a path"),
            },
            "--seed" => match iter.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => args.seed = Some(seed),
                _ => usage_error("--seed needs a non-negative integer"),
            },
            other => usage_error(&format!("Unknown argument: {}", other)),
        }
    }

    args
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = parse_args();

    let config = match &args.config {
        Some(path) => match WorldConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => WorldConfig::default(),
    };

    let rng = match args.seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = Session::new(&config, rng);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let end = session.run(&mut input, &mut output)?;

    let player = session.player();
    info!(
        ?end,
        level = player.level,
        munnies = player.munnies,
        "session finished"
    );
    if end == SessionEnd::InputClosed {
        println!();
    }
    Ok(())
}

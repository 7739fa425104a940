use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use ordered_tree::probe::{self, Backend, ProbeConfig};

/// Exit code for a bad command line, as in sysexits.h.
const EXIT_USAGE: u8 = 64;

/// Seed a binary search tree with random keys, then list its contents by probing every key in
/// the range.
#[derive(Parser, Debug)]
#[command(name = "probe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How many keys to draw and insert
    #[arg(short = 'n', long, env = "PROBE_COUNT", default_value_t = 10)]
    count: usize,

    /// Keys are drawn from 0..RANGE
    #[arg(short, long, env = "PROBE_RANGE", default_value_t = 50)]
    range: u32,

    /// Seed for the key generator
    #[arg(short, long, env = "PROBE_SEED", default_value_t = 42)]
    seed: u64,

    /// Tree implementation to run against
    #[arg(short, long, env = "PROBE_BACKEND", value_enum, default_value_t = Backend::Owned)]
    backend: Backend,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

impl From<&Cli> for ProbeConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            count: cli.count,
            range: cli.range,
            seed: cli.seed,
            backend: cli.backend,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    match probe::run(&ProbeConfig::from(&cli)) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `RUST_LOG` directives win; the `-d` count only sets the default level.
fn log_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy()
}

fn setup_logging(verbosity: u8) {
    let filter = log_filter(verbosity);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!(verbosity, "logging initialized");
}

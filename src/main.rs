use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use verbench::bench::Bench;
use verbench::clock::MonotonicClock;
use verbench::command::SystemRunner;
use verbench::config::Config;
use verbench::display;
use verbench::installer::CliInstaller;
use verbench::types::OutputFormat;

#[derive(Parser)]
#[command(
    name = "verbench",
    version,
    about = "Time a package's command-line entry point across its released versions",
    after_help = "Package manager prompts are read from stdin; answer them with `yes | verbench`."
)]
struct Cli {
    /// Versions to benchmark, replacing the configured list
    versions: Vec<String>,

    /// Config file (default: <config dir>/verbench/config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Timed calls per version
    #[arg(short = 'n', long)]
    trials: Option<usize>,

    /// Keep going when the uninstall step fails (e.g. nothing installed yet)
    #[arg(long)]
    tolerate_missing_uninstall: bool,

    #[arg(long, default_value = "plain")]
    format: OutputFormat,

    #[arg(long)]
    json: bool,
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::load(cli.config.as_deref())?;
    if !cli.versions.is_empty() {
        config.versions = cli.versions;
    }
    if let Some(trials) = cli.trials {
        config.trials = trials;
    }
    if cli.tolerate_missing_uninstall {
        config.tolerate_missing_uninstall = true;
    }
    let settings = config.into_settings()?;

    let started_at = Utc::now();
    let installer = CliInstaller::new(settings.package_manager.clone(), SystemRunner);
    let mut bench = Bench::new(settings, installer, SystemRunner, MonotonicClock::new());
    let report = bench.bench()?;

    let output = if cli.json {
        display::format_json(&report, started_at)
    } else {
        match cli.format {
            OutputFormat::Plain => display::format_plain(&report),
            OutputFormat::Table => display::format_table(&report),
        }
    };

    print!("{}", output);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}

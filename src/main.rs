use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::Rng;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

use cosmology::seeds::derived_rng;
use cosmology::{Cosmology, Event, GenerationConfig, Timeline, ALGORITHM_VERSION};

#[derive(Parser, Debug)]
#[command(name = "cosmology")]
#[command(about = "Generate a seeded cosmology of luminaries")]
struct Args {
    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u32>,

    /// JSON file overriding generation constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Numbers to add to the ledger (repeatable)
    #[arg(long = "add", allow_negative_numbers = true)]
    add: Vec<i64>,

    /// Numbers to remove from the ledger, every occurrence (repeatable)
    #[arg(long = "remove", allow_negative_numbers = true)]
    remove: Vec<i64>,

    /// Days to advance the timeline, recording one sighting per day
    #[arg(short, long, default_value = "0")]
    days: usize,

    /// Log generation steps
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(args.verbose, rust_log.as_deref()))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `--verbose` raises everything to debug. Otherwise `RUST_LOG` is taken as
/// given, and only warnings are shown when it is unset.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let filter = EnvFilter::new(rust_log.unwrap_or_default());
    match (verbose, rust_log) {
        (true, _) => filter.add_directive(LevelFilter::DEBUG.into()),
        (false, Some(_)) => filter,
        (false, None) => filter.add_directive(LevelFilter::WARN.into()),
    }
}

fn run(args: Args) -> cosmology::Result<()> {
    let config = match &args.config {
        Some(path) => GenerationConfig::from_file(path)?,
        None => GenerationConfig::default(),
    };

    let mut cosmology = Cosmology::with_config(args.seed, config)?;

    println!("Generating cosmology with seed: {} (algorithm v{})", cosmology.seed(), ALGORITHM_VERSION);
    println!(
        "{} luminaries ({} visible)",
        cosmology.count_of("luminary")?,
        cosmology.visible_luminaries().count()
    );
    for (i, lum) in cosmology.luminaries().iter().enumerate() {
        println!("  [{:>2}] {}", i, lum);
    }

    for &n in &args.add {
        cosmology.add_number(n);
    }
    for &n in &args.remove {
        let removed = cosmology.remove_number(n);
        println!("Removed {} occurrence(s) of {}", removed, n);
    }
    println!("Ledger: {} ({} entries)", cosmology.numbers(), cosmology.count_of("number")?);

    if args.days > 0 {
        record_sightings(&cosmology, args.days)?;
    }

    println!("{}", cosmology);
    Ok(())
}

/// Advance a timeline day by day, attaching a sighting of a random visible luminary.
fn record_sightings(cosmology: &Cosmology, days: usize) -> cosmology::Result<()> {
    // Separate stream so sightings never depend on how the cosmology was drawn
    let mut rng = derived_rng(cosmology.seed(), "sightings");
    let visible: Vec<_> = cosmology.visible_luminaries().collect();
    if visible.is_empty() {
        println!("No visible luminaries, nothing to sight");
        return Ok(());
    }

    let mut timeline = Timeline::new();
    for _ in 0..days {
        timeline.advance();
        let lum = visible[rng.gen_range(0..visible.len())];
        let sighting = Event::new("Sighting")
            .with("distance", lum.distance())
            .with("color", lum.color());
        timeline.attach(timeline.day(), sighting)?;
    }

    println!("Timeline: {}", timeline.date());
    for (day, events) in timeline.slots() {
        if let Some(events) = events {
            for event in events {
                println!("  day {:>3}: {}", day, event);
            }
        }
    }
    Ok(())
}

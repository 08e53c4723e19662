use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use driftx::{
    Asset, ComparisonEngine, ComputationCost, Dataset, ExtractOptions, Extractor, MaxCost,
    MemorySource, QueryCost, StandardDistance, StatsReducerFactory, TableRef,
};

/// Statistical fingerprinting and drift comparison for tabular datasets
#[derive(Parser, Debug)]
#[command(name = "driftx")]
#[command(about = "Profile tabular datasets and explain how two of them differ", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the feature fingerprint of one dataset
    Profile {
        /// Path to a JSON dataset: {"cols": [{"name": ...}, ...], "rows": [[...], ...]}
        dataset: PathBuf,

        /// Table name used in the emitted refs
        #[arg(long, default_value = "dataset")]
        name: String,

        /// Cap retrieval at the sample limit
        #[arg(long)]
        sample: bool,
    },
    /// Compare two datasets and rank the differing features
    Diff {
        /// Path to the baseline JSON dataset
        left: PathBuf,

        /// Path to the JSON dataset compared against it
        right: PathBuf,

        /// Cap retrieval at the sample limit
        #[arg(long)]
        sample: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Profile { dataset, name, sample } => profile(&dataset, &name, sample),
        Command::Diff { left, right, sample } => diff(&left, &right, sample),
    }
}

fn profile(path: &Path, name: &str, sample: bool) -> anyhow::Result<()> {
    let dataset = load_dataset(path)?;
    info!(rows = dataset.row_count(), cols = dataset.cols.len(), "dataset loaded");

    let source = MemorySource::new().with_table(name, dataset);
    let factory = StatsReducerFactory;
    let extractor = Extractor::new(&source, &factory);

    let result = extractor.extract(&options(sample), &Asset::table(TableRef::new(name)))?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn diff(left: &Path, right: &Path, sample: bool) -> anyhow::Result<()> {
    let source = MemorySource::new()
        .with_table("left", load_dataset(left)?)
        .with_table("right", load_dataset(right)?);
    let factory = StatsReducerFactory;
    let distance = StandardDistance::default();
    let engine = ComparisonEngine::new(Extractor::new(&source, &factory), &distance);

    let result = engine.compare(
        &options(sample),
        &Asset::table(TableRef::new("left")),
        &Asset::table(TableRef::new("right")),
    )?;
    info!(
        significant = result.significant,
        contributors = result.top_contributors.len(),
        "comparison finished"
    );
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn options(sample: bool) -> ExtractOptions {
    if sample {
        ExtractOptions::with_max_cost(MaxCost::new(ComputationCost::Linear, QueryCost::Sample))
    } else {
        ExtractOptions::default()
    }
}

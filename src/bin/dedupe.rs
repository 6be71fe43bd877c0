//! Full deduplication pipeline over a CSV export: read, normalize, cluster,
//! and write the two output tables.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use dedupe_rs::{tabular, utils, Deduper, Normalizer};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let input = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("usage: dedupe <input.csv> [output-dir]");
            std::process::exit(2);
        }
    };
    let output_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Results"));

    let mut records = tabular::read_records(&input)?;
    println!("loaded {} records from {}", records.len(), input.display());

    let normalizer = Normalizer::new();
    normalizer.normalize_records(&mut records);

    let mut engine = Deduper::new();
    engine.ingest(records);
    let outcome = engine.dedupe()?;

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
    let grouped_path = output_dir.join("all_companies_with_group_id.csv");
    let unique_path = output_dir.join("unique_companies.csv");
    tabular::write_grouped_records(&grouped_path, engine.store(), &outcome.clusters)?;
    tabular::write_representatives(&unique_path, engine.store(), &outcome.representatives)?;

    println!();
    println!("{}", utils::summarize_clusters(engine.store(), &outcome.clusters));
    println!("metrics: {}", serde_json::to_string_pretty(&outcome.metrics)?);
    println!("grouped records written to {}", grouped_path.display());
    println!("unique companies written to {}", unique_path.display());

    Ok(())
}

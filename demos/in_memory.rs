//! # In-Memory Deduplication Example
//!
//! Demonstrates the core pipeline on a handful of hand-written listings:
//!
//! 1. Ingesting company records
//! 2. Blocking and pairwise scoring
//! 3. Cluster extraction over the similarity graph
//! 4. Representative selection per cluster
//!
//! ## Run It
//!
//! ```bash
//! cargo run --example in_memory
//! ```

use dedupe_rs::{utils, CompanyRecord, Deduper};

fn listing(name: &str, domain: &str, city: &str) -> CompanyRecord {
    CompanyRecord {
        company_name: name.to_string(),
        website_domain: domain.to_string(),
        main_city: city.to_string(),
        ..Default::default()
    }
}

fn main() -> anyhow::Result<()> {
    let mut engine = Deduper::new();

    engine.ingest(vec![
        // Three spellings of the same company, anchored by the domain.
        listing("acme corp", "acme.com", ""),
        listing("acme corporation", "acme.com", "berlin"),
        listing("acme corp gmbh", "acme.com", "berlin"),
        // Unrelated companies.
        listing("zenith labs", "zenith.io", "oslo"),
        listing("granite partners", "granite.example", "boston"),
    ]);

    let outcome = engine.dedupe()?;

    println!("{}", utils::summarize_clusters(engine.store(), &outcome.clusters));

    println!("Representatives:");
    for (cluster, &record_id) in outcome.clusters.clusters.iter().zip(&outcome.representatives) {
        let record = engine.get_record(record_id).expect("representative exists");
        println!(
            "  {} -> {} ({} of {} records)",
            cluster.id,
            record.company_name,
            record_id,
            cluster.len()
        );
    }

    Ok(())
}

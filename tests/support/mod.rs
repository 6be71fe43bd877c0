//! Shared fixtures for the integration tests: record builders and a seeded
//! dataset generator.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dedupe_rs::CompanyRecord;

/// Minimal listing with the two strongest fields set.
pub fn listing(name: &str, domain: &str) -> CompanyRecord {
    CompanyRecord {
        company_name: name.to_string(),
        website_domain: domain.to_string(),
        ..Default::default()
    }
}

/// Fully populated listing, useful when completeness matters.
pub fn complete_listing(name: &str, domain: &str) -> CompanyRecord {
    CompanyRecord {
        company_name: name.to_string(),
        company_commercial_names: name.to_string(),
        short_description: format!("{name} services"),
        primary_phone: "30 1234 5678".to_string(),
        website_url: format!("https://{domain}"),
        website_domain: domain.to_string(),
        main_city: "berlin".to_string(),
        main_country_code: "de".to_string(),
        domains: domain.to_string(),
        ..Default::default()
    }
}

const NAME_STEMS: [&str; 8] = [
    "atlas", "borealis", "cedar", "delta", "ember", "falcon", "granite", "harbor",
];

/// Generate a deterministic dataset of company listings.
///
/// With `duplicate_probability`, a record is a variant of an earlier base
/// company instead of a fresh one. Variants come in two strengths: exact
/// duplicates sharing the base domain (decided by the override rule) and
/// near duplicates with edited name and domain whose score lands near the
/// default threshold, so threshold changes are observable.
pub fn generate_listings(count: usize, duplicate_probability: f64, seed: u64) -> Vec<CompanyRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut base: Vec<(String, String)> = Vec::new();
    let mut records = Vec::with_capacity(count);

    for i in 0..count {
        if !base.is_empty() && rng.random_bool(duplicate_probability) {
            let (name, domain) = base[rng.random_range(0..base.len())].clone();
            if rng.random_bool(0.5) {
                // Exact duplicate: same domain, reworded name.
                let suffixes = [" ltd", " gmbh", " inc", ""];
                let suffix = suffixes[rng.random_range(0..suffixes.len())];
                records.push(complete_listing(&format!("{name}{suffix}"), &domain));
            } else {
                // Near duplicate: small name edit, sibling domain.
                let trimmed = name.strip_suffix('s').unwrap_or(&name).to_string();
                let sibling = domain.replace(".example", ".org");
                records.push(complete_listing(&trimmed, &sibling));
            }
        } else {
            let stem = NAME_STEMS[rng.random_range(0..NAME_STEMS.len())];
            let name = format!("{stem} {i:04} holdings");
            let domain = format!("{stem}{i:04}.example");
            base.push((name.clone(), domain.clone()));
            records.push(complete_listing(&name, &domain));
        }
    }

    records
}

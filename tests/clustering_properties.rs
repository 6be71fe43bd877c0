//! Tests for the global clustering properties of the engine.
//!
//! The properties verified here:
//!
//! 1. Partition — clusters are disjoint and cover every record
//! 2. Transitive closure — records connected through an intermediate record
//!    share a cluster even when their direct score is below threshold
//! 3. Threshold monotonicity — raising the duplicate threshold only splits
//!    or preserves clusters, never merges them
//! 4. Determinism — identical input yields identical group ids and
//!    representatives

use std::collections::{HashMap, HashSet};

use dedupe_rs::scoring::score_pair;
use dedupe_rs::{ClusterId, CompanyRecord, DedupeConfig, Deduper, RecordId};

mod support;
use support::{complete_listing, generate_listings, listing};

fn assignments_of(records: Vec<CompanyRecord>, config: DedupeConfig) -> Vec<(RecordId, ClusterId)> {
    let mut engine = Deduper::with_config(config);
    engine.ingest(records);
    engine.dedupe().unwrap().clusters.assignments()
}

#[test]
fn partition_property_over_generated_dataset() {
    let records = generate_listings(200, 0.4, 7);
    let count = records.len();
    let assignments = assignments_of(records, DedupeConfig::default());

    // Every record appears exactly once, in input order.
    assert_eq!(assignments.len(), count);
    for (index, &(record_id, _)) in assignments.iter().enumerate() {
        assert_eq!(record_id, RecordId(index as u32));
    }
}

#[test]
fn every_cluster_member_listed_exactly_once() {
    let records = generate_listings(120, 0.5, 11);
    let count = records.len();
    let mut engine = Deduper::new();
    engine.ingest(records);
    let outcome = engine.dedupe().unwrap();

    let mut seen = HashSet::new();
    for cluster in &outcome.clusters.clusters {
        assert!(!cluster.is_empty());
        for &record_id in &cluster.records {
            assert!(seen.insert(record_id), "{record_id} appears in two clusters");
        }
    }
    assert_eq!(seen.len(), count);
}

#[test]
fn transitive_closure_merges_indirect_pairs() {
    // A~B through an identical domain, B~C through an identical facebook
    // URL; A and C themselves score far below the threshold.
    let a = listing("acme corp", "acme.com");
    let mut b = listing("acme holdings", "acme.com");
    b.facebook_url = "facebook.com/acmegroup".to_string();
    let mut c = listing("acme services", "acme.net");
    c.facebook_url = "facebook.com/acmegroup".to_string();

    let config = DedupeConfig::default();
    assert_eq!(score_pair(&a, &b, &config), 100.0);
    assert_eq!(score_pair(&b, &c, &config), 100.0);
    assert!(score_pair(&a, &c, &config) < config.duplicate_threshold);

    let assignments = assignments_of(vec![a, b, c], config);
    assert_eq!(assignments[0].1, assignments[1].1);
    assert_eq!(assignments[1].1, assignments[2].1);
}

#[test]
fn threshold_monotonicity() {
    let records = generate_listings(150, 0.5, 23);

    // Include a threshold above 100 so even override matches dissolve.
    let thresholds = [60.0, 85.0, 99.0, 101.0];
    let runs: Vec<HashMap<RecordId, ClusterId>> = thresholds
        .iter()
        .map(|&threshold| {
            assignments_of(
                records.clone(),
                DedupeConfig::default().with_duplicate_threshold(threshold),
            )
            .into_iter()
            .collect()
        })
        .collect();

    for window in runs.windows(2) {
        let (loose, strict) = (&window[0], &window[1]);

        // Cluster count can only grow as the threshold rises.
        let loose_count = loose.values().collect::<HashSet<_>>().len();
        let strict_count = strict.values().collect::<HashSet<_>>().len();
        assert!(strict_count >= loose_count);

        // Refinement: records together under the strict threshold are
        // together under the loose one.
        for (&id_a, &group_a) in strict {
            for (&id_b, &group_b) in strict {
                if group_a == group_b {
                    assert_eq!(
                        loose[&id_a], loose[&id_b],
                        "{id_a} and {id_b} split by lowering the threshold"
                    );
                }
            }
        }
    }
}

#[test]
fn identical_runs_produce_identical_output() {
    let records = generate_listings(180, 0.45, 31);

    let run = |records: Vec<CompanyRecord>| {
        let mut engine = Deduper::new();
        engine.ingest(records);
        engine.dedupe().unwrap()
    };

    let first = run(records.clone());
    let second = run(records);

    assert_eq!(first.clusters, second.clusters);
    assert_eq!(first.representatives, second.representatives);
    assert_eq!(first.clusters.assignments(), second.clusters.assignments());
}

#[test]
fn group_ids_are_sequential_from_zero() {
    let records = generate_listings(80, 0.4, 43);
    let mut engine = Deduper::new();
    engine.ingest(records);
    let outcome = engine.dedupe().unwrap();

    for (index, cluster) in outcome.clusters.clusters.iter().enumerate() {
        assert_eq!(cluster.id, ClusterId(index as u32));
    }
}

#[test]
fn representative_is_most_complete_member() {
    // The sparse record comes first, the complete one second; completeness
    // must beat input order.
    let sparse = listing("acme corp", "acme.com");
    let complete = complete_listing("acme corporation", "acme.com");

    let mut engine = Deduper::new();
    engine.ingest(vec![sparse, complete]);
    let outcome = engine.dedupe().unwrap();

    assert_eq!(outcome.clusters.len(), 1);
    assert_eq!(outcome.representatives, vec![RecordId(1)]);

    let store = engine.store();
    for cluster in &outcome.clusters.clusters {
        let representative = outcome.representatives[cluster.id.0 as usize];
        let best = store.get_record(representative).unwrap().completeness();
        for &member in &cluster.records {
            assert!(best >= store.get_record(member).unwrap().completeness());
        }
    }
}

//! # Linker Module
//!
//! Builds duplicate clusters: gathers candidate pairs from every blocking
//! strategy, scores them in parallel, and merges qualifying pairs into the
//! union-find forest. Workers share nothing — each scores a slice of the
//! pair list, and a single thread applies the resulting edges.

use crate::blocking::{default_strategies, BlockingIndex, BlockingKey};
use crate::config::DedupeConfig;
use crate::dsu::{Clusters, DisjointSet};
use crate::model::RecordId;
use crate::scoring::score_pair;
use crate::store::RecordStore;
use anyhow::Result;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{debug, warn};

/// A block skipped because its size exceeded the configured guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OversizedBlock {
    /// Strategy that produced the block.
    pub strategy: String,
    /// The block key.
    pub key: String,
    /// Number of records sharing the key.
    pub size: usize,
}

/// Counters and reports from one clustering run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LinkMetrics {
    /// Records considered.
    pub records: usize,
    /// Unique candidate pairs scored across all strategies.
    pub candidate_pairs: usize,
    /// Pairs at or above the duplicate threshold.
    pub edges: usize,
    /// Resulting clusters, singletons included.
    pub clusters: usize,
    /// Blocks skipped by the size guard. Their records were excluded from
    /// pairwise comparison but still appear in the output, as singletons or
    /// clustered through other blocks.
    pub oversized_blocks: Vec<OversizedBlock>,
}

/// Clusters plus the metrics of the run that produced them.
#[derive(Debug, Clone)]
pub struct LinkOutcome {
    pub clusters: Clusters,
    pub metrics: LinkMetrics,
}

/// Build duplicate clusters with the default blocking strategies.
pub fn build_clusters(store: &RecordStore, config: &DedupeConfig) -> Result<LinkOutcome> {
    build_clusters_with(store, config, &default_strategies())
}

/// Build duplicate clusters with an explicit strategy list.
///
/// Every record becomes a node even when no strategy pairs it with anything,
/// so the resulting clusters partition the full record set.
pub fn build_clusters_with(
    store: &RecordStore,
    config: &DedupeConfig,
    strategies: &[Box<dyn BlockingKey>],
) -> Result<LinkOutcome> {
    let mut dsu = DisjointSet::new();
    for record_id in store.record_ids() {
        dsu.add_record(record_id);
    }

    let mut metrics = LinkMetrics {
        records: store.len(),
        ..Default::default()
    };

    let pairs = collect_candidate_pairs(store, config, strategies, &mut metrics);
    metrics.candidate_pairs = pairs.len();
    debug!(
        records = store.len(),
        candidate_pairs = pairs.len(),
        "scoring candidate pairs"
    );

    // Parallel scoring, shared-nothing: the score vector lines up with the
    // pair list, and the merge below runs on a single thread.
    let records = store.records();
    let scores: Vec<f64> = pairs
        .par_iter()
        .map(|&(a, b)| {
            score_pair(
                &records[a.0 as usize],
                &records[b.0 as usize],
                config,
            )
        })
        .collect();

    for (&(a, b), &score) in pairs.iter().zip(scores.iter()) {
        if score >= config.duplicate_threshold {
            metrics.edges += 1;
            dsu.union(a, b);
        }
    }

    let clusters = dsu.get_clusters();
    metrics.clusters = clusters.len();
    debug!(
        edges = metrics.edges,
        clusters = metrics.clusters,
        "clustering complete"
    );

    Ok(LinkOutcome { clusters, metrics })
}

/// Union of intra-block pairs across all strategies, deduplicated and sorted.
/// A pair contributed by several strategies is scored once.
fn collect_candidate_pairs(
    store: &RecordStore,
    config: &DedupeConfig,
    strategies: &[Box<dyn BlockingKey>],
    metrics: &mut LinkMetrics,
) -> Vec<(RecordId, RecordId)> {
    let mut pairs: FxHashSet<(RecordId, RecordId)> = FxHashSet::default();

    for strategy in strategies {
        let index = BlockingIndex::build(store.records(), strategy.as_ref());
        debug!(
            strategy = strategy.name(),
            blocks = index.len(),
            "blocking index built"
        );
        let skipped_before = metrics.oversized_blocks.len();

        for (key, members) in index.blocks() {
            if members.len() < 2 {
                continue;
            }
            if members.len() > config.max_block_size {
                warn!(
                    strategy = strategy.name(),
                    key,
                    size = members.len(),
                    max = config.max_block_size,
                    "block exceeds size guard, skipping pairwise comparison"
                );
                metrics.oversized_blocks.push(OversizedBlock {
                    strategy: strategy.name().to_string(),
                    key: key.to_string(),
                    size: members.len(),
                });
                continue;
            }
            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    let pair = if a < b { (a, b) } else { (b, a) };
                    pairs.insert(pair);
                }
            }
        }

        // Block iteration order follows the hash map; keep reports stable.
        metrics.oversized_blocks[skipped_before..].sort_unstable_by(|a, b| a.key.cmp(&b.key));
    }

    let mut pairs: Vec<(RecordId, RecordId)> = pairs.into_iter().collect();
    pairs.sort_unstable();
    pairs
}

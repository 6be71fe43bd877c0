//! # Dedupe
//!
//! A batch deduplication engine for company listings. Records that describe
//! the same real-world organization — differing in spelling, formatting or
//! completeness — are grouped into clusters, and the most complete record of
//! each cluster is selected as its representative.
//!
//! The pipeline: blocking (candidate-pair reduction) → pairwise fuzzy
//! scoring → union-find clustering → representative selection. Similarity is
//! a local signal; cluster membership is its transitive closure.

pub mod blocking;
pub mod config;
pub mod dsu;
pub mod linker;
pub mod model;
pub mod normalize;
pub mod representative;
pub mod scoring;
pub mod store;
pub mod tabular;
pub mod utils;

// Re-export main types for convenience
pub use config::{DedupeConfig, ScoringWeights};
pub use dsu::{Cluster, Clusters};
pub use linker::{LinkMetrics, LinkOutcome};
pub use model::{ClusterId, CompanyRecord, RecordId, COLUMNS};
pub use normalize::Normalizer;
pub use store::RecordStore;

use anyhow::Result;

/// Result of a full deduplication pass.
#[derive(Debug, Clone)]
pub struct DedupeOutcome {
    /// Duplicate clusters, singletons included.
    pub clusters: Clusters,
    /// One representative record id per cluster, in cluster order.
    pub representatives: Vec<RecordId>,
    /// Counters and skipped-block reports from the run.
    pub metrics: LinkMetrics,
}

/// Main API for company-record deduplication.
///
/// Owns the record table and the run configuration; the heavy lifting lives
/// in the [`linker`] and [`representative`] modules.
#[derive(Debug, Clone, Default)]
pub struct Deduper {
    store: RecordStore,
    config: DedupeConfig,
}

impl Deduper {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DedupeConfig::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: DedupeConfig) -> Self {
        Self {
            store: RecordStore::new(),
            config,
        }
    }

    /// Ingest records. Ids are assigned by input order across calls.
    pub fn ingest(&mut self, records: Vec<CompanyRecord>) {
        self.store.add_records(records);
    }

    /// The underlying record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The active configuration.
    pub fn config(&self) -> &DedupeConfig {
        &self.config
    }

    /// Number of ingested records.
    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    /// Get a record by id.
    pub fn get_record(&self, id: RecordId) -> Option<&CompanyRecord> {
        self.store.get_record(id)
    }

    /// Build duplicate clusters from the current store.
    pub fn build_clusters(&self) -> Result<LinkOutcome> {
        linker::build_clusters(&self.store, &self.config)
    }

    /// Select one representative per cluster.
    pub fn representatives(&self, clusters: &Clusters) -> Vec<RecordId> {
        representative::select_representatives(&self.store, clusters)
    }

    /// Run the full pass: clustering plus representative selection.
    pub fn dedupe(&self) -> Result<DedupeOutcome> {
        let LinkOutcome { clusters, metrics } = self.build_clusters()?;
        let representatives = self.representatives(&clusters);
        Ok(DedupeOutcome {
            clusters,
            representatives,
            metrics,
        })
    }
}

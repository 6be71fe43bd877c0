//! # Configuration Module
//!
//! Tuning knobs for the deduplication pipeline. The thresholds are hand-tuned
//! operating points, not invariants — callers may move them, and the engine
//! only guarantees that raising the duplicate threshold never merges clusters
//! further.

/// Per-field weights for the weighted similarity sum.
///
/// Legal names participate in the override rule only, not in the sum.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    pub name: f64,
    pub commercial_name: f64,
    pub domain: f64,
    pub phone: f64,
    pub description: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name: 0.35,
            commercial_name: 0.25,
            domain: 0.15,
            phone: 0.05,
            description: 0.15,
        }
    }
}

/// Configuration for a deduplication run.
#[derive(Debug, Clone, PartialEq)]
pub struct DedupeConfig {
    /// Minimum pair score for a similarity edge.
    pub duplicate_threshold: f64,
    /// Similarity at which a single strong identifier decides the pair.
    pub override_threshold: f64,
    /// Weights for the weighted similarity sum.
    pub weights: ScoringWeights,
    /// Blocks larger than this are skipped for pairwise scoring and reported,
    /// bounding the quadratic cost of degenerate keys.
    pub max_block_size: usize,
}

impl Default for DedupeConfig {
    fn default() -> Self {
        Self {
            duplicate_threshold: 85.0,
            override_threshold: 98.0,
            weights: ScoringWeights::default(),
            max_block_size: 1000,
        }
    }
}

impl DedupeConfig {
    pub fn with_duplicate_threshold(mut self, threshold: f64) -> Self {
        self.duplicate_threshold = threshold;
        self
    }

    pub fn with_override_threshold(mut self, threshold: f64) -> Self {
        self.override_threshold = threshold;
        self
    }

    pub fn with_max_block_size(mut self, max_block_size: usize) -> Self {
        self.max_block_size = max_block_size;
        self
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }
}

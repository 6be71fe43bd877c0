//! # Blocking Module
//!
//! Candidate-pair reduction. A blocking key is a coarse signature; only
//! records sharing a key under at least one strategy are ever scored
//! pairwise, cutting the comparison count from O(n²) to the sum of
//! per-block squares.

use crate::model::{CompanyRecord, RecordId};
use hashbrown::HashMap;

/// A blocking-key strategy: a pure function from record to coarse key.
///
/// Strategies are applied in union — each contributes candidate pairs to the
/// same graph-building step, so records missing one signal (say, a domain)
/// can still be grouped by another (an identical name).
pub trait BlockingKey: Send + Sync {
    /// Stable name used in logs and metrics.
    fn name(&self) -> &'static str;

    /// Compute the block key for a record. An empty key is a valid key:
    /// records with neither name nor domain still land in a common block.
    fn key(&self, record: &CompanyRecord) -> String;
}

/// Prefix of the company name joined with a prefix of the website domain.
///
/// The relaxed key from the original pipeline: close spellings of the same
/// company nearly always agree on the first few characters of both fields.
#[derive(Debug, Clone, Copy)]
pub struct NameDomainPrefix {
    prefix_len: usize,
}

impl NameDomainPrefix {
    pub fn new(prefix_len: usize) -> Self {
        Self { prefix_len }
    }
}

impl Default for NameDomainPrefix {
    fn default() -> Self {
        Self::new(4)
    }
}

impl BlockingKey for NameDomainPrefix {
    fn name(&self) -> &'static str {
        "name_domain_prefix"
    }

    fn key(&self, record: &CompanyRecord) -> String {
        let mut key = char_prefix(&record.company_name, self.prefix_len);
        key.push('|');
        key.push_str(&char_prefix(&record.website_domain, self.prefix_len));
        key
    }
}

/// Exact primary-name key. Recovers pairs the coarse key misses when domains
/// differ but the listed name is identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactName;

impl BlockingKey for ExactName {
    fn name(&self) -> &'static str {
        "exact_name"
    }

    fn key(&self, record: &CompanyRecord) -> String {
        record.company_name.clone()
    }
}

/// The default strategy list, in application order.
pub fn default_strategies() -> Vec<Box<dyn BlockingKey>> {
    vec![
        Box::new(NameDomainPrefix::default()),
        Box::new(ExactName),
    ]
}

/// Prefix on char boundaries, so multi-byte text cannot split a sequence.
fn char_prefix(value: &str, len: usize) -> String {
    value.chars().take(len).collect()
}

/// Mapping from block key to the records sharing it under one strategy.
#[derive(Debug, Clone, Default)]
pub struct BlockingIndex {
    blocks: HashMap<String, Vec<RecordId>>,
}

impl BlockingIndex {
    /// Build the index for one strategy over the full record set. Pure
    /// function of its inputs.
    pub fn build(records: &[CompanyRecord], strategy: &dyn BlockingKey) -> Self {
        let mut blocks: HashMap<String, Vec<RecordId>> = HashMap::new();
        for record in records {
            blocks
                .entry(strategy.key(record))
                .or_default()
                .push(record.id);
        }
        Self { blocks }
    }

    /// Iterate over blocks as (key, member ids).
    pub fn blocks(&self) -> impl Iterator<Item = (&str, &[RecordId])> {
        self.blocks
            .iter()
            .map(|(key, ids)| (key.as_str(), ids.as_slice()))
    }

    /// Number of blocks, including singleton and empty-key blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

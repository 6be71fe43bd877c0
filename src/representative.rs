//! # Representative Selection
//!
//! Picks the canonical record for each cluster: the most complete member
//! (most non-empty fields), with ties going to the earliest input position.

use crate::dsu::Clusters;
use crate::model::RecordId;
use crate::store::RecordStore;

/// Select one representative per cluster, in cluster order.
///
/// Within a cluster the member with the highest completeness wins; members
/// are visited in ascending id order, so on equal completeness the first
/// occurrence in the input is kept. The choice is deterministic for a given
/// input ordering.
pub fn select_representatives(store: &RecordStore, clusters: &Clusters) -> Vec<RecordId> {
    clusters
        .clusters
        .iter()
        .map(|cluster| {
            let mut best_id = cluster.root;
            let mut best_completeness = completeness_of(store, best_id);
            for &record_id in &cluster.records {
                let completeness = completeness_of(store, record_id);
                if completeness > best_completeness {
                    best_id = record_id;
                    best_completeness = completeness;
                }
            }
            best_id
        })
        .collect()
}

fn completeness_of(store: &RecordStore, record_id: RecordId) -> usize {
    store
        .get_record(record_id)
        .map(|record| record.completeness())
        .unwrap_or(0)
}

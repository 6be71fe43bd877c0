//! # Utilities Module
//!
//! Shared helpers for reporting the outcome of a deduplication run.

use crate::dsu::Clusters;
use crate::store::RecordStore;

/// Render a clustering run as a plain-text summary: totals plus one line per
/// multi-record cluster, naming its members.
pub fn summarize_clusters(store: &RecordStore, clusters: &Clusters) -> String {
    let mut summary = String::new();

    summary.push_str("Deduplication Summary\n");
    summary.push_str("=====================\n\n");

    let duplicates: usize = clusters
        .clusters
        .iter()
        .filter(|cluster| cluster.len() > 1)
        .map(|cluster| cluster.len())
        .sum();
    summary.push_str(&format!("Total records:  {}\n", store.len()));
    summary.push_str(&format!("Total groups:   {}\n", clusters.len()));
    summary.push_str(&format!("In duplicates:  {duplicates}\n\n"));

    for cluster in &clusters.clusters {
        if cluster.len() < 2 {
            continue;
        }
        summary.push_str(&format!("{} ({} records):\n", cluster.id, cluster.len()));
        for &record_id in &cluster.records {
            let name = store
                .get_record(record_id)
                .map(|record| record.company_name.as_str())
                .unwrap_or("");
            summary.push_str(&format!("  - {record_id} {name}\n"));
        }
    }

    summary
}

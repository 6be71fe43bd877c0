//! # Disjoint Set Union (DSU)
//!
//! Union-Find over record identifiers with union by rank and path halving.
//! Connected components of the similarity graph are extracted directly from
//! the DSU, so no explicit edge list is ever materialized.

use crate::model::{ClusterId, RecordId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Disjoint-set forest over record ids.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: FxHashMap<RecordId, RecordId>,
    rank: FxHashMap<RecordId, u32>,
    cluster_count: usize,
}

impl DisjointSet {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self {
            parent: FxHashMap::default(),
            rank: FxHashMap::default(),
            cluster_count: 0,
        }
    }

    /// Add a record as its own singleton cluster. Adding an existing record
    /// is a no-op.
    pub fn add_record(&mut self, record_id: RecordId) {
        if self.parent.contains_key(&record_id) {
            return;
        }
        self.parent.insert(record_id, record_id);
        self.rank.insert(record_id, 0);
        self.cluster_count += 1;
    }

    /// Check if a record is tracked.
    pub fn has_record(&self, record_id: RecordId) -> bool {
        self.parent.contains_key(&record_id)
    }

    /// Find the root of a record, compressing the path by halving: every
    /// visited node is pointed at its grandparent. Untracked records are
    /// their own root.
    pub fn find(&mut self, record_id: RecordId) -> RecordId {
        let Some(&parent) = self.parent.get(&record_id) else {
            return record_id;
        };
        if parent == record_id {
            return record_id;
        }

        let mut current = record_id;
        let mut parent = parent;
        loop {
            let grandparent = self.parent.get(&parent).copied().unwrap_or(parent);
            if grandparent == parent {
                break;
            }
            self.parent.insert(current, grandparent);
            current = grandparent;
            parent = self.parent.get(&current).copied().unwrap_or(current);
            if parent == current {
                break;
            }
        }
        parent
    }

    /// Check if two records are in the same cluster.
    pub fn same_cluster(&mut self, a: RecordId, b: RecordId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merge the clusters of two records. Records not yet tracked are added
    /// first. Returns true if two distinct clusters were joined.
    pub fn union(&mut self, a: RecordId, b: RecordId) -> bool {
        self.add_record(a);
        self.add_record(b);

        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank.get(&root_a).copied().unwrap_or(0);
        let rank_b = self.rank.get(&root_b).copied().unwrap_or(0);
        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_a, root_b);
            self.rank.insert(root_b, rank_b + 1);
        }
        self.cluster_count -= 1;
        true
    }

    /// Current number of clusters.
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Number of tracked records.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Extract all clusters.
    ///
    /// The result is deterministic regardless of union order: clusters are
    /// ordered by their smallest member id and numbered sequentially from 0,
    /// members are ascending, and the reported root is the smallest member.
    /// Running the same input twice therefore yields identical cluster ids.
    pub fn get_clusters(&mut self) -> Clusters {
        let mut record_ids: Vec<RecordId> = self.parent.keys().copied().collect();
        record_ids.sort_unstable();

        let mut members: FxHashMap<RecordId, Vec<RecordId>> = FxHashMap::default();
        let mut root_order: Vec<RecordId> = Vec::new();
        for record_id in record_ids {
            let root = self.find(record_id);
            let bucket = members.entry(root).or_insert_with(|| {
                root_order.push(root);
                Vec::new()
            });
            bucket.push(record_id);
        }

        let clusters = root_order
            .into_iter()
            .enumerate()
            .map(|(index, root)| {
                let records = members.remove(&root).unwrap_or_default();
                Cluster {
                    id: ClusterId(index as u32),
                    root: records[0],
                    records,
                }
            })
            .collect();

        Clusters { clusters }
    }
}

/// A duplicate cluster: one connected component of the similarity graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Cluster identifier, stable for the run.
    pub id: ClusterId,
    /// Smallest member id, used as the canonical anchor.
    pub root: RecordId,
    /// All member ids, ascending.
    pub records: Vec<RecordId>,
}

impl Cluster {
    /// Number of records in this cluster.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if this cluster contains a specific record.
    pub fn contains(&self, record_id: RecordId) -> bool {
        self.records.contains(&record_id)
    }
}

/// Collection of all clusters from one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clusters {
    pub clusters: Vec<Cluster>,
}

impl Clusters {
    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Total records across all clusters.
    pub fn total_records(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }

    /// Flatten to (record id, cluster id) pairs, ascending by record id.
    pub fn assignments(&self) -> Vec<(RecordId, ClusterId)> {
        let mut assignments: Vec<(RecordId, ClusterId)> = self
            .clusters
            .iter()
            .flat_map(|cluster| cluster.records.iter().map(|&id| (id, cluster.id)))
            .collect();
        assignments.sort_unstable_by_key(|&(record_id, _)| record_id);
        assignments
    }

    /// Cluster id for a record, if present in any cluster.
    pub fn cluster_of(&self, record_id: RecordId) -> Option<ClusterId> {
        self.clusters
            .iter()
            .find(|cluster| cluster.contains(record_id))
            .map(|cluster| cluster.id)
    }
}

//! # Store Module
//!
//! In-memory storage for normalized company records. Records are kept in
//! input order and identifiers are dense ordinals, so lookup by id is a plain
//! index access.

use crate::model::{CompanyRecord, RecordId};

/// Insertion-ordered table of company records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<CompanyRecord>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add records to the store. Each record receives the next sequential id,
    /// overwriting whatever id it carried — identifiers are defined by input
    /// order.
    pub fn add_records(&mut self, records: Vec<CompanyRecord>) {
        self.records.reserve(records.len());
        for mut record in records {
            record.id = RecordId(self.records.len() as u32);
            self.records.push(record);
        }
    }

    /// Get a record by id.
    pub fn get_record(&self, id: RecordId) -> Option<&CompanyRecord> {
        self.records.get(id.0 as usize)
    }

    /// All records, in input order.
    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    /// All record ids, in input order.
    pub fn record_ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(|record| record.id)
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

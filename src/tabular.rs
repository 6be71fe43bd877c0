//! # Tabular I/O
//!
//! CSV input and output for the pipeline. Input validation is strict about
//! column presence and lenient about everything else: a missing or short
//! field is an empty string, never an error.

use crate::dsu::Clusters;
use crate::model::{CompanyRecord, RecordId, COLUMNS};
use crate::store::RecordStore;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Read company records from a CSV file.
///
/// Fails before any scoring if a required column is missing; extra columns
/// are ignored. Record ids are provisional here — the store reassigns them
/// on ingest in the same order.
pub fn read_records(path: &Path) -> Result<Vec<CompanyRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open input table {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header row of {}", path.display()))?
        .clone();
    let positions = column_positions(&headers)?;

    let mut records = Vec::new();
    for (row_index, row) in reader.records().enumerate() {
        let row = row.with_context(|| {
            format!("failed to read row {} of {}", row_index + 1, path.display())
        })?;
        let values: [String; 22] =
            positions.map(|position| row.get(position).unwrap_or("").to_string());
        records.push(CompanyRecord::from_columns(
            RecordId(row_index as u32),
            values,
        ));
    }
    Ok(records)
}

/// Resolve the position of every required column, failing with the full list
/// of missing names.
fn column_positions(headers: &csv::StringRecord) -> Result<[usize; 22]> {
    let mut positions = [0usize; 22];
    let mut missing = Vec::new();
    for (slot, column) in positions.iter_mut().zip(COLUMNS.iter()) {
        match headers.iter().position(|header| header == *column) {
            Some(position) => *slot = position,
            None => missing.push(*column),
        }
    }
    if !missing.is_empty() {
        bail!("input table is missing required columns: {}", missing.join(", "));
    }
    Ok(positions)
}

/// Write every record with its assigned group id.
pub fn write_grouped_records(
    path: &Path,
    store: &RecordStore,
    clusters: &Clusters,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create output table {}", path.display()))?;

    let mut header: Vec<&str> = COLUMNS.to_vec();
    header.push("group_id");
    writer.write_record(&header)?;

    for (record_id, cluster_id) in clusters.assignments() {
        let record = store
            .get_record(record_id)
            .with_context(|| format!("record {record_id} missing from store"))?;
        let group = cluster_id.0.to_string();
        let mut row: Vec<&str> = record.fields().to_vec();
        row.push(&group);
        writer.write_record(&row)?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush output table {}", path.display()))?;
    Ok(())
}

/// Write one representative row per group, original columns only.
pub fn write_representatives(
    path: &Path,
    store: &RecordStore,
    representatives: &[RecordId],
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create output table {}", path.display()))?;

    writer.write_record(&COLUMNS)?;
    for &record_id in representatives {
        let record = store
            .get_record(record_id)
            .with_context(|| format!("record {record_id} missing from store"))?;
        writer.write_record(&record.fields())?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush output table {}", path.display()))?;
    Ok(())
}

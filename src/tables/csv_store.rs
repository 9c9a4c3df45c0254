// csv_store.rs
//
// The persisted table is the only channel between the harvest and analyze
// stages: harvest writes it, analyze reads it back.

use crate::harvester::ListingRecord;
use crate::tables::TableError;
use std::fs::File;
use std::path::Path;

const HEADER: [&str; 3] = ["Price", "Size", "Rooms"];

/// Writes the harvested records as comma-separated values with a header
/// row. Absent price/size come out as the sentinel string.
pub fn write_records(path: &Path, records: &[ListingRecord]) -> Result<(), TableError> {
    let file = File::create(path).map_err(|e| TableError::Io(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(file);

    if records.is_empty() {
        // serde only emits the header alongside the first row.
        writer
            .write_record(HEADER)
            .map_err(|e| TableError::Csv(e.to_string()))?;
    }
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| TableError::Csv(e.to_string()))?;
    }

    writer.flush().map_err(|e| TableError::Io(e.to_string()))?;
    Ok(())
}

/// Loads a previously persisted table, mapping sentinel cells back to
/// absent values.
pub fn read_records(path: &Path) -> Result<Vec<ListingRecord>, TableError> {
    let file = File::open(path).map_err(|e| TableError::Io(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row.map_err(|e| TableError::Csv(e.to_string()))?);
    }
    Ok(records)
}

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

/// One row of the NL-to-UML dataset: a named description with its reference
/// class list and associations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Classes")]
    pub classes: String,
    #[serde(rename = "Associations")]
    pub associations: String,
}

/// Loads the dataset from a CSV file with `Name,Description,Classes,Associations`
/// headers.
pub fn load_dataset(path: &str) -> Result<Vec<DatasetRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: DatasetRecord = row?;
        records.push(record);
    }
    info!("Loaded {} dataset records from {}", records.len(), path);
    Ok(records)
}

/// Partitions the dataset into in-context examples (rows whose name appears
/// in `shot_names`) and evaluation rows (the rest), preserving input order.
///
/// Shot names that match no row are logged as a warning.
pub fn split_shots(
    records: Vec<DatasetRecord>,
    shot_names: &[String],
) -> (Vec<DatasetRecord>, Vec<DatasetRecord>) {
    let wanted: HashSet<&str> = shot_names.iter().map(String::as_str).collect();
    let present: HashSet<&str> = records.iter().map(|r| r.name.as_str()).collect();
    for name in &wanted {
        if !present.contains(name) {
            warn!("Shot '{}' not found in the dataset", name);
        }
    }

    records
        .into_iter()
        .partition(|r| wanted.contains(r.name.as_str()))
}

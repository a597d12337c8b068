use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{LaunchDataset, LaunchRecord, Outcome, RecordError};

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

/// One row as it appears in the source file. Column names are fixed by the
/// upstream export; any extra columns are ignored, a missing required column
/// fails deserialization for every row.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
    #[serde(rename = "class")]
    class: i64,
}

impl TryFrom<RawRow> for LaunchRecord {
    type Error = RecordError;

    fn try_from(raw: RawRow) -> Result<Self, RecordError> {
        let site = raw.site.trim().to_string();
        if site.is_empty() {
            return Err(RecordError::EmptySite);
        }
        if raw.payload_mass_kg < 0.0 {
            return Err(RecordError::NegativePayload(raw.payload_mass_kg));
        }
        Ok(LaunchRecord {
            site,
            payload_mass_kg: raw.payload_mass_kg,
            booster_category: raw.booster_category,
            outcome: Outcome::from_class(raw.class)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch dataset from a CSV file.
///
/// Any missing file, missing column, or malformed row is an error: the
/// process must not start with a partial dataset.
pub fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_csv(file).with_context(|| format!("loading {}", path.display()))
}

/// Load the launch dataset from any CSV reader (header row required).
pub fn read_csv<R: Read>(reader: R) -> Result<LaunchDataset> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row_no, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let record =
            LaunchRecord::try_from(raw).with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(LaunchDataset::from_records(records))
}

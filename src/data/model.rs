use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – the binary success flag of one launch
// ---------------------------------------------------------------------------

/// Launch outcome, parsed from the CSV `class` column (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Parse the raw `class` value; anything other than 0 or 1 is rejected.
    pub fn from_class(class: i64) -> Result<Self, RecordError> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(RecordError::BadClass(other)),
        }
    }

    /// Numeric value for the scatter y-axis (0.0 or 1.0).
    pub fn class(&self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// RecordError – per-row validation failures
// ---------------------------------------------------------------------------

/// A field-level problem in one CSV row. The loader wraps this with row
/// context and fails the whole load; partial datasets are never produced.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("`class` must be 0 or 1, got {0}")]
    BadClass(i64),
    #[error("`Launch Site` is empty")]
    EmptySite,
    #[error("`Payload Mass (kg)` is negative: {0}")]
    NegativePayload(f64),
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. "CCAFS LC-40".
    pub site: String,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    /// Booster version category, used only for scatter colouring.
    pub booster_category: String,
    /// Mission outcome.
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed site list and payload bounds.
///
/// Built once at startup and never mutated afterwards; every query is a pure
/// function over it.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows), in source-file order.
    pub records: Vec<LaunchRecord>,
    /// Sorted unique launch sites present in the data.
    pub sites: Vec<String>,
    /// Smallest observed payload mass (0.0 for an empty dataset).
    pub payload_min: f64,
    /// Largest observed payload mass (0.0 for an empty dataset).
    pub payload_max: f64,
}

impl LaunchDataset {
    /// Build site and payload-bound indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let sites_set: BTreeSet<String> =
            records.iter().map(|r| r.site.clone()).collect();
        let sites: Vec<String> = sites_set.into_iter().collect();

        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;
        for r in &records {
            payload_min = payload_min.min(r.payload_mass_kg);
            payload_max = payload_max.max(r.payload_mass_kg);
        }
        if records.is_empty() {
            payload_min = 0.0;
            payload_max = 0.0;
        }

        LaunchDataset {
            records,
            sites,
            payload_min,
            payload_max,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(site: &str, payload: f64, booster: &str, class: i64) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: booster.to_string(),
            outcome: Outcome::from_class(class).unwrap(),
        }
    }

    #[test]
    fn outcome_rejects_values_outside_binary_flag() {
        assert!(Outcome::from_class(0).is_ok());
        assert!(Outcome::from_class(1).is_ok());
        assert!(Outcome::from_class(2).is_err());
        assert!(Outcome::from_class(-1).is_err());
    }

    #[test]
    fn dataset_indexes_sites_sorted_and_unique() {
        let ds = LaunchDataset::from_records(vec![
            rec("KSC LC-39A", 500.0, "FT", 1),
            rec("CCAFS LC-40", 1500.0, "v1.1", 0),
            rec("KSC LC-39A", 800.0, "FT", 1),
        ]);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn dataset_tracks_observed_payload_bounds() {
        let ds = LaunchDataset::from_records(vec![
            rec("A", 500.0, "FT", 1),
            rec("A", 1500.0, "FT", 0),
            rec("B", 800.0, "FT", 1),
        ]);
        assert_eq!(ds.payload_min, 500.0);
        assert_eq!(ds.payload_max, 1500.0);
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_min, 0.0);
        assert_eq!(ds.payload_max, 0.0);
    }
}

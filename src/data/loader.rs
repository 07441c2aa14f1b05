// ============================================================
// Layer 4 — Batch Record Loader
// ============================================================
// Loads employee records from a JSON file for batch prediction.
//
// Expected file shape: a JSON array of objects keyed by the
// training-time column names:
//
//   [
//     { "Age": 30, "Gender": "Male", "Department": "IT", ... },
//     { "Age": 52, "Gender": "Female", ... }
//   ]
//
// A missing file or malformed JSON is an error for the whole
// batch; per-record domain problems are left to the validator
// so one bad row does not sink the others.
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::employee::EmployeeRecord;
use crate::domain::traits::RecordSource;

/// Reads a JSON array of EmployeeRecords from one file.
/// Implements the RecordSource trait from Layer 3.
pub struct JsonRecordLoader {
    path: PathBuf,
}

impl JsonRecordLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonRecordLoader {
    fn load_all(&self) -> Result<Vec<EmployeeRecord>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read input file '{}'", self.path.display()))?;

        let records: Vec<EmployeeRecord> = serde_json::from_str(&json)
            .with_context(|| {
                format!("'{}' is not a JSON array of employee records", self.path.display())
            })?;

        if records.is_empty() {
            tracing::warn!("Input file '{}' contains no records", self.path.display());
        }

        tracing::info!("Loaded {} records from '{}'", records.len(), self.path.display());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_array_of_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let records = vec![EmployeeRecord::default(), EmployeeRecord::default()];
        write!(file, "{}", serde_json::to_string(&records).unwrap()).unwrap();

        let loaded = JsonRecordLoader::new(file.path()).load_all().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonRecordLoader::new(dir.path().join("absent.json")).load_all().unwrap_err();
        assert!(err.to_string().contains("Cannot read input file"));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"Age": 30}}]"#).unwrap();
        assert!(JsonRecordLoader::new(file.path()).load_all().is_err());
    }
}

// ============================================================
// Layer 6 — Batch Report Writer
// ============================================================
// Writes one CSV row per batch record so results can be opened
// in a spreadsheet next to the input file.
//
// Output columns:
//   index        position of the record in the input array
//   label        "Yes (High Risk)" / "No (Low Risk)", empty on error
//   prediction   1 / 0, empty on error
//   probability  P(attrition) in percent, 1 decimal
//   confidence   max class probability in percent, 1 decimal
//   error        error kind for a failed record, empty otherwise
//
// Example:
//   index,label,prediction,probability,confidence,error
//   0,No (Low Risk),0,12.0,88.0,
//   1,,,,,invalid_category

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::domain::error::PipelineResult;
use crate::domain::prediction::AttritionPrediction;

pub const REPORT_HEADER: &str = "index,label,prediction,probability,confidence,error";

pub struct ReportWriter {
    path: PathBuf,
    out:  BufWriter<File>,
}

impl ReportWriter {
    /// Create (or truncate) the report file and write the header row
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }

        let file = File::create(&path)
            .with_context(|| format!("Cannot create report '{}'", path.display()))?;
        let mut out = BufWriter::new(file);
        writeln!(out, "{REPORT_HEADER}")?;

        tracing::debug!("Created report CSV: '{}'", path.display());
        Ok(Self { path, out })
    }

    /// Append the outcome of one record
    pub fn write(&mut self, index: usize, outcome: &PipelineResult<AttritionPrediction>) -> Result<()> {
        match outcome {
            Ok(p) => writeln!(
                self.out,
                "{},{},{},{:.1},{:.1},",
                index,
                p.label(),
                p.class,
                p.attrition_percent(),
                p.confidence_percent(),
            )?,
            Err(e) => writeln!(self.out, "{},,,,,{}", index, e.kind())?,
        }
        Ok(())
    }

    /// Flush buffered rows to disk
    pub fn finish(mut self) -> Result<PathBuf> {
        self.out
            .flush()
            .with_context(|| format!("Cannot write report '{}'", self.path.display()))?;
        Ok(self.path)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PipelineError;

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = ReportWriter::create(dir.path().join("out/report.csv")).unwrap();

        w.write(0, &Ok(AttritionPrediction::new(0, [0.88, 0.12]))).unwrap();
        w.write(1, &Err(PipelineError::InvalidCategory {
            field: "Gender".into(),
            value: "X".into(),
        }))
        .unwrap();
        let path = w.finish().unwrap();

        let text = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], REPORT_HEADER);
        assert_eq!(lines[1], "0,No (Low Risk),0,12.0,88.0,");
        assert_eq!(lines[2], "1,,,,,invalid_category");
    }
}

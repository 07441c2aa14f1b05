// ============================================================
// Layer 2 — BatchUseCase
// ============================================================
// Predicts every record from a RecordSource:
//
//   Step 1: Load records                (Layer 4 - data)
//   Step 2: Run PredictUseCase per row  (Layer 2)
//   Step 3: Write CSV report, if asked  (Layer 6 - infra)
//
// A record that fails is logged and kept as an Err outcome;
// the rest of the batch still runs. Only a source or report
// I/O failure aborts the batch.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::application::context::InferenceContext;
use crate::application::predict_use_case::PredictUseCase;
use crate::domain::error::PipelineResult;
use crate::domain::prediction::AttritionPrediction;
use crate::domain::traits::RecordSource;
use crate::infra::report::ReportWriter;

/// Outcome of a whole batch, in input order
pub struct BatchSummary {
    pub outcomes:    Vec<PipelineResult<AttritionPrediction>>,
    pub report_path: Option<PathBuf>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn high_risk(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Ok(p) if p.is_high_risk()))
            .count()
    }
}

pub struct BatchUseCase<'a> {
    ctx: &'a InferenceContext,
}

impl<'a> BatchUseCase<'a> {
    pub fn new(ctx: &'a InferenceContext) -> Self {
        Self { ctx }
    }

    pub fn execute(&self, source: &dyn RecordSource, report: Option<&Path>) -> Result<BatchSummary> {
        let records = source.load_all()?;
        let predictor = PredictUseCase::new(self.ctx);

        let mut writer = report.map(ReportWriter::create).transpose()?;
        let mut outcomes = Vec::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            let outcome = predictor.execute(record);
            if let Err(e) = &outcome {
                tracing::warn!("Record {}: {}", i, e);
            }
            if let Some(w) = writer.as_mut() {
                w.write(i, &outcome)?;
            }
            outcomes.push(outcome);
        }

        let report_path = writer.map(ReportWriter::finish).transpose()?;
        let summary = BatchSummary { outcomes, report_path };

        tracing::info!(
            "Batch complete: {} predicted ({} high risk), {} failed",
            summary.succeeded(),
            summary.high_risk(),
            summary.failed()
        );
        Ok(summary)
    }
}

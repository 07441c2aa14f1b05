// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Runs the two artifact stages on an assembled feature row:
//
//   FeatureMatrix ──scaler.transform──▶ scaled ──classifier──▶ class + [P0, P1]
//
// The artifacts are held as trait objects and never mutated,
// so calling predict twice with the same row gives the same
// result.

use crate::domain::error::{PipelineError, PipelineResult};
use crate::domain::features::FeatureMatrix;
use crate::domain::prediction::AttritionPrediction;
use crate::domain::traits::{Classifier, Scaler};

pub struct Inferencer {
    scaler:     Box<dyn Scaler>,
    classifier: Box<dyn Classifier>,
}

impl Inferencer {
    /// Pair a scaler with a classifier. Both must agree on the input width.
    pub fn new(scaler: Box<dyn Scaler>, classifier: Box<dyn Classifier>) -> PipelineResult<Self> {
        if scaler.n_features() != classifier.n_features() {
            return Err(PipelineError::ShapeMismatch {
                stage:    "classifier",
                expected: classifier.n_features(),
                actual:   scaler.n_features(),
            });
        }
        Ok(Self { scaler, classifier })
    }

    pub fn n_features(&self) -> usize {
        self.scaler.n_features()
    }

    /// Scaling stage: same shape out as in
    pub fn scale(&self, features: &FeatureMatrix) -> PipelineResult<FeatureMatrix> {
        self.scaler.transform(features)
    }

    /// Prediction stage for every row of an already-scaled matrix
    pub fn classify(&self, scaled: &FeatureMatrix) -> PipelineResult<Vec<AttritionPrediction>> {
        let classes = self.classifier.predict(scaled)?;
        let probas  = self.classifier.predict_proba(scaled)?;

        Ok(classes
            .into_iter()
            .zip(probas)
            .map(|(class, probabilities)| AttritionPrediction::new(class, probabilities))
            .collect())
    }

    /// Scale then classify a single-row matrix
    pub fn predict(&self, features: &FeatureMatrix) -> PipelineResult<AttritionPrediction> {
        if features.rows() != 1 {
            return Err(PipelineError::ShapeMismatch {
                stage:    "inferencer",
                expected: 1,
                actual:   features.rows(),
            });
        }

        let scaled = self.scale(features)?;
        let prediction = self
            .classify(&scaled)?
            .into_iter()
            .next()
            .ok_or(PipelineError::ShapeMismatch { stage: "classifier", expected: 1, actual: 0 })?;

        tracing::debug!(
            "class={} p0={:.4} p1={:.4}",
            prediction.class,
            prediction.probabilities[0],
            prediction.probabilities[1]
        );
        Ok(prediction)
    }
}

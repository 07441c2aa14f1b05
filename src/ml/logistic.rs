// ============================================================
// Layer 5 — Logistic Regression Classifier
// ============================================================
//   score = w · x + b
//   P(1)  = 1 / (1 + e^-score)
//   class = 1 when score > 0

use serde::{Deserialize, Serialize};

use crate::domain::error::PipelineResult;
use crate::domain::features::FeatureMatrix;
use crate::domain::traits::Classifier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coef:      Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn validate(&self) -> Result<(), String> {
        if self.coef.is_empty() {
            return Err("coef is empty".into());
        }
        if self.coef.iter().chain(std::iter::once(&self.intercept)).any(|v| !v.is_finite()) {
            return Err("parameters contain a non-finite value".into());
        }
        Ok(())
    }

    fn scores<'a>(&'a self, input: &'a FeatureMatrix) -> impl Iterator<Item = f64> + 'a {
        input.iter_rows().map(move |row| {
            row.iter().zip(&self.coef).map(|(x, w)| x * w).sum::<f64>() + self.intercept
        })
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coef.len()
    }

    fn predict_proba(&self, input: &FeatureMatrix) -> PipelineResult<Vec<[f64; 2]>> {
        input.ensure_width("classifier", self.n_features())?;
        Ok(self
            .scores(input)
            .map(|z| {
                let p1 = sigmoid(z);
                [1.0 - p1, p1]
            })
            .collect())
    }

    fn predict(&self, input: &FeatureMatrix) -> PipelineResult<Vec<u8>> {
        input.ensure_width("classifier", self.n_features())?;
        Ok(self.scores(input).map(|z| u8::from(z > 0.0)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LogisticRegression {
        LogisticRegression { coef: vec![1.0, -2.0], intercept: 0.5 }
    }

    #[test]
    fn test_zero_score_is_even_odds_and_class_zero() {
        // 1*1.5 - 2*1.0 + 0.5 = 0
        let m = FeatureMatrix::single_row(vec![1.5, 1.0]);
        assert_eq!(model().predict_proba(&m).unwrap()[0], [0.5, 0.5]);
        assert_eq!(model().predict(&m).unwrap(), vec![0]);
    }

    #[test]
    fn test_positive_score_predicts_attrition() {
        let m = FeatureMatrix::single_row(vec![4.0, 0.0]);
        let p = model().predict_proba(&m).unwrap()[0];
        assert!(p[1] > 0.9);
        assert!((p[0] + p[1] - 1.0).abs() < 1e-12);
        assert_eq!(model().predict(&m).unwrap(), vec![1]);
    }

    #[test]
    fn test_validate() {
        assert!(model().validate().is_ok());
        assert!(LogisticRegression { coef: vec![], intercept: 0.0 }.validate().is_err());
        assert!(LogisticRegression { coef: vec![f64::NAN], intercept: 0.0 }.validate().is_err());
    }
}

// ============================================================
// Layer 5 — Fitted Scalers
// ============================================================
// Feature transforms fitted at training time and applied to
// every row before prediction.
//
//   StandardScaler  z = (x - mean) / scale
//   MinMaxScaler    z = x * scale + min
//
// The parameters arrive as JSON (see ScalerArtifact) in the
// same layout a scikit-learn scaler keeps in memory: one entry
// per column, in training order.

use serde::{Deserialize, Serialize};

use crate::domain::error::PipelineResult;
use crate::domain::features::FeatureMatrix;
use crate::domain::traits::Scaler;

// ─── StandardScaler ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean:  Vec<f64>,
    pub scale: Vec<f64>,

    /// Column names seen at fit time, when the trainer recorded them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

impl StandardScaler {
    fn validate(&self) -> Result<(), String> {
        check_params("mean", &self.mean, "scale", &self.scale)?;
        if self.scale.iter().any(|&s| s == 0.0) {
            return Err("scale contains a zero entry".into());
        }
        Ok(())
    }
}

impl Scaler for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, input: &FeatureMatrix) -> PipelineResult<FeatureMatrix> {
        input.ensure_width("scaler", self.n_features())?;
        let data = input
            .iter_rows()
            .flat_map(|row| {
                row.iter()
                    .zip(self.mean.iter().zip(&self.scale))
                    .map(|(x, (m, s))| (x - m) / s)
            })
            .collect();
        FeatureMatrix::new(input.rows(), input.cols(), data)
    }
}

// ─── MinMaxScaler ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub min:   Vec<f64>,
    pub scale: Vec<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

impl Scaler for MinMaxScaler {
    fn n_features(&self) -> usize {
        self.min.len()
    }

    fn transform(&self, input: &FeatureMatrix) -> PipelineResult<FeatureMatrix> {
        input.ensure_width("scaler", self.n_features())?;
        let data = input
            .iter_rows()
            .flat_map(|row| {
                row.iter()
                    .zip(self.min.iter().zip(&self.scale))
                    .map(|(x, (lo, s))| x * s + lo)
            })
            .collect();
        FeatureMatrix::new(input.rows(), input.cols(), data)
    }
}

// ─── ScalerArtifact ───────────────────────────────────────────────────────────
/// On-disk form of a fitted scaler, tagged by `kind`:
///
///   {"kind": "standard", "mean": [...], "scale": [...]}
///   {"kind": "min_max",  "min":  [...], "scale": [...]}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    Standard(StandardScaler),
    MinMax(MinMaxScaler),
}

impl ScalerArtifact {
    pub fn n_features(&self) -> usize {
        match self {
            ScalerArtifact::Standard(s) => s.n_features(),
            ScalerArtifact::MinMax(s)   => s.n_features(),
        }
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        match self {
            ScalerArtifact::Standard(s) => s.feature_names.as_deref(),
            ScalerArtifact::MinMax(s)   => s.feature_names.as_deref(),
        }
    }

    /// Check internal consistency of the parameters
    pub fn validate(&self) -> Result<(), String> {
        let params = match self {
            ScalerArtifact::Standard(s) => s.validate(),
            ScalerArtifact::MinMax(s)   => check_params("min", &s.min, "scale", &s.scale),
        };
        params?;

        if let Some(names) = self.feature_names() {
            if names.len() != self.n_features() {
                return Err(format!(
                    "{} feature names for {} columns",
                    names.len(),
                    self.n_features()
                ));
            }
        }
        Ok(())
    }

    pub fn into_scaler(self) -> Box<dyn Scaler> {
        match self {
            ScalerArtifact::Standard(s) => Box::new(s),
            ScalerArtifact::MinMax(s)   => Box::new(s),
        }
    }
}

fn check_params(a_name: &str, a: &[f64], b_name: &str, b: &[f64]) -> Result<(), String> {
    if a.is_empty() {
        return Err(format!("{a_name} is empty"));
    }
    if a.len() != b.len() {
        return Err(format!(
            "{a_name} has {} entries but {b_name} has {}",
            a.len(),
            b.len()
        ));
    }
    if a.iter().chain(b).any(|v| !v.is_finite()) {
        return Err("parameters contain a non-finite value".into());
    }
    Ok(())
}

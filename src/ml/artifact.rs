// ============================================================
// Layer 5 — Classifier Artifact
// ============================================================
// On-disk form of a fitted classifier, tagged by `kind`:
//
//   {"kind": "random_forest", "n_features": 19, "trees": [...]}
//   {"kind": "logistic_regression", "coef": [...], "intercept": 0.0}
//
// The scaler counterpart lives next to the scalers themselves
// (scaler.rs).

use serde::{Deserialize, Serialize};

use crate::domain::traits::Classifier;
use crate::ml::forest::RandomForest;
use crate::ml::logistic::LogisticRegression;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    RandomForest(RandomForest),
    LogisticRegression(LogisticRegression),
}

impl ClassifierArtifact {
    pub fn n_features(&self) -> usize {
        match self {
            ClassifierArtifact::RandomForest(m)       => m.n_features(),
            ClassifierArtifact::LogisticRegression(m) => m.n_features(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            ClassifierArtifact::RandomForest(m)       => m.validate(),
            ClassifierArtifact::LogisticRegression(m) => m.validate(),
        }
    }

    pub fn into_classifier(self) -> Box<dyn Classifier> {
        match self {
            ClassifierArtifact::RandomForest(m)       => Box::new(m),
            ClassifierArtifact::LogisticRegression(m) => Box::new(m),
        }
    }
}

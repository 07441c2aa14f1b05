// ============================================================
// Layer 2 — Inference Context
// ============================================================
// Everything a prediction needs, built once and then only read:
//
//   Inferencer        — the loaded scaler + classifier
//   FeatureAssembler  — encoder + fixed column order
//   InputValidator    — declared field domains
//
// The context is constructed explicitly and passed by reference
// into the use cases. Nothing is global, so tests can build a
// context around mock artifacts with from_artifacts().

use serde::{Deserialize, Serialize};

use crate::data::assembler::FeatureAssembler;
use crate::data::validator::InputValidator;
use crate::domain::error::PipelineResult;
use crate::domain::traits::{Classifier, Scaler};
use crate::infra::artifact_store::ArtifactStore;
use crate::ml::inferencer::Inferencer;

// ─── Pipeline Configuration ───────────────────────────────────────────────────
// Where the artifacts live. Serialisable so it can also be
// supplied as a JSON file with --config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub scaler_path: String,
    pub model_path:  String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scaler_path: "artifacts/scaler.json".to_string(),
            model_path:  "artifacts/model.json".to_string(),
        }
    }
}

// ─── InferenceContext ─────────────────────────────────────────────────────────
pub struct InferenceContext {
    inferencer: Inferencer,
    assembler:  FeatureAssembler,
    validator:  InputValidator,
}

impl InferenceContext {
    pub fn new(inferencer: Inferencer) -> Self {
        Self {
            inferencer,
            assembler: FeatureAssembler::default(),
            validator: InputValidator::default(),
        }
    }

    /// Build a context around already-constructed artifacts
    pub fn from_artifacts(
        scaler:     Box<dyn Scaler>,
        classifier: Box<dyn Classifier>,
    ) -> PipelineResult<Self> {
        Ok(Self::new(Inferencer::new(scaler, classifier)?))
    }

    /// Load both artifacts from the configured paths
    pub fn load(cfg: &PipelineConfig) -> PipelineResult<Self> {
        let inferencer = ArtifactStore::from_config(cfg).load_inferencer()?;
        Ok(Self::new(inferencer))
    }

    pub fn inferencer(&self) -> &Inferencer {
        &self.inferencer
    }

    pub fn assembler(&self) -> &FeatureAssembler {
        &self.assembler
    }

    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }
}

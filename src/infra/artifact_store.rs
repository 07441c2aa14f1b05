// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Loads the two externally trained artifacts from disk:
//
//   scaler.json  — fitted feature scaler   (ScalerArtifact)
//   model.json   — fitted classifier       (ClassifierArtifact)
//
// Every failure here is an ArtifactLoad error carrying the path:
//   - the file is missing or unreadable
//   - the JSON does not match a known artifact kind
//   - the parameters are internally inconsistent
//   - the artifact was fitted on a different number of columns
//   - the scaler recorded feature names in a different order
//
// These are fatal at start-up; nothing is retried.

use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::application::context::PipelineConfig;
use crate::domain::error::{PipelineError, PipelineResult};
use crate::domain::features::{FEATURE_COUNT, FEATURE_NAMES};
use crate::ml::artifact::ClassifierArtifact;
use crate::ml::inferencer::Inferencer;
use crate::ml::scaler::ScalerArtifact;

pub struct ArtifactStore {
    scaler_path: PathBuf,
    model_path:  PathBuf,
}

impl ArtifactStore {
    pub fn new(scaler_path: impl Into<PathBuf>, model_path: impl Into<PathBuf>) -> Self {
        Self {
            scaler_path: scaler_path.into(),
            model_path:  model_path.into(),
        }
    }

    pub fn from_config(cfg: &PipelineConfig) -> Self {
        Self::new(&cfg.scaler_path, &cfg.model_path)
    }

    /// Load and check the scaler artifact
    pub fn load_scaler(&self) -> PipelineResult<ScalerArtifact> {
        let path = &self.scaler_path;
        let artifact: ScalerArtifact = read_json(path)?;

        artifact.validate().map_err(|e| load_error(path, e))?;
        check_width(path, artifact.n_features())?;

        if let Some(names) = artifact.feature_names() {
            if let Some((i, (found, expected))) = names
                .iter()
                .zip(FEATURE_NAMES.iter())
                .enumerate()
                .find(|(_, (found, expected))| found.as_str() != **expected)
            {
                return Err(load_error(
                    path,
                    format!("feature order differs at column {i}: expected {expected}, found {found}"),
                ));
            }
        }

        tracing::debug!("Loaded scaler from '{}'", path.display());
        Ok(artifact)
    }

    /// Load and check the classifier artifact
    pub fn load_classifier(&self) -> PipelineResult<ClassifierArtifact> {
        let path = &self.model_path;
        let artifact: ClassifierArtifact = read_json(path)?;

        artifact.validate().map_err(|e| load_error(path, e))?;
        check_width(path, artifact.n_features())?;

        tracing::debug!("Loaded classifier from '{}'", path.display());
        Ok(artifact)
    }

    /// Load both artifacts and pair them into an Inferencer
    pub fn load_inferencer(&self) -> PipelineResult<Inferencer> {
        let scaler     = self.load_scaler()?;
        let classifier = self.load_classifier()?;
        let inferencer = Inferencer::new(scaler.into_scaler(), classifier.into_classifier())?;

        tracing::info!(
            "Artifacts loaded: scaler '{}', model '{}'",
            self.scaler_path.display(),
            self.model_path.display()
        );
        Ok(inferencer)
    }
}

/// Read a PipelineConfig from a JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<PipelineConfig> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Invalid config in '{}'", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> PipelineResult<T> {
    let json = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    serde_json::from_str(&json).map_err(|e| load_error(path, e))
}

fn check_width(path: &Path, n_features: usize) -> PipelineResult<()> {
    if n_features != FEATURE_COUNT {
        return Err(load_error(
            path,
            format!("fitted on {n_features} features, expected {FEATURE_COUNT}"),
        ));
    }
    Ok(())
}

fn load_error(path: &Path, reason: impl ToString) -> PipelineError {
    PipelineError::artifact_load(path.display().to_string(), reason)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write(dir: &Path, name: &str, value: serde_json::Value) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, value.to_string()).unwrap();
        path
    }

    fn scaler_json() -> serde_json::Value {
        json!({
            "kind": "standard",
            "mean": vec![0.0; FEATURE_COUNT],
            "scale": vec![1.0; FEATURE_COUNT],
            "feature_names": FEATURE_NAMES,
        })
    }

    fn model_json() -> serde_json::Value {
        json!({
            "kind": "logistic_regression",
            "coef": vec![0.0; FEATURE_COUNT],
            "intercept": 0.0,
        })
    }

    #[test]
    fn test_loads_matching_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(
            write(dir.path(), "scaler.json", scaler_json()),
            write(dir.path(), "model.json", model_json()),
        );
        let inf = store.load_inferencer().unwrap();
        assert_eq!(inf.n_features(), FEATURE_COUNT);
    }

    #[test]
    fn test_missing_file_is_artifact_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("nope.json"), dir.path().join("model.json"));
        let err = store.load_scaler().unwrap_err();
        assert!(matches!(err, PipelineError::ArtifactLoad { ref path, .. } if path.ends_with("nope.json")));
    }

    #[test]
    fn test_corrupt_json_is_artifact_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "{not json").unwrap();
        let store = ArtifactStore::new(dir.path().join("scaler.json"), path);
        assert_eq!(store.load_classifier().unwrap_err().kind(), "artifact_load");
    }

    #[test]
    fn test_wrong_width_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let model = json!({ "kind": "logistic_regression", "coef": [1.0, 2.0], "intercept": 0.0 });
        let store = ArtifactStore::new(
            write(dir.path(), "scaler.json", scaler_json()),
            write(dir.path(), "model.json", model),
        );
        let err = store.load_inferencer().err().unwrap();
        assert!(err.to_string().contains("fitted on 2 features"));
    }

    #[test]
    fn test_permuted_feature_names_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut names: Vec<&str> = FEATURE_NAMES.to_vec();
        names.swap(1, 2);
        let mut scaler = scaler_json();
        scaler["feature_names"] = json!(names);

        let store = ArtifactStore::new(
            write(dir.path(), "scaler.json", scaler),
            write(dir.path(), "model.json", model_json()),
        );
        let err = store.load_scaler().unwrap_err();
        assert!(err.to_string().contains("feature order differs at column 1"));
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "config.json",
            json!({ "scaler_path": "a.json", "model_path": "b.json" }),
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.scaler_path, "a.json");
        assert_eq!(cfg.model_path, "b.json");
    }
}

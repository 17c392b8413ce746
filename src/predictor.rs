//! Serialized gut-health predictor.
//!
//! The artifact is read at startup so a missing or unreadable file shows up
//! in the logs, but no scoring path evaluates it.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Input columns the predictor was trained on, in order.
pub const EXPECTED_FEATURES: &[&str] = &[
    "Fiber Intake (g/day)",
    "Sugar Intake (g/day)",
    "Protein Intake (g/day)",
    "Processed Food Consumption_Low",
    "Processed Food Consumption_Moderate",
    "Processed Food Consumption_High",
    "Bloating_None",
    "Bloating_Mild",
    "Bloating_Severe",
    "Abdominal Pain_None",
    "Abdominal Pain_Mild",
    "Abdominal Pain_Severe",
    "Diarrhea_None",
    "Diarrhea_Occasional",
    "Diarrhea_Frequent",
];

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("Cannot read predictor at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Predictor file is empty: {0}")]
    Empty(PathBuf),
}

/// Raw bytes of the predictor file.
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl ModelArtifact {
    pub fn load(path: &Path) -> Result<Self, PredictorError> {
        let bytes = std::fs::read(path).map_err(|source| PredictorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.is_empty() {
            return Err(PredictorError::Empty(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn feature_names(&self) -> &'static [&'static str] {
        EXPECTED_FEATURES
    }
}

/// Load the artifact if present; failures are logged and the app continues.
pub fn load_at_startup(path: &Path) -> Option<ModelArtifact> {
    match ModelArtifact::load(path) {
        Ok(artifact) => {
            tracing::info!(
                path = %artifact.path().display(),
                size_bytes = artifact.size_bytes(),
                "Predictor artifact loaded"
            );
            Some(artifact)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Predictor artifact unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x80\x04pickle-bytes").unwrap();

        let artifact = ModelArtifact::load(file.path()).unwrap();
        assert_eq!(artifact.path(), file.path());
        assert_eq!(artifact.size_bytes(), 14);
        assert_eq!(artifact.feature_names().len(), 15);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelArtifact::load(&dir.path().join("absent.pkl")).unwrap_err();
        assert!(matches!(err, PredictorError::Io { .. }));
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = ModelArtifact::load(file.path()).unwrap_err();
        assert!(matches!(err, PredictorError::Empty(_)));
    }

    #[test]
    fn startup_load_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_at_startup(&dir.path().join("absent.pkl")).is_none());
    }

    #[test]
    fn symptom_features_cover_every_option() {
        for prefix in ["Bloating_", "Abdominal Pain_", "Diarrhea_"] {
            let count = EXPECTED_FEATURES
                .iter()
                .filter(|f| f.starts_with(prefix))
                .count();
            assert_eq!(count, 3, "{prefix}");
        }
    }
}

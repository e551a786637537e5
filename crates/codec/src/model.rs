//! Persisted encoding configuration.
//!
//! A [`Model`] captures everything `decode` needs that is not in the sequence
//! file itself: the encoding method (with the shape it recorded), the
//! verification scheme, and whether rows carry an index.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::strategies::Method;
use crate::traits::ModelStore;
use crate::verify::Verifier;

/// Current model format version.
pub const MODEL_VERSION: u32 = 1;

/// Snapshot of the configuration used by one `encode` call.
///
/// Generic over the method and verifier types so that any serializable
/// collaborator can be persisted; the defaults are the built-in enums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model<M = Method, V = Verifier> {
    pub version: u32,
    pub method: M,
    pub verify: Option<V>,
    /// Whether rows were prefixed with an index.
    pub indexed: bool,
    /// Bits per row before index and verification bits were added.
    pub segment_length: usize,
}

impl<M, V> Model<M, V> {
    pub fn new(
        method: M,
        verify: Option<V>,
        indexed: bool,
        segment_length: usize,
    ) -> Self {
        Self {
            version: MODEL_VERSION,
            method,
            verify,
            indexed,
            segment_length,
        }
    }
}

/// Stores models as pretty-printed JSON files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonModelStore;

impl ModelStore for JsonModelStore {
    fn save<M: Serialize, V: Serialize>(
        &self,
        path: &Path,
        model: &Model<M, V>,
    ) -> Result<(), CodecError> {
        let json = serde_json::to_string_pretty(model)
            .map_err(|e| CodecError::Model(format!("Failed to serialize model: {e}")))?;
        std::fs::write(path, json).map_err(|e| {
            CodecError::Model(format!("Failed to write model {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "saved model");
        Ok(())
    }

    fn load<M: DeserializeOwned, V: DeserializeOwned>(
        &self,
        path: &Path,
    ) -> Result<Model<M, V>, CodecError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CodecError::Model(format!("Failed to read model {}: {e}", path.display()))
        })?;
        let model: Model<M, V> = serde_json::from_str(&json)
            .map_err(|e| CodecError::Model(format!("Malformed model {}: {e}", path.display())))?;
        if model.version != MODEL_VERSION {
            return Err(CodecError::Model(format!(
                "Unsupported model version {} (expected {MODEL_VERSION})",
                model.version
            )));
        }
        tracing::debug!(path = %path.display(), indexed = model.indexed, "loaded model");
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::Church;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let model = Model::new(
            Method::Church(Church::new(2).unwrap()),
            Some(Verifier::Hamming),
            true,
            120,
        );
        JsonModelStore.save(&path, &model).unwrap();
        let loaded: Model = JsonModelStore.load(&path).unwrap();
        assert_eq!(loaded, model);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result: Result<Model, _> = JsonModelStore.load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(CodecError::Model(_))));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, "{ not json").unwrap();
        let result: Result<Model, _> = JsonModelStore.load(&path);
        assert!(matches!(result, Err(CodecError::Model(_))));
    }

    #[test]
    fn test_unknown_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut model: Model = Model::new(Method::default(), None, false, 64);
        model.version = 99;
        JsonModelStore.save(&path, &model).unwrap();
        let result: Result<Model, _> = JsonModelStore.load(&path);
        assert!(matches!(result, Err(CodecError::Model(_))));
    }
}

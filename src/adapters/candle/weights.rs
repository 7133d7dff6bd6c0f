//! Checkpoint weight loading
//!
//! Reads a serialized checkpoint's `state_dict` mapping and applies it onto
//! the model handle. Checkpoints are safetensors files; writers that nest the
//! trained state under a `state_dict.` key prefix are accepted and the prefix
//! is stripped.

use crate::adapters::traits::WeightLoader;
use crate::domain::{Model, Result, VitexError};
use candle_core::{Device, Tensor};
use std::collections::HashMap;
use std::path::Path;

const STATE_DICT_PREFIX: &str = "state_dict.";

/// Weight loader over the safetensors checkpoint format
#[derive(Debug, Default)]
pub struct SafetensorsWeightLoader;

impl SafetensorsWeightLoader {
    /// Creates a new loader
    pub fn new() -> Self {
        Self
    }
}

impl WeightLoader for SafetensorsWeightLoader {
    fn load(&self, checkpoint: &Path, model: &mut Model) -> Result<()> {
        let tensors = candle_core::safetensors::load(checkpoint, &Device::Cpu).map_err(|e| {
            VitexError::Checkpoint(format!(
                "Failed to read checkpoint {}: {e}",
                checkpoint.display()
            ))
        })?;

        let has_prefix = tensors.keys().any(|k| k.starts_with(STATE_DICT_PREFIX));
        let state: HashMap<String, Tensor> = if has_prefix {
            tensors
                .into_iter()
                .filter_map(|(name, tensor)| {
                    name.strip_prefix(STATE_DICT_PREFIX)
                        .map(|stripped| (stripped.to_string(), tensor))
                })
                .collect()
        } else {
            tensors
        };

        if state.is_empty() {
            return Err(VitexError::Checkpoint(format!(
                "Checkpoint {} holds no state_dict tensors",
                checkpoint.display()
            )));
        }

        tracing::info!(
            tensors = state.len(),
            checkpoint = %checkpoint.display(),
            "Loaded checkpoint state"
        );
        model.tensors = state;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use candle_core::DType;
    use tempfile::TempDir;

    fn write_checkpoint(dir: &TempDir, name: &str, keys: &[&str]) -> std::path::PathBuf {
        let mut tensors = HashMap::new();
        for key in keys {
            let t = Tensor::zeros((4, 4), DType::F32, &Device::Cpu).unwrap();
            tensors.insert(key.to_string(), t);
        }
        let path = dir.path().join(name);
        candle_core::safetensors::save(&tensors, &path).unwrap();
        path
    }

    #[test]
    fn test_load_strips_state_dict_prefix() {
        let dir = TempDir::new().unwrap();
        let ckpt = write_checkpoint(
            &dir,
            "model.safetensors",
            &["state_dict.cls_token", "state_dict.head.weight"],
        );

        let mut model = Model::new(ModelConfig::default());
        SafetensorsWeightLoader::new().load(&ckpt, &mut model).unwrap();

        assert_eq!(model.tensor_count(), 2);
        assert!(model.tensors.contains_key("cls_token"));
        assert!(model.tensors.contains_key("head.weight"));
    }

    #[test]
    fn test_load_flat_checkpoint() {
        let dir = TempDir::new().unwrap();
        let ckpt = write_checkpoint(&dir, "model.safetensors", &["cls_token"]);

        let mut model = Model::new(ModelConfig::default());
        SafetensorsWeightLoader::new().load(&ckpt, &mut model).unwrap();

        assert_eq!(model.tensor_count(), 1);
        assert!(model.tensors.contains_key("cls_token"));
    }

    #[test]
    fn test_load_unreadable_checkpoint() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corrupt.safetensors");
        std::fs::write(&path, b"not a safetensors file").unwrap();

        let mut model = Model::new(ModelConfig::default());
        let result = SafetensorsWeightLoader::new().load(&path, &mut model);
        assert!(matches!(result, Err(VitexError::Checkpoint(_))));
    }
}

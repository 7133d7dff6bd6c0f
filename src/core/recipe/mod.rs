//! Recorded modifier schedules
//!
//! A recipe is the YAML record of the sparsification/quantization schedule a
//! model was trained with. Applying it here is structural bookkeeping only:
//! the manifest marks the model handle with the quantization observers and
//! sparsity profile the recorded schedule installed, so the loaded weights
//! land on the topology they were trained against. No pruning or quantization
//! math happens in this crate.

use crate::domain::{Model, QuantizationState, Result, SparsityProfile, VitexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single recorded modification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Modifier {
    /// Gradual magnitude pruning applied during training
    Pruning {
        /// Parameter name patterns the schedule pruned
        #[serde(default)]
        params: Vec<String>,

        /// Sparsity level the schedule ended at
        final_sparsity: f64,
    },

    /// Quantization-aware training observers
    Quantization {
        /// Submodules the observers were attached to; empty means whole-model
        #[serde(default)]
        submodules: Vec<String>,

        /// Quantization scheme identifier
        #[serde(default = "default_scheme")]
        scheme: String,
    },
}

fn default_scheme() -> String {
    "int8".to_string()
}

/// The full recorded schedule for one training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeManifest {
    /// Modifications in the order they were recorded
    pub modifiers: Vec<Modifier>,

    /// Optional recipe format version tag
    #[serde(default)]
    pub version: Option<String>,
}

impl RecipeManifest {
    /// Parses a manifest from a YAML document
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let manifest: RecipeManifest = serde_yaml::from_str(contents)
            .map_err(|e| VitexError::Recipe(format!("Failed to parse recipe: {e}")))?;
        Ok(manifest)
    }

    /// Reads and parses a manifest from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            VitexError::Recipe(format!("Failed to read recipe {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Re-applies the recorded schedule to a model handle
    ///
    /// Mutates the handle's structure markers in place: pruning modifiers
    /// accumulate into a single sparsity profile (the highest recorded final
    /// sparsity wins), quantization modifiers install unconverted QAT
    /// observers.
    pub fn apply(&self, model: &mut Model) -> Result<()> {
        for modifier in &self.modifiers {
            match modifier {
                Modifier::Pruning {
                    params,
                    final_sparsity,
                } => {
                    let profile = model.sparsity.get_or_insert(SparsityProfile {
                        final_sparsity: 0.0,
                        params: Vec::new(),
                    });
                    profile.final_sparsity = profile.final_sparsity.max(*final_sparsity);
                    profile.params.extend(params.iter().cloned());
                }
                Modifier::Quantization { submodules, scheme } => {
                    tracing::debug!(scheme = %scheme, "Installing QAT observers");
                    model.quantization = Some(QuantizationState {
                        scheme: scheme.clone(),
                        submodules: submodules.clone(),
                        converted: false,
                    });
                }
            }
        }

        tracing::info!(
            modifiers = self.modifiers.len(),
            quantized = model.quantization.is_some(),
            pruned = model.sparsity.is_some(),
            "Recipe applied"
        );
        Ok(())
    }
}

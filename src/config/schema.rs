//! Model hyperparameter schema
//!
//! This module defines the typed view of the `args.yaml` document written
//! alongside a training run. The document is a flat mapping; only the fields
//! the model builder consumes are declared here and every other training-time
//! field is ignored.

use crate::domain::{Result, VitexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Hyperparameters used to train the checkpointed model
///
/// Parsed from the YAML config saved next to the checkpoint. Everything except
/// the architecture identifier is optional; absent fields take the trainer's
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Architecture identifier (e.g. "vit_base_patch32_224")
    pub model: String,

    /// Whether the run started from pretrained weights
    #[serde(default)]
    pub pretrained: bool,

    /// Number of output classes
    #[serde(default = "default_num_classes")]
    pub num_classes: usize,

    /// Dropout rate
    #[serde(default)]
    pub drop: f64,

    /// Drop-connect rate
    #[serde(default)]
    pub drop_connect: Option<f64>,

    /// Stochastic depth drop-path rate
    #[serde(default)]
    pub drop_path: Option<f64>,

    /// Drop-block rate
    #[serde(default)]
    pub drop_block: Option<f64>,

    /// Global pooling mode ("avg", "max", ...)
    #[serde(default)]
    pub gp: Option<String>,

    /// TensorFlow-style batch norm initialization
    #[serde(default)]
    pub bn_tf: bool,

    /// Batch norm momentum override
    #[serde(default)]
    pub bn_momentum: Option<f64>,

    /// Batch norm epsilon override
    #[serde(default)]
    pub bn_eps: Option<f64>,

    /// Whether the graph was traced for scripting during training
    #[serde(default)]
    pub torchscript: bool,
}

fn default_num_classes() -> usize {
    1000
}

impl ModelConfig {
    /// Loads hyperparameters from a YAML document
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the document cannot be read or parsed,
    /// or a configuration error if the architecture identifier is missing.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            VitexError::Io(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        let config: ModelConfig = serde_yaml::from_str(&contents)?;

        if config.model.is_empty() {
            return Err(VitexError::Configuration(format!(
                "Config file {} does not name a model architecture",
                path.display()
            )));
        }

        Ok(config)
    }
}

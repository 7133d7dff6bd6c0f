//! The opaque model handle passed between export collaborators
//!
//! The handle carries the parsed hyperparameters, a named tensor table, and
//! the structure markers a recorded recipe installs (quantization observers,
//! sparsity profile). It deliberately knows nothing about the architecture
//! itself; topology reconstruction is the recipe applier's concern and the
//! tensor table is populated by the weight loader.

use crate::config::schema::ModelConfig;
use candle_core::Tensor;
use std::collections::HashMap;

/// Quantization observers installed by a recorded recipe
///
/// Present on the handle when the training run used quantization-aware
/// training. `converted` flips to true when the exporter folds the observers
/// into a fully quantized graph.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizationState {
    /// Quantization scheme identifier (e.g. "int8")
    pub scheme: String,

    /// Submodules the observers were attached to; empty means whole-model
    pub submodules: Vec<String>,

    /// Whether the QAT observers have been folded into a quantized graph
    pub converted: bool,
}

/// Sparsity profile recorded by pruning modifiers
#[derive(Debug, Clone, PartialEq)]
pub struct SparsityProfile {
    /// Final sparsity level the pruning schedule reached
    pub final_sparsity: f64,

    /// Parameter name patterns the schedule applied to
    pub params: Vec<String>,
}

/// Untyped trainable model object handed between collaborators
#[derive(Debug)]
pub struct Model {
    /// Hyperparameters parsed from the training config document
    pub config: ModelConfig,

    /// Named parameter tensors loaded from the checkpoint state
    pub tensors: HashMap<String, Tensor>,

    /// Quantization observers, when a recipe installed them
    pub quantization: Option<QuantizationState>,

    /// Sparsity profile, when a recipe recorded pruning
    pub sparsity: Option<SparsityProfile>,
}

impl Model {
    /// Creates an empty model handle for the given hyperparameters
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            tensors: HashMap::new(),
            quantization: None,
            sparsity: None,
        }
    }

    /// Total number of scalar parameters across all loaded tensors
    pub fn parameter_count(&self) -> usize {
        self.tensors.values().map(|t| t.elem_count()).sum()
    }

    /// Number of named tensors loaded from the checkpoint
    pub fn tensor_count(&self) -> usize {
        self.tensors.len()
    }

    /// Whether the handle carries unfolded QAT observers
    pub fn is_qat(&self) -> bool {
        matches!(&self.quantization, Some(q) if !q.converted)
    }
}

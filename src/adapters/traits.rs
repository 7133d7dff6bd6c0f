//! Collaborator abstraction traits
//!
//! This module defines the traits the export pipeline sequences. Each trait
//! is the seam to one external concern: architecture construction, recorded
//! recipe application, checkpoint weight loading, and graph serialization.
//! The default implementations live under [`super::candle`]; tests substitute
//! mocks.

use crate::config::ModelConfig;
use crate::domain::{Model, Result};
use candle_core::Tensor;
use std::path::Path;

/// Constructs an untyped trainable model object from hyperparameters
pub trait ModelBuilder {
    /// Build a model handle for the given hyperparameters
    ///
    /// # Errors
    ///
    /// Returns an error if the hyperparameters cannot be honored.
    fn build(&self, config: &ModelConfig) -> Result<Model>;
}

/// Re-applies a recorded modification recipe to a model
pub trait RecipeApplier {
    /// Apply the recipe named by `identifier` to the model, mutating its
    /// structure in place (e.g. inserting quantization observers)
    ///
    /// # Arguments
    ///
    /// * `identifier` - Recipe path or remote identifier
    /// * `model` - Model to modify
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe cannot be read, parsed, or applied.
    fn apply(&self, identifier: &str, model: &mut Model) -> Result<()>;
}

/// Loads trained weights from a checkpoint onto a model
pub trait WeightLoader {
    /// Read the checkpoint's state mapping and apply it onto the
    /// (possibly recipe-modified) model
    ///
    /// # Errors
    ///
    /// Returns an error if the checkpoint cannot be read or its state does
    /// not match what the model expects.
    fn load(&self, checkpoint: &Path, model: &mut Model) -> Result<()>;
}

/// Serializes a model's computation graph to an interchange artifact
pub trait GraphExporter {
    /// Write the serialized graph for `model` to `path`
    ///
    /// # Arguments
    ///
    /// * `model` - Model to export
    /// * `sample` - Synthetic input batch shaped `(batch_size, *image_shape)`
    /// * `path` - Output file path
    /// * `convert_qat` - Whether to fold QAT observers into a quantized graph
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    fn export(&self, model: &Model, sample: &Tensor, path: &Path, convert_qat: bool)
        -> Result<()>;
}

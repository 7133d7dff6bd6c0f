//! Export orchestration
//!
//! The pipeline sequences the four collaborators against a resolved
//! configuration: parse hyperparameters, build the model, re-apply the
//! recorded recipe, load the trained weights, then export the graph next to
//! a synthetic input batch. Strictly linear; any failure aborts the
//! invocation and nothing cleans up partial artifacts.

pub mod summary;

pub use summary::ExportSummary;

use crate::adapters::traits::{GraphExporter, ModelBuilder, RecipeApplier, WeightLoader};
use crate::config::{ExportConfig, ModelConfig};
use crate::core::verification;
use crate::domain::Result;
use candle_core::{Device, Tensor};
use std::fs;
use std::time::Instant;

/// Sequences one export invocation over boxed collaborators
pub struct ExportPipeline {
    builder: Box<dyn ModelBuilder>,
    recipe: Box<dyn RecipeApplier>,
    weights: Box<dyn WeightLoader>,
    exporter: Box<dyn GraphExporter>,
}

impl ExportPipeline {
    /// Creates a pipeline from collaborator implementations
    pub fn new(
        builder: Box<dyn ModelBuilder>,
        recipe: Box<dyn RecipeApplier>,
        weights: Box<dyn WeightLoader>,
        exporter: Box<dyn GraphExporter>,
    ) -> Self {
        Self {
            builder,
            recipe,
            weights,
            exporter,
        }
    }

    /// Runs the export against a resolved configuration
    ///
    /// # Errors
    ///
    /// Propagates the first collaborator failure unchanged; there are no
    /// retries and no partial-artifact cleanup.
    pub fn execute(&self, config: &ExportConfig) -> Result<ExportSummary> {
        let started = Instant::now();

        tracing::info!(config = %config.config.display(), "Loading model hyperparameters");
        let model_config = ModelConfig::from_file(&config.config)?;

        let mut model = self.builder.build(&model_config)?;

        match &config.recipe {
            Some(identifier) => {
                tracing::info!(recipe = %identifier, "Applying recipe");
                self.recipe.apply(identifier, &mut model)?;
            }
            None => tracing::debug!("No recipe supplied, skipping recipe stage"),
        }

        self.weights.load(&config.checkpoint, &mut model)?;

        fs::create_dir_all(&config.save_dir)?;
        let sample = Tensor::randn(0f32, 1f32, config.batch_shape(), &Device::Cpu)?;

        let output_path = config.output_path();
        let quantized = config.convert_qat && model.is_qat();
        self.exporter
            .export(&model, &sample, &output_path, config.convert_qat)?;

        let artifact = verification::artifact_digest(&output_path)?;

        Ok(ExportSummary {
            output_path,
            architecture: model.config.model.clone(),
            tensors: model.tensor_count(),
            parameters: model.parameter_count(),
            quantized,
            artifact,
            duration: started.elapsed(),
        })
    }
}

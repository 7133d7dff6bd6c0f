//! Collaborator factory
//!
//! This module assembles the default collaborator set the binary runs with.
//! Tests build pipelines from mock implementations instead.

use crate::adapters::candle::{
    CandleGraphExporter, CandleModelBuilder, SafetensorsWeightLoader, YamlRecipeApplier,
};
use crate::core::export::ExportPipeline;

/// Creates the export pipeline wired with the default backend
pub fn default_pipeline() -> ExportPipeline {
    tracing::debug!("Creating candle-backed export pipeline");
    ExportPipeline::new(
        Box::new(CandleModelBuilder::new()),
        Box::new(YamlRecipeApplier::new()),
        Box::new(SafetensorsWeightLoader::new()),
        Box::new(CandleGraphExporter::new()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline_constructs() {
        let _pipeline = default_pipeline();
    }
}

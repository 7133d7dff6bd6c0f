//! Default model builder
//!
//! Constructs the model handle from parsed hyperparameters. Architecture
//! instantiation is delegated to the checkpoint itself: the handle starts
//! with an empty tensor table keyed by parameter name, and the weight loader
//! fills it from the serialized state.

use crate::adapters::traits::ModelBuilder;
use crate::config::ModelConfig;
use crate::domain::{Model, Result, VitexError};

/// Model builder backed by the candle tensor runtime
#[derive(Debug, Default)]
pub struct CandleModelBuilder;

impl CandleModelBuilder {
    /// Creates a new builder
    pub fn new() -> Self {
        Self
    }
}

impl ModelBuilder for CandleModelBuilder {
    fn build(&self, config: &ModelConfig) -> Result<Model> {
        if config.model.is_empty() {
            return Err(VitexError::Configuration(
                "model architecture identifier is empty".to_string(),
            ));
        }

        tracing::info!(
            architecture = %config.model,
            num_classes = config.num_classes,
            pretrained = config.pretrained,
            "Building model"
        );

        Ok(Model::new(config.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_carries_hyperparameters() {
        let config = ModelConfig {
            model: "vit_base_patch32_224".to_string(),
            num_classes: 10,
            ..Default::default()
        };

        let model = CandleModelBuilder::new().build(&config).unwrap();
        assert_eq!(model.config.model, "vit_base_patch32_224");
        assert_eq!(model.config.num_classes, 10);
        assert_eq!(model.tensor_count(), 0);
    }

    #[test]
    fn test_build_rejects_empty_architecture() {
        let result = CandleModelBuilder::new().build(&ModelConfig::default());
        assert!(matches!(result, Err(VitexError::Configuration(_))));
    }
}

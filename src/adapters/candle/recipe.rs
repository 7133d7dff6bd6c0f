//! Default recipe applier
//!
//! Resolves a recipe identifier to a YAML manifest on disk and re-applies the
//! recorded schedule to the model handle. Remote registry stubs are rejected:
//! nothing in this process performs network access.

use crate::adapters::traits::RecipeApplier;
use crate::core::recipe::RecipeManifest;
use crate::domain::{Model, Result, VitexError};
use std::path::Path;

const REMOTE_STUB_PREFIX: &str = "zoo:";

/// Recipe applier over YAML manifests on the local filesystem
#[derive(Debug, Default)]
pub struct YamlRecipeApplier;

impl YamlRecipeApplier {
    /// Creates a new applier
    pub fn new() -> Self {
        Self
    }
}

impl RecipeApplier for YamlRecipeApplier {
    fn apply(&self, identifier: &str, model: &mut Model) -> Result<()> {
        if identifier.starts_with(REMOTE_STUB_PREFIX) {
            return Err(VitexError::Recipe(format!(
                "Remote recipe stubs are not supported, download {identifier} first"
            )));
        }

        let manifest = RecipeManifest::from_yaml_file(Path::new(identifier))?;
        manifest.apply(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_apply_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"modifiers:\n  - type: quantization\n    submodules: [blocks]\n")
            .unwrap();
        f.flush().unwrap();

        let mut model = Model::new(ModelConfig::default());
        YamlRecipeApplier::new()
            .apply(f.path().to_str().unwrap(), &mut model)
            .unwrap();
        assert!(model.is_qat());
    }

    #[test]
    fn test_remote_stub_rejected() {
        let mut model = Model::new(ModelConfig::default());
        let result = YamlRecipeApplier::new().apply(
            "zoo:cv/classification/vit_base-patch32_224/pruned85-none",
            &mut model,
        );
        assert!(matches!(result, Err(VitexError::Recipe(_))));
    }

    #[test]
    fn test_missing_recipe_file() {
        let mut model = Model::new(ModelConfig::default());
        let result = YamlRecipeApplier::new().apply("missing-recipe.yaml", &mut model);
        assert!(matches!(result, Err(VitexError::Recipe(_))));
    }
}

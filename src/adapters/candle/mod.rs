//! Default collaborator implementations over the candle tensor runtime and
//! the safetensors checkpoint/artifact format

pub mod builder;
pub mod exporter;
pub mod recipe;
pub mod weights;

pub use builder::CandleModelBuilder;
pub use exporter::CandleGraphExporter;
pub use recipe::YamlRecipeApplier;
pub use weights::SafetensorsWeightLoader;

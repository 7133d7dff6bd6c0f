//! Configuration management for Vitex.
//!
//! Two documents meet here:
//!
//! - [`resolver`] — the export configuration resolver. Raw invocation
//!   parameters go in, a validated [`ExportConfig`] comes out, or resolution
//!   fails fast on the first missing filesystem precondition.
//! - [`schema`] — the typed view of the `args.yaml` hyperparameter document
//!   written next to the checkpoint by the training run.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vitex::config::{ExportConfig, RawExportParams};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = RawExportParams::new("./ckpt/model.safetensors");
//! let config = ExportConfig::resolve(raw)?;
//!
//! println!("Exporting to {}", config.output_path().display());
//! # Ok(())
//! # }
//! ```

pub mod resolver;
pub mod schema;

// Re-export commonly used types
pub use resolver::{
    ExportConfig, RawExportParams, DEFAULT_CONFIG_NAME, DEFAULT_IMAGE_SHAPE, DEFAULT_SAVE_DIR,
    EXPORT_EXTENSION,
};
pub use schema::ModelConfig;

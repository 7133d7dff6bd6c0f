// Vitex - ViT Checkpoint Export Tool
// Copyright (c) 2026 Vitex Contributors
// Licensed under the MIT License

//! # Vitex - ViT checkpoint export
//!
//! Vitex loads a pretrained/pruned Vision Transformer checkpoint, re-applies
//! the recorded sparsification/quantization recipe to reconstruct the model
//! topology, loads the trained weights, and exports the resulting graph to a
//! portable interchange artifact for inference elsewhere.
//!
//! ## Architecture
//!
//! Vitex follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Export configuration resolution and the hyperparameter schema
//! - [`core`] - Pipeline orchestration, recipe manifests, artifact verification
//! - [`adapters`] - Collaborator seams and the candle/safetensors backend
//! - [`domain`] - Error types and the opaque model handle
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vitex::adapters::default_pipeline;
//! use vitex::config::{ExportConfig, RawExportParams};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Resolve the invocation parameters (fail-fast validation)
//!     let mut raw = RawExportParams::new("./ckpt/model.safetensors");
//!     raw.recipe = Some("./recipes/vit_base.85.recal.yaml".to_string());
//!     let config = ExportConfig::resolve(raw)?;
//!
//!     // Run the export pipeline
//!     let summary = default_pipeline().execute(&config)?;
//!     println!("Exported {} tensors to {}", summary.tensors, summary.output_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All library operations return [`domain::Result`]; every failure aborts the
//! invocation immediately. There are no retries and no partial-artifact
//! cleanup.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

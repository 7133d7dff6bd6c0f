//! External collaborator integrations for Vitex.
//!
//! This module provides the seams to the four external concerns the export
//! pipeline sequences:
//!
//! - [`traits`] - Collaborator abstraction traits (builder, recipe applier,
//!   weight loader, graph exporter)
//! - [`candle`] - Default implementations over candle and safetensors
//! - [`factory`] - Assembly of the default collaborator set
//!
//! # Design Pattern
//!
//! Adapters follow the adapter pattern to isolate external dependencies and
//! enable testing with mock implementations. The pipeline only ever sees the
//! traits; swapping the tensor runtime or the artifact emitter means providing
//! another implementation, not touching the pipeline.

pub mod candle;
pub mod factory;
pub mod traits;

pub use factory::default_pipeline;
pub use traits::{GraphExporter, ModelBuilder, RecipeApplier, WeightLoader};

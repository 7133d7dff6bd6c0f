//! Core business logic for Vitex.
//!
//! # Modules
//!
//! - [`export`] - Export pipeline orchestration and summary
//! - [`recipe`] - Recorded modifier schedules (parse and structural apply)
//! - [`verification`] - Artifact checksum calculation
//!
//! # Export Workflow
//!
//! One invocation runs linearly:
//!
//! 1. **Resolve**: Validate raw parameters into an [`crate::config::ExportConfig`]
//! 2. **Build**: Construct the model handle from the `args.yaml` hyperparameters
//! 3. **Apply recipe**: Re-install the recorded quantization/sparsity structure
//! 4. **Load weights**: Apply the checkpoint's `state_dict` onto the handle
//! 5. **Export**: Serialize the graph next to a synthetic input batch
//! 6. **Digest**: Checksum the written artifact for the summary

pub mod export;
pub mod recipe;
pub mod verification;

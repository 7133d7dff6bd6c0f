//! Export summary

use crate::core::verification::ArtifactDigest;
use std::path::PathBuf;
use std::time::Duration;

/// Result of one export invocation
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Where the artifact was written
    pub output_path: PathBuf,

    /// Architecture identifier of the exported model
    pub architecture: String,

    /// Number of named tensors in the exported graph
    pub tensors: usize,

    /// Total scalar parameter count
    pub parameters: usize,

    /// Whether the artifact carries a fully quantized graph
    pub quantized: bool,

    /// Size and checksum of the written artifact
    pub artifact: ArtifactDigest,

    /// Wall-clock duration of the whole pipeline
    pub duration: Duration,
}

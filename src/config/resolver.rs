//! Export configuration resolution
//!
//! This module turns raw invocation parameters into a validated
//! [`ExportConfig`]. Resolution is a single linear validate-and-normalize
//! pass: it checks filesystem preconditions (checkpoint first, then config),
//! derives defaults, and either fully succeeds or fails at the first unmet
//! precondition. The only side effects are read-only existence checks.

use crate::domain::{Result, VitexError};
use std::path::{Path, PathBuf};

/// Canonical extension of the exported graph artifact
pub const EXPORT_EXTENSION: &str = "onnx";

/// Config document expected next to the checkpoint when none is supplied
pub const DEFAULT_CONFIG_NAME: &str = "args.yaml";

/// Directory the artifact lands in when none is supplied
pub const DEFAULT_SAVE_DIR: &str = "onnx";

/// Default synthetic input shape, (channels, height, width)
pub const DEFAULT_IMAGE_SHAPE: (usize, usize, usize) = (3, 550, 550);

/// Raw invocation parameters, prior to validation
///
/// Populated from the command line in practice, but any parameter source can
/// construct one (tests build them directly).
#[derive(Debug, Clone)]
pub struct RawExportParams {
    /// Checkpoint to export; required
    pub checkpoint: PathBuf,

    /// Training config document; sibling `args.yaml` assumed when absent
    pub config: Option<PathBuf>,

    /// Recipe path or remote identifier; optional
    pub recipe: Option<String>,

    /// Suppress conversion of a QAT graph to a quantized graph
    pub no_qat_conv: bool,

    /// Batch size of the synthetic export input
    pub batch_size: usize,

    /// Synthetic input shape; must hold exactly three dimensions
    pub image_shape: Vec<usize>,

    /// Output directory; defaults to "onnx"
    pub save_dir: Option<String>,

    /// Output filename; derived from the checkpoint name when absent
    pub filename: Option<String>,
}

impl RawExportParams {
    /// Creates raw parameters for a checkpoint with every optional field at
    /// its default
    pub fn new(checkpoint: impl Into<PathBuf>) -> Self {
        Self {
            checkpoint: checkpoint.into(),
            config: None,
            recipe: None,
            no_qat_conv: false,
            batch_size: 1,
            image_shape: vec![
                DEFAULT_IMAGE_SHAPE.0,
                DEFAULT_IMAGE_SHAPE.1,
                DEFAULT_IMAGE_SHAPE.2,
            ],
            save_dir: None,
            filename: None,
        }
    }
}

/// Fully-resolved export configuration
///
/// Constructed once per invocation via [`ExportConfig::resolve`], then handed
/// to the export pipeline unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Existing checkpoint file
    pub checkpoint: PathBuf,

    /// Existing training config document
    pub config: PathBuf,

    /// Recipe path or remote identifier, when one was recorded
    pub recipe: Option<String>,

    /// Whether to fold QAT observers into a quantized graph during export
    pub convert_qat: bool,

    /// Batch size of the synthetic export input
    pub batch_size: usize,

    /// Synthetic input shape, (channels, dim1, dim2)
    pub image_shape: (usize, usize, usize),

    /// Directory the artifact is written to
    pub save_dir: PathBuf,

    /// Artifact filename; always carries an extension
    pub filename: String,
}

impl ExportConfig {
    /// Validates and normalizes raw parameters into an export configuration
    ///
    /// Preconditions are checked in a fixed order: the checkpoint must exist
    /// before the config document is even derived, and the (explicit or
    /// derived) config document must exist before any further normalization.
    /// Numeric values are not range-checked here; that is the downstream
    /// collaborators' responsibility.
    ///
    /// # Errors
    ///
    /// - [`VitexError::NotFound`] when the checkpoint or config file is missing
    /// - [`VitexError::Configuration`] when the checkpoint is empty or the
    ///   image shape does not hold exactly three dimensions
    pub fn resolve(raw: RawExportParams) -> Result<Self> {
        if raw.checkpoint.as_os_str().is_empty() {
            return Err(VitexError::Configuration(
                "checkpoint is required".to_string(),
            ));
        }

        let checkpoint = raw.checkpoint;
        if !checkpoint.exists() {
            return Err(VitexError::checkpoint_not_found(checkpoint));
        }

        let config = match raw.config {
            Some(path) => path,
            None => checkpoint
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(DEFAULT_CONFIG_NAME),
        };
        if !config.exists() {
            return Err(VitexError::config_not_found(config));
        }

        let image_shape = normalize_image_shape(&raw.image_shape)?;

        let save_dir = match raw.save_dir.filter(|d| !d.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(DEFAULT_SAVE_DIR),
        };

        let filename = match raw.filename.filter(|f| !f.is_empty()) {
            Some(name) => ensure_extension(name),
            None => derive_filename(&checkpoint),
        };

        Ok(Self {
            checkpoint,
            config,
            recipe: raw.recipe,
            convert_qat: !raw.no_qat_conv,
            batch_size: raw.batch_size,
            image_shape,
            save_dir,
            filename,
        })
    }

    /// Full path of the artifact this configuration exports to
    pub fn output_path(&self) -> PathBuf {
        self.save_dir.join(&self.filename)
    }

    /// Shape of the synthetic input batch, `(batch_size, *image_shape)`
    pub fn batch_shape(&self) -> (usize, usize, usize, usize) {
        (
            self.batch_size,
            self.image_shape.0,
            self.image_shape.1,
            self.image_shape.2,
        )
    }
}

/// Normalizes an ordered dimension sequence into the fixed 3-tuple
fn normalize_image_shape(shape: &[usize]) -> Result<(usize, usize, usize)> {
    match shape {
        [c, h, w] => Ok((*c, *h, *w)),
        other => Err(VitexError::Configuration(format!(
            "image shape must hold exactly 3 dimensions, got {}",
            other.len()
        ))),
    }
}

/// Appends the export extension to a filename that lacks one
///
/// A filename with any extension is accepted unchanged; there is no check
/// that the extension matches the artifact format.
fn ensure_extension(filename: String) -> String {
    if Path::new(&filename).extension().is_none() {
        format!("{filename}.{EXPORT_EXTENSION}")
    } else {
        filename
    }
}

/// Derives the artifact filename from the checkpoint name
///
/// Every suffix is stripped before the export extension is appended, so
/// `model.pth.tar` derives `model.onnx`.
fn derive_filename(checkpoint: &Path) -> String {
    let mut stem = checkpoint
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    loop {
        let next = {
            let path = Path::new(&stem);
            match path.extension().and(path.file_stem()) {
                Some(inner) => inner.to_string_lossy().into_owned(),
                None => break,
            }
        };
        stem = next;
    }
    format!("{stem}.{EXPORT_EXTENSION}")
}

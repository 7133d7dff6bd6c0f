//! Export command implementation

use crate::adapters::factory::default_pipeline;
use crate::config::{ExportConfig, RawExportParams};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// The ViT checkpoint to export
    #[arg(long)]
    pub checkpoint: PathBuf,

    /// The config used to train the ViT model. By default the resolver looks
    /// for args.yaml in the same directory as the checkpoint
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Path to the recipe used for training, omit if no recipe used
    #[arg(short = 'r', long)]
    pub recipe: Option<String>,

    /// Flag to prevent conversion of a QAT (Quantization Aware Training)
    /// graph to a quantized graph
    #[arg(short = 'N', long)]
    pub no_qat_conv: bool,

    /// The batch size to use while exporting the model graph
    #[arg(short = 'b', long, default_value_t = 1)]
    pub batch_size: usize,

    /// The image shape in (C, S, S) format to use for exporting the model
    /// graph
    #[arg(
        short = 'S',
        long,
        num_args = 3,
        value_names = ["C", "H", "W"],
        default_values_t = [3usize, 550, 550]
    )]
    pub image_shape: Vec<usize>,

    /// The directory to save the exported model to
    #[arg(long)]
    pub save_dir: Option<String>,

    /// The name to use for the exported model
    #[arg(long)]
    pub filename: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let raw = RawExportParams {
            checkpoint: self.checkpoint.clone(),
            config: self.config.clone(),
            recipe: self.recipe.clone(),
            no_qat_conv: self.no_qat_conv,
            batch_size: self.batch_size,
            image_shape: self.image_shape.clone(),
            save_dir: self.save_dir.clone(),
            filename: self.filename.clone(),
        };

        let config = match ExportConfig::resolve(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Configuration resolution failed");
                eprintln!("Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        tracing::info!(
            checkpoint = %config.checkpoint.display(),
            output = %config.output_path().display(),
            convert_qat = config.convert_qat,
            "Export configuration resolved"
        );

        let pipeline = default_pipeline();
        let summary = match pipeline.execute(&config) {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(1);
            }
        };

        println!();
        println!("Export Summary:");
        println!("  Architecture: {}", summary.architecture);
        println!("  Tensors: {}", summary.tensors);
        println!("  Parameters: {}", summary.parameters);
        println!("  Quantized graph: {}", summary.quantized);
        println!("  Artifact: {}", summary.output_path.display());
        println!("  Size: {} bytes", summary.artifact.bytes);
        println!("  SHA-256: {}", summary.artifact.sha256);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();
        println!("Export completed successfully!");

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs {
            checkpoint: PathBuf::from("model.safetensors"),
            config: None,
            recipe: None,
            no_qat_conv: false,
            batch_size: 1,
            image_shape: vec![3, 550, 550],
            save_dir: None,
            filename: None,
        };

        assert!(!args.no_qat_conv);
        assert_eq!(args.batch_size, 1);
        assert!(args.config.is_none());
        assert!(args.recipe.is_none());
    }

    #[test]
    fn test_execute_missing_checkpoint_is_config_error() {
        let args = ExportArgs {
            checkpoint: PathBuf::from("/definitely/not/here.safetensors"),
            config: None,
            recipe: None,
            no_qat_conv: false,
            batch_size: 1,
            image_shape: vec![3, 550, 550],
            save_dir: None,
            filename: None,
        };

        let code = args.execute().unwrap();
        assert_eq!(code, 2);
    }
}

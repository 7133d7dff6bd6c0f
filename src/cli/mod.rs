//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Vitex using clap.
//! There is a single entry point; the export arguments sit at the top level.

pub mod commands;

use clap::Parser;
use commands::export::ExportArgs;

/// Vitex - export ViT checkpoints to a portable inference graph
#[derive(Parser, Debug)]
#[command(name = "vitex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Export arguments
    #[command(flatten)]
    pub export: ExportArgs,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "VITEX_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parse_minimal() {
        let cli = Cli::parse_from(["vitex", "--checkpoint", "model.safetensors"]);
        assert_eq!(cli.export.checkpoint, PathBuf::from("model.safetensors"));
        assert_eq!(cli.export.batch_size, 1);
        assert_eq!(cli.export.image_shape, vec![3, 550, 550]);
        assert!(!cli.export.no_qat_conv);
        assert!(cli.export.save_dir.is_none());
    }

    #[test]
    fn test_cli_parse_checkpoint_required() {
        let result = Cli::try_parse_from(["vitex"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_short_flags() {
        let cli = Cli::parse_from([
            "vitex",
            "--checkpoint",
            "ckpt/model.pth.tar",
            "-c",
            "ckpt/args.yaml",
            "-r",
            "recipes/vit_base.85.recal.yaml",
            "-N",
            "-b",
            "4",
            "-S",
            "3",
            "224",
            "224",
        ]);

        assert_eq!(cli.export.config, Some(PathBuf::from("ckpt/args.yaml")));
        assert_eq!(
            cli.export.recipe.as_deref(),
            Some("recipes/vit_base.85.recal.yaml")
        );
        assert!(cli.export.no_qat_conv);
        assert_eq!(cli.export.batch_size, 4);
        assert_eq!(cli.export.image_shape, vec![3, 224, 224]);
    }

    #[test]
    fn test_cli_parse_output_overrides() {
        let cli = Cli::parse_from([
            "vitex",
            "--checkpoint",
            "model.safetensors",
            "--save-dir",
            "exported",
            "--filename",
            "vit_base",
        ]);

        assert_eq!(cli.export.save_dir.as_deref(), Some("exported"));
        assert_eq!(cli.export.filename.as_deref(), Some("vit_base"));
    }

    #[test]
    fn test_cli_parse_image_shape_wrong_arity() {
        let result = Cli::try_parse_from([
            "vitex",
            "--checkpoint",
            "model.safetensors",
            "-S",
            "3",
            "224",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_log_level() {
        let cli = Cli::parse_from([
            "vitex",
            "--checkpoint",
            "model.safetensors",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }
}

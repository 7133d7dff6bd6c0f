// Vitex - ViT Checkpoint Export Tool
// Copyright (c) 2026 Vitex Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use vitex::cli::Cli;
use vitex::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let _guard = match init_logging(log_level) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(2);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Vitex - ViT checkpoint export"
    );

    let exit_code = match cli.export.execute() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}

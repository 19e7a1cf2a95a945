// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # storyscore
//!
//! Command-line interface for the storyscore pipeline.
//!
//! ## Usage
//! ```bash
//! # Process every configured story
//! storyscore run --config ./storyscore.toml
//!
//! # Inspect a story's clusters and planned partitions
//! storyscore inspect --config ./storyscore.toml --story carnival
//!
//! # Partition ad-hoc weights
//! storyscore plan --weights 10,20,30,15,25 -k 3 --media 7
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "storyscore",
    about = "Aligns story sentences with generated melody interpolations",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every configured story: partition sentences, assign media.
    Run {
        /// Path to the TOML configuration file.
        #[arg(short, long)]
        config: std::path::PathBuf,
    },

    /// Inspect a story: clusters, media pools, and planned partitions.
    Inspect {
        /// Path to the TOML configuration file.
        #[arg(short, long)]
        config: std::path::PathBuf,

        /// Story to inspect.
        #[arg(short, long)]
        story: String,
    },

    /// Partition an ad-hoc weight sequence, optionally assigning media.
    Plan {
        /// Comma-separated word weights (e.g., "10,20,30,15,25").
        #[arg(short, long)]
        weights: String,

        /// Number of partitions.
        #[arg(short = 'k', long)]
        partitions: usize,

        /// Number of media units to distribute across the partitions.
        #[arg(short, long)]
        media: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { config } => commands::run::execute(config).await,
        Commands::Inspect { config, story } => {
            commands::inspect::execute(config, story).await
        }
        Commands::Plan {
            weights,
            partitions,
            media,
        } => commands::plan::execute(weights, partitions, media),
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `storyscore run` command: batch-process every configured story.

use pipeline::PipelineConfig;
use std::path::PathBuf;

pub async fn execute(config_path: PathBuf) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             storyscore · Batch Runner               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let config = PipelineConfig::from_file(&config_path)?;
    tracing::debug!("loaded configuration from {}", config_path.display());

    println!("  Config:");
    println!("   Stories root:  {}", config.stories_root.display());
    println!("   Melodies root: {}", config.melodies_root.display());
    println!("   Output root:   {}", config.output_root.display());
    println!("   Stories:       {}", config.stories.join(", "));
    println!(
        "   Media layout:  {} / {} files per partition",
        config.bars, config.midis_per_partition,
    );
    println!();

    println!("  Processing {} stories...", config.stories.len());
    let reports = pipeline::run_batch(&config).await?;
    println!();

    println!("  Results:");
    for report in &reports {
        println!("   {}", report.summary());
    }
    println!();

    let processed = reports.iter().filter(|r| !r.is_skipped()).count();
    let skipped = reports.len() - processed;
    println!("  Done: {processed} stories processed, {skipped} skipped.");

    Ok(())
}

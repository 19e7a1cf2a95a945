// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `storyscore inspect` command: display a story's clusters, media pools,
//! and the partition layout each transition would receive.
//!
//! Nothing is written to disk — this is a dry run of the planning stage.

use narrative_model::NarrativeLoader;
use pipeline::PipelineConfig;
use std::path::PathBuf;

pub async fn execute(config_path: PathBuf, story: String) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             storyscore · Story Inspector            ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let config = PipelineConfig::from_file(&config_path)?;
    let corpus = NarrativeLoader::load(&config.story_dir(&story)).map_err(|e| {
        anyhow::anyhow!("failed to load story '{story}': {e}")
    })?;

    // ── Summary ────────────────────────────────────────────────
    println!("  {}", corpus.narrative.summary());
    println!();

    // ── Cluster Table ──────────────────────────────────────────
    println!(
        "  {:<8} {:>6} {:>6} {:>10} {:>8} {:>8} {:>8}",
        "Cluster", "Start", "End", "Sentences", "Words", "V mean", "A mean",
    );
    println!("  {}", "-".repeat(60));
    for cluster in &corpus.clusters {
        let span = corpus.cluster_span(cluster)?;
        println!(
            "  {:<8} {:>6} {:>6} {:>10} {:>8} {:>8.2} {:>8.2}",
            cluster.cluster,
            cluster.start_id,
            cluster.end_id,
            span.num_units(),
            span.total_weight(),
            cluster.valence_mean,
            cluster.arousal_mean,
        );
    }
    println!();

    // ── Per-Transition Plans ───────────────────────────────────
    for (transition, stats) in corpus.transitions() {
        let interp_dir = config.interpolation_dir(&story, &transition);
        if !interp_dir.is_dir() {
            println!("  Transition {transition}: no interpolation directory, would skip.");
            println!();
            continue;
        }

        let media = pipeline::discover_media(&interp_dir)?;
        let partition_count =
            pipeline::derive_partition_count(media.len(), config.midis_per_partition);
        if partition_count == 0 {
            println!(
                "  Transition {transition}: {} media files yield no partitions, would skip.",
                media.len(),
            );
            println!();
            continue;
        }

        let span = corpus.cluster_span(stats)?;
        let plan = partition_planner::plan(&span.units, partition_count)?;
        let assignment = media_assigner::assign(&plan, media.len())?;

        println!(
            "  Transition {transition}: {} media files → {} partitions (bottleneck {} words)",
            media.len(),
            plan.num_partitions(),
            plan.max_partition_weight,
        );
        println!(
            "   {:<10} {:>9} {:>7} {:>6}  {}",
            "Partition", "Sentences", "Words", "Media", "Ids",
        );
        println!("   {}", "-".repeat(52));
        for (p, share) in plan.partitions.iter().zip(&assignment.shares) {
            let ids: Vec<String> = p.member_ids.iter().map(|id| id.to_string()).collect();
            println!(
                "   {:<10} {:>9} {:>7} {:>6}  {}",
                p.index,
                p.num_units(),
                p.aggregate_weight,
                share.count,
                ids.join(","),
            );
        }
        println!();
    }

    Ok(())
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `storyscore plan` command: partition an ad-hoc weight sequence.
//!
//! Handy for eyeballing how the bottleneck partitioner and the fair-share
//! assigner behave on a given weight profile without any story data on disk.

use narrative_model::NarrativeUnit;

pub fn execute(
    weights: String,
    partitions: usize,
    media: Option<usize>,
) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            storyscore · Partition Planner           ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let units = parse_units(&weights)?;
    println!(
        "  Input: {} weights, {} words total, {} partitions requested",
        units.len(),
        units.iter().map(|u| u.weight).sum::<u64>(),
        partitions,
    );
    println!();

    let plan = partition_planner::plan(&units, partitions)?;
    println!("  {}", plan.summary());
    println!();

    println!(
        "  {:<10} {:>6} {:>8}  {}",
        "Partition", "Units", "Weight", "Ids",
    );
    println!("  {}", "-".repeat(48));
    for p in &plan.partitions {
        let ids: Vec<String> = p.member_ids.iter().map(|id| id.to_string()).collect();
        println!(
            "  {:<10} {:>6} {:>8}  {}",
            p.index,
            p.num_units(),
            p.aggregate_weight,
            ids.join(","),
        );
    }
    println!();

    if let Some(media_count) = media {
        let assignment = media_assigner::assign(&plan, media_count)?;
        println!("  {}", assignment.summary());
        println!();
        println!("  {:<10} {:>6}  {}", "Partition", "Media", "Range");
        println!("  {}", "-".repeat(32));
        for share in &assignment.shares {
            println!(
                "  {:<10} {:>6}  {}..{}",
                share.partition,
                share.count,
                share.start,
                share.start + share.count,
            );
        }
        println!();
    }

    Ok(())
}

/// Parses a comma-separated weight list into synthetic units.
fn parse_units(weights: &str) -> anyhow::Result<Vec<NarrativeUnit>> {
    weights
        .split(',')
        .enumerate()
        .map(|(i, raw)| {
            let weight: u64 = raw.trim().parse().map_err(|_| {
                anyhow::anyhow!("invalid weight '{}' at position {i}", raw.trim())
            })?;
            Ok(NarrativeUnit {
                id: i as u64,
                weight,
                text: format!("<{weight} words>"),
            })
        })
        .collect()
}

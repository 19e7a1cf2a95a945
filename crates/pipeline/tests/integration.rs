// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end story processing.
//!
//! These tests exercise the complete flow from CSV loading → planning →
//! media assignment → persistence, proving that all four crates compose
//! correctly against real directories.

use pipeline::{
    process_story, run_batch, MediaMapping, PartitionSummaryRecord, PipelineConfig,
};
use std::fs::File;
use std::io::Write;
use std::path::Path;

// ── Helpers ────────────────────────────────────────────────────

/// Builds a config rooted in a temp directory.
fn config(root: &Path, stories: &[&str]) -> PipelineConfig {
    PipelineConfig {
        stories_root: root.join("stories"),
        melodies_root: root.join("melodies"),
        output_root: root.join("out"),
        stories: stories.iter().map(|s| s.to_string()).collect(),
        bars: "2bar".into(),
        midis_per_partition: 2,
    }
}

/// Writes a synthetic story: three clusters over nine sentences.
fn write_story(config: &PipelineConfig, story: &str) {
    let dir = config.story_dir(story);
    std::fs::create_dir_all(&dir).unwrap();

    let sentences = [
        "The carnival arrived on a Tuesday morning without any warning at all.",
        "Nobody in town remembered inviting it.",
        "The gates opened at dusk.",
        "A lantern burned blue over the ticket booth all night long.",
        "She bought two tickets anyway and kept one in her coat.",
        "The carousel turned slowly against the wind.",
        "Its music box played a tune nobody could place.",
        "By midnight the lights were guttering.",
        "In the morning the field was empty again.",
    ];

    let mut f = File::create(dir.join("clustered.csv")).unwrap();
    writeln!(f, "ID,text,V_pred,A_pred").unwrap();
    for (i, text) in sentences.iter().enumerate() {
        writeln!(f, "{i},{text},0.{i}1,0.{i}2").unwrap();
    }

    let mut f = File::create(dir.join("statistics.csv")).unwrap();
    writeln!(
        f,
        "Cluster,Start_ID,End_ID,Length,Valence_Mean,Valence_Std,Arousal_Mean,Arousal_Std"
    )
    .unwrap();
    writeln!(f, "1,0,2,3,0.3,0.1,0.5,0.1").unwrap();
    writeln!(f, "2,3,5,3,0.4,0.1,0.6,0.1").unwrap();
    writeln!(f, "3,6,8,3,0.2,0.1,0.4,0.1").unwrap();
}

/// Creates `count` MIDI files for a (story, transition) pair.
fn write_media(config: &PipelineConfig, story: &str, transition: &str, count: usize) {
    let dir = config.interpolation_dir(story, transition);
    std::fs::create_dir_all(&dir).unwrap();
    for i in 0..count {
        File::create(dir.join(format!("interp_{i:03}.mid"))).unwrap();
    }
}

fn read_summary(config: &PipelineConfig, story: &str) -> Vec<PartitionSummaryRecord> {
    let mut reader = csv::Reader::from_path(config.summary_path(story)).unwrap();
    reader.deserialize().collect::<Result<_, _>>().unwrap()
}

fn read_mapping(config: &PipelineConfig, story: &str) -> MediaMapping {
    let data = std::fs::read_to_string(config.mapping_path(story)).unwrap();
    serde_json::from_str(&data).unwrap()
}

// ── Full Pipeline Tests ────────────────────────────────────────

#[test]
fn test_end_to_end_single_story() {
    let root = tempfile::tempdir().unwrap();
    let config = config(root.path(), &["carnival"]);
    write_story(&config, "carnival");
    write_media(&config, "carnival", "1to2", 6); // K = 3, M = 6.
    write_media(&config, "carnival", "2to3", 5); // K = 2, M = 5.

    let report = process_story(&config, "carnival").unwrap();

    assert_eq!(report.transitions_processed, 2);
    assert_eq!(report.transitions_skipped, 0);
    assert_eq!(report.partitions_total, 3 + 2);
    assert_eq!(report.media_assigned, 6 + 5);
    assert!(!report.is_skipped());

    // Summary: 3 partitions for 1to2 (cluster 1), 2 for 2to3 (cluster 2).
    let summary = read_summary(&config, "carnival");
    assert_eq!(summary.len(), 5);
    let first: Vec<_> = summary.iter().filter(|r| r.transition == "1to2").collect();
    assert_eq!(first.len(), 3);
    assert_eq!(first[0].cluster, 1);

    // Each transition covers its cluster's sentences exactly once.
    let ids: Vec<String> = first.iter().map(|r| r.sentence_ids.clone()).collect();
    assert_eq!(ids.join(","), "0,1,2");

    // Mapping: every media file assigned, earliest files to partition 1.
    let mapping = read_mapping(&config, "carnival");
    let one_to_two = &mapping["1to2"];
    assert_eq!(one_to_two.len(), 3);
    let total_files: usize = one_to_two.iter().map(|p| p.midi_files.len()).sum();
    assert_eq!(total_files, 6);
    assert_eq!(one_to_two[0].midi_files[0], "interp_000.mid");

    // M = 5 over 2 partitions → counts {2, 3}.
    let two_to_three = &mapping["2to3"];
    let mut counts: Vec<usize> =
        two_to_three.iter().map(|p| p.midi_files.len()).collect();
    counts.sort();
    assert_eq!(counts, vec![2, 3]);

    // Detail CSVs exist per transition.
    assert!(config.detail_path("carnival", "1to2", 1).is_file());
    assert!(config.detail_path("carnival", "2to3", 2).is_file());
}

#[test]
fn test_transition_without_media_is_skipped() {
    let root = tempfile::tempdir().unwrap();
    let config = config(root.path(), &["carnival"]);
    write_story(&config, "carnival");
    write_media(&config, "carnival", "1to2", 4);
    // No media for 2to3.

    let report = process_story(&config, "carnival").unwrap();
    assert_eq!(report.transitions_processed, 1);
    assert_eq!(report.transitions_skipped, 1);

    let mapping = read_mapping(&config, "carnival");
    assert!(mapping.contains_key("1to2"));
    assert!(!mapping.contains_key("2to3"));
}

#[test]
fn test_transition_with_too_few_media_is_skipped() {
    let root = tempfile::tempdir().unwrap();
    let config = config(root.path(), &["carnival"]);
    write_story(&config, "carnival");
    // One file with midis_per_partition = 2 derives zero partitions.
    write_media(&config, "carnival", "1to2", 1);
    write_media(&config, "carnival", "2to3", 4);

    let report = process_story(&config, "carnival").unwrap();
    assert_eq!(report.transitions_processed, 1);
    assert_eq!(report.transitions_skipped, 1);
}

#[test]
fn test_missing_story_errors() {
    let root = tempfile::tempdir().unwrap();
    let config = config(root.path(), &["ghost"]);
    assert!(process_story(&config, "ghost").is_err());
}

// ── Batch Tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_batch_continues_past_missing_story() {
    let root = tempfile::tempdir().unwrap();
    let config = config(root.path(), &["carnival", "ghost", "lantern"]);
    for story in ["carnival", "lantern"] {
        write_story(&config, story);
        write_media(&config, story, "1to2", 6);
        write_media(&config, story, "2to3", 4);
    }

    let reports = run_batch(&config).await.unwrap();

    // Reports come back in configuration order.
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].story, "carnival");
    assert_eq!(reports[1].story, "ghost");
    assert_eq!(reports[2].story, "lantern");

    assert!(!reports[0].is_skipped());
    assert!(reports[1].is_skipped());
    assert!(!reports[2].is_skipped());

    assert!(config.summary_path("carnival").is_file());
    assert!(config.summary_path("lantern").is_file());
    assert!(!config.summary_path("ghost").exists());
}

#[tokio::test]
async fn test_batch_rejects_empty_config() {
    let root = tempfile::tempdir().unwrap();
    let config = config(root.path(), &[]);
    assert!(run_batch(&config).await.is_err());
}

// ── Determinism ────────────────────────────────────────────────

#[test]
fn test_repeated_runs_are_identical() {
    let root = tempfile::tempdir().unwrap();
    let config = config(root.path(), &["carnival"]);
    write_story(&config, "carnival");
    write_media(&config, "carnival", "1to2", 7);

    process_story(&config, "carnival").unwrap();
    let first_summary = std::fs::read_to_string(config.summary_path("carnival")).unwrap();
    let first_mapping = std::fs::read_to_string(config.mapping_path("carnival")).unwrap();

    process_story(&config, "carnival").unwrap();
    let second_summary = std::fs::read_to_string(config.summary_path("carnival")).unwrap();
    let second_mapping = std::fs::read_to_string(config.mapping_path("carnival")).unwrap();

    assert_eq!(first_summary, second_summary);
    assert_eq!(first_mapping, second_mapping);
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Output record types.
//!
//! Field names are bound to the exact CSV headers and JSON keys that
//! downstream consumers (the playback and mixing stages) expect.

use crate::PipelineError;
use media_assigner::{MediaAssignment, MediaUnit};
use narrative_model::StoryCorpus;
use partition_planner::PartitionPlan;
use std::collections::BTreeMap;

/// One row of a story's partition summary CSV.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PartitionSummaryRecord {
    /// Cluster number the partition belongs to.
    #[serde(rename = "Cluster")]
    pub cluster: u32,
    /// Transition label (e.g., `"1to2"`).
    #[serde(rename = "Transition")]
    pub transition: String,
    /// 1-based partition index within the transition.
    #[serde(rename = "Partition")]
    pub partition: usize,
    /// Number of sentences in the partition.
    #[serde(rename = "Num_Sentences")]
    pub num_sentences: usize,
    /// Total word count of the partition.
    #[serde(rename = "Word_Count")]
    pub word_count: u64,
    /// Comma-joined ascending sentence ids.
    #[serde(rename = "Sentence_IDs")]
    pub sentence_ids: String,
}

/// One row of a per-transition partition detail CSV.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PartitionDetailRecord {
    /// 1-based partition index within the transition.
    #[serde(rename = "Partition")]
    pub partition: usize,
    /// Sentence id.
    #[serde(rename = "ID")]
    pub id: u64,
    /// Sentence text.
    #[serde(rename = "Text")]
    pub text: String,
    /// Predicted valence.
    #[serde(rename = "V_pred")]
    pub v_pred: f64,
    /// Predicted arousal.
    #[serde(rename = "A_pred")]
    pub a_pred: f64,
    /// Word count of the sentence.
    #[serde(rename = "Word_Count")]
    pub word_count: u64,
}

/// One partition entry of a story's media mapping JSON.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PartitionMediaRecord {
    /// 1-based partition index within the transition.
    pub partition: usize,
    /// Comma-joined ascending sentence ids.
    pub sentence_ids: String,
    /// Number of sentences in the partition.
    pub num_sentences: usize,
    /// Total word count of the partition.
    pub word_count: u64,
    /// Ordered MIDI filenames assigned to the partition.
    pub midi_files: Vec<String>,
}

/// The per-story media mapping, keyed by transition label.
///
/// A `BTreeMap` keeps transitions in stable sorted order in the JSON output.
pub type MediaMapping = BTreeMap<String, Vec<PartitionMediaRecord>>;

/// Joins sentence ids into the comma-separated form used by the records.
fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds the summary rows for one transition's plan.
pub fn summary_records(
    cluster: u32,
    transition: &str,
    plan: &PartitionPlan,
) -> Vec<PartitionSummaryRecord> {
    plan.partitions
        .iter()
        .map(|p| PartitionSummaryRecord {
            cluster,
            transition: transition.to_string(),
            partition: p.index,
            num_sentences: p.num_units(),
            word_count: p.aggregate_weight,
            sentence_ids: join_ids(&p.member_ids),
        })
        .collect()
}

/// Builds the detail rows for one transition's plan, one per sentence.
pub fn detail_records(
    corpus: &StoryCorpus,
    plan: &PartitionPlan,
) -> Result<Vec<PartitionDetailRecord>, PipelineError> {
    let mut rows = Vec::with_capacity(plan.total_units());

    for partition in &plan.partitions {
        for &id in &partition.member_ids {
            let sentence = corpus
                .sentence(id)
                .ok_or(PipelineError::MissingSentence { id })?;
            let unit = corpus
                .narrative
                .unit(id)
                .ok_or(PipelineError::MissingSentence { id })?;
            rows.push(PartitionDetailRecord {
                partition: partition.index,
                id,
                text: sentence.text.clone(),
                v_pred: sentence.v_pred,
                a_pred: sentence.a_pred,
                word_count: unit.weight,
            });
        }
    }

    Ok(rows)
}

/// Builds the media mapping entries for one transition.
pub fn media_records(
    plan: &PartitionPlan,
    assignment: &MediaAssignment,
    media: &[MediaUnit],
) -> Result<Vec<PartitionMediaRecord>, PipelineError> {
    let slices = assignment.apply(media)?;

    Ok(plan
        .partitions
        .iter()
        .zip(slices)
        .map(|(p, assigned)| PartitionMediaRecord {
            partition: p.index,
            sentence_ids: join_ids(&p.member_ids),
            num_sentences: p.num_units(),
            word_count: p.aggregate_weight,
            midi_files: assigned.iter().map(|m| m.name.clone()).collect(),
        })
        .collect())
}

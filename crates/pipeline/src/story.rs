// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-story processing and the batch runner.
//!
//! For each transition of a story: discover the generated media, derive the
//! partition count from the pool size, plan the partitions over the
//! cluster's sentence span, assign the media, and persist the records.
//!
//! Missing inputs never abort a batch: a story without CSVs or a transition
//! without media is logged and skipped, and the skip shows up in the
//! [`StoryReport`].

use crate::records::MediaMapping;
use crate::{media, output, records, PipelineConfig, PipelineError};
use narrative_model::NarrativeLoader;
use tokio::task::JoinSet;

/// Outcome of processing one story.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoryReport {
    /// Story name.
    pub story: String,
    /// Transitions that produced partitions and assignments.
    pub transitions_processed: usize,
    /// Transitions skipped for lack of media.
    pub transitions_skipped: usize,
    /// Total partitions across processed transitions.
    pub partitions_total: usize,
    /// Total media units assigned across processed transitions.
    pub media_assigned: usize,
    /// Set when the whole story was skipped, with the reason.
    pub error: Option<String>,
}

impl StoryReport {
    fn skipped(story: &str, reason: String) -> Self {
        Self {
            story: story.to_string(),
            transitions_processed: 0,
            transitions_skipped: 0,
            partitions_total: 0,
            media_assigned: 0,
            error: Some(reason),
        }
    }

    /// Returns `true` if the story produced no output at all.
    pub fn is_skipped(&self) -> bool {
        self.error.is_some()
    }

    /// Returns a human-readable summary suitable for CLI output.
    pub fn summary(&self) -> String {
        match &self.error {
            Some(reason) => format!("Story '{}': skipped ({reason})", self.story),
            None => format!(
                "Story '{}': {} transitions ({} skipped), {} partitions, {} media assigned",
                self.story,
                self.transitions_processed,
                self.transitions_skipped,
                self.partitions_total,
                self.media_assigned,
            ),
        }
    }
}

/// Processes a single story: every cluster transition is partitioned,
/// assigned, and persisted.
pub fn process_story(
    config: &PipelineConfig,
    story: &str,
) -> Result<StoryReport, PipelineError> {
    let corpus = NarrativeLoader::load(&config.story_dir(story))?;
    tracing::info!("{}", corpus.narrative.summary());

    let mut summary = Vec::new();
    let mut mapping = MediaMapping::new();
    let mut report = StoryReport {
        story: story.to_string(),
        transitions_processed: 0,
        transitions_skipped: 0,
        partitions_total: 0,
        media_assigned: 0,
        error: None,
    };

    for (transition, stats) in corpus.transitions() {
        let interp_dir = config.interpolation_dir(story, &transition);
        if !interp_dir.is_dir() {
            tracing::warn!(
                "story '{story}' transition {transition}: no interpolation directory at {}, skipping",
                interp_dir.display(),
            );
            report.transitions_skipped += 1;
            continue;
        }

        let media_units = media::discover_media(&interp_dir)?;
        let partition_count =
            media::derive_partition_count(media_units.len(), config.midis_per_partition);
        if partition_count == 0 {
            tracing::warn!(
                "story '{story}' transition {transition}: {} media files yield no partitions, skipping",
                media_units.len(),
            );
            report.transitions_skipped += 1;
            continue;
        }

        let span = corpus.cluster_span(stats)?;
        let plan = partition_planner::plan(&span.units, partition_count)?;
        let assignment = media_assigner::assign(&plan, media_units.len())?;
        tracing::info!(
            "story '{story}' transition {transition}: {} | {}",
            plan.summary(),
            assignment.summary(),
        );

        summary.extend(records::summary_records(stats.cluster, &transition, &plan));
        let details = records::detail_records(&corpus, &plan)?;
        output::write_detail_csv(
            &config.detail_path(story, &transition, stats.cluster),
            &details,
        )?;
        mapping.insert(
            transition.clone(),
            records::media_records(&plan, &assignment, &media_units)?,
        );

        report.transitions_processed += 1;
        report.partitions_total += plan.num_partitions();
        report.media_assigned += media_units.len();
    }

    if !summary.is_empty() {
        output::write_summary_csv(&config.summary_path(story), &summary)?;
    }
    if !mapping.is_empty() {
        output::write_media_mapping(&config.mapping_path(story), &mapping)?;
    }

    Ok(report)
}

/// Processes all configured stories concurrently.
///
/// Stories are independent, so each runs on its own blocking task. A story
/// that fails to load is reported as skipped rather than aborting the rest
/// of the batch. Reports come back in configuration order.
pub async fn run_batch(config: &PipelineConfig) -> Result<Vec<StoryReport>, PipelineError> {
    config.validate()?;

    let mut set = JoinSet::new();
    for (position, story) in config.stories.iter().enumerate() {
        let config = config.clone();
        let story = story.clone();
        set.spawn_blocking(move || (position, story.clone(), process_story(&config, &story)));
    }

    let mut slots: Vec<Option<StoryReport>> = vec![None; config.stories.len()];
    while let Some(joined) = set.join_next().await {
        let (position, story, result) =
            joined.map_err(|e| PipelineError::Task(e.to_string()))?;
        let report = match result {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!("story '{story}' skipped: {e}");
                StoryReport::skipped(&story, e.to_string())
            }
        };
        slots[position] = Some(report);
    }

    Ok(slots.into_iter().flatten().collect())
}

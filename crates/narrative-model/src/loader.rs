// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Story loading from clustered-sentence and cluster-statistics CSV files.
//!
//! The loader reads a story directory containing:
//! - `clustered.csv` — one row per sentence (see [`SentenceRecord`]).
//! - `statistics.csv` — one row per emotional cluster (see [`ClusterStats`]).
//!
//! Sentence *text* is tokenised exactly once here: each row becomes a
//! [`NarrativeUnit`] whose weight is its word count. The raw records are kept
//! alongside the validated narrative because downstream reports need the
//! valence/arousal predictions.

use crate::narrative::{self, Narrative};
use crate::records::transition_label;
use crate::{ClusterStats, NarrativeError, NarrativeUnit, SentenceRecord};
use std::path::Path;

/// Default clustered-sentences filename.
const SENTENCES_FILE: &str = "clustered.csv";

/// Default cluster-statistics filename.
const STATISTICS_FILE: &str = "statistics.csv";

/// A fully-loaded story: cluster statistics, raw sentence records, and the
/// validated narrative built from them.
#[derive(Debug, Clone)]
pub struct StoryCorpus {
    /// Story name, taken from the directory name.
    pub name: String,
    /// Cluster statistics rows, in story order.
    pub clusters: Vec<ClusterStats>,
    /// Raw sentence records, parallel to the narrative units.
    pub sentences: Vec<SentenceRecord>,
    /// The validated narrative.
    pub narrative: Narrative<narrative::Validated>,
}

impl StoryCorpus {
    /// Returns the statistics row for the given cluster number.
    pub fn cluster(&self, cluster: u32) -> Option<&ClusterStats> {
        self.clusters.iter().find(|c| c.cluster == cluster)
    }

    /// Returns the raw sentence record for the given sentence id.
    pub fn sentence(&self, id: u64) -> Option<&SentenceRecord> {
        self.sentences.iter().find(|s| s.id == id)
    }

    /// Returns the transitions between adjacent clusters, in story order.
    ///
    /// Each entry pairs the transition label (e.g., `"1to2"`) with the
    /// statistics of the cluster whose sentences the transition covers —
    /// the *departing* cluster, matching the upstream interpolation layout.
    pub fn transitions(&self) -> Vec<(String, &ClusterStats)> {
        self.clusters
            .windows(2)
            .map(|pair| (transition_label(&pair[0], &pair[1]), &pair[0]))
            .collect()
    }

    /// Extracts the sub-narrative covered by the given cluster.
    pub fn cluster_span(
        &self,
        stats: &ClusterStats,
    ) -> Result<Narrative<narrative::Validated>, NarrativeError> {
        self.narrative.span(stats.start_id, stats.end_id)
    }
}

/// Loads a story directory into a validated [`StoryCorpus`].
///
/// # Example
/// ```no_run
/// use narrative_model::NarrativeLoader;
/// use std::path::Path;
///
/// let corpus = NarrativeLoader::load(Path::new("./stories/carnival")).unwrap();
/// println!("Loaded {} sentences", corpus.narrative.num_units());
/// ```
pub struct NarrativeLoader;

impl NarrativeLoader {
    /// Loads and validates a story from the given directory.
    ///
    /// Steps:
    /// 1. Parse `clustered.csv` into sentence records.
    /// 2. Parse `statistics.csv` into cluster statistics and validate each row.
    /// 3. Build [`NarrativeUnit`]s and validate the [`Narrative`].
    pub fn load(story_dir: &Path) -> Result<StoryCorpus, NarrativeError> {
        let name = story_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "story".to_string());

        let sentences = Self::read_sentences(&story_dir.join(SENTENCES_FILE))?;
        let clusters = Self::read_cluster_stats(&story_dir.join(STATISTICS_FILE))?;

        Self::from_records(name, clusters, sentences)
    }

    /// Builds a corpus from pre-parsed records.
    ///
    /// Useful for testing without CSV files on disk.
    pub fn from_records(
        name: String,
        clusters: Vec<ClusterStats>,
        sentences: Vec<SentenceRecord>,
    ) -> Result<StoryCorpus, NarrativeError> {
        for stats in &clusters {
            stats.validate()?;
        }

        let units: Vec<NarrativeUnit> = sentences
            .iter()
            .map(|s| NarrativeUnit::from_text(s.id, s.text.clone()))
            .collect();

        let narrative = Narrative::new(name.clone(), units).validate()?;

        tracing::debug!(
            "loaded story '{}': {} sentences, {} clusters",
            name,
            narrative.num_units(),
            clusters.len(),
        );

        Ok(StoryCorpus {
            name,
            clusters,
            sentences,
            narrative,
        })
    }

    /// Parses the clustered-sentences CSV.
    fn read_sentences(path: &Path) -> Result<Vec<SentenceRecord>, NarrativeError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        Ok(rows)
    }

    /// Parses the cluster-statistics CSV.
    fn read_cluster_stats(path: &Path) -> Result<Vec<ClusterStats>, NarrativeError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        Ok(rows)
    }
}

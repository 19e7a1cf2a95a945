// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CSV record types emitted by the upstream emotion-clustering stage.
//!
//! Field names are bound to the exact CSV headers so that the loader can
//! deserialise rows directly with serde.
//!
//! # Format
//! `clustered.csv`:
//! ```text
//! ID,text,V_pred,A_pred
//! 0,The carnival arrived on a Tuesday.,0.42,0.61
//! ```
//!
//! `statistics.csv`:
//! ```text
//! Cluster,Start_ID,End_ID,Length,Valence_Mean,Valence_Std,Arousal_Mean,Arousal_Std
//! 1,0,17,18,0.31,0.08,0.55,0.12
//! ```

use crate::NarrativeError;

/// One clustered sentence row from `clustered.csv`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SentenceRecord {
    /// Sentence id, unique and ascending over the whole story.
    #[serde(rename = "ID")]
    pub id: u64,
    /// The sentence text.
    pub text: String,
    /// Predicted valence for this sentence.
    #[serde(rename = "V_pred")]
    pub v_pred: f64,
    /// Predicted arousal for this sentence.
    #[serde(rename = "A_pred")]
    pub a_pred: f64,
}

/// One cluster statistics row from `statistics.csv`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ClusterStats {
    /// Cluster number (1-based, ascending in story order).
    #[serde(rename = "Cluster")]
    pub cluster: u32,
    /// First sentence id belonging to this cluster.
    #[serde(rename = "Start_ID")]
    pub start_id: u64,
    /// Last sentence id belonging to this cluster (inclusive).
    #[serde(rename = "End_ID")]
    pub end_id: u64,
    /// Declared number of sentences in the cluster.
    #[serde(rename = "Length")]
    pub length: usize,
    /// Mean predicted valence over the cluster.
    #[serde(rename = "Valence_Mean")]
    pub valence_mean: f64,
    /// Standard deviation of predicted valence.
    #[serde(rename = "Valence_Std")]
    pub valence_std: f64,
    /// Mean predicted arousal over the cluster.
    #[serde(rename = "Arousal_Mean")]
    pub arousal_mean: f64,
    /// Standard deviation of predicted arousal.
    #[serde(rename = "Arousal_Std")]
    pub arousal_std: f64,
}

impl ClusterStats {
    /// Validates that the row is internally consistent.
    ///
    /// Checks:
    /// - `start_id <= end_id`.
    /// - The declared `Length` matches the id span. A mismatch is only a
    ///   warning: the clustering stage counts sentences, and id gaps in the
    ///   source data make the two legitimately diverge.
    pub fn validate(&self) -> Result<(), NarrativeError> {
        if self.start_id > self.end_id {
            return Err(NarrativeError::InvalidCluster {
                cluster: self.cluster,
                detail: format!(
                    "start id {} exceeds end id {}",
                    self.start_id, self.end_id,
                ),
            });
        }

        let span = (self.end_id - self.start_id + 1) as usize;
        if self.length != span {
            tracing::warn!(
                "cluster {} declares {} sentences but spans ids {}..={} ({span})",
                self.cluster,
                self.length,
                self.start_id,
                self.end_id,
            );
        }

        Ok(())
    }

    /// Returns `true` if the given sentence id falls inside this cluster.
    pub fn contains(&self, id: u64) -> bool {
        self.start_id <= id && id <= self.end_id
    }
}

/// Builds the transition label for a pair of adjacent clusters, e.g. `"1to2"`.
pub fn transition_label(from: &ClusterStats, to: &ClusterStats) -> String {
    format!("{}to{}", from.cluster, to.cluster)
}

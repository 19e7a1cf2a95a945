// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Pipeline configuration loaded from TOML files or constructed
//! programmatically.
//!
//! # TOML Format
//! ```toml
//! stories_root = "./stories"
//! melodies_root = "./outputs/piano_melodies"
//! output_root = "./sentence_to_midi"
//! stories = ["carnival", "lantern", "starling_five", "window_blue_curtain"]
//! bars = "2bar"
//! midis_per_partition = 2
//! ```
//!
//! # Directory Layout
//! - Inputs: `<stories_root>/<story>/{clustered.csv, statistics.csv}` and
//!   `<melodies_root>/<story>/<bars>/interpolations/<transition>/*.mid`.
//! - Outputs: `<output_root>/<story>/` receives the summary CSV, one detail
//!   CSV per transition, and the media mapping JSON.

use std::path::{Path, PathBuf};

/// Configuration for the story pipeline.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PipelineConfig {
    /// Directory containing one sub-directory per story with the clustered
    /// sentence and cluster statistics CSVs.
    pub stories_root: PathBuf,
    /// Directory containing the generated melody interpolations.
    pub melodies_root: PathBuf,
    /// Directory receiving partition CSVs and media mapping JSONs.
    pub output_root: PathBuf,
    /// Stories to process.
    pub stories: Vec<String>,
    /// Bar-length folder of the generated melodies (e.g., `"2bar"`).
    #[serde(default = "default_bars")]
    pub bars: String,
    /// Generated files per partition; a transition's partition count is its
    /// media pool size divided by this.
    #[serde(default = "default_midis_per_partition")]
    pub midis_per_partition: usize,
}

fn default_bars() -> String {
    "2bar".to_string()
}

fn default_midis_per_partition() -> usize {
    2
}

impl PipelineConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, super::PipelineError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            super::PipelineError::Config(format!(
                "cannot read config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, super::PipelineError> {
        toml::from_str(toml_str)
            .map_err(|e| super::PipelineError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, super::PipelineError> {
        toml::to_string_pretty(self)
            .map_err(|e| super::PipelineError::Config(format!("TOML serialise error: {e}")))
    }

    /// Validates the configuration before a batch run.
    pub fn validate(&self) -> Result<(), super::PipelineError> {
        if self.stories.is_empty() {
            return Err(super::PipelineError::Config(
                "no stories configured".into(),
            ));
        }
        if self.midis_per_partition == 0 {
            return Err(super::PipelineError::Config(
                "midis_per_partition must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Returns the input directory for a story.
    pub fn story_dir(&self, story: &str) -> PathBuf {
        self.stories_root.join(story)
    }

    /// Returns the interpolation directory for a (story, transition) pair.
    pub fn interpolation_dir(&self, story: &str, transition: &str) -> PathBuf {
        self.melodies_root
            .join(story)
            .join(&self.bars)
            .join("interpolations")
            .join(transition)
    }

    /// Returns the output directory for a story.
    pub fn story_output_dir(&self, story: &str) -> PathBuf {
        self.output_root.join(story)
    }

    /// Returns the path of a story's partition summary CSV.
    pub fn summary_path(&self, story: &str) -> PathBuf {
        self.story_output_dir(story)
            .join(format!("{story}_summary.csv"))
    }

    /// Returns the path of the partition detail CSV for one transition.
    pub fn detail_path(&self, story: &str, transition: &str, cluster: u32) -> PathBuf {
        self.story_output_dir(story)
            .join(format!("cluster_{transition}"))
            .join(format!("{story}_cluster_{cluster}_partitions.csv"))
    }

    /// Returns the path of a story's media mapping JSON.
    pub fn mapping_path(&self, story: &str) -> PathBuf {
        self.story_output_dir(story)
            .join(format!("{story}_midi_mapping.json"))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stories_root: PathBuf::from("./stories"),
            melodies_root: PathBuf::from("./outputs/piano_melodies"),
            output_root: PathBuf::from("./sentence_to_midi"),
            stories: Vec::new(),
            bars: default_bars(),
            midis_per_partition: default_midis_per_partition(),
        }
    }
}

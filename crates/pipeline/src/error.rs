// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the story pipeline.

/// Errors that can occur during pipeline execution.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Loading or validating story data failed.
    #[error("narrative error: {0}")]
    Narrative(#[from] narrative_model::NarrativeError),

    /// The partition planner rejected its input.
    #[error("planner error: {0}")]
    Planner(#[from] partition_planner::PlannerError),

    /// The media assigner rejected its input.
    #[error("assignment error: {0}")]
    Assign(#[from] media_assigner::AssignError),

    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the media mapping JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A sentence referenced by a plan is missing from the story records.
    #[error("sentence {id} missing from story records")]
    MissingSentence { id: u64 },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A story task failed to complete.
    #[error("story task failed: {0}")]
    Task(String),
}

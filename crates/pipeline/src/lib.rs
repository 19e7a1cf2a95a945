// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # pipeline
//!
//! The orchestrator that aligns stories with their generated music.
//!
//! The pipeline takes:
//! - A [`StoryCorpus`](narrative_model::StoryCorpus) from `narrative-model`.
//! - A `PartitionPlan` from `partition-planner`.
//! - A `MediaAssignment` from `media-assigner`.
//!
//! And, per (story, transition): discovers the generated MIDI interpolations,
//! derives the partition count from the pool size, plans the partitions,
//! assigns the media, and persists the summary/detail CSVs and the media
//! mapping JSON.
//!
//! The two core crates stay pure; everything that touches the filesystem —
//! discovery, parameter derivation, persistence, skip-and-continue batch
//! policy — lives here.
//!
//! # Async Batch Execution
//! Stories are independent, so [`run_batch`] processes them concurrently on
//! the tokio runtime. Per-story work is synchronous and runs on blocking
//! tasks.

mod config;
mod error;
mod media;
mod output;
mod records;
mod story;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use media::{derive_partition_count, discover_media};
pub use output::{write_detail_csv, write_media_mapping, write_summary_csv};
pub use records::{
    detail_records, media_records, summary_records, MediaMapping, PartitionDetailRecord,
    PartitionMediaRecord, PartitionSummaryRecord,
};
pub use story::{process_story, run_batch, StoryReport};

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # narrative-model
//!
//! A lightweight intermediate representation (IR) for story narratives.
//!
//! Rather than passing loosely-typed CSV rows around, this crate defines a
//! minimal IR that captures what the partitioning pipeline needs:
//!
//! - [`NarrativeUnit`] — one sentence with its word-count weight.
//! - [`Narrative`] — the ordered sentence sequence, with a **type-state
//!   pattern** (`Loaded` → `Validated`).
//! - [`SentenceRecord`] / [`ClusterStats`] — the CSV record shapes emitted
//!   by the upstream emotion-clustering stage.
//! - [`NarrativeLoader`] — loads a story directory into a [`StoryCorpus`].
//!
//! # Supported Story Format
//! A story directory contains:
//! - `clustered.csv` — one row per sentence: `ID`, `text`, `V_pred`, `A_pred`.
//! - `statistics.csv` — one row per emotional cluster: `Cluster`, `Start_ID`,
//!   `End_ID`, `Length`, and valence/arousal statistics.
//!
//! # Example
//! ```no_run
//! use narrative_model::NarrativeLoader;
//! use std::path::Path;
//!
//! let corpus = NarrativeLoader::load(Path::new("./stories/carnival")).unwrap();
//! println!("{}", corpus.narrative.summary());
//! for (label, cluster) in corpus.transitions() {
//!     println!("  {label}: sentences {}..={}", cluster.start_id, cluster.end_id);
//! }
//! ```

mod error;
mod loader;
pub mod narrative;
mod records;
mod unit;

pub use error::NarrativeError;
pub use loader::{NarrativeLoader, StoryCorpus};
pub use narrative::Narrative;
pub use records::{ClusterStats, SentenceRecord};
pub use unit::NarrativeUnit;

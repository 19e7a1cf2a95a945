// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # media-assigner
//!
//! Distributes a pool of `M` generated media artifacts across the partitions
//! of a [`partition_planner::PartitionPlan`], proportionally to partition
//! weight.
//!
//! # Algorithm
//!
//! With `K'` partitions:
//!
//! 1. `base = M div K'`, `remainder = M mod K'`.
//! 2. Every partition receives `base` units.
//! 3. Partitions are ranked by aggregate weight descending, ties broken by
//!    ascending partition index; the top `remainder` each receive one extra.
//! 4. Contiguous sub-ranges of the sorted media sequence are handed out in
//!    partition-index order, left to right — the earliest partitions always
//!    receive the earliest media units, independent of who got the extras.
//!
//! The assigner works on counts alone; callers map the resulting shares onto
//! their sorted artifact list with [`MediaAssignment::apply`]. Like the
//! planner, it is pure: no I/O, no logging, no shared state.
//!
//! # Example
//! ```
//! use media_assigner::assign;
//! use narrative_model::NarrativeUnit;
//!
//! let units: Vec<NarrativeUnit> = [45u64, 48, 52]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &w)| NarrativeUnit::from_text(i as u64, vec!["w"; w as usize].join(" ")))
//!     .collect();
//! let plan = partition_planner::plan(&units, 3).unwrap();
//!
//! let assignment = assign(&plan, 7).unwrap();
//! assert_eq!(assignment.counts(), vec![2, 2, 3]);
//! ```

mod assignment;
mod error;
mod fair_share;

pub use assignment::{MediaAssignment, MediaShare, MediaUnit};
pub use error::AssignError;
pub use fair_share::assign;

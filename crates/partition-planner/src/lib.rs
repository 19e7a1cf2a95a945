// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # partition-planner
//!
//! Splits an ordered, word-weighted sentence sequence into `K` contiguous,
//! non-empty partitions minimising the heaviest partition — the classical
//! bottleneck linear-partition problem, solved exactly by dynamic
//! programming.
//!
//! # Algorithm
//!
//! With `prefix(i)` the sum of the first `i` weights:
//!
//! ```text
//! dp[i][1] = prefix(i)
//! dp[i][j] = min over p in [j-1, i-1] of max(dp[p][j-1], prefix(i) - prefix(p))
//! ```
//!
//! Back-pointers recover the partition boundaries from `dp[N][K']` where
//! `K' = min(K, N)`. Runs in `O(N² · K')` time and `O(N · K')` space, which
//! is comfortably small for realistic narratives (tens to low hundreds of
//! sentences, single-digit partition counts).
//!
//! The planner is purely algorithmic — no I/O, no logging, no shared state —
//! making it trivially unit-testable and safe to run from concurrent tasks.
//!
//! # Example
//! ```
//! use narrative_model::NarrativeUnit;
//! use partition_planner::plan;
//!
//! let units: Vec<NarrativeUnit> = [10u64, 20, 30, 15, 25]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &w)| {
//!         let text = vec!["w"; w as usize].join(" ");
//!         NarrativeUnit::from_text(i as u64, text)
//!     })
//!     .collect();
//!
//! let plan = plan(&units, 3).unwrap();
//! assert_eq!(plan.num_partitions(), 3);
//! assert_eq!(plan.max_partition_weight, 40);
//! ```

mod error;
mod minimax;
pub(crate) mod plan;

pub use error::PlannerError;
pub use minimax::plan;
pub use plan::{Partition, PartitionPlan};

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the media assigner.

/// Errors that can occur during media assignment.
#[derive(Debug, thiserror::Error)]
pub enum AssignError {
    /// Fewer media units than partitions — every partition must receive at
    /// least one unit to be usable downstream.
    #[error("{media} media units cannot cover {partitions} partitions")]
    InsufficientMedia { media: usize, partitions: usize },

    /// The plan has no partitions.
    #[error("cannot assign media to an empty plan")]
    EmptyPlan,

    /// The supplied media sequence does not match the assignment's total.
    #[error("assignment covers {expected} media units but {actual} were supplied")]
    MediaCountMismatch { expected: usize, actual: usize },

    /// The produced assignment failed its own consistency check.
    #[error("inconsistent assignment: {detail}")]
    Inconsistent { detail: String },
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Media assignment: the output of the assigner.
//!
//! A [`MediaAssignment`] records, for each partition, which contiguous
//! sub-range of the sorted media sequence it receives. The assignment is the
//! contract between the assigner and the persistence layer.

use crate::AssignError;

/// One generated media artifact, identified by filename.
///
/// Media units are externally supplied and totally ordered by name (lexical
/// filename order); the assigner never inspects their content.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct MediaUnit {
    /// Artifact filename.
    pub name: String,
}

impl MediaUnit {
    /// Creates a media unit from a filename.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for MediaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// The contiguous media sub-range granted to one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MediaShare {
    /// 1-based index of the partition this share belongs to.
    pub partition: usize,
    /// Offset of the first media unit in the sorted sequence.
    pub start: usize,
    /// Number of media units assigned.
    pub count: usize,
}

impl MediaShare {
    /// Returns the half-open range of media offsets covered by this share.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.count
    }
}

/// The complete media assignment produced by [`crate::assign`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MediaAssignment {
    /// Shares in partition-index order.
    pub shares: Vec<MediaShare>,
    /// Total number of media units distributed.
    pub media_total: usize,
    /// Units every partition received.
    pub base: usize,
    /// Number of partitions that received one extra unit.
    pub remainder: usize,
}

impl MediaAssignment {
    /// Returns the number of shares (= number of partitions).
    pub fn num_shares(&self) -> usize {
        self.shares.len()
    }

    /// Returns the per-partition counts in partition-index order.
    pub fn counts(&self) -> Vec<usize> {
        self.shares.iter().map(|s| s.count).collect()
    }

    /// Maps the shares onto a sorted media sequence.
    ///
    /// Returns one sub-slice per partition, in partition-index order.
    /// Fails when the supplied sequence does not contain exactly
    /// `media_total` units.
    pub fn apply<'a, T>(&self, units: &'a [T]) -> Result<Vec<&'a [T]>, AssignError> {
        if units.len() != self.media_total {
            return Err(AssignError::MediaCountMismatch {
                expected: self.media_total,
                actual: units.len(),
            });
        }
        Ok(self.shares.iter().map(|s| &units[s.range()]).collect())
    }

    /// Validates the assignment.
    ///
    /// Checks:
    /// - At least one share.
    /// - Partition indices are consecutive starting from 1.
    /// - Shares are contiguous and jointly cover `0..media_total`.
    /// - Every count is `base` or `base + 1`, with exactly `remainder`
    ///   shares holding the extra unit.
    pub fn validate(&self) -> Result<(), AssignError> {
        if self.shares.is_empty() {
            return Err(AssignError::Inconsistent {
                detail: "assignment has no shares".into(),
            });
        }

        let mut expected_partition = 1;
        let mut expected_start = 0;
        let mut extras = 0;

        for share in &self.shares {
            if share.partition != expected_partition {
                return Err(AssignError::Inconsistent {
                    detail: format!(
                        "expected partition {expected_partition}, got {}",
                        share.partition,
                    ),
                });
            }
            expected_partition += 1;

            if share.start != expected_start {
                return Err(AssignError::Inconsistent {
                    detail: format!(
                        "share for partition {} starts at {} (expected {expected_start})",
                        share.partition, share.start,
                    ),
                });
            }
            expected_start += share.count;

            if share.count == self.base + 1 {
                extras += 1;
            } else if share.count != self.base {
                return Err(AssignError::Inconsistent {
                    detail: format!(
                        "partition {} received {} units (expected {} or {})",
                        share.partition,
                        share.count,
                        self.base,
                        self.base + 1,
                    ),
                });
            }
        }

        if expected_start != self.media_total {
            return Err(AssignError::Inconsistent {
                detail: format!(
                    "shares cover {expected_start} units but {} were distributed",
                    self.media_total,
                ),
            });
        }

        if extras != self.remainder {
            return Err(AssignError::Inconsistent {
                detail: format!(
                    "{extras} partitions hold an extra unit (expected {})",
                    self.remainder,
                ),
            });
        }

        Ok(())
    }

    /// Returns a human-readable summary of the assignment.
    pub fn summary(&self) -> String {
        format!(
            "Assignment: {} media units over {} partitions, {} each plus {} extras, counts: {:?}",
            self.media_total,
            self.num_shares(),
            self.base,
            self.remainder,
            self.counts(),
        )
    }
}

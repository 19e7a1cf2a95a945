// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Partition plan: the output of the planner.
//!
//! A plan is a sequence of [`Partition`]s covering the narrative exactly
//! once, in order. The plan is the contract between the planner and the
//! media assigner.

use crate::PlannerError;

/// A contiguous, order-preserving group of sentences.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Partition {
    /// 1-based position of this partition in the plan.
    pub index: usize,
    /// Ordered sentence ids in this partition (a contiguous subrange of the
    /// narrative's id sequence).
    pub member_ids: Vec<u64>,
    /// Sum of the members' word weights.
    pub aggregate_weight: u64,
}

impl Partition {
    /// Returns the number of sentences in this partition.
    pub fn num_units(&self) -> usize {
        self.member_ids.len()
    }

    /// Returns `true` if this partition is a single sentence.
    pub fn is_single_unit(&self) -> bool {
        self.member_ids.len() == 1
    }

    /// Returns the first sentence id in this partition.
    pub fn first_id(&self) -> u64 {
        self.member_ids[0]
    }

    /// Returns the last sentence id in this partition.
    pub fn last_id(&self) -> u64 {
        *self.member_ids.last().expect("partition is non-empty")
    }
}

/// The complete partition plan produced by [`crate::plan`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PartitionPlan {
    /// Ordered list of partitions.
    pub partitions: Vec<Partition>,
    /// Total word weight across all partitions.
    pub total_weight: u64,
    /// Weight of the heaviest partition — the minimised bottleneck.
    pub max_partition_weight: u64,
}

impl PartitionPlan {
    /// Returns the number of partitions.
    pub fn num_partitions(&self) -> usize {
        self.partitions.len()
    }

    /// Returns the total number of sentences across all partitions.
    pub fn total_units(&self) -> usize {
        self.partitions.iter().map(|p| p.num_units()).sum()
    }

    /// Returns the aggregate weights in partition order.
    pub fn weights(&self) -> Vec<u64> {
        self.partitions.iter().map(|p| p.aggregate_weight).collect()
    }

    /// Validates the plan against the narrative's id sequence.
    ///
    /// Checks:
    /// - Plan is non-empty.
    /// - Partition indices are consecutive starting from 1.
    /// - No partition is empty.
    /// - Concatenated member ids reproduce `unit_ids` exactly (disjoint,
    ///   covering, order-preserving).
    /// - Stored totals match the partition weights.
    pub fn validate(&self, unit_ids: &[u64]) -> Result<(), PlannerError> {
        if self.partitions.is_empty() {
            return Err(PlannerError::Inconsistent {
                detail: "plan has no partitions".into(),
            });
        }

        let mut expected_index = 1;
        let mut covered: Vec<u64> = Vec::with_capacity(unit_ids.len());
        let mut max_weight = 0;
        let mut total_weight = 0;

        for partition in &self.partitions {
            if partition.index != expected_index {
                return Err(PlannerError::Inconsistent {
                    detail: format!(
                        "expected partition index {expected_index}, got {}",
                        partition.index,
                    ),
                });
            }
            expected_index += 1;

            if partition.member_ids.is_empty() {
                return Err(PlannerError::Inconsistent {
                    detail: format!("partition {} is empty", partition.index),
                });
            }

            covered.extend_from_slice(&partition.member_ids);
            max_weight = max_weight.max(partition.aggregate_weight);
            total_weight += partition.aggregate_weight;
        }

        if covered != unit_ids {
            return Err(PlannerError::Inconsistent {
                detail: "partitions do not cover the narrative exactly once in order".into(),
            });
        }

        if max_weight != self.max_partition_weight {
            return Err(PlannerError::Inconsistent {
                detail: format!(
                    "recorded bottleneck {} does not match partitions (actual {max_weight})",
                    self.max_partition_weight,
                ),
            });
        }

        if total_weight != self.total_weight {
            return Err(PlannerError::Inconsistent {
                detail: format!(
                    "recorded total weight {} does not match partitions (actual {total_weight})",
                    self.total_weight,
                ),
            });
        }

        Ok(())
    }

    /// Returns a human-readable summary of the plan.
    pub fn summary(&self) -> String {
        let sizes: Vec<usize> = self.partitions.iter().map(|p| p.num_units()).collect();
        format!(
            "Plan: {} partitions, {} sentences, bottleneck {}/{} words, sizes: {:?}",
            self.num_partitions(),
            self.total_units(),
            self.max_partition_weight,
            self.total_weight,
            sizes,
        )
    }
}

/// Builder helper for constructing a `PartitionPlan` incrementally.
///
/// Used internally by the planner.
pub(crate) struct PlanBuilder {
    partitions: Vec<Partition>,
    total_weight: u64,
    max_partition_weight: u64,
}

impl PlanBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            partitions: Vec::new(),
            total_weight: 0,
            max_partition_weight: 0,
        }
    }

    /// Adds a partition with a known aggregate weight.
    pub fn add_partition(&mut self, member_ids: Vec<u64>, aggregate_weight: u64) {
        let index = self.partitions.len() + 1;
        self.total_weight += aggregate_weight;
        if aggregate_weight > self.max_partition_weight {
            self.max_partition_weight = aggregate_weight;
        }
        self.partitions.push(Partition {
            index,
            member_ids,
            aggregate_weight,
        });
    }

    /// Consumes the builder and returns the finished plan.
    pub fn build(self) -> PartitionPlan {
        PartitionPlan {
            partitions: self.partitions,
            total_weight: self.total_weight,
            max_partition_weight: self.max_partition_weight,
        }
    }
}

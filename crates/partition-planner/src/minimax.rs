// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Bottleneck (minimax) linear partitioning by dynamic programming.
//!
//! Finds the split of an ordered weight sequence into `K'` contiguous,
//! non-empty groups that minimises the heaviest group. The result is exact:
//! no alternative contiguous `K'`-way split has a strictly smaller maximum
//! group weight.
//!
//! # Tie-breaking
//!
//! Several boundary choices can achieve the same minimised maximum. The
//! planner resolves ties deterministically: among split points yielding the
//! same bottleneck, the largest split point wins, keeping each trailing
//! group as light as possible and pushing weight towards the front of the
//! narrative.

use crate::plan::PlanBuilder;
use crate::{PartitionPlan, PlannerError};
use narrative_model::NarrativeUnit;

/// Splits `units` into `min(requested, units.len())` contiguous partitions
/// minimising the maximum partition weight.
///
/// # Errors
/// Fails before any computation when `requested` is zero, `units` is empty,
/// or any unit has zero weight.
///
/// When there are fewer units than requested partitions, every unit forms
/// its own partition — the exact optimum, since the sequence cannot be
/// subdivided further.
pub fn plan(units: &[NarrativeUnit], requested: usize) -> Result<PartitionPlan, PlannerError> {
    if requested == 0 {
        return Err(PlannerError::ZeroPartitionCount);
    }
    if units.is_empty() {
        return Err(PlannerError::EmptyNarrative);
    }
    if let Some(bad) = units.iter().find(|u| u.weight == 0) {
        return Err(PlannerError::ZeroWeight { id: bad.id });
    }

    let n = units.len();
    let k = requested.min(n);
    let weights: Vec<u64> = units.iter().map(|u| u.weight).collect();

    let ends = if k == 1 {
        vec![n]
    } else if k == n {
        (1..=n).collect()
    } else {
        solve(&weights, k)
    };

    let mut builder = PlanBuilder::new();
    let mut start = 0;
    for end in ends {
        let member_ids: Vec<u64> = units[start..end].iter().map(|u| u.id).collect();
        let aggregate_weight: u64 = weights[start..end].iter().sum();
        builder.add_partition(member_ids, aggregate_weight);
        start = end;
    }

    let plan = builder.build();
    let ids: Vec<u64> = units.iter().map(|u| u.id).collect();
    plan.validate(&ids)?;
    Ok(plan)
}

/// Core DP. Returns the end position (exclusive) of each of the `k` groups.
///
/// `dp[i][j]` is the minimum achievable bottleneck splitting the first `i`
/// weights into `j` groups; `split[i][j]` records the chosen start of the
/// last group. Requires `2 <= k < n`.
fn solve(weights: &[u64], k: usize) -> Vec<usize> {
    let n = weights.len();

    let mut prefix = vec![0u64; n + 1];
    for (i, w) in weights.iter().enumerate() {
        prefix[i + 1] = prefix[i] + w;
    }

    let mut dp = vec![vec![u64::MAX; k + 1]; n + 1];
    let mut split = vec![vec![0usize; k + 1]; n + 1];

    for i in 1..=n {
        dp[i][1] = prefix[i];
        for j in 2..=k.min(i) {
            for p in (j - 1)..i {
                let last_group = prefix[i] - prefix[p];
                let candidate = dp[p][j - 1].max(last_group);
                // `<=` keeps the largest split point on ties.
                if candidate <= dp[i][j] {
                    dp[i][j] = candidate;
                    split[i][j] = p;
                }
            }
        }
    }

    let mut ends = Vec::with_capacity(k);
    let mut curr = n;
    for j in (1..=k).rev() {
        ends.push(curr);
        curr = split[curr][j];
    }
    ends.reverse();
    ends
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Creates units with the given word counts and ids 0..n.
    fn make_units(weights: &[u64]) -> Vec<NarrativeUnit> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let text = vec!["word"; w as usize].join(" ");
                NarrativeUnit::from_text(i as u64, text)
            })
            .collect()
    }

    /// Brute force: the minimum bottleneck over every contiguous `k`-way
    /// split of `weights`.
    fn brute_force_bottleneck(weights: &[u64], k: usize) -> u64 {
        fn recurse(weights: &[u64], k: usize) -> u64 {
            let n = weights.len();
            if k == 1 {
                return weights.iter().sum();
            }
            // First group takes 1..=n-k+1 items; the rest recurse.
            (1..=n - k + 1)
                .map(|take| {
                    let first: u64 = weights[..take].iter().sum();
                    first.max(recurse(&weights[take..], k - 1))
                })
                .min()
                .expect("k <= n")
        }
        recurse(weights, k)
    }

    #[test]
    fn test_example_partition() {
        let plan = plan(&make_units(&[10, 20, 30, 15, 25]), 3).unwrap();

        let groups: Vec<Vec<u64>> =
            plan.partitions.iter().map(|p| p.member_ids.clone()).collect();
        assert_eq!(groups, vec![vec![0, 1], vec![2], vec![3, 4]]);
        assert_eq!(plan.weights(), vec![30, 30, 40]);
        assert_eq!(plan.max_partition_weight, 40);
    }

    #[test]
    fn test_single_partition() {
        let plan = plan(&make_units(&[5, 7, 3]), 1).unwrap();
        assert_eq!(plan.num_partitions(), 1);
        assert_eq!(plan.partitions[0].member_ids, vec![0, 1, 2]);
        assert_eq!(plan.max_partition_weight, 15);
    }

    #[test]
    fn test_one_unit_per_partition() {
        let plan = plan(&make_units(&[5, 7, 3]), 3).unwrap();
        assert_eq!(plan.num_partitions(), 3);
        for p in &plan.partitions {
            assert!(p.is_single_unit());
        }
    }

    #[test]
    fn test_fewer_units_than_requested() {
        // N=2, K=5 → two singleton partitions.
        let plan = plan(&make_units(&[4, 9]), 5).unwrap();
        assert_eq!(plan.num_partitions(), 2);
        assert_eq!(plan.partitions[0].member_ids, vec![0]);
        assert_eq!(plan.partitions[1].member_ids, vec![1]);
    }

    #[test]
    fn test_zero_partition_count() {
        let result = plan(&make_units(&[4, 9]), 0);
        assert!(matches!(result, Err(PlannerError::ZeroPartitionCount)));
    }

    #[test]
    fn test_empty_narrative() {
        let result = plan(&[], 3);
        assert!(matches!(result, Err(PlannerError::EmptyNarrative)));
    }

    #[test]
    fn test_zero_weight_unit() {
        let mut units = make_units(&[4, 9, 2]);
        units[1] = NarrativeUnit::from_text(1, "");
        let result = plan(&units, 2);
        assert!(matches!(result, Err(PlannerError::ZeroWeight { id: 1 })));
    }

    #[test]
    fn test_plan_validates() {
        let units = make_units(&[8, 3, 12, 6, 4, 10, 2]);
        let p = plan(&units, 4).unwrap();
        let ids: Vec<u64> = units.iter().map(|u| u.id).collect();
        p.validate(&ids).unwrap();
    }

    #[test]
    fn test_preserves_arbitrary_ids() {
        // Ids need not start at zero or be dense.
        let mut units = make_units(&[6, 6, 6, 6]);
        for (unit, id) in units.iter_mut().zip([18u64, 19, 21, 40]) {
            unit.id = id;
        }
        let p = plan(&units, 2).unwrap();
        assert_eq!(p.partitions[0].member_ids, vec![18, 19]);
        assert_eq!(p.partitions[1].member_ids, vec![21, 40]);
    }

    #[test]
    fn test_optimal_against_brute_force() {
        let cases: Vec<(Vec<u64>, usize)> = vec![
            (vec![1, 1, 1, 1, 1, 1], 3),
            (vec![9, 1, 1, 1, 9], 2),
            (vec![3, 8, 2, 14, 5, 7, 1], 3),
            (vec![20, 1, 1, 1, 1, 1, 20], 4),
            (vec![2, 2, 2, 9], 2),
            (vec![13, 4, 6, 6, 4, 13], 5),
        ];

        for (weights, k) in cases {
            let p = plan(&make_units(&weights), k).unwrap();
            let expected = brute_force_bottleneck(&weights, k);
            assert_eq!(
                p.max_partition_weight, expected,
                "suboptimal bottleneck for weights {weights:?}, k={k}",
            );
        }
    }

    #[test]
    fn test_bottleneck_monotonic_in_k() {
        let weights = [7u64, 3, 9, 2, 11, 5, 6, 4, 8, 1];
        let units = make_units(&weights);

        let mut previous = u64::MAX;
        for k in 1..=weights.len() {
            let p = plan(&units, k).unwrap();
            assert!(
                p.max_partition_weight <= previous,
                "bottleneck increased from {previous} at k={k}",
            );
            previous = p.max_partition_weight;
        }

        // Extremes: one partition carries everything; N partitions carry the
        // heaviest single unit.
        assert_eq!(plan(&units, 1).unwrap().max_partition_weight, 56);
        assert_eq!(
            plan(&units, weights.len()).unwrap().max_partition_weight,
            11,
        );
    }

    #[test]
    fn test_tie_break_takes_largest_split() {
        // [2, 2, 2], k=2: both split points give bottleneck 4. The largest
        // split point wins → [2,2 | 2].
        let p = plan(&make_units(&[2, 2, 2]), 2).unwrap();
        assert_eq!(p.partitions[0].member_ids, vec![0, 1]);
        assert_eq!(p.partitions[1].member_ids, vec![2]);
    }

    #[test]
    fn test_tie_break_pushes_weight_earlier() {
        // [1, 1, 1, 1], k=3: bottleneck 2; the doubled group sits first.
        let p = plan(&make_units(&[1, 1, 1, 1]), 3).unwrap();
        let sizes: Vec<usize> = p.partitions.iter().map(|g| g.num_units()).collect();
        assert_eq!(sizes, vec![2, 1, 1]);
    }

    #[test]
    fn test_deterministic() {
        let units = make_units(&[4, 12, 3, 3, 9, 6, 2, 8]);
        let a = plan(&units, 4).unwrap();
        let b = plan(&units, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_heavy_outlier_isolated() {
        // One dominating sentence should end up alone when k allows it.
        let p = plan(&make_units(&[2, 3, 50, 2, 3]), 3).unwrap();
        assert_eq!(p.max_partition_weight, 50);
        let lone = p
            .partitions
            .iter()
            .find(|g| g.aggregate_weight == 50)
            .unwrap();
        assert_eq!(lone.member_ids, vec![2]);
    }
}

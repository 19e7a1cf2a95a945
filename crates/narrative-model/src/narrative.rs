// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Narrative: the complete story as an ordered sequence of sentence units.
//!
//! # Type-State Pattern
//!
//! The narrative transitions through states enforced at compile time:
//!
//! ```text
//! Narrative<Loaded>     — units parsed, not yet checked.
//!       │  .validate()
//!       ▼
//! Narrative<Validated>  — ids ordered, weights positive, ready for planning.
//! ```
//!
//! This prevents the partition planner from ever receiving an out-of-order
//! or zero-weight sequence. The transition consumes the old state and returns
//! the new one, so there is zero runtime cost — the marker types are
//! `PhantomData` (ZST).

use crate::{NarrativeError, NarrativeUnit};
use std::fmt;

// ── Type-state markers ─────────────────────────────────────────────

/// Marker: narrative has been loaded but not validated.
#[derive(Debug, Clone)]
pub struct Loaded;

/// Marker: narrative has been validated and is ready for partitioning.
#[derive(Debug, Clone)]
pub struct Validated;

/// Sealed trait for narrative states.
pub trait NarrativeState: fmt::Debug + Clone {}
impl NarrativeState for Loaded {}
impl NarrativeState for Validated {}

// ── Narrative ──────────────────────────────────────────────────────

/// A story represented as an ordered sequence of sentence units.
///
/// The generic parameter `S` encodes the validation state at compile time.
#[derive(Debug, Clone)]
pub struct Narrative<S: NarrativeState = Loaded> {
    /// Human-readable story name (e.g., `"carnival"`).
    pub story: String,
    /// Ordered list of sentence units.
    pub units: Vec<NarrativeUnit>,
    /// State marker (zero-sized, compile-time only).
    _state: std::marker::PhantomData<S>,
}

// ── Loaded state ───────────────────────────────────────────────────

impl Narrative<Loaded> {
    /// Creates a new narrative in the `Loaded` state.
    pub fn new(story: String, units: Vec<NarrativeUnit>) -> Self {
        Self {
            story,
            units,
            _state: std::marker::PhantomData,
        }
    }

    /// Validates the narrative and transitions to the `Validated` state.
    ///
    /// # Checks
    /// - The narrative is non-empty.
    /// - Unit ids are strictly increasing.
    /// - Every unit has a positive weight (no empty sentences).
    pub fn validate(self) -> Result<Narrative<Validated>, NarrativeError> {
        if self.units.is_empty() {
            return Err(NarrativeError::InvalidNarrative(
                "narrative contains no sentences".into(),
            ));
        }

        let mut prev_id: Option<u64> = None;
        for unit in &self.units {
            if let Some(prev) = prev_id {
                if unit.id <= prev {
                    return Err(NarrativeError::InvalidUnit {
                        id: unit.id,
                        detail: format!("id not strictly increasing (previous was {prev})"),
                    });
                }
            }
            prev_id = Some(unit.id);

            if unit.weight == 0 {
                return Err(NarrativeError::InvalidUnit {
                    id: unit.id,
                    detail: "sentence has no words".into(),
                });
            }
        }

        Ok(Narrative {
            story: self.story,
            units: self.units,
            _state: std::marker::PhantomData,
        })
    }
}

// ── Validated state ────────────────────────────────────────────────

impl Narrative<Validated> {
    /// Returns the total number of sentence units.
    pub fn num_units(&self) -> usize {
        self.units.len()
    }

    /// Returns the total word weight of the narrative.
    pub fn total_weight(&self) -> u64 {
        self.units.iter().map(|u| u.weight).sum()
    }

    /// Returns the weight of the heaviest single unit.
    pub fn max_unit_weight(&self) -> u64 {
        self.units.iter().map(|u| u.weight).max().unwrap_or(0)
    }

    /// Returns an iterator over the units in narrative order.
    pub fn iter_units(&self) -> impl Iterator<Item = &NarrativeUnit> {
        self.units.iter()
    }

    /// Returns the ordered unit ids.
    pub fn ids(&self) -> Vec<u64> {
        self.units.iter().map(|u| u.id).collect()
    }

    /// Returns a reference to a unit by sentence id.
    pub fn unit(&self, id: u64) -> Option<&NarrativeUnit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Extracts the contiguous sub-narrative with ids in
    /// `start_id..=end_id`.
    ///
    /// Slicing a validated narrative preserves every invariant (ordering and
    /// positive weights carry over), so the result is `Validated` without a
    /// second pass.
    pub fn span(
        &self,
        start_id: u64,
        end_id: u64,
    ) -> Result<Narrative<Validated>, NarrativeError> {
        let units: Vec<NarrativeUnit> = self
            .units
            .iter()
            .filter(|u| start_id <= u.id && u.id <= end_id)
            .cloned()
            .collect();

        if units.is_empty() {
            return Err(NarrativeError::EmptySpan { start_id, end_id });
        }

        Ok(Narrative {
            story: self.story.clone(),
            units,
            _state: std::marker::PhantomData,
        })
    }

    /// Returns a summary string describing the narrative.
    pub fn summary(&self) -> String {
        format!(
            "Narrative '{}': {} sentences, {} words, heaviest sentence {} words",
            self.story,
            self.num_units(),
            self.total_weight(),
            self.max_unit_weight(),
        )
    }
}

// ── Shared implementations ─────────────────────────────────────────

impl<S: NarrativeState> fmt::Display for Narrative<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Narrative '{}' ({} sentences):",
            self.story,
            self.units.len()
        )?;
        for unit in &self.units {
            writeln!(f, "  {}", unit.summary())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: creates a sequence of units with the given word counts.
    fn make_units(weights: &[u64]) -> Vec<NarrativeUnit> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let text = (0..w).map(|_| "word").collect::<Vec<_>>().join(" ");
                NarrativeUnit::from_text(i as u64, text)
            })
            .collect()
    }

    #[test]
    fn test_validate_ok() {
        let narrative = Narrative::new("test".into(), make_units(&[3, 5, 2, 7]));
        let validated = narrative.validate().unwrap();
        assert_eq!(validated.num_units(), 4);
        assert_eq!(validated.total_weight(), 17);
        assert_eq!(validated.max_unit_weight(), 7);
    }

    #[test]
    fn test_validate_empty() {
        let narrative = Narrative::new("empty".into(), vec![]);
        assert!(narrative.validate().is_err());
    }

    #[test]
    fn test_validate_out_of_order_ids() {
        let mut units = make_units(&[3, 5, 2]);
        units[1].id = 0; // Duplicate of unit 0.
        let narrative = Narrative::new("bad".into(), units);
        assert!(matches!(
            narrative.validate(),
            Err(NarrativeError::InvalidUnit { id: 0, .. })
        ));
    }

    #[test]
    fn test_validate_zero_weight() {
        let mut units = make_units(&[3, 5, 2]);
        units[2] = NarrativeUnit::from_text(2, "   ");
        let narrative = Narrative::new("zero".into(), units);
        assert!(matches!(
            narrative.validate(),
            Err(NarrativeError::InvalidUnit { id: 2, .. })
        ));
    }

    #[test]
    fn test_span() {
        let validated = Narrative::new("test".into(), make_units(&[1, 2, 3, 4, 5]))
            .validate()
            .unwrap();
        let span = validated.span(1, 3).unwrap();
        assert_eq!(span.ids(), vec![1, 2, 3]);
        assert_eq!(span.total_weight(), 2 + 3 + 4);
        assert_eq!(span.story, "test");
    }

    #[test]
    fn test_span_empty() {
        let validated = Narrative::new("test".into(), make_units(&[1, 2]))
            .validate()
            .unwrap();
        assert!(matches!(
            validated.span(10, 20),
            Err(NarrativeError::EmptySpan {
                start_id: 10,
                end_id: 20,
            })
        ));
    }

    #[test]
    fn test_unit_lookup() {
        let validated = Narrative::new("test".into(), make_units(&[1, 2, 3]))
            .validate()
            .unwrap();
        assert_eq!(validated.unit(1).unwrap().weight, 2);
        assert!(validated.unit(9).is_none());
    }

    #[test]
    fn test_summary() {
        let validated = Narrative::new("carnival".into(), make_units(&[4, 6]))
            .validate()
            .unwrap();
        let s = validated.summary();
        assert!(s.contains("carnival"));
        assert!(s.contains("2 sentences"));
        assert!(s.contains("10 words"));
    }

    #[test]
    fn test_display() {
        let narrative = Narrative::new("test".into(), make_units(&[2, 3]));
        let display = format!("{narrative}");
        assert!(display.contains("[0]"));
        assert!(display.contains("[1]"));
    }
}

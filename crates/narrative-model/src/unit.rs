// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Narrative units: sentences carrying a word-count weight.
//!
//! A [`NarrativeUnit`] is the atom of the partitioning pipeline: one sentence
//! of a story, identified by its position id in the narrative and weighted by
//! its word count. The weight is computed once at construction; the text is
//! carried along for downstream reporting but never re-tokenised.

/// One sentence of a story with its word-count weight.
///
/// Units are created from CSV sentence records by the loader and are never
/// mutated afterwards — a fresh unit is constructed to reflect any change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NarrativeUnit {
    /// Sentence id, unique and strictly increasing in narrative order.
    pub id: u64,
    /// Word count of the sentence text. Always positive in a validated
    /// narrative.
    pub weight: u64,
    /// The sentence text.
    pub text: String,
}

impl NarrativeUnit {
    /// Creates a unit from raw text, deriving the weight from the word count.
    pub fn from_text(id: u64, text: impl Into<String>) -> Self {
        let text = text.into();
        let weight = word_count(&text);
        Self { id, weight, text }
    }

    /// Returns `true` if this unit carries no words.
    pub fn is_empty(&self) -> bool {
        self.weight == 0
    }

    /// Returns a concise summary string for display.
    pub fn summary(&self) -> String {
        format!("[{}] {} words: {:?}", self.id, self.weight, truncate(&self.text, 40))
    }
}

/// Counts whitespace-separated words in a sentence.
pub fn word_count(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

/// Truncates a string to `max_len` with ellipsis if needed.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for narrative loading and IR construction.

/// Errors that can occur when working with narrative representations.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    /// A story file or directory could not be read.
    #[error("failed to read story data: {0}")]
    ReadError(#[from] std::io::Error),

    /// A CSV input is malformed or has an unexpected header.
    #[error("failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    /// A sentence unit is invalid (e.g., empty text, out-of-order id).
    #[error("invalid unit {id}: {detail}")]
    InvalidUnit { id: u64, detail: String },

    /// The narrative as a whole is malformed.
    #[error("invalid narrative: {0}")]
    InvalidNarrative(String),

    /// A cluster statistics row is internally inconsistent.
    #[error("invalid cluster {cluster}: {detail}")]
    InvalidCluster { cluster: u32, detail: String },

    /// An id span selects no sentences.
    #[error("no sentences in id span {start_id}..={end_id}")]
    EmptySpan { start_id: u64, end_id: u64 },
}

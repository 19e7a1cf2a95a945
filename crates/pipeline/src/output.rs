// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Persistence of partition records and media mappings.
//!
//! Writers create parent directories as needed. Each artifact is written
//! whole; there is no appending or in-place mutation.

use crate::records::{MediaMapping, PartitionDetailRecord, PartitionSummaryRecord};
use crate::PipelineError;
use std::path::Path;

/// Writes a story's partition summary CSV.
pub fn write_summary_csv(
    path: &Path,
    records: &[PartitionSummaryRecord],
) -> Result<(), PipelineError> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    tracing::info!("wrote summary: {}", path.display());
    Ok(())
}

/// Writes the partition detail CSV for one transition.
pub fn write_detail_csv(
    path: &Path,
    records: &[PartitionDetailRecord],
) -> Result<(), PipelineError> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    tracing::info!("wrote partition detail: {}", path.display());
    Ok(())
}

/// Writes a story's media mapping JSON.
pub fn write_media_mapping(path: &Path, mapping: &MediaMapping) -> Result<(), PipelineError> {
    ensure_parent(path)?;
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, mapping)?;
    tracing::info!("wrote media mapping: {}", path.display());
    Ok(())
}

/// Creates the parent directory of `path` if it does not exist.
fn ensure_parent(path: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

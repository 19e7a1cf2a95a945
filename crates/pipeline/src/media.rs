// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Media discovery and partition-count derivation.
//!
//! The generated interpolations for a transition live in a single directory
//! of `.mid` files. The pipeline lists them, sorts them lexically into the
//! canonical media order, and derives the partition count from the pool
//! size. The core crates never see a filesystem — only the resulting counts
//! and names.

use crate::PipelineError;
use media_assigner::MediaUnit;
use std::path::Path;

/// File extension of generated media artifacts.
const MEDIA_EXTENSION: &str = "mid";

/// Lists the generated MIDI files in `dir`, sorted lexically.
///
/// Non-MIDI entries and sub-directories are ignored.
pub fn discover_media(dir: &Path) -> Result<Vec<MediaUnit>, PipelineError> {
    let mut units = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(MEDIA_EXTENSION) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            units.push(MediaUnit::new(name));
        }
    }

    units.sort();
    tracing::debug!("discovered {} media files in {}", units.len(), dir.display());
    Ok(units)
}

/// Derives the partition count for a transition from its media pool size.
///
/// The generator emits `midis_per_partition` files per partition (input/
/// output pairs by default), so the count is the integer quotient. Callers
/// must validate `midis_per_partition > 0` beforehand (see
/// [`crate::PipelineConfig::validate`]).
pub fn derive_partition_count(media_count: usize, midis_per_partition: usize) -> usize {
    media_count / midis_per_partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_discover_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["interp_010.mid", "interp_002.mid", "interp_001.mid"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let units = discover_media(dir.path()).unwrap();
        let names: Vec<&str> = units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["interp_001.mid", "interp_002.mid", "interp_010.mid"],
        );
    }

    #[test]
    fn test_discover_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("interp_001.mid")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("interp_001.wav")).unwrap();
        std::fs::create_dir(dir.path().join("nested.mid")).unwrap();

        let units = discover_media(dir.path()).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].name, "interp_001.mid");
    }

    #[test]
    fn test_discover_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_media(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        assert!(discover_media(&missing).is_err());
    }

    #[test]
    fn test_derive_partition_count() {
        assert_eq!(derive_partition_count(6, 2), 3);
        assert_eq!(derive_partition_count(7, 2), 3);
        assert_eq!(derive_partition_count(1, 2), 0);
        assert_eq!(derive_partition_count(9, 3), 3);
    }
}

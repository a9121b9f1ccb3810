// SPDX-License-Identifier: MIT

//! Record discovery.
//!
//! Walks the full results subtree and reports every directory that holds
//! a results.xml record. Walk order is unspecified and never used for
//! sequencing; the report sorts suites separately.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Record file name written by the test harness in each suite directory.
pub const RECORD_FILE: &str = "results.xml";

/// Return the path of every results.xml under `root`.
///
/// Unreadable entries are skipped silently; a directory without a record
/// file simply does not contribute. Zero matches means "no results", not
/// an error.
pub fn find_records(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    // Results trees are plain data directories: no gitignore semantics,
    // hidden entries included.
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let Ok(entry) = entry else { continue };
        if entry.file_type().is_some_and(|t| t.is_dir()) {
            let candidate = entry.path().join(RECORD_FILE);
            if candidate.is_file() {
                found.push(candidate);
            }
        }
    }

    tracing::debug!(count = found.len(), root = %root.display(), "records discovered");
    found
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT

//! Orchestration marker handling.
//!
//! An `ltm-run-stats` file at the results root means the run was launched
//! by the LTM server. Its `key: "value"` lines override header properties,
//! and its presence switches suite ordering to launch order.

use std::path::Path;

use crate::error::{Error, Result};
use crate::properties::Properties;

/// Marker file written by the LTM server at the results root.
pub const MARKER_FILE: &str = "ltm-run-stats";

/// Dropped unconditionally in orchestration mode: a single instance id or
/// filesystem config is meaningless once configs are grouped by launch.
const DROPPED_KEYS: &[&str] = &["GCE ID", "FSTESTCFG"];

/// Apply the marker file to the header properties, if it exists.
///
/// Each `key: "value"` line replaces every existing entry for `key`, so a
/// key repeated across marker lines is last-line-wins. Returns whether the
/// marker was present (the orchestration-mode flag). A missing marker is
/// not an error; a line without a `": "` separator is fatal.
pub fn apply(results_dir: &Path, props: &mut Properties) -> Result<bool> {
    let path = results_dir.join(MARKER_FILE);
    if !path.exists() {
        return Ok(false);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| Error::Io {
        path: path.clone(),
        source: e,
    })?;

    for line in contents.lines() {
        let (key, value) = line.split_once(": ").ok_or_else(|| Error::MarkerLine {
            path: path.clone(),
            line: line.to_string(),
        })?;
        let value = value.trim_matches('"');
        props.remove_all(key);
        props.add(key, value);
    }

    for key in DROPPED_KEYS {
        props.remove_all(key);
    }

    tracing::debug!(marker = %path.display(), "orchestration marker applied");
    Ok(true)
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;

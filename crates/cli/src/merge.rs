// SPDX-License-Identifier: MIT

//! Cumulative archive merging with crash-safe rotation.
//!
//! The canonical archive is only ever replaced by rename: the combined
//! record set is serialized to `<path>.new`, the previous archive moves
//! to `<path>.bak`, and `.new` moves into place. A crash mid-sequence
//! leaves the old archive intact or both generations recoverable, never
//! a truncated canonical file.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::record::{self, Archive, TestSuite};

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

fn merge_err(path: &Path, message: impl ToString) -> Error {
    Error::Merge {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Merge the given suites into the archive at `path`.
///
/// An existing archive is loaded and extended, so the result is the union
/// of every run ever merged; its aggregate statistics are recomputed
/// before serialization. Keeps exactly one `.bak` generation.
pub fn merge(path: &Path, suites: &[TestSuite]) -> Result<()> {
    let mut archive = if path.exists() {
        record::load_archive(path)?
    } else {
        Archive::default()
    };
    for suite in suites {
        archive.push(suite.clone());
    }
    archive.update_statistics();

    let new_path = sibling(path, ".new");
    let bak_path = sibling(path, ".bak");

    let file = fs::File::create(&new_path).map_err(|e| merge_err(&new_path, e))?;
    let mut writer = std::io::BufWriter::new(file);
    record::write_archive(&archive, &mut writer).map_err(|e| merge_err(&new_path, e))?;
    writer.flush().map_err(|e| merge_err(&new_path, e))?;

    if path.exists() {
        fs::rename(path, &bak_path).map_err(|e| merge_err(path, e))?;
        tracing::debug!(bak = %bak_path.display(), "rotated previous archive");
    }
    fs::rename(&new_path, path).map_err(|e| merge_err(path, e))?;

    tracing::debug!(archive = %path.display(), suites = archive.suites.len(), "archive updated");
    Ok(())
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT

//! Per-suite summary formatting.

use std::io::{self, Write};

use crate::record::{CaseStatus, TestSuite};

/// Column past which failure/error name lists wrap.
const WRAP_COLUMN: usize = 76;

/// Suite label for the counts line: TESTCFG wins over FSTESTCFG.
fn config_name(suite: &TestSuite) -> &str {
    suite
        .properties
        .first("TESTCFG")
        .or_else(|| suite.properties.first("FSTESTCFG"))
        .unwrap_or("")
}

fn status_label(status: CaseStatus) -> &'static str {
    match status {
        CaseStatus::Pass => "Pass",
        CaseStatus::Failure => "Failed",
        CaseStatus::Skipped => "Skipped",
        CaseStatus::Error => "Error",
    }
}

/// Write one suite's summary.
///
/// The counts line names the filesystem configuration and the number of
/// tests run, failed, errored, and skipped; zero counts are omitted. The
/// output looks like:
///
/// ```text
/// ext4/bigalloc: 244 tests, 5 errors, 25 skipped, 880 seconds
///   Failures: generic/219 generic/235 generic/422 generic/451
/// ```
///
/// Verbose mode replaces the name lists with one line per test case.
pub fn write_summary(out: &mut impl Write, suite: &TestSuite, verbose: bool) -> io::Result<()> {
    write!(out, "{}: {} tests, ", config_name(suite), suite.tests)?;
    if suite.failures > 0 {
        write!(out, "{} failures, ", suite.failures)?;
    }
    if suite.errors > 0 {
        write!(out, "{} errors, ", suite.errors)?;
    }
    if suite.skipped > 0 {
        write!(out, "{} skipped, ", suite.skipped)?;
    }
    writeln!(out, "{} seconds", suite.time as i64)?;

    if verbose {
        for case in &suite.cases {
            writeln!(
                out,
                "  {:<12} {:<8} {}s",
                case.name,
                status_label(case.status),
                case.time as i64
            )?;
        }
        return Ok(());
    }

    if suite.failures > 0 {
        write_case_list(out, suite, CaseStatus::Failure, "Failures")?;
        if suite.errors > 0 {
            write_case_list(out, suite, CaseStatus::Error, "Errors")?;
        }
    }
    Ok(())
}

/// Write the names of every case with the given status, wrapping past
/// column 76 onto an indented continuation line. A name is never split
/// across a wrap boundary. Writes nothing when no case matches.
fn write_case_list(
    out: &mut impl Write,
    suite: &TestSuite,
    status: CaseStatus,
    label: &str,
) -> io::Result<()> {
    let mut found = false;
    let mut pos = 0;
    for case in &suite.cases {
        if case.status != status {
            continue;
        }
        if !found {
            write!(out, "  {}: ", label)?;
            pos = label.len() + 4;
            found = true;
        }
        let name_len = case.name.len() + 1;
        pos += name_len + 1;
        if pos > WRAP_COLUMN {
            write!(out, "\n    ")?;
            pos = name_len + 5;
        }
        write!(out, "{} ", case.name)?;
    }
    if found {
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;

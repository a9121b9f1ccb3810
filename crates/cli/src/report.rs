// SPDX-License-Identifier: MIT

//! Report assembly: header block, per-suite body, totals line, trailer.

use std::io::{self, Write};

use crate::error::Result;
use crate::order;
use crate::properties::Properties;
use crate::record::TestSuite;
use crate::summary;

/// Below this many total tests the whole report switches to verbose
/// detail: small runs deserve it.
const VERBOSE_THRESHOLD: u64 = 30;

const HEADER_KEYS: &[&str] = &["TESTRUNID", "KERNEL", "CMDLINE", "CPUS", "MEM", "MNTOPTS"];

/// Aggregate counters across all loaded suites.
#[derive(Debug, Default, PartialEq)]
pub struct Totals {
    pub tests: u64,
    pub skipped: u64,
    pub failures: u64,
    pub errors: u64,
    pub time: f64,
}

impl Totals {
    /// Exact arithmetic sum of every suite's counters, independent of
    /// sort or display order.
    pub fn from_suites(suites: &[TestSuite]) -> Self {
        let mut totals = Totals::default();
        for suite in suites {
            totals.tests += suite.tests;
            totals.skipped += suite.skipped;
            totals.failures += suite.failures;
            totals.errors += suite.errors;
            totals.time += suite.time;
        }
        totals
    }
}

/// Write a `LABEL:     value` line for the first value of `key`, if the
/// property is present and non-empty.
fn write_property_line(out: &mut impl Write, props: &Properties, key: &str) -> io::Result<()> {
    if let Some(value) = props.first(key) {
        if !value.is_empty() {
            writeln!(out, "{:<10} {}", format!("{key}:"), value)?;
        }
    }
    Ok(())
}

/// Write one line per stored value of `key`, in insertion order.
fn write_property_lines(out: &mut impl Write, props: &Properties, key: &str) -> io::Result<()> {
    for value in props.all(key) {
        writeln!(out, "{:<10} {}", format!("{key}:"), value)?;
    }
    Ok(())
}

fn write_header(out: &mut impl Write, props: &Properties) -> io::Result<()> {
    for key in HEADER_KEYS {
        write_property_line(out, props, key)?;
    }
    writeln!(out)
}

fn write_trailer(out: &mut impl Write, props: &Properties) -> io::Result<()> {
    writeln!(out)?;
    write_property_line(out, props, "FSTESTIMG")?;
    write_property_line(out, props, "FSTESTPRJ")?;
    write_property_lines(out, props, "FSTESTVER")?;
    write_property_line(out, props, "FSTESTCFG")?;
    write_property_line(out, props, "FSTESTSET")?;
    write_property_line(out, props, "FSTESTEXC")?;
    write_property_line(out, props, "FSTESTOPT")?;
    write_property_line(out, props, "GCE ID")
}

/// Write the full report and return the number of suites in the body.
///
/// `header_props` is the (already reconciled) copy of the first suite's
/// properties; `launch_order` is the orchestration-mode flag from the
/// marker file.
pub fn write_report(
    out: &mut impl Write,
    suites: &[TestSuite],
    header_props: &Properties,
    launch_order: bool,
    mut verbose: bool,
) -> Result<usize> {
    write_header(out, header_props)?;

    let totals = Totals::from_suites(suites);
    if totals.tests < VERBOSE_THRESHOLD {
        verbose = true;
    }

    let ordered = order::sorted(suites, launch_order)?;
    for suite in &ordered {
        summary::write_summary(out, suite, verbose)?;
    }

    writeln!(
        out,
        "Totals: {} tests, {} skipped, {} failures, {} errors, {}s",
        totals.tests,
        totals.skipped,
        totals.failures,
        totals.errors,
        totals.time as i64
    )?;

    write_trailer(out, header_props)?;
    Ok(ordered.len())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT

//! Summary command implementation.

use std::io::Write;

use anyhow::Context;

use xfsum::cli::Cli;
use xfsum::{discovery, marker, merge, record, report};

/// Scan the results directory and generate the summary report.
/// Returns the number of suites that contributed to the report body.
pub fn run(cli: &Cli) -> anyhow::Result<usize> {
    let mut suites = Vec::new();
    for path in discovery::find_records(&cli.results_dir) {
        suites.push(record::load_suite(&path)?);
    }

    if suites.is_empty() {
        // Nothing to do: no output file is created, no archive touched.
        tracing::debug!(root = %cli.results_dir.display(), "no results found");
        return Ok(0);
    }

    // The header property set is an independent copy of the first suite's
    // properties; marker overrides must not leak back into the stored suite.
    let mut header_props = suites[0].properties.clone();
    let launch_order = marker::apply(&cli.results_dir, &mut header_props)?;

    let count = match cli.output {
        Some(ref path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut writer = std::io::BufWriter::new(file);
            let count =
                report::write_report(&mut writer, &suites, &header_props, launch_order, cli.verbose)?;
            writer.flush()?;
            count
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            report::write_report(&mut handle, &suites, &header_props, launch_order, cli.verbose)?
        }
    };

    // The report is fully written before the merge runs; a merge failure
    // never invalidates an already emitted report.
    if let Some(ref path) = cli.merge {
        merge::merge(path, &suites)?;
    }

    Ok(count)
}

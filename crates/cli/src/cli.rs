// SPDX-License-Identifier: MIT

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Summarize a directory tree of xfstests JUnit results into a single report
#[derive(Parser)]
#[command(name = "xfsum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Results directory to scan for results.xml files
    #[arg(value_name = "RESULTS_DIR")]
    pub results_dir: PathBuf,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Merge all suites into this cumulative archive file
    #[arg(short, long, value_name = "FILE")]
    pub merge: Option<PathBuf>,

    /// Print one line per test case instead of failure lists
    #[arg(short, long)]
    pub verbose: bool,
}

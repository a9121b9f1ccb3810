// SPDX-License-Identifier: MIT

//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::properties::Properties;
use crate::record::{CaseStatus, TestCase, TestSuite};

pub fn case(name: &str, status: CaseStatus, time: f64) -> TestCase {
    TestCase {
        name: name.to_string(),
        status,
        time,
    }
}

/// A suite named via TESTCFG with the given counters. Pass an empty
/// config to leave the property off entirely.
pub fn suite(cfg: &str, tests: u64, failures: u64, errors: u64, skipped: u64, time: f64) -> TestSuite {
    let mut properties = Properties::new();
    if !cfg.is_empty() {
        properties.add("TESTCFG", cfg);
    }
    TestSuite {
        name: "xfstests".to_string(),
        tests,
        failures,
        errors,
        skipped,
        time,
        timestamp: Some("2026-01-01T00:00:00".to_string()),
        hostname: "xfstests-vm".to_string(),
        properties,
        cases: Vec::new(),
    }
}

pub fn suite_at(cfg: &str, timestamp: &str, hostname: &str) -> TestSuite {
    let mut s = suite(cfg, 1, 0, 0, 0, 1.0);
    s.timestamp = Some(timestamp.to_string());
    s.hostname = hostname.to_string();
    s
}

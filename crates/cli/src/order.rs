// SPDX-License-Identifier: MIT

//! Suite ordering for the report body.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::record::TestSuite;

/// Timestamp pattern as written into xUnit records: no timezone, no
/// fractional seconds.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a suite's start timestamp. A missing or malformed timestamp is
/// fatal: sequencing is load-bearing for report readability.
pub fn parse_timestamp(suite: &TestSuite) -> Result<NaiveDateTime> {
    let value = suite.timestamp.as_deref().unwrap_or("");
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| Error::Timestamp {
        suite: suite.name.clone(),
        value: value.to_string(),
    })
}

/// Order suites for the report.
///
/// In launch order (orchestration mode) the sort key is the hostname: the
/// LTM server names VMs in launch sequence. Otherwise suites sort by
/// ascending start timestamp.
pub fn sorted(suites: &[TestSuite], launch_order: bool) -> Result<Vec<&TestSuite>> {
    if launch_order {
        let mut refs: Vec<&TestSuite> = suites.iter().collect();
        refs.sort_by(|a, b| a.hostname.cmp(&b.hostname));
        return Ok(refs);
    }

    // Parse every timestamp up front so a malformed one aborts before any
    // suite line is written.
    let mut keyed = suites
        .iter()
        .map(|suite| parse_timestamp(suite).map(|ts| (ts, suite)))
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by_key(|&(ts, _)| ts);
    Ok(keyed.into_iter().map(|(_, suite)| suite).collect())
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;

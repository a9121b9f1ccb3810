// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_utils::suite_at;

#[test]
fn timestamp_order_by_default() {
    let suites = vec![
        suite_at("ext4/1k", "2026-02-03T06:00:00", "vm-01"),
        suite_at("ext4/4k", "2026-02-03T04:00:00", "vm-03"),
        suite_at("xfs/defaults", "2026-02-03T05:00:00", "vm-02"),
    ];

    let ordered = sorted(&suites, false).unwrap();
    let cfgs: Vec<&str> = ordered
        .iter()
        .map(|s| s.properties.first("TESTCFG").unwrap())
        .collect();
    assert_eq!(cfgs, vec!["ext4/4k", "xfs/defaults", "ext4/1k"]);
}

#[test]
fn hostname_order_in_launch_mode() {
    let suites = vec![
        suite_at("ext4/1k", "2026-02-03T06:00:00", "vm-01"),
        suite_at("ext4/4k", "2026-02-03T04:00:00", "vm-03"),
        suite_at("xfs/defaults", "2026-02-03T05:00:00", "vm-02"),
    ];

    let ordered = sorted(&suites, true).unwrap();
    let hosts: Vec<&str> = ordered.iter().map(|s| s.hostname.as_str()).collect();
    assert_eq!(hosts, vec!["vm-01", "vm-02", "vm-03"]);
}

#[test]
fn malformed_timestamp_is_fatal() {
    let suites = vec![suite_at("ext4/4k", "2026-02-03 04:00:00", "vm-01")];

    let err = sorted(&suites, false).unwrap_err();
    assert!(matches!(err, Error::Timestamp { .. }));
}

#[test]
fn missing_timestamp_is_fatal() {
    let mut bad = suite_at("ext4/4k", "", "vm-01");
    bad.timestamp = None;

    let err = sorted(&[bad], false).unwrap_err();
    assert!(matches!(err, Error::Timestamp { .. }));
}

#[test]
fn launch_mode_ignores_timestamps_entirely() {
    // Unparseable timestamps must not matter when sorting by hostname.
    let mut a = suite_at("ext4/4k", "garbage", "vm-02");
    a.timestamp = None;
    let b = suite_at("ext4/1k", "also garbage", "vm-01");
    let suites = [a, b];

    let ordered = sorted(&suites, true).unwrap();
    assert_eq!(ordered[0].hostname, "vm-01");
    assert_eq!(ordered[1].hostname, "vm-02");
}

#[test]
fn parse_timestamp_accepts_the_harness_format() {
    let s = suite_at("ext4/4k", "2026-02-03T04:05:06", "vm-01");
    let ts = parse_timestamp(&s).unwrap();
    assert_eq!(ts.to_string(), "2026-02-03 04:05:06");
}

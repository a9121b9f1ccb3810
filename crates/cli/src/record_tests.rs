// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuite name="xfstests" tests="4" failures="1" errors="1" skipped="1" time="91.5"
           timestamp="2026-02-03T04:05:06" hostname="xfstests-201910-1">
    <properties>
        <property name="TESTCFG" value="ext4/4k"/>
        <property name="FSTESTVER" value="xfsprogs v5.10"/>
        <property name="FSTESTVER" value="e2fsprogs v1.46"/>
    </properties>
    <testcase name="generic/001" time="3.0"/>
    <testcase name="generic/002" time="10.2">
        <failure message="output mismatch" type="TestFail">details</failure>
    </testcase>
    <testcase name="generic/003" time="0.0">
        <skipped/>
    </testcase>
    <testcase name="generic/004" time="78.3">
        <error/>
    </testcase>
</testsuite>
"#;

#[test]
fn parses_suite_attributes() {
    let suites = parse_suites(SAMPLE).unwrap();
    assert_eq!(suites.len(), 1);

    let suite = &suites[0];
    assert_eq!(suite.name, "xfstests");
    assert_eq!(suite.tests, 4);
    assert_eq!(suite.failures, 1);
    assert_eq!(suite.errors, 1);
    assert_eq!(suite.skipped, 1);
    assert_eq!(suite.time, 91.5);
    assert_eq!(suite.timestamp.as_deref(), Some("2026-02-03T04:05:06"));
    assert_eq!(suite.hostname, "xfstests-201910-1");
}

#[test]
fn parses_properties_in_order() {
    let suites = parse_suites(SAMPLE).unwrap();
    let versions: Vec<&str> = suites[0].properties.all("FSTESTVER").collect();
    assert_eq!(versions, vec!["xfsprogs v5.10", "e2fsprogs v1.46"]);
    assert_eq!(suites[0].properties.first("TESTCFG"), Some("ext4/4k"));
}

#[test]
fn parses_case_statuses() {
    let suites = parse_suites(SAMPLE).unwrap();
    let cases = &suites[0].cases;
    assert_eq!(cases.len(), 4);
    assert_eq!(cases[0].status, CaseStatus::Pass);
    assert_eq!(cases[1].status, CaseStatus::Failure);
    assert_eq!(cases[2].status, CaseStatus::Skipped);
    assert_eq!(cases[3].status, CaseStatus::Error);
    assert_eq!(cases[1].name, "generic/002");
    assert_eq!(cases[1].time, 10.2);
}

#[test]
fn accepts_testsuites_wrapper() {
    let wrapped = format!(
        "<testsuites>{}</testsuites>",
        SAMPLE.trim_start_matches("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")
    );
    let suites = parse_suites(&wrapped).unwrap();
    assert_eq!(suites.len(), 1);
    assert_eq!(suites[0].tests, 4);
}

#[test]
fn load_suite_reads_a_record_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.xml");
    fs::write(&path, SAMPLE).unwrap();

    let suite = load_suite(&path).unwrap();
    assert_eq!(suite.tests, 4);
}

#[test]
fn load_suite_rejects_empty_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.xml");
    fs::write(&path, "<?xml version=\"1.0\"?>\n<other/>\n").unwrap();

    let err = load_suite(&path).unwrap_err();
    assert!(matches!(err, Error::Record { .. }));
}

#[test]
fn rejects_non_numeric_counts() {
    let bad = r#"<testsuite name="x" tests="many"/>"#;
    let err = parse_suites(bad).unwrap_err();
    assert!(err.contains("tests"));
}

#[test]
fn archive_round_trips() {
    let suites = parse_suites(SAMPLE).unwrap();
    let mut archive = Archive::default();
    archive.push(suites[0].clone());
    archive.push(suites[0].clone());
    archive.update_statistics();

    let mut buf = Vec::new();
    write_archive(&archive, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let reread = parse_suites(&text).unwrap();
    assert_eq!(reread.len(), 2);
    assert_eq!(reread[0], suites[0]);
}

#[test]
fn update_statistics_sums_suites() {
    let suites = parse_suites(SAMPLE).unwrap();
    let mut archive = Archive::default();
    archive.push(suites[0].clone());
    archive.push(suites[0].clone());
    archive.update_statistics();

    assert_eq!(archive.tests, 8);
    assert_eq!(archive.failures, 2);
    assert_eq!(archive.errors, 2);
    assert_eq!(archive.skipped, 2);
    assert_eq!(archive.time, 183.0);
}

// SPDX-License-Identifier: MIT

//! JUnit record model and XML codec.
//!
//! One `results.xml` holds a single `<testsuite>` (bare, or wrapped in
//! `<testsuites>`); the cumulative archive is a `<testsuites>` document
//! holding every merged suite. Suite counters are read from the file and
//! trusted as authoritative; they are never recomputed for reporting.

use std::io;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};
use crate::properties::Properties;

/// Outcome recorded for one test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    Pass,
    Failure,
    Error,
    Skipped,
}

impl CaseStatus {
    /// Child element name inside `<testcase>`, or `None` for a pass.
    fn element(self) -> Option<&'static str> {
        match self {
            CaseStatus::Pass => None,
            CaseStatus::Failure => Some("failure"),
            CaseStatus::Error => Some("error"),
            CaseStatus::Skipped => Some("skipped"),
        }
    }

    fn from_element(name: &[u8]) -> Option<Self> {
        match name {
            b"failure" => Some(CaseStatus::Failure),
            b"error" => Some(CaseStatus::Error),
            b"skipped" => Some(CaseStatus::Skipped),
            _ => None,
        }
    }
}

/// One test case within a suite.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,
    pub status: CaseStatus,
    /// Duration in seconds.
    pub time: f64,
}

/// One filesystem/configuration's full test run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestSuite {
    pub name: String,
    pub tests: u64,
    pub failures: u64,
    pub errors: u64,
    pub skipped: u64,
    /// Total runtime in seconds.
    pub time: f64,
    /// Suite start time, ISO-8601-like, as written by the harness.
    pub timestamp: Option<String>,
    pub hostname: String,
    pub properties: Properties,
    pub cases: Vec<TestCase>,
}

/// Cumulative record set persisted across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Archive {
    pub tests: u64,
    pub failures: u64,
    pub errors: u64,
    pub skipped: u64,
    pub time: f64,
    pub suites: Vec<TestSuite>,
}

impl Archive {
    pub fn push(&mut self, suite: TestSuite) {
        self.suites.push(suite);
    }

    /// Recompute the aggregate attributes from the contained suites so the
    /// serialized archive stays self-consistent.
    pub fn update_statistics(&mut self) {
        self.tests = self.suites.iter().map(|s| s.tests).sum();
        self.failures = self.suites.iter().map(|s| s.failures).sum();
        self.errors = self.suites.iter().map(|s| s.errors).sum();
        self.skipped = self.suites.iter().map(|s| s.skipped).sum();
        self.time = self.suites.iter().map(|s| s.time).sum();
    }
}

/// Load one record file. A record holds exactly one suite; a wrapping
/// `<testsuites>` element is tolerated and the first suite wins.
pub fn load_suite(path: &Path) -> Result<TestSuite> {
    let suites = load_suites(path)?;
    suites.into_iter().next().ok_or_else(|| Error::Record {
        path: path.to_path_buf(),
        message: "no testsuite element".to_string(),
    })
}

/// Load a persisted archive with every suite it contains.
pub fn load_archive(path: &Path) -> Result<Archive> {
    let mut archive = Archive {
        suites: load_suites(path)?,
        ..Archive::default()
    };
    archive.update_statistics();
    Ok(archive)
}

fn load_suites(path: &Path) -> Result<Vec<TestSuite>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_suites(&text).map_err(|message| Error::Record {
        path: path.to_path_buf(),
        message,
    })
}

fn parse_suites(text: &str) -> std::result::Result<Vec<TestSuite>, String> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut suites = Vec::new();
    let mut suite: Option<TestSuite> = None;
    let mut case: Option<TestCase> = None;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) => match e.name().as_ref() {
                b"testsuite" => suite = Some(suite_from_attrs(&e)?),
                b"testcase" => case = Some(case_from_attrs(&e)?),
                b"property" => {
                    if let Some(suite) = suite.as_mut() {
                        add_property(&e, suite)?;
                    }
                }
                other => {
                    if let (Some(case), Some(status)) =
                        (case.as_mut(), CaseStatus::from_element(other))
                    {
                        case.status = status;
                    }
                }
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"testsuite" => suites.push(suite_from_attrs(&e)?),
                b"testcase" => {
                    if let Some(suite) = suite.as_mut() {
                        suite.cases.push(case_from_attrs(&e)?);
                    }
                }
                b"property" => {
                    if let Some(suite) = suite.as_mut() {
                        add_property(&e, suite)?;
                    }
                }
                other => {
                    if let (Some(case), Some(status)) =
                        (case.as_mut(), CaseStatus::from_element(other))
                    {
                        case.status = status;
                    }
                }
            },
            Event::End(e) => match e.name().as_ref() {
                b"testcase" => {
                    if let (Some(suite), Some(done)) = (suite.as_mut(), case.take()) {
                        suite.cases.push(done);
                    }
                }
                b"testsuite" => {
                    if let Some(done) = suite.take() {
                        suites.push(done);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            // Failure messages and system-out text are not part of the model.
            _ => {}
        }
    }

    Ok(suites)
}

fn suite_from_attrs(e: &BytesStart<'_>) -> std::result::Result<TestSuite, String> {
    let mut suite = TestSuite::default();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        match attr.key.as_ref() {
            b"name" => suite.name = value.into_owned(),
            b"tests" => suite.tests = parse_count("tests", &value)?,
            b"failures" => suite.failures = parse_count("failures", &value)?,
            b"errors" => suite.errors = parse_count("errors", &value)?,
            b"skipped" => suite.skipped = parse_count("skipped", &value)?,
            b"time" => suite.time = parse_seconds(&value)?,
            b"timestamp" => suite.timestamp = Some(value.into_owned()),
            b"hostname" => suite.hostname = value.into_owned(),
            _ => {}
        }
    }
    Ok(suite)
}

fn case_from_attrs(e: &BytesStart<'_>) -> std::result::Result<TestCase, String> {
    let mut case = TestCase {
        name: String::new(),
        status: CaseStatus::Pass,
        time: 0.0,
    };
    for attr in e.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        match attr.key.as_ref() {
            b"name" => case.name = value.into_owned(),
            b"time" => case.time = parse_seconds(&value)?,
            _ => {}
        }
    }
    Ok(case)
}

fn add_property(e: &BytesStart<'_>, suite: &mut TestSuite) -> std::result::Result<(), String> {
    let mut name = None;
    let mut value = None;
    for attr in e.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let text = attr.unescape_value().map_err(|e| e.to_string())?;
        match attr.key.as_ref() {
            b"name" => name = Some(text.into_owned()),
            b"value" => value = Some(text.into_owned()),
            _ => {}
        }
    }
    if let Some(name) = name {
        suite.properties.add(name, value.unwrap_or_default());
    }
    Ok(())
}

fn parse_count(attr: &str, value: &str) -> std::result::Result<u64, String> {
    value
        .parse()
        .map_err(|_| format!("bad {attr} count {value:?}"))
}

fn parse_seconds(value: &str) -> std::result::Result<f64, String> {
    value.parse().map_err(|_| format!("bad time {value:?}"))
}

/// Serialize an archive as a `<testsuites>` document.
pub fn write_archive(archive: &Archive, out: impl io::Write) -> quick_xml::Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 4);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("testsuites");
    root.push_attribute(("tests", archive.tests.to_string().as_str()));
    root.push_attribute(("failures", archive.failures.to_string().as_str()));
    root.push_attribute(("errors", archive.errors.to_string().as_str()));
    root.push_attribute(("skipped", archive.skipped.to_string().as_str()));
    root.push_attribute(("time", archive.time.to_string().as_str()));
    writer.write_event(Event::Start(root))?;

    for suite in &archive.suites {
        write_suite(suite, &mut writer)?;
    }

    writer.write_event(Event::End(BytesEnd::new("testsuites")))?;
    Ok(())
}

fn write_suite(suite: &TestSuite, writer: &mut Writer<impl io::Write>) -> quick_xml::Result<()> {
    let mut tag = BytesStart::new("testsuite");
    tag.push_attribute(("name", suite.name.as_str()));
    tag.push_attribute(("tests", suite.tests.to_string().as_str()));
    tag.push_attribute(("failures", suite.failures.to_string().as_str()));
    tag.push_attribute(("errors", suite.errors.to_string().as_str()));
    tag.push_attribute(("skipped", suite.skipped.to_string().as_str()));
    tag.push_attribute(("time", suite.time.to_string().as_str()));
    if let Some(ref timestamp) = suite.timestamp {
        tag.push_attribute(("timestamp", timestamp.as_str()));
    }
    if !suite.hostname.is_empty() {
        tag.push_attribute(("hostname", suite.hostname.as_str()));
    }
    writer.write_event(Event::Start(tag))?;

    if !suite.properties.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("properties")))?;
        for prop in suite.properties.iter() {
            let mut ptag = BytesStart::new("property");
            ptag.push_attribute(("name", prop.name.as_str()));
            ptag.push_attribute(("value", prop.value.as_str()));
            writer.write_event(Event::Empty(ptag))?;
        }
        writer.write_event(Event::End(BytesEnd::new("properties")))?;
    }

    for case in &suite.cases {
        let mut ctag = BytesStart::new("testcase");
        ctag.push_attribute(("name", case.name.as_str()));
        ctag.push_attribute(("time", case.time.to_string().as_str()));
        match case.status.element() {
            None => writer.write_event(Event::Empty(ctag))?,
            Some(element) => {
                writer.write_event(Event::Start(ctag))?;
                writer.write_event(Event::Empty(BytesStart::new(element)))?;
                writer.write_event(Event::End(BytesEnd::new("testcase")))?;
            }
        }
    }

    writer.write_event(Event::End(BytesEnd::new("testsuite")))?;
    Ok(())
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;

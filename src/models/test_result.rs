//! Test result models
//!
//! Defines scenarios, per-unit results, and run summaries.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::browser::BrowserKind;
use crate::models::unit::TestUnit;

/// Browser scenarios exercised against the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCase {
    PageTitle,
    NestedFrames,
    DropdownSelect,
    BasicAuth,
    PlayVideo,
    DownloadFile,
    // Firefox-only extra
    MaximizeWindow,
}

impl TestCase {
    /// Get scenario number (1-7)
    pub fn number(&self) -> u8 {
        match self {
            TestCase::PageTitle => 1,
            TestCase::NestedFrames => 2,
            TestCase::DropdownSelect => 3,
            TestCase::BasicAuth => 4,
            TestCase::PlayVideo => 5,
            TestCase::DownloadFile => 6,
            TestCase::MaximizeWindow => 7,
        }
    }

    /// Get scenario display name
    pub fn name(&self) -> &'static str {
        match self {
            TestCase::PageTitle => "Page Title",
            TestCase::NestedFrames => "Nested Frames",
            TestCase::DropdownSelect => "Dropdown Select",
            TestCase::BasicAuth => "Basic Auth",
            TestCase::PlayVideo => "Play Video",
            TestCase::DownloadFile => "Download File",
            TestCase::MaximizeWindow => "Maximize Window",
        }
    }

    /// Scenario identifier used in log lines
    pub fn method_name(&self) -> &'static str {
        match self {
            TestCase::PageTitle => "page_title",
            TestCase::NestedFrames => "nested_frames",
            TestCase::DropdownSelect => "dropdown_select",
            TestCase::BasicAuth => "basic_auth",
            TestCase::PlayVideo => "play_video",
            TestCase::DownloadFile => "download_file",
            TestCase::MaximizeWindow => "maximize_window",
        }
    }

    /// Scenarios shared by every browser suite
    pub fn shared() -> Vec<TestCase> {
        vec![
            TestCase::PageTitle,
            TestCase::NestedFrames,
            TestCase::DropdownSelect,
            TestCase::BasicAuth,
            TestCase::PlayVideo,
            TestCase::DownloadFile,
        ]
    }

    /// Scenarios a given browser suite contains
    pub fn for_browser(browser: BrowserKind) -> Vec<TestCase> {
        let mut cases = Self::shared();
        if browser == BrowserKind::Firefox {
            cases.push(TestCase::MaximizeWindow);
        }
        cases
    }

    /// Parse from scenario number
    pub fn from_number(n: u8) -> Option<TestCase> {
        match n {
            1 => Some(TestCase::PageTitle),
            2 => Some(TestCase::NestedFrames),
            3 => Some(TestCase::DropdownSelect),
            4 => Some(TestCase::BasicAuth),
            5 => Some(TestCase::PlayVideo),
            6 => Some(TestCase::DownloadFile),
            7 => Some(TestCase::MaximizeWindow),
            _ => None,
        }
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Test {}: {}", self.number(), self.name())
    }
}

/// Unit execution status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Pass,
    Fail,
    Error,
}

impl TestStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            TestStatus::Pass => "✓",
            TestStatus::Fail => "✗",
            TestStatus::Error => "!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestStatus::Pass)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Pass => write!(f, "PASS"),
            TestStatus::Fail => write!(f, "FAIL"),
            TestStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of a single unit attempt
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestResult {
    pub unit: TestUnit,
    pub status: TestStatus,
    pub duration_ms: u64,
    pub message: Option<String>,
}

impl TestResult {
    pub fn pass(unit: TestUnit, duration_ms: u64) -> Self {
        Self {
            unit,
            status: TestStatus::Pass,
            duration_ms,
            message: None,
        }
    }

    pub fn fail(unit: TestUnit, duration_ms: u64, message: impl Into<String>) -> Self {
        Self {
            unit,
            status: TestStatus::Fail,
            duration_ms,
            message: Some(message.into()),
        }
    }

    pub fn error(unit: TestUnit, error: impl Into<String>) -> Self {
        Self {
            unit,
            status: TestStatus::Error,
            duration_ms: 0,
            message: Some(error.into()),
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.status.symbol(),
            self.unit,
            self.duration_ms
        )?;
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Summary of one suite run (first pass plus rerun accounting)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub reruns: usize,
    pub total_duration_ms: u64,
    pub results: Vec<TestResult>,
}

impl RunSummary {
    pub fn new(started_at: DateTime<Utc>, results: Vec<TestResult>, reruns: usize) -> Self {
        let total = results.len();
        let passed = results
            .iter()
            .filter(|r| r.status == TestStatus::Pass)
            .count();
        let failed = results
            .iter()
            .filter(|r| r.status == TestStatus::Fail)
            .count();
        let errors = results
            .iter()
            .filter(|r| r.status == TestStatus::Error)
            .count();
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            started_at,
            total,
            passed,
            failed,
            errors,
            reruns,
            total_duration_ms,
            results,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Suite run started {}", self.started_at.to_rfc3339())?;
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        for result in &self.results {
            writeln!(f, "  {result}")?;
        }
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(
            f,
            "Total: {} | Pass: {} | Fail: {} | Error: {} | Reruns: {}",
            self.total, self.passed, self.failed, self.errors, self.reruns
        )?;
        writeln!(
            f,
            "Pass Rate: {:.1}% | Duration: {}ms",
            self.pass_rate(),
            self.total_duration_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_numbers() {
        assert_eq!(TestCase::PageTitle.number(), 1);
        assert_eq!(TestCase::MaximizeWindow.number(), 7);
    }

    #[test]
    fn test_case_from_number() {
        assert_eq!(TestCase::from_number(1), Some(TestCase::PageTitle));
        assert_eq!(TestCase::from_number(7), Some(TestCase::MaximizeWindow));
        assert_eq!(TestCase::from_number(8), None);
    }

    #[test]
    fn test_cases_per_browser() {
        assert_eq!(TestCase::shared().len(), 6);
        assert_eq!(TestCase::for_browser(BrowserKind::Chrome).len(), 6);
        assert_eq!(TestCase::for_browser(BrowserKind::Edge).len(), 6);
        assert_eq!(TestCase::for_browser(BrowserKind::Firefox).len(), 7);
    }

    #[test]
    fn test_result_creation() {
        let unit = TestUnit::new(BrowserKind::Chrome, TestCase::PageTitle);
        let result = TestResult::pass(unit, 100);
        assert!(result.status.is_success());
        assert_eq!(result.duration_ms, 100);
    }

    #[test]
    fn test_run_summary() {
        let pass = TestUnit::new(BrowserKind::Chrome, TestCase::PageTitle);
        let fail = TestUnit::new(BrowserKind::Edge, TestCase::DropdownSelect);
        let err = TestUnit::new(BrowserKind::Firefox, TestCase::PlayVideo);
        let results = vec![
            TestResult::pass(pass, 100),
            TestResult::fail(fail, 50, "selected option mismatch"),
            TestResult::error(err, "session not created"),
        ];

        let summary = RunSummary::new(Utc::now(), results, 2);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.reruns, 2);
        assert!(!summary.is_all_passed());
    }

    #[test]
    fn test_empty_summary_pass_rate() {
        let summary = RunSummary::new(Utc::now(), Vec::new(), 0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.pass_rate(), 0.0);
    }
}

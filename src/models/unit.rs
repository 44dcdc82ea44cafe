//! Test unit planning
//!
//! A unit is one scenario bound to one browser suite. A suite plan expands
//! an ordered list of browser suites into the exact set of units to submit.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::browser::BrowserKind;
use crate::models::test_result::TestCase;

/// Hardening mode repeats the suite list this many times
pub const HARDENING_REPEAT: usize = 9;

/// One scenario bound to one browser suite
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestUnit {
    pub browser: BrowserKind,
    pub case: TestCase,
}

impl TestUnit {
    pub fn new(browser: BrowserKind, case: TestCase) -> Self {
        Self { browser, case }
    }
}

impl fmt::Display for TestUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.case.method_name(), self.browser.name())
    }
}

/// Ordered list of browser suites to expand into units
#[derive(Clone, Debug, Default)]
pub struct SuitePlan {
    browsers: Vec<BrowserKind>,
}

impl SuitePlan {
    pub fn new(browsers: Vec<BrowserKind>) -> Self {
        Self { browsers }
    }

    /// The default plan: every browser suite once
    pub fn full() -> Self {
        Self::new(BrowserKind::all())
    }

    /// Repeat the suite list ninefold to stress the rerun path
    pub fn hardened(self) -> Self {
        let mut browsers = Vec::with_capacity(self.browsers.len() * HARDENING_REPEAT);
        for _ in 0..HARDENING_REPEAT {
            browsers.extend(self.browsers.iter().copied());
        }
        Self { browsers }
    }

    pub fn browsers(&self) -> &[BrowserKind] {
        &self.browsers
    }

    /// Expand suite × scenario into the exact unit list, in submission order
    pub fn units(&self) -> Vec<TestUnit> {
        self.browsers
            .iter()
            .flat_map(|&browser| {
                TestCase::for_browser(browser)
                    .into_iter()
                    .map(move |case| TestUnit::new(browser, case))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.browsers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_display() {
        let unit = TestUnit::new(BrowserKind::Chrome, TestCase::PageTitle);
        assert_eq!(unit.to_string(), "page_title (Chrome)");
    }

    #[test]
    fn test_full_plan_unit_count() {
        // firefox contributes 7 scenarios, chrome and edge 6 each
        let units = SuitePlan::full().units();
        assert_eq!(units.len(), 19);
    }

    #[test]
    fn test_empty_plan_expands_to_nothing() {
        let plan = SuitePlan::new(Vec::new());
        assert!(plan.is_empty());
        assert!(plan.units().is_empty());
    }

    #[test]
    fn test_hardened_plan_unit_count() {
        let plan = SuitePlan::full().hardened();
        assert_eq!(plan.browsers().len(), 27);
        assert_eq!(plan.units().len(), 19 * HARDENING_REPEAT);
    }

    #[test]
    fn test_single_browser_plan() {
        let units = SuitePlan::new(vec![BrowserKind::Edge]).units();
        assert_eq!(units.len(), 6);
        assert!(units.iter().all(|u| u.browser == BrowserKind::Edge));
    }

    #[test]
    fn test_units_preserve_submission_order() {
        let units = SuitePlan::new(vec![BrowserKind::Firefox, BrowserKind::Chrome]).units();
        assert_eq!(units[0].browser, BrowserKind::Firefox);
        assert_eq!(units[0].case, TestCase::PageTitle);
        assert_eq!(units[6].case, TestCase::MaximizeWindow);
        assert_eq!(units[7].browser, BrowserKind::Chrome);
    }
}

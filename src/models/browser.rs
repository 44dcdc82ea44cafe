//! Browser suite models
//!
//! Defines the 3 browser engines the grid is exercised with.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Browser engines provisioned by the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    Chrome,
    Edge,
    Firefox,
}

impl BrowserKind {
    /// Get browser display name
    pub fn name(&self) -> &'static str {
        match self {
            BrowserKind::Chrome => "Chrome",
            BrowserKind::Edge => "Edge",
            BrowserKind::Firefox => "Firefox",
        }
    }

    /// Browser name as sent in WebDriver capabilities
    pub fn capability_name(&self) -> &'static str {
        match self {
            BrowserKind::Chrome => "chrome",
            BrowserKind::Edge => "MicrosoftEdge",
            BrowserKind::Firefox => "firefox",
        }
    }

    /// All browser suites, in submission order
    pub fn all() -> Vec<BrowserKind> {
        vec![BrowserKind::Firefox, BrowserKind::Edge, BrowserKind::Chrome]
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<BrowserKind> {
        match s.to_lowercase().as_str() {
            "chrome" | "chromium" => Some(BrowserKind::Chrome),
            "edge" | "msedge" | "microsoftedge" => Some(BrowserKind::Edge),
            "firefox" | "ff" => Some(BrowserKind::Firefox),
            _ => None,
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_from_str() {
        assert_eq!(BrowserKind::from_str("chrome"), Some(BrowserKind::Chrome));
        assert_eq!(BrowserKind::from_str("EDGE"), Some(BrowserKind::Edge));
        assert_eq!(BrowserKind::from_str("ff"), Some(BrowserKind::Firefox));
        assert_eq!(BrowserKind::from_str("safari"), None);
    }

    #[test]
    fn test_all_browsers() {
        let all = BrowserKind::all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], BrowserKind::Firefox);
    }

    #[test]
    fn test_capability_names() {
        assert_eq!(BrowserKind::Edge.capability_name(), "MicrosoftEdge");
        assert_eq!(BrowserKind::Chrome.capability_name(), "chrome");
    }
}

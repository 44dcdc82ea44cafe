//! Per-browser WebDriver capabilities
//!
//! Builds the capability payloads the grid needs for each browser suite:
//! headless mode, video recording, and grid-managed downloads. The vendor
//! option blocks are assembled by hand so all three suites are configured
//! the same way.

use serde_json::{json, Value};
use thirtyfour::{Capabilities, DesiredCapabilities};

use crate::config::SuiteConfig;
use crate::models::BrowserKind;

/// Chromium flag that keeps the download shelf from popping over the page
const CHROMIUM_DOWNLOAD_ARG: &str = "--disable-features=DownloadBubble,DownloadBubbleV2";

/// Build capabilities for the given browser suite
pub fn for_browser(browser: BrowserKind, config: &SuiteConfig) -> Capabilities {
    match browser {
        BrowserKind::Chrome => chrome(config),
        BrowserKind::Edge => edge(config),
        BrowserKind::Firefox => firefox(config),
    }
}

fn chrome(config: &SuiteConfig) -> Capabilities {
    let mut caps: Capabilities = DesiredCapabilities::chrome().into();
    push_vendor_arg(&mut caps, "goog:chromeOptions", CHROMIUM_DOWNLOAD_ARG);
    if config.headless {
        push_vendor_arg(&mut caps, "goog:chromeOptions", "--headless=new");
    }
    insert_grid_options(&mut caps, config);
    caps
}

fn edge(config: &SuiteConfig) -> Capabilities {
    let mut caps: Capabilities = DesiredCapabilities::edge().into();
    push_vendor_arg(&mut caps, "ms:edgeOptions", CHROMIUM_DOWNLOAD_ARG);
    if config.headless {
        push_vendor_arg(&mut caps, "ms:edgeOptions", "--headless=new");
    }
    insert_grid_options(&mut caps, config);
    caps
}

fn firefox(config: &SuiteConfig) -> Capabilities {
    let mut caps: Capabilities = DesiredCapabilities::firefox().into();
    set_firefox_pref(
        &mut caps,
        "browser.download.manager.showWhenStarting",
        json!(false),
    );
    set_firefox_pref(
        &mut caps,
        "browser.helperApps.neverAsk.saveToDisk",
        json!("*/*"),
    );
    if config.headless {
        push_vendor_arg(&mut caps, "moz:firefoxOptions", "-headless");
    }
    insert_grid_options(&mut caps, config);
    caps
}

/// Selenium-specific capabilities shared by all suites
fn insert_grid_options(caps: &mut Capabilities, config: &SuiteConfig) {
    caps.insert("se:recordVideo".to_string(), Value::Bool(true));
    caps.insert(
        "se:downloadsEnabled".to_string(),
        Value::Bool(config.managed_downloads),
    );
}

/// Append an argument to a vendor options block, creating it if absent
fn push_vendor_arg(caps: &mut Capabilities, options_key: &str, arg: &str) {
    let options = caps
        .entry(options_key.to_string())
        .or_insert_with(|| json!({}));
    if let Some(args) = options
        .as_object_mut()
        .map(|opts| opts.entry("args".to_string()).or_insert_with(|| json!([])))
    {
        if let Some(list) = args.as_array_mut() {
            list.push(json!(arg));
        }
    }
}

/// Set a Firefox profile preference under moz:firefoxOptions
fn set_firefox_pref(caps: &mut Capabilities, key: &str, value: Value) {
    let options = caps
        .entry("moz:firefoxOptions".to_string())
        .or_insert_with(|| json!({}));
    if let Some(prefs) = options
        .as_object_mut()
        .map(|opts| opts.entry("prefs".to_string()).or_insert_with(|| json!({})))
    {
        if let Some(map) = prefs.as_object_mut() {
            map.insert(key.to_string(), value);
        }
    }
}

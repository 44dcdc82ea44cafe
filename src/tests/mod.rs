//! Browser test scenarios
//!
//! This module contains the scenario bodies a unit executes against its
//! remote session. Each body returns `Ok(())` on success and an error
//! carrying the failed assertion or WebDriver failure otherwise.
//!
//! ## Scenarios
//!
//! ### Navigation (1-4)
//! - Page Title
//! - Nested Frames
//! - Dropdown Select
//! - Basic Auth
//!
//! ### Media (5)
//! - Play Video
//!
//! ### Downloads (6)
//! - Download File
//!
//! ### Firefox extra (7)
//! - Maximize Window

mod navigation;

use anyhow::Result;

use crate::config::SuiteConfig;
use crate::grid::GridClient;
use crate::models::TestCase;
use crate::session::BrowserSession;

/// Run a single scenario against a live session
pub async fn run_scenario(
    session: &BrowserSession,
    grid: &GridClient,
    case: TestCase,
    config: &SuiteConfig,
) -> Result<()> {
    let driver = session.driver();
    match case {
        TestCase::PageTitle => navigation::page_title(driver).await,
        TestCase::NestedFrames => navigation::nested_frames(driver, config.wait_timeout).await,
        TestCase::DropdownSelect => navigation::dropdown_select(driver).await,
        TestCase::BasicAuth => navigation::basic_auth(driver).await,
        TestCase::PlayVideo => media::play_video(driver, config.wait_timeout).await,
        TestCase::DownloadFile => {
            downloads::download_file(session, grid, config.managed_downloads).await
        }
        TestCase::MaximizeWindow => navigation::maximize_window(driver).await,
    }
}

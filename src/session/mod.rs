//! Browser session lifecycle
//!
//! Each test unit gets its own remote session: acquired before the scenario
//! body runs, released unconditionally afterwards. Sessions are never shared
//! across concurrent units.

pub mod capabilities;

use anyhow::{Context, Result};
use thirtyfour::WebDriver;
use tracing::{error, info};

use crate::config::SuiteConfig;
use crate::models::TestUnit;
use crate::output::annotate;
use crate::utils::Timer;

/// One remote browser session, exclusive to one unit
pub struct BrowserSession {
    driver: WebDriver,
}

impl BrowserSession {
    /// Open a remote session for the unit's browser suite
    pub async fn create(config: &SuiteConfig, unit: &TestUnit) -> Result<Self> {
        let caps = capabilities::for_browser(unit.browser, config);
        let timer = Timer::start(format!("{unit} session init"));

        let driver = WebDriver::new(&config.grid.endpoint_url(), caps)
            .await
            .with_context(|| format!("failed to create WebDriver session for {unit}"))?;

        info!(
            "<< {} WebDriver initialization completed in {:.2} (s)",
            unit,
            timer.elapsed_secs()
        );

        Ok(Self { driver })
    }

    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// Session id as the grid knows it, for the downloads endpoint
    pub fn session_id(&self) -> String {
        self.driver.session_id().to_string()
    }

    /// Release the remote session.
    ///
    /// Called even when the scenario body failed; a release failure is
    /// reported with the CI error marker and returned to the caller, which
    /// decides whether the body's own failure takes precedence.
    pub async fn quit(self) -> Result<()> {
        if let Err(e) = self.driver.quit().await {
            error!("{}", annotate::error(format!("Exception: {e}")));
            return Err(anyhow::Error::new(e).context("failed to release WebDriver session"));
        }
        Ok(())
    }
}

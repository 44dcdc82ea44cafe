//! Unit execution against the grid
//!
//! One unit = session setup, scenario body, session release. The runner
//! yields an unsuccessful result for body failures and an error for
//! setup/release failures; the executor treats both as unit failures.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use crate::config::SuiteConfig;
use crate::grid::GridClient;
use crate::models::{TestResult, TestUnit};
use crate::output::annotate;
use crate::session::BrowserSession;
use crate::tests;
use crate::utils::Timer;

/// A callable unit: performs setup, body, teardown, and yields a
/// pass/fail result
#[async_trait]
pub trait UnitRunner: Send + Sync {
    async fn run_unit(&self, unit: TestUnit) -> Result<TestResult>;
}

/// Runs units against a live Selenium Grid
pub struct GridUnitRunner {
    config: Arc<SuiteConfig>,
    grid: GridClient,
}

impl GridUnitRunner {
    pub fn new(config: Arc<SuiteConfig>) -> Result<Self> {
        let grid = GridClient::new(&config.grid)?;
        Ok(Self { config, grid })
    }
}

#[async_trait]
impl UnitRunner for GridUnitRunner {
    async fn run_unit(&self, unit: TestUnit) -> Result<TestResult> {
        debug!("Starting {}", unit);
        let timer = Timer::start(unit.to_string());

        let session = match BrowserSession::create(&self.config, &unit).await {
            Ok(session) => session,
            Err(e) => {
                error!("{}", annotate::error(format!("Exception: {e:#}")));
                return Err(e.context(format!("session setup failed for {unit}")));
            }
        };

        let body = tests::run_scenario(&session, &self.grid, unit.case, &self.config).await;
        let release = session.quit().await;
        let duration_ms = timer.elapsed_ms();

        match (body, release) {
            (Ok(()), Ok(())) => Ok(TestResult::pass(unit, duration_ms)),
            // the body's own failure takes precedence; the release error is
            // already logged by the session
            (Err(e), _) => Ok(TestResult::fail(unit, duration_ms, format!("{e:#}"))),
            (Ok(()), Err(e)) => Err(e.context(format!("session release failed for {unit}"))),
        }
    }
}

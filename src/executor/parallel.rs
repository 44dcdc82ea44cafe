//! Parallel suite execution
//!
//! Fans a suite plan's units out to a bounded worker pool, consumes
//! outcomes in completion order, then reruns the failed set sequentially
//! exactly once. A rerun failure aborts the batch immediately; remaining
//! reruns are never attempted.

use anyhow::{anyhow, bail, Result};
use chrono::Utc;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::executor::runner::UnitRunner;
use crate::models::{RunSummary, SuitePlan, TestResult, TestUnit};
use crate::output::annotate;

/// A first-pass failure retained only for the rerun pass
#[derive(Clone, Debug)]
struct FailureRecord {
    unit: TestUnit,
    error: String,
}

/// Parallel suite runner
pub struct ParallelRunner {
    max_concurrent: usize,
}

impl ParallelRunner {
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Worker pool sizing when none is requested
    pub fn default_concurrency() -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    }

    /// Execute the plan's units concurrently, then apply the retry policy.
    ///
    /// Returns the first-pass summary when the run succeeds; a rerun
    /// failure surfaces as an error naming the unit and both attempts.
    pub async fn run(&self, runner: Arc<dyn UnitRunner>, plan: &SuitePlan) -> Result<RunSummary> {
        let started_at = Utc::now();
        let units = plan.units();
        info!("Number of tests were added to worker: {}", units.len());

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut in_flight = FuturesUnordered::new();

        for unit in units {
            let semaphore = Arc::clone(&semaphore);
            let runner = Arc::clone(&runner);
            let submitted = Instant::now();
            let handle = tokio::spawn(async move {
                let _permit = semaphore.acquire().await.unwrap();
                runner.run_unit(unit).await
            });
            in_flight.push(async move { (unit, submitted, handle.await) });
        }

        let mut results = Vec::new();
        let mut failed: Vec<FailureRecord> = Vec::new();

        // outcomes arrive in completion order, not submission order
        while let Some((unit, submitted, joined)) = in_flight.next().await {
            let elapsed = submitted.elapsed();
            info!(">> {} completed in {:.2} (s)", unit, elapsed.as_secs_f64());

            let outcome = joined.unwrap_or_else(|e| Err(anyhow!("test task panicked: {e}")));
            match outcome {
                Ok(result) if result.status.is_success() => results.push(result),
                Ok(result) => {
                    let message = result
                        .message
                        .clone()
                        .unwrap_or_else(|| "unsuccessful result".to_string());
                    error!("{} failed: {}", unit, message);
                    failed.push(FailureRecord {
                        unit,
                        error: message,
                    });
                    results.push(result);
                }
                Err(e) => {
                    let message = format!("{e:#}");
                    error!("{} failed with exception: {}", unit, message);
                    failed.push(FailureRecord {
                        unit,
                        error: message.clone(),
                    });
                    results.push(TestResult::error(unit, message));
                }
            }
        }

        let reruns = failed.len();
        if !failed.is_empty() {
            info!("Number of failed tests: {}. Going to rerun!", failed.len());
            for record in &failed {
                info!("Rerunning test: {}", record.unit);
                self.rerun(runner.as_ref(), record).await?;
            }
            warn!(
                "{}",
                annotate::warning(format!(
                    "Number of failed tests: {}. All tests passed in rerun!",
                    failed.len()
                ))
            );
        }

        Ok(RunSummary::new(started_at, results, reruns))
    }

    /// Re-execute one failed unit sequentially; any failure aborts the batch
    async fn rerun(&self, runner: &dyn UnitRunner, record: &FailureRecord) -> Result<()> {
        let rerun_error = match runner.run_unit(record.unit).await {
            Ok(result) if result.status.is_success() => return Ok(()),
            Ok(result) => result
                .message
                .unwrap_or_else(|| "unsuccessful result".to_string()),
            Err(e) => format!("{e:#}"),
        };

        error!(
            "Test {} failed again with exception: {}",
            record.unit, rerun_error
        );
        error!("Original exception: {}", record.error);
        bail!(
            "Rerun test failed: {} failed with exception: {} (first attempt: {})",
            record.unit,
            rerun_error,
            record.error
        );
    }
}

impl Default for ParallelRunner {
    fn default() -> Self {
        Self::new(Self::default_concurrency())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::models::{BrowserKind, TestCase, TestStatus};
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    /// Scripted runner: fails chosen units on the first attempt, a subset
    /// on every attempt, and errors (instead of failing) where requested.
    #[derive(Default)]
    struct ScriptedRunner {
        fail_once: HashSet<TestUnit>,
        fail_always: HashSet<TestUnit>,
        error_once: HashSet<TestUnit>,
        attempts: Mutex<HashMap<TestUnit, u32>>,
    }

    impl ScriptedRunner {
        fn passing() -> Self {
            Self::default()
        }

        fn failing_once(units: impl IntoIterator<Item = TestUnit>) -> Self {
            Self {
                fail_once: units.into_iter().collect(),
                ..Self::default()
            }
        }

        fn failing_always(units: impl IntoIterator<Item = TestUnit>) -> Self {
            Self {
                fail_always: units.into_iter().collect(),
                ..Self::default()
            }
        }

        fn erroring_once(units: impl IntoIterator<Item = TestUnit>) -> Self {
            Self {
                error_once: units.into_iter().collect(),
                ..Self::default()
            }
        }

        fn attempts_for(&self, unit: TestUnit) -> u32 {
            self.attempts
                .lock()
                .unwrap()
                .get(&unit)
                .copied()
                .unwrap_or(0)
        }

        fn total_attempts(&self) -> u32 {
            self.attempts.lock().unwrap().values().sum()
        }

        fn rerun_attempts(&self) -> u32 {
            self.attempts
                .lock()
                .unwrap()
                .values()
                .map(|&n| n.saturating_sub(1))
                .sum()
        }
    }

    #[async_trait]
    impl UnitRunner for ScriptedRunner {
        async fn run_unit(&self, unit: TestUnit) -> Result<TestResult> {
            let attempt = {
                let mut attempts = self.attempts.lock().unwrap();
                let entry = attempts.entry(unit).or_insert(0);
                *entry += 1;
                *entry
            };

            if attempt == 1 && self.error_once.contains(&unit) {
                return Err(anyhow!("scripted session error"));
            }
            if self.fail_always.contains(&unit)
                || (attempt == 1 && self.fail_once.contains(&unit))
            {
                return Ok(TestResult::fail(unit, 1, "scripted failure"));
            }
            Ok(TestResult::pass(unit, 1))
        }
    }

    fn unit(browser: BrowserKind, case: TestCase) -> TestUnit {
        TestUnit::new(browser, case)
    }

    #[tokio::test]
    async fn all_pass_runs_each_unit_once_with_no_reruns() {
        let runner = Arc::new(ScriptedRunner::passing());
        let plan = SuitePlan::full();

        let summary = ParallelRunner::new(4)
            .run(Arc::clone(&runner) as Arc<dyn UnitRunner>, &plan)
            .await
            .unwrap();

        assert_eq!(summary.total, 19);
        assert_eq!(summary.passed, 19);
        assert_eq!(summary.reruns, 0);
        assert_eq!(runner.total_attempts(), 19);
    }

    #[tokio::test]
    async fn empty_plan_is_a_noop() {
        let runner = Arc::new(ScriptedRunner::passing());
        let plan = SuitePlan::new(Vec::new());

        let summary = ParallelRunner::new(4)
            .run(Arc::clone(&runner) as Arc<dyn UnitRunner>, &plan)
            .await
            .unwrap();

        assert_eq!(summary.total, 0);
        assert_eq!(summary.reruns, 0);
        assert_eq!(runner.total_attempts(), 0);
    }

    #[tokio::test]
    async fn single_failure_recovers_on_rerun() {
        let flaky = unit(BrowserKind::Chrome, TestCase::PlayVideo);
        let runner = Arc::new(ScriptedRunner::failing_once([flaky]));
        let plan = SuitePlan::full();

        let summary = ParallelRunner::new(4)
            .run(Arc::clone(&runner) as Arc<dyn UnitRunner>, &plan)
            .await
            .unwrap();

        assert_eq!(summary.total, 19);
        assert_eq!(summary.passed, 18);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.reruns, 1);
        assert_eq!(runner.attempts_for(flaky), 2);
        assert_eq!(runner.rerun_attempts(), 1);
    }

    #[tokio::test]
    async fn rerun_failure_aborts_before_remaining_reruns() {
        let broken = [
            unit(BrowserKind::Edge, TestCase::PageTitle),
            unit(BrowserKind::Firefox, TestCase::DownloadFile),
        ];
        let runner = Arc::new(ScriptedRunner::failing_always(broken));
        let plan = SuitePlan::full();

        let err = ParallelRunner::new(4)
            .run(Arc::clone(&runner) as Arc<dyn UnitRunner>, &plan)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Rerun test failed"));
        assert!(err.to_string().contains("scripted failure"));
        // fail-fast: only the first queued rerun ever ran
        assert_eq!(runner.rerun_attempts(), 1);
    }

    #[tokio::test]
    async fn session_error_counts_as_failed_and_is_rerun() {
        let broken = unit(BrowserKind::Firefox, TestCase::MaximizeWindow);
        let runner = Arc::new(ScriptedRunner::erroring_once([broken]));
        let plan = SuitePlan::new(vec![BrowserKind::Firefox]);

        let summary = ParallelRunner::new(4)
            .run(Arc::clone(&runner) as Arc<dyn UnitRunner>, &plan)
            .await
            .unwrap();

        assert_eq!(summary.total, 7);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.reruns, 1);
        assert_eq!(runner.attempts_for(broken), 2);
        let errored = summary
            .results
            .iter()
            .find(|r| r.unit == broken)
            .unwrap();
        assert_eq!(errored.status, TestStatus::Error);
    }

    #[tokio::test]
    async fn hardened_plan_accounting_is_exact() {
        let runner = Arc::new(ScriptedRunner::passing());
        let plan = SuitePlan::full().hardened();

        let summary = ParallelRunner::new(8)
            .run(Arc::clone(&runner) as Arc<dyn UnitRunner>, &plan)
            .await
            .unwrap();

        assert_eq!(summary.total, 171);
        assert_eq!(summary.passed, 171);
        assert_eq!(runner.total_attempts(), 171);
    }
}

//! grid-e2e - Parallel end-to-end tests for a remote Selenium Grid
//!
//! A CLI tool that fans browser scenarios out across a Selenium Grid,
//! collects per-unit timing, and retries first-pass failures once as a
//! group before giving up.
//!
//! ## Features
//!
//! - 7 browser scenarios covering navigation, media playback and downloads
//! - Chrome, Edge and Firefox suites with per-browser capabilities
//! - Bounded parallel execution with completion-order accounting
//! - Single bulk rerun pass for first-pass failures (fail-fast on a
//!   second failure)
//! - CI-scannable `::warning::`/`::error::` annotation lines
//!
//! ## Usage
//!
//! ```bash
//! # Run the full plan against the grid from SELENIUM_GRID_* variables
//! grid-e2e run
//!
//! # Run a single suite, headless, with more workers
//! grid-e2e run --browser chrome --headless --concurrent 8
//!
//! # Stress the rerun path
//! grid-e2e run --hardening
//!
//! # List scenarios / probe the grid
//! grid-e2e list --detailed
//! grid-e2e check
//! ```

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod config;
mod executor;
mod grid;
mod models;
mod output;
mod session;
mod tests;
mod utils;

use cli::Args;
use config::SuiteConfig;
use executor::{GridUnitRunner, ParallelRunner};
use grid::GridClient;
use models::{BrowserKind, SuitePlan, TestCase};
use output::{OutputFormat, ResultFormatter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    match args.command {
        cli::Command::Run(run_args) => {
            run_suite(run_args).await?;
        }
        cli::Command::List(list_args) => {
            list_scenarios(list_args);
        }
        cli::Command::Check => {
            check_grid().await?;
        }
        cli::Command::Env => {
            config::env::print_env_help();
        }
    }

    Ok(())
}

async fn run_suite(args: cli::RunArgs) -> Result<()> {
    let mut config = SuiteConfig::from_env();
    if args.headless {
        config.headless = true;
    }
    if args.hardening {
        config.hardening = true;
    }
    if let Some(secs) = args.timeout {
        config = config.with_wait_timeout(secs);
    }

    let browsers = if args.browser.is_empty() {
        BrowserKind::all()
    } else {
        args.browser
            .iter()
            .map(|name| {
                BrowserKind::from_str(name)
                    .ok_or_else(|| anyhow::anyhow!("Unknown browser: {name}"))
            })
            .collect::<Result<Vec<_>>>()?
    };

    let mut plan = SuitePlan::new(browsers);
    if config.hardening {
        plan = plan.hardened();
    }

    info!(
        "Running {} suites ({} units) against {}",
        plan.browsers().len(),
        plan.units().len(),
        config.grid.base_url()
    );

    let concurrency = args
        .concurrent
        .unwrap_or_else(ParallelRunner::default_concurrency);
    let config = Arc::new(config);
    let unit_runner = Arc::new(GridUnitRunner::new(Arc::clone(&config))?);
    let runner = ParallelRunner::new(concurrency);

    let summary = runner.run(unit_runner, &plan).await?;

    let formatter =
        ResultFormatter::new(OutputFormat::from_str(&args.format).unwrap_or(OutputFormat::Table));
    println!("{}", formatter.format_summary(&summary));

    Ok(())
}

fn list_scenarios(args: cli::ListArgs) {
    println!("\nBrowser Scenarios (7 total)\n");
    println!("──────────────────────────────────────────────────");

    for case in TestCase::for_browser(BrowserKind::Firefox) {
        if args.detailed {
            let suites = if case == TestCase::MaximizeWindow {
                "Firefox only"
            } else {
                "all suites"
            };
            println!(
                "  {:2}. {:18} [{}] ({})",
                case.number(),
                case.name(),
                case.method_name(),
                suites
            );
        } else {
            println!("  {:2}. {}", case.number(), case.name());
        }
    }

    println!("──────────────────────────────────────────────────\n");

    if args.browsers {
        println!("Browser Suites:\n");
        for browser in BrowserKind::all() {
            println!(
                "  - {:10} ({} scenarios)",
                browser.name(),
                TestCase::for_browser(browser).len()
            );
        }
        println!();
    }
}

async fn check_grid() -> Result<()> {
    let config = SuiteConfig::from_env();
    let client = GridClient::new(&config.grid)?;

    info!("Checking grid at {}", config.grid.base_url());
    let status = client.status().await?;

    let ready = if status.ready { "✓ ready" } else { "✗ not ready" };
    println!("\nGrid: {}", config.grid.base_url());
    println!("Status: {ready}");
    println!("Nodes: {}", status.node_count());
    if let Some(message) = &status.message {
        println!("Message: {message}");
    }
    println!();

    if !status.ready {
        std::process::exit(1);
    }

    Ok(())
}

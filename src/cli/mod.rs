//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Parallel end-to-end test harness for a remote Selenium Grid
#[derive(Parser, Debug)]
#[command(name = "grid-e2e")]
#[command(version = "0.1.0")]
#[command(about = "Drive a remote Selenium Grid across Chrome, Edge and Firefox")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the browser suite plan against the grid
    Run(RunArgs),

    /// List scenarios and browser suites
    List(ListArgs),

    /// Check grid readiness
    Check,

    /// Show supported environment variables
    Env,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Browser suites to run (chrome, edge, firefox); defaults to all three
    #[arg(short, long)]
    pub browser: Vec<String>,

    /// Number of concurrent units (defaults to the number of CPUs)
    #[arg(short, long)]
    pub concurrent: Option<usize>,

    /// Repeat the suite list ninefold to stress the rerun path
    #[arg(long)]
    pub hardening: bool,

    /// Run browsers headless
    #[arg(long)]
    pub headless: bool,

    /// Per-wait timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format (table, json, json-pretty)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show detailed scenario information
    #[arg(short, long)]
    pub detailed: bool,

    /// Show browser suites
    #[arg(short, long)]
    pub browsers: bool,
}

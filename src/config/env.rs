//! Environment variable configuration
//!
//! Reads the grid connection and suite behavior settings from the
//! environment once at process start.

#![allow(dead_code)]

use std::env;

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Grid URL scheme from SELENIUM_GRID_PROTOCOL
    pub protocol: Option<String>,
    /// Grid host from SELENIUM_GRID_HOST
    pub host: Option<String>,
    /// Grid port from SELENIUM_GRID_PORT
    pub port: Option<u16>,
    /// Basic-auth user from SELENIUM_GRID_USERNAME
    pub username: Option<String>,
    /// Basic-auth password from SELENIUM_GRID_PASSWORD
    pub password: Option<String>,
    /// Headless flag from SELENIUM_GRID_TEST_HEADLESS
    pub headless: Option<bool>,
    /// Managed-downloads flag from SELENIUM_ENABLE_MANAGED_DOWNLOADS
    pub managed_downloads: Option<bool>,
    /// Per-wait timeout in seconds from WEB_DRIVER_WAIT_TIMEOUT
    pub wait_timeout: Option<u64>,
    /// Workload multiplier flag from TEST_PARALLEL_HARDENING
    pub hardening: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            protocol: get_env("SELENIUM_GRID_PROTOCOL"),
            host: get_env("SELENIUM_GRID_HOST"),
            port: get_env_parse("SELENIUM_GRID_PORT"),
            username: get_env("SELENIUM_GRID_USERNAME").filter(|s| !s.is_empty()),
            password: get_env("SELENIUM_GRID_PASSWORD").filter(|s| !s.is_empty()),
            headless: get_env_bool("SELENIUM_GRID_TEST_HEADLESS"),
            managed_downloads: get_env_bool("SELENIUM_ENABLE_MANAGED_DOWNLOADS"),
            wait_timeout: get_env_parse("WEB_DRIVER_WAIT_TIMEOUT"),
            hardening: get_env_bool("TEST_PARALLEL_HARDENING"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.protocol.is_some()
            || self.host.is_some()
            || self.port.is_some()
            || self.username.is_some()
            || self.password.is_some()
            || self.headless.is_some()
            || self.managed_downloads.is_some()
            || self.wait_timeout.is_some()
            || self.hardening.is_some()
    }
}

/// Get environment variable
fn get_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Print supported environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  SELENIUM_GRID_PROTOCOL             Grid URL scheme (default: http)");
    println!("  SELENIUM_GRID_HOST                 Grid host (default: localhost)");
    println!("  SELENIUM_GRID_PORT                 Grid port (default: 4444)");
    println!("  SELENIUM_GRID_USERNAME             Basic-auth user (optional)");
    println!("  SELENIUM_GRID_PASSWORD             Basic-auth password (optional)");
    println!("  SELENIUM_GRID_TEST_HEADLESS        Run browsers headless (true/false)");
    println!("  SELENIUM_ENABLE_MANAGED_DOWNLOADS  Grid-managed downloads (true/false)");
    println!("  WEB_DRIVER_WAIT_TIMEOUT            Per-wait timeout in seconds (default: 60)");
    println!("  TEST_PARALLEL_HARDENING            Ninefold workload multiplier (true/false)");
    println!();
    println!("Example:");
    println!("  export SELENIUM_GRID_HOST=grid.internal");
    println!("  export SELENIUM_GRID_TEST_HEADLESS=true");
    println!("  grid-e2e run");
}

/// Builder for setting environment variables (useful for testing)
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

impl EnvBuilder {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.push((key.into(), value.into()));
        self
    }

    /// Apply environment variables
    pub fn apply(self) {
        for (key, value) in self.vars {
            env::set_var(key, value);
        }
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        self.apply();

        EnvGuard { previous }
    }
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores environment variables on drop
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

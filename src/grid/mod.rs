//! Selenium Grid HTTP client
//!
//! Talks to the grid's own HTTP surface: the `/status` readiness endpoint
//! and the managed-downloads file listing for a session.

#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::GridConfig;

/// Grid client errors
#[derive(Error, Debug)]
pub enum GridError {
    #[error("grid request failed: {0}")]
    RequestFailed(String),

    #[error("grid responded with status {0}")]
    BadStatus(u16),

    #[error("unexpected grid response: {0}")]
    UnexpectedResponse(String),
}

/// Envelope every grid response is wrapped in
#[derive(Debug, Deserialize)]
struct ValueEnvelope<T> {
    value: T,
}

/// Grid readiness as reported by `/status`
#[derive(Clone, Debug, Deserialize)]
pub struct GridStatus {
    pub ready: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub nodes: Vec<serde_json::Value>,
}

impl GridStatus {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Files the grid holds for a session when managed downloads are enabled
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DownloadedFiles {
    #[serde(default)]
    pub names: Vec<String>,
}

impl DownloadedFiles {
    /// Whether any downloaded file matches the given file name
    pub fn contains(&self, file_name: &str) -> bool {
        self.names.iter().any(|n| n.ends_with(file_name))
    }
}

/// HTTP client for the grid's own endpoints
#[derive(Clone)]
pub struct GridClient {
    client: Client,
    config: GridConfig,
}

impl GridClient {
    pub fn new(config: &GridConfig) -> Result<Self> {
        Self::with_timeout(config, 30)
    }

    pub fn with_timeout(config: &GridConfig, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .danger_accept_invalid_certs(true)
            .build()
            .context("Failed to create grid HTTP client")?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url(), path);
        debug!("GET {}", url);
        let mut builder = self.client.get(url);
        if let (Some(user), Some(pass)) = (&self.config.username, &self.config.password) {
            builder = builder.basic_auth(user, Some(pass));
        }
        builder
    }

    /// Query grid readiness via `/status`
    pub async fn status(&self) -> Result<GridStatus> {
        let response = self
            .get("/status")
            .send()
            .await
            .map_err(|e| GridError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GridError::BadStatus(status.as_u16()).into());
        }

        let envelope: ValueEnvelope<GridStatus> = response
            .json()
            .await
            .map_err(|e| GridError::UnexpectedResponse(e.to_string()))?;

        Ok(envelope.value)
    }

    /// List the files the grid has downloaded for a session
    pub async fn downloadable_files(&self, session_id: &str) -> Result<DownloadedFiles> {
        let response = self
            .get(&format!("/session/{session_id}/se/files"))
            .send()
            .await
            .map_err(|e| GridError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GridError::BadStatus(status.as_u16()).into());
        }

        let envelope: ValueEnvelope<DownloadedFiles> = response
            .json()
            .await
            .map_err(|e| GridError::UnexpectedResponse(e.to_string()))?;

        Ok(envelope.value)
    }
}

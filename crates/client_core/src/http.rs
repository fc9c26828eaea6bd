//! Read-only HTTP capability used by the robot list loader.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::error::ApiError;
use tracing::debug;
use url::Url;

use crate::error::LoadError;

#[async_trait]
pub trait HttpGet: Send + Sync {
    /// Issues one GET for `path` and decodes the body as JSON.
    async fn get_json(&self, path: &str) -> Result<Value, LoadError>;
}

pub struct ReqwestHttpGet {
    http: Client,
    base_url: Url,
}

impl ReqwestHttpGet {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid server url: {base_url}"))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, LoadError> {
        self.base_url.join(path).map_err(|e| LoadError::Endpoint {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl HttpGet for ReqwestHttpGet {
    async fn get_json(&self, path: &str) -> Result<Value, LoadError> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Transport {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.json::<ApiError>().await {
                Ok(body) => body.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            };
            return Err(LoadError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                detail,
            });
        }

        response.json::<Value>().await.map_err(|e| LoadError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

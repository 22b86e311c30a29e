//! Read-only client for the Polymarket CLOB REST API.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value as JsonValue;

use crate::core::backend::{MarketBackend, MarketsPayload};
use crate::core::error::BackendError;
use crate::infra::config::BackendConfig;
use crate::infra::http::headers::{request_id, tag_request};
use crate::infra::logging::{count, log_metric};
use crate::infra::runtime::limits::make_http_client_with;

#[derive(Clone)]
pub struct ClobRemote {
    base: String,
    http: Client,
}

impl ClobRemote {
    pub fn new(base: impl Into<String>) -> Result<Self, BackendError> {
        Self::from_config(&BackendConfig {
            host: base.into(),
            ..BackendConfig::default()
        })
    }

    pub fn from_config(cfg: &BackendConfig) -> Result<Self, BackendError> {
        let http = make_http_client_with(cfg).map_err(|e| BackendError::Http {
            endpoint: cfg.host.clone(),
            message: e.to_string(),
        })?;
        Ok(Self {
            base: cfg.host.clone(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub async fn health(&self) -> bool {
        let Ok(url) = self.url(&[]) else {
            return false;
        };
        let builder = tag_request(self.http.get(url), &request_id("health"));
        match builder.send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    fn url(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let invalid = |message: String| BackendError::Http {
            endpoint: self.base.clone(),
            message,
        };
        let mut url = Url::parse(&self.base).map_err(|e| invalid(e.to_string()))?;
        if segments.is_empty() {
            return Ok(url);
        }
        url.path_segments_mut()
            .map_err(|_| invalid("base url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET a path and return the raw body of a successful response.
    async fn fetch(&self, op: &'static str, segments: &[&str]) -> Result<String, BackendError> {
        let url = self.url(segments)?;
        let endpoint = url.to_string();
        let req_id = request_id(op);
        tracing::debug!(endpoint = %endpoint, request_id = %req_id, op, "clob request");

        let start = Instant::now();
        let builder = tag_request(self.http.get(url), &req_id);
        let res = send(builder, &endpoint).await;

        log_metric(op, "clob_latency_ms", start.elapsed().as_millis() as f64);
        if let Err(e) = &res {
            count(op, "clob_error_total");
            tracing::warn!(endpoint = %endpoint, error = %e, op, "clob request failed");
        }
        res
    }
}

async fn send(builder: reqwest::RequestBuilder, endpoint: &str) -> Result<String, BackendError> {
    let http_error = |e: reqwest::Error| BackendError::Http {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    };
    let resp = builder.send().await.map_err(http_error)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(BackendError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }
    resp.text().await.map_err(http_error)
}

#[async_trait]
impl MarketBackend for ClobRemote {
    async fn get_market(&self, market_id: &str) -> Result<JsonValue, BackendError> {
        let body = self.fetch("get_market", &["markets", market_id]).await?;
        serde_json::from_str(&body).map_err(|e| BackendError::Decode {
            endpoint: format!("markets/{market_id}"),
            message: e.to_string(),
        })
    }

    async fn get_markets(&self) -> Result<MarketsPayload, BackendError> {
        let body = self.fetch("get_markets", &["markets"]).await?;
        // Undecodable bodies are handed on as-is; the listing step reports them.
        Ok(match serde_json::from_str::<JsonValue>(&body) {
            Ok(v) => MarketsPayload::from(v),
            Err(_) => MarketsPayload::Encoded(body),
        })
    }
}

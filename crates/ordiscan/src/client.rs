// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed Ordiscan REST client
//!
//! Every endpoint follows the same request shape: bearer-token auth, a
//! per-request timeout, and a `{ "data": ... }` response envelope. A 404
//! maps to `Ok(None)`; every other non-success status maps to a typed error.

use std::time::Duration;

use api_client::{ApiError, HealthStatus, InscriptionApi, InscriptionInfo};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared_types::InscriptionId;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use url::Url;

use crate::types::{Brc20Token, CollectionEntry, InscriptionTrait, RuneBalance, RuneEntry};

/// Hosted Ordiscan API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.ordiscan.com";
/// Inscription known to exist, fetched by the health check.
const HEALTH_PROBE_INSCRIPTION: &str = "96587318";
/// Seconds to suggest waiting after a 429.
const RATE_LIMIT_RETRY_AFTER_SECONDS: u64 = 60;

/// Configuration for the Ordiscan API client
#[derive(Debug, Clone)]
pub struct OrdiscanConfig {
    /// Base URL for the Ordiscan API
    pub base_url: String,
    /// API key sent as a bearer token; may be empty, in which case every
    /// request fails authentication at the provider
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Health check timeout in seconds
    pub health_check_timeout_seconds: u64,
}

impl Default for OrdiscanConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_seconds: 30,
            health_check_timeout_seconds: 5,
        }
    }
}

/// Ordiscan API client implementation
#[derive(Debug)]
pub struct OrdiscanClient {
    client: Client,
    base_url: Url,
    config: OrdiscanConfig,
}

/// Errors specific to the Ordiscan API client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum OrdiscanError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body failed to decode
    #[error("response decoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Timeout error
    #[error("Request timeout after {seconds} seconds")]
    Timeout { seconds: u64 },
}

impl From<OrdiscanError> for ApiError {
    fn from(value: OrdiscanError) -> Self {
        match value {
            OrdiscanError::Http(error) => ApiError::Http {
                message: error.to_string(),
            },
            OrdiscanError::Json(error) => ApiError::InvalidResponse {
                message: error.to_string(),
            },
            OrdiscanError::Api { status, message } => ApiError::Custom {
                error: anyhow::Error::msg(format!("{status}: {message}")),
            },
            OrdiscanError::RateLimited => ApiError::RateLimitExceeded {
                retry_after_seconds: RATE_LIMIT_RETRY_AFTER_SECONDS,
            },
            OrdiscanError::Unauthorized => ApiError::Authentication {
                message: value.to_string(),
            },
            OrdiscanError::Config(message) => ApiError::Configuration { message },
            OrdiscanError::Timeout { seconds } => ApiError::Timeout {
                timeout_seconds: seconds,
            },
        }
    }
}

/// Ordiscan wraps every successful payload in a `data` envelope
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

impl OrdiscanClient {
    /// Create a new Ordiscan API client
    ///
    /// An empty API key is accepted: startup proceeds and requests fail
    /// authentication at the provider instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be created
    pub fn new(config: OrdiscanConfig) -> Result<Self, OrdiscanError> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| OrdiscanError::Config(format!("invalid base URL: {e}")))?;

        if config.api_key.trim().is_empty() {
            warn!("Ordiscan API key is empty, requests will fail authentication");
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("ordinals-showcase/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(OrdiscanError::Http)?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Fetch a single inscription's raw payload
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    pub async fn inscription_info(
        &self,
        id: &InscriptionId,
    ) -> Result<Option<InscriptionInfo>, OrdiscanError> {
        self.fetch(&format!("inscription/{id}"), &[]).await
    }

    /// List inscriptions, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    pub async fn inscription_list(
        &self,
        page: Option<u32>,
    ) -> Result<Option<Vec<InscriptionInfo>>, OrdiscanError> {
        self.fetch("inscriptions", &page_query(page)).await
    }

    /// Fetch the traits of an inscription
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    pub async fn inscription_traits(
        &self,
        id: &InscriptionId,
    ) -> Result<Option<Vec<InscriptionTrait>>, OrdiscanError> {
        self.fetch(&format!("inscription/{id}/traits"), &[]).await
    }

    /// List runes
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    pub async fn rune_list(
        &self,
        page: Option<u32>,
    ) -> Result<Option<Vec<RuneEntry>>, OrdiscanError> {
        self.fetch("runes", &page_query(page)).await
    }

    /// List BRC-20 tokens
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    pub async fn brc20_list(
        &self,
        page: Option<u32>,
    ) -> Result<Option<Vec<Brc20Token>>, OrdiscanError> {
        self.fetch("brc20", &page_query(page)).await
    }

    /// Fetch a single BRC-20 token by ticker
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    pub async fn brc20_token_info(&self, tick: &str) -> Result<Option<Brc20Token>, OrdiscanError> {
        self.fetch(&format!("brc20/{tick}"), &[]).await
    }

    /// List curated collections
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    pub async fn collection_list(
        &self,
        page: Option<u32>,
    ) -> Result<Option<Vec<CollectionEntry>>, OrdiscanError> {
        self.fetch("collections", &page_query(page)).await
    }

    /// List the inscriptions held by an address
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    pub async fn address_inscriptions(
        &self,
        address: &str,
        page: Option<u32>,
    ) -> Result<Option<Vec<InscriptionInfo>>, OrdiscanError> {
        self.fetch(&format!("address/{address}/inscriptions"), &page_query(page))
            .await
    }

    /// List the rune balances held by an address
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    pub async fn address_rune_balances(
        &self,
        address: &str,
    ) -> Result<Option<Vec<RuneBalance>>, OrdiscanError> {
        self.fetch(&format!("address/{address}/runes"), &[]).await
    }

    /// Issue a GET against `/v1/{path}` and decode the data envelope
    ///
    /// The timeout budget covers both the round trip and body decoding.
    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, OrdiscanError> {
        let url = self
            .base_url
            .join(&format!("/v1/{path}"))
            .map_err(|e| OrdiscanError::Config(format!("invalid request path {path:?}: {e}")))?;

        debug!(%url, "fetching from Ordiscan");

        let request = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(&self.config.api_key)
            .header("accept", "application/json");

        let budget = Duration::from_secs(self.config.timeout_seconds);
        let response = timeout(budget, async {
            let response = request.send().await.map_err(OrdiscanError::Http)?;

            match response.status() {
                StatusCode::OK => {
                    let body = response.text().await.map_err(OrdiscanError::Http)?;
                    let envelope: Envelope<T> =
                        serde_json::from_str(&body).map_err(OrdiscanError::Json)?;
                    Ok(Some(envelope.data))
                }
                StatusCode::NOT_FOUND => {
                    debug!(path, "resource not found on Ordiscan");
                    Ok(None)
                }
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Err(OrdiscanError::Unauthorized)
                }
                StatusCode::TOO_MANY_REQUESTS => Err(OrdiscanError::RateLimited),
                status => {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    warn!("Ordiscan API error: {} - {}", status.as_u16(), error_text);
                    Err(OrdiscanError::Api {
                        status: status.as_u16(),
                        message: error_text,
                    })
                }
            }
        })
        .await
        .map_err(|_| OrdiscanError::Timeout {
            seconds: self.config.timeout_seconds,
        })??;

        Ok(response)
    }
}

impl InscriptionApi for OrdiscanClient {
    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        let url = self
            .base_url
            .join(&format!("/v1/inscription/{HEALTH_PROBE_INSCRIPTION}"))
            .map_err(|e| OrdiscanError::Config(format!("invalid health check URL: {e}")))?;

        debug!(%url, "performing health check on Ordiscan API");

        let request = self
            .client
            .get(url)
            .bearer_auth(&self.config.api_key)
            .header("accept", "application/json");

        let start_time = std::time::Instant::now();
        let response = timeout(
            Duration::from_secs(self.config.health_check_timeout_seconds),
            request.send(),
        )
        .await
        .map_err(|_| OrdiscanError::Timeout {
            seconds: self.config.health_check_timeout_seconds,
        })?
        .map_err(OrdiscanError::Http)?;

        let response_time = start_time.elapsed();

        match response.status() {
            StatusCode::OK => {
                info!("Ordiscan API health check passed in {:?}", response_time);
                Ok(HealthStatus::Up)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!("Ordiscan API health check failed: unauthorized");
                Ok(HealthStatus::Down {
                    reason: "Authentication failed".to_string(),
                })
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Ordiscan API health check failed: rate limited");
                Ok(HealthStatus::Degraded {
                    reason: "Rate limited".to_string(),
                })
            }
            status => {
                warn!("Ordiscan API health check failed with status: {}", status);
                Ok(HealthStatus::Degraded {
                    reason: format!("API returned status {}", status.as_u16()),
                })
            }
        }
    }

    async fn get_inscription(
        &self,
        id: &InscriptionId,
    ) -> Result<Option<InscriptionInfo>, ApiError> {
        self.inscription_info(id).await.map_err(Into::into)
    }

    fn name(&self) -> &'static str {
        "ordiscan"
    }
}

/// Build the query pairs for a paginated endpoint
///
/// Pagination is forwarded untouched; `None` sends no `page` parameter.
fn page_query(page: Option<u32>) -> Vec<(&'static str, String)> {
    page.map(|p| ("page", p.to_string())).into_iter().collect()
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Generic API client traits and utilities for inscription-data providers
//!
//! This crate provides the common abstractions shared by provider clients in
//! the showcase workspace.
//!
//! # Core Abstractions
//!
//! - **`InscriptionApi` Trait**: Common interface for inscription-data providers with async support
//! - **Health Check System**: Standardized health status reporting across all clients
//! - **Error Handling**: Comprehensive `ApiError` types for different failure scenarios
//! - **Data Types**: The raw `InscriptionInfo` payload shape shared by provider clients
//!
//! # Key Features
//!
//! - **Async-First Design**: All operations return `impl Future` for efficient async execution
//! - **Health Monitoring**: Built-in health check with `Up`, `Degraded`, and `Down` statuses
//! - **Error Classification**: Detailed error types for authentication, rate limiting, network issues
//! - **Type Safety**: Strong typing prevents runtime errors from invalid identifiers

use shared_types::InscriptionId;
use thiserror::Error;

pub mod health;
pub mod types;

pub use health::*;
pub use types::*;

/// Generic trait for inscription-data provider clients
///
/// This trait provides a common interface for hosted inscription-data
/// services, enabling consistent error handling, health checks, and
/// inscription retrieval.
pub trait InscriptionApi: Send + Sync {
    /// Check the health of this API client
    ///
    /// # Errors
    ///
    /// Returns an error if the health check fails
    fn health_check(&self) -> impl Future<Output = Result<HealthStatus, ApiError>> + Send;

    /// Get the raw payload for a single inscription
    ///
    /// # Arguments
    ///
    /// * `id` - The inscription identifier to retrieve
    ///
    /// # Returns
    ///
    /// * `Ok(Some(info))` if the inscription exists and was retrieved
    /// * `Ok(None)` if the provider has no record of the inscription
    /// * `Err(error)` if there was an error retrieving the data
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, rate limits are exceeded,
    /// or there are network/authentication issues
    fn get_inscription(
        &self,
        id: &InscriptionId,
    ) -> impl Future<Output = Result<Option<InscriptionInfo>, ApiError>> + Send;

    /// Get the name/identifier of this API client
    fn name(&self) -> &'static str;
}

/// Common errors that can occur when working with provider clients
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_seconds} seconds")]
    RateLimitExceeded { retry_after_seconds: u64 },

    /// Authentication failed
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Invalid response format
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },

    /// Service unavailable
    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Network timeout
    #[error("Request timeout after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },

    /// Client independent error
    #[error(transparent)]
    Custom { error: anyhow::Error },
}

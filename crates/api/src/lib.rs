// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Ordinals Showcase API Server Implementation
//!
//! This crate provides the main HTTP server for the ordinals showcase service,
//! built with Axum and designed for production use with comprehensive
//! configuration, middleware, and graceful shutdown capabilities.
//!
//! # Module Structure
//!
//! - [`config`]: Server configuration and environment management with hierarchical loading
//! - [`error`]: Error types and HTTP response handling with proper status codes
//! - [`state`]: Shared application state management with cancellation token support
//! - [`server`]: Main server implementation, lifecycle, and coordinated shutdown
//! - [`routes`]: Route configuration and HTTP request handlers
//! - [`metrics`]: Prometheus metrics and the metrics export handler
//! - [`openapi`]: `OpenAPI` specification and Swagger UI endpoints for API documentation
//!
//! # Key Features
//!
//! - **Showcase Orchestration**: Fetches the featured inscriptions concurrently
//!   and renders per-item presentation cards with isolated failure handling
//! - **Ordiscan Proxy**: Forwards inscription, rune, BRC-20, collection, and
//!   address lookups to the Ordiscan provider through a null-sentinel gateway
//! - **Graceful Shutdown**: Coordinated termination using `CancellationToken` with timeouts
//! - **Health Monitoring**: Aggregated health checks covering the provider client
//! - **Comprehensive Middleware**: Request tracing, CORS, timeouts, and error handling

pub mod config;
pub mod error;
pub mod metrics;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{Environment, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::{Server, ShutdownConfig};
pub use shared_types::InscriptionId;
pub use state::{HealthCheck, ServerState};

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Ordiscan API integration
//!
//! This crate provides the client for the hosted Ordiscan inscription-data
//! service, along with the null-sentinel gateway the rest of the workspace
//! consumes.
//!
//! # Architecture
//!
//! - **Typed Client**: [`client::OrdiscanClient`] - authenticated REST access with
//!   per-request timeouts and status-code error mapping
//! - **Gateway Pattern**: [`gateway::OrdiscanGateway`] - forwards each call,
//!   catches any fault, and converts it to `None` plus a logged diagnostic
//! - **Wire Types**: [`types`] - payload shapes for the provider's endpoints
//!
//! The client surfaces the full error taxonomy; the gateway deliberately
//! collapses it. Callers that need to distinguish "missing" from "failed"
//! use the client directly.

pub mod client;
pub mod gateway;
pub mod types;

pub use client::{OrdiscanClient, OrdiscanConfig, OrdiscanError};
pub use gateway::OrdiscanGateway;
pub use types::*;

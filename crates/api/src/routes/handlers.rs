// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers module
//!
//! This module provides HTTP request handlers for the showcase API server,
//! including health checks, the showcase endpoint, and the Ordiscan proxy
//! endpoints.

use std::time::Instant;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use shared_types::InscriptionId;
use showcase::{CardPresentation, load_showcase, select_card};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::ServerError,
    metrics,
    state::{HealthCheck, ServerState},
};

/// Pagination query parameters for list endpoints
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
pub struct PageQuery {
    /// One-based page number; the provider's first page when omitted
    pub page: Option<u32>,
}

/// Response from the showcase endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowcaseResponse {
    /// Presentation cards for the featured items, in display order
    pub cards: Vec<CardPresentation>,
}

/// Await a gateway call while recording its duration and outcome
async fn timed<T, F>(operation: &str, call: F) -> Option<T>
where
    F: Future<Output = Option<T>>,
{
    let start = Instant::now();
    let result = call.await;
    let outcome = if result.is_some() { "success" } else { "error" };
    metrics::observe_provider_duration(operation, outcome, start.elapsed().as_secs_f64());
    result
}

/// Parse a path segment into a validated inscription identifier
fn parse_inscription_id(raw: &str) -> Result<InscriptionId, ServerError> {
    raw.parse::<InscriptionId>()
        .map_err(|e| ServerError::ValidationError(format!("invalid inscription id: {e}")))
}

/// Health check endpoint handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check endpoint",
    description = "Returns the current health status of the API service including version, environment information, and status of the Ordiscan provider client.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheck),
        (status = 503, description = "Service unavailable", body = String)
    )
)]
pub async fn health_handler(
    State(state): State<ServerState>,
) -> Result<impl IntoResponse, ServerError> {
    let health = state.health_check().await?;
    Ok(Json(health))
}

/// Featured inscriptions showcase
///
/// Fetches the three featured inscriptions concurrently and renders one
/// presentation card per item. A provider failure for one item never affects
/// the others; the failing slot renders an error card instead.
#[utoipa::path(
    get,
    path = "/v1/showcase",
    tag = "showcase",
    summary = "Featured inscriptions showcase",
    description = "Fetches the three featured inscriptions concurrently from Ordiscan and returns one presentation card per item, in display order. Per-item failures render error cards without affecting the other slots.",
    responses(
        (status = 200, description = "Showcase rendered", body = ShowcaseResponse)
    )
)]
pub async fn showcase_handler(State(state): State<ServerState>) -> Json<ShowcaseResponse> {
    metrics::inc_requests("showcase");

    let start = Instant::now();
    let outcome = load_showcase(state.gateway().client()).await;
    metrics::observe_provider_duration("showcase", "success", start.elapsed().as_secs_f64());

    let cards = outcome
        .iter()
        .map(|(item, slot)| {
            let card = select_card(&item, slot);
            metrics::record_slot_outcome(item.key().as_str(), card.state());
            card
        })
        .collect();

    Json(ShowcaseResponse { cards })
}

/// Single inscription lookup
#[utoipa::path(
    get,
    path = "/v1/inscription/{id}",
    tag = "inscriptions",
    summary = "Fetch a single inscription",
    description = "Fetches a single inscription by identifier or inscription number from Ordiscan.",
    params(
        ("id" = String, Path, description = "Inscription identifier or inscription number")
    ),
    responses(
        (status = 200, description = "Inscription found", body = api_client::InscriptionInfo),
        (status = 400, description = "Invalid inscription identifier", body = String),
        (status = 404, description = "Inscription not found", body = String)
    )
)]
pub async fn inscription_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    metrics::inc_requests("inscription");
    let id = parse_inscription_id(&id)?;

    timed("inscription_info", state.gateway().inscription_info(&id))
        .await
        .map(Json)
        .ok_or_else(|| ServerError::NotFound {
            resource: format!("inscription {id}"),
        })
}

/// Inscription trait listing
#[utoipa::path(
    get,
    path = "/v1/inscription/{id}/traits",
    tag = "inscriptions",
    summary = "List an inscription's traits",
    description = "Fetches the trait list for a single inscription from Ordiscan.",
    params(
        ("id" = String, Path, description = "Inscription identifier or inscription number")
    ),
    responses(
        (status = 200, description = "Traits found", body = Vec<ordiscan::InscriptionTrait>),
        (status = 400, description = "Invalid inscription identifier", body = String),
        (status = 404, description = "Inscription not found", body = String)
    )
)]
pub async fn inscription_traits_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    metrics::inc_requests("inscription_traits");
    let id = parse_inscription_id(&id)?;

    timed(
        "inscription_traits",
        state.gateway().inscription_traits(&id),
    )
    .await
    .map(Json)
    .ok_or_else(|| ServerError::NotFound {
        resource: format!("traits for inscription {id}"),
    })
}

/// Paginated inscription listing
#[utoipa::path(
    get,
    path = "/v1/inscriptions",
    tag = "inscriptions",
    summary = "List inscriptions",
    description = "Fetches a page of inscriptions from Ordiscan.",
    params(PageQuery),
    responses(
        (status = 200, description = "Inscription page", body = Vec<api_client::InscriptionInfo>),
        (status = 404, description = "Listing unavailable", body = String)
    )
)]
pub async fn inscription_list_handler(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ServerError> {
    metrics::inc_requests("inscription_list");

    timed(
        "inscription_list",
        state.gateway().inscription_list(query.page),
    )
    .await
    .map(Json)
    .ok_or_else(|| ServerError::NotFound {
        resource: "inscription list".to_string(),
    })
}

/// Paginated rune listing
#[utoipa::path(
    get,
    path = "/v1/runes",
    tag = "runes",
    summary = "List runes",
    description = "Fetches a page of runes from Ordiscan.",
    params(PageQuery),
    responses(
        (status = 200, description = "Rune page", body = Vec<ordiscan::RuneEntry>),
        (status = 404, description = "Listing unavailable", body = String)
    )
)]
pub async fn rune_list_handler(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ServerError> {
    metrics::inc_requests("rune_list");

    timed("rune_list", state.gateway().rune_list(query.page))
        .await
        .map(Json)
        .ok_or_else(|| ServerError::NotFound {
            resource: "rune list".to_string(),
        })
}

/// Paginated BRC-20 token listing
#[utoipa::path(
    get,
    path = "/v1/brc-20",
    tag = "brc-20",
    summary = "List BRC-20 tokens",
    description = "Fetches a page of BRC-20 tokens from Ordiscan.",
    params(PageQuery),
    responses(
        (status = 200, description = "BRC-20 token page", body = Vec<ordiscan::Brc20Token>),
        (status = 404, description = "Listing unavailable", body = String)
    )
)]
pub async fn brc20_list_handler(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ServerError> {
    metrics::inc_requests("brc20_list");

    timed("brc20_list", state.gateway().brc20_list(query.page))
        .await
        .map(Json)
        .ok_or_else(|| ServerError::NotFound {
            resource: "BRC-20 token list".to_string(),
        })
}

/// Single BRC-20 token lookup
#[utoipa::path(
    get,
    path = "/v1/brc-20/{tick}",
    tag = "brc-20",
    summary = "Fetch a BRC-20 token",
    description = "Fetches a single BRC-20 token by ticker from Ordiscan.",
    params(
        ("tick" = String, Path, description = "BRC-20 token ticker")
    ),
    responses(
        (status = 200, description = "Token found", body = ordiscan::Brc20Token),
        (status = 400, description = "Invalid ticker", body = String),
        (status = 404, description = "Token not found", body = String)
    )
)]
pub async fn brc20_token_handler(
    State(state): State<ServerState>,
    Path(tick): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    metrics::inc_requests("brc20_token");
    validate_segment(&tick, "ticker")?;

    timed("brc20_token_info", state.gateway().brc20_token_info(&tick))
        .await
        .map(Json)
        .ok_or_else(|| ServerError::NotFound {
            resource: format!("BRC-20 token {tick}"),
        })
}

/// Paginated collection listing
#[utoipa::path(
    get,
    path = "/v1/collections",
    tag = "collections",
    summary = "List collections",
    description = "Fetches a page of inscription collections from Ordiscan.",
    params(PageQuery),
    responses(
        (status = 200, description = "Collection page", body = Vec<ordiscan::CollectionEntry>),
        (status = 404, description = "Listing unavailable", body = String)
    )
)]
pub async fn collection_list_handler(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ServerError> {
    metrics::inc_requests("collection_list");

    timed("collection_list", state.gateway().collection_list(query.page))
        .await
        .map(Json)
        .ok_or_else(|| ServerError::NotFound {
            resource: "collection list".to_string(),
        })
}

/// Inscriptions owned by an address
#[utoipa::path(
    get,
    path = "/v1/address/{address}/inscriptions",
    tag = "addresses",
    summary = "List an address's inscriptions",
    description = "Fetches a page of inscriptions owned by a Bitcoin address from Ordiscan.",
    params(
        ("address" = String, Path, description = "Bitcoin address"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Inscription page", body = Vec<api_client::InscriptionInfo>),
        (status = 400, description = "Invalid address", body = String),
        (status = 404, description = "Address data unavailable", body = String)
    )
)]
pub async fn address_inscriptions_handler(
    State(state): State<ServerState>,
    Path(address): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ServerError> {
    metrics::inc_requests("address_inscriptions");
    validate_segment(&address, "address")?;

    timed(
        "address_inscriptions",
        state.gateway().address_inscriptions(&address, query.page),
    )
    .await
    .map(Json)
    .ok_or_else(|| ServerError::NotFound {
        resource: format!("inscriptions for address {address}"),
    })
}

/// Rune balances held by an address
#[utoipa::path(
    get,
    path = "/v1/address/{address}/rune-balances",
    tag = "addresses",
    summary = "List an address's rune balances",
    description = "Fetches the rune balances held by a Bitcoin address from Ordiscan.",
    params(
        ("address" = String, Path, description = "Bitcoin address")
    ),
    responses(
        (status = 200, description = "Rune balances", body = Vec<ordiscan::RuneBalance>),
        (status = 400, description = "Invalid address", body = String),
        (status = 404, description = "Address data unavailable", body = String)
    )
)]
pub async fn address_rune_balances_handler(
    State(state): State<ServerState>,
    Path(address): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    metrics::inc_requests("address_rune_balances");
    validate_segment(&address, "address")?;

    timed(
        "address_rune_balances",
        state.gateway().address_rune_balances(&address),
    )
    .await
    .map(Json)
    .ok_or_else(|| ServerError::NotFound {
        resource: format!("rune balances for address {address}"),
    })
}

/// Reject empty or non-alphanumeric path segments before hitting the provider
///
/// Segments are interpolated into the provider URL; anything beyond ASCII
/// alphanumerics (such as `..`) could rewrite the request path.
fn validate_segment(value: &str, what: &str) -> Result<(), ServerError> {
    if value.trim().is_empty() {
        return Err(ServerError::ValidationError(format!(
            "{what} cannot be empty"
        )));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ServerError::ValidationError(format!(
            "{what} must be alphanumeric"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inscription_id_parsing_rejects_garbage() {
        assert!(parse_inscription_id("96591617").is_ok());
        assert!(parse_inscription_id("abc123i0").is_ok());
        assert!(parse_inscription_id("").is_err());
        assert!(parse_inscription_id("../etc/passwd").is_err());
    }

    #[test]
    fn path_segment_validation() {
        assert!(validate_segment("bc1pexampleaddress123", "address").is_ok());
        assert!(validate_segment("ordi", "ticker").is_ok());
        assert!(validate_segment("", "address").is_err());
        assert!(validate_segment("bc1p..", "address").is_err());
        assert!(validate_segment("..%2Finscription%2F1", "ticker").is_err());
    }
}

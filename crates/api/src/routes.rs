// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Routes module
//!
//! This module provides route configuration and handlers for the showcase API
//! server.

pub mod handlers;

use axum::{Router, routing::get};
use handlers::{
    address_inscriptions_handler, address_rune_balances_handler, brc20_list_handler,
    brc20_token_handler, collection_list_handler, health_handler, inscription_handler,
    inscription_list_handler, inscription_traits_handler, rune_list_handler, showcase_handler,
};

use crate::{
    metrics::metrics_handler,
    openapi::{openapi_spec, swagger_ui},
    state::ServerState,
};

/// Create application routes
pub fn create_routes() -> Router<ServerState> {
    // Health and metrics endpoints are kept outside /v1 for monitoring purposes
    let monitoring_routes = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler));

    let docs_routes = Router::new()
        .route("/api-doc/openapi.json", get(openapi_spec))
        .route("/swagger-ui", get(swagger_ui));

    let api_routes = Router::new()
        .route("/showcase", get(showcase_handler))
        .route("/inscription/{id}", get(inscription_handler))
        .route("/inscription/{id}/traits", get(inscription_traits_handler))
        .route("/inscriptions", get(inscription_list_handler))
        .route("/runes", get(rune_list_handler))
        .route("/brc-20", get(brc20_list_handler))
        .route("/brc-20/{tick}", get(brc20_token_handler))
        .route("/collections", get(collection_list_handler))
        .route(
            "/address/{address}/inscriptions",
            get(address_inscriptions_handler),
        )
        .route(
            "/address/{address}/rune-balances",
            get(address_rune_balances_handler),
        );

    let v1 = Router::new().nest("/v1", api_routes);

    Router::new()
        .merge(monitoring_routes)
        .merge(docs_routes)
        .merge(v1)
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! `OpenAPI` documentation module
//!
//! This module provides the `OpenAPI` specification and `Swagger UI` endpoints
//! for API documentation.

use axum::{Json, http::StatusCode, response::Html};
use utoipa::OpenApi;

use crate::routes::handlers;

/// `OpenAPI` documentation for the showcase API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ordinals Showcase API",
        description = "API serving a curated showcase of Bitcoin ordinals inscriptions alongside a proxy for Ordiscan data."
    ),
    paths(
        handlers::health_handler,
        handlers::showcase_handler,
        handlers::inscription_handler,
        handlers::inscription_traits_handler,
        handlers::inscription_list_handler,
        handlers::rune_list_handler,
        handlers::brc20_list_handler,
        handlers::brc20_token_handler,
        handlers::collection_list_handler,
        handlers::address_inscriptions_handler,
        handlers::address_rune_balances_handler,
    ),
    components(schemas(
        crate::state::HealthCheck,
        crate::state::HealthStatus,
        handlers::ShowcaseResponse,
        showcase::CardPresentation,
        showcase::CardMedia,
        showcase::NormalizedInscription,
        shared_types::NormalizedMetadata,
        shared_types::MetadataAttribute,
        shared_types::AttributeValue,
        api_client::InscriptionInfo,
        ordiscan::InscriptionTrait,
        ordiscan::RuneEntry,
        ordiscan::Brc20Token,
        ordiscan::CollectionEntry,
        ordiscan::RuneBalance,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "showcase", description = "Featured inscription showcase"),
        (name = "inscriptions", description = "Inscription lookups and listings"),
        (name = "runes", description = "Rune listings"),
        (name = "brc-20", description = "BRC-20 token data"),
        (name = "collections", description = "Collection listings"),
        (name = "addresses", description = "Address-scoped lookups"),
    )
)]
pub struct ApiDoc;

/// `OpenAPI` specification endpoint
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Swagger UI endpoint
pub async fn swagger_ui() -> Result<Html<&'static str>, StatusCode> {
    let html = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Ordinals Showcase API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui.css" />
    <style>
        html { box-sizing: border-box; overflow: -moz-scrollbars-vertical; overflow-y: scroll; }
        *, *:before, *:after { box-sizing: inherit; }
        body { margin:0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: '/api-doc/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                plugins: [
                    SwaggerUIBundle.plugins.DownloadUrl
                ],
                layout: "StandaloneLayout"
            });
        }
    </script>
</body>
</html>
"#;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_spec_includes_all_routes() {
        let spec = ApiDoc::openapi();
        let paths = &spec.paths.paths;

        for path in [
            "/health",
            "/v1/showcase",
            "/v1/inscription/{id}",
            "/v1/inscription/{id}/traits",
            "/v1/inscriptions",
            "/v1/runes",
            "/v1/brc-20",
            "/v1/brc-20/{tick}",
            "/v1/collections",
            "/v1/address/{address}/inscriptions",
            "/v1/address/{address}/rune-balances",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Null-sentinel wrappers over the Ordiscan client
//!
//! Every gateway operation has the same shape: forward the call, catch any
//! fault, log it, and return `None`. Missing data and failure collapse into
//! the same sentinel by contract; callers that need the distinction use
//! [`OrdiscanClient`] directly.

use std::sync::Arc;

use api_client::{HealthStatus, InscriptionApi, InscriptionInfo};
use shared_types::InscriptionId;
use tracing::error;

use crate::client::OrdiscanClient;
use crate::types::{Brc20Token, CollectionEntry, InscriptionTrait, RuneBalance, RuneEntry};

/// Gateway forwarding calls to the Ordiscan client, swallowing faults
#[derive(Debug, Clone)]
pub struct OrdiscanGateway {
    client: Arc<OrdiscanClient>,
}

impl OrdiscanGateway {
    /// Wrap a client in the null-sentinel gateway
    pub fn new(client: Arc<OrdiscanClient>) -> Self {
        Self { client }
    }

    /// The underlying typed client
    pub fn client(&self) -> &OrdiscanClient {
        &self.client
    }

    /// Fetch a single inscription, or `None` on missing data or any fault
    pub async fn inscription_info(&self, id: &InscriptionId) -> Option<InscriptionInfo> {
        match self.client.inscription_info(id).await {
            Ok(result) => result,
            Err(e) => {
                error!(operation = "inscription_info", %id, error = %e, "Ordiscan request failed");
                None
            }
        }
    }

    /// List inscriptions, or `None` on any fault
    pub async fn inscription_list(&self, page: Option<u32>) -> Option<Vec<InscriptionInfo>> {
        match self.client.inscription_list(page).await {
            Ok(result) => result,
            Err(e) => {
                error!(operation = "inscription_list", error = %e, "Ordiscan request failed");
                None
            }
        }
    }

    /// Fetch an inscription's traits, or `None` on missing data or any fault
    pub async fn inscription_traits(&self, id: &InscriptionId) -> Option<Vec<InscriptionTrait>> {
        match self.client.inscription_traits(id).await {
            Ok(result) => result,
            Err(e) => {
                error!(operation = "inscription_traits", %id, error = %e, "Ordiscan request failed");
                None
            }
        }
    }

    /// List runes, or `None` on any fault
    pub async fn rune_list(&self, page: Option<u32>) -> Option<Vec<RuneEntry>> {
        match self.client.rune_list(page).await {
            Ok(result) => result,
            Err(e) => {
                error!(operation = "rune_list", error = %e, "Ordiscan request failed");
                None
            }
        }
    }

    /// List BRC-20 tokens, or `None` on any fault
    pub async fn brc20_list(&self, page: Option<u32>) -> Option<Vec<Brc20Token>> {
        match self.client.brc20_list(page).await {
            Ok(result) => result,
            Err(e) => {
                error!(operation = "brc20_list", error = %e, "Ordiscan request failed");
                None
            }
        }
    }

    /// Fetch a BRC-20 token by ticker, or `None` on missing data or any fault
    pub async fn brc20_token_info(&self, tick: &str) -> Option<Brc20Token> {
        match self.client.brc20_token_info(tick).await {
            Ok(result) => result,
            Err(e) => {
                error!(operation = "brc20_token_info", tick, error = %e, "Ordiscan request failed");
                None
            }
        }
    }

    /// List collections, or `None` on any fault
    pub async fn collection_list(&self, page: Option<u32>) -> Option<Vec<CollectionEntry>> {
        match self.client.collection_list(page).await {
            Ok(result) => result,
            Err(e) => {
                error!(operation = "collection_list", error = %e, "Ordiscan request failed");
                None
            }
        }
    }

    /// List an address's inscriptions, or `None` on any fault
    pub async fn address_inscriptions(
        &self,
        address: &str,
        page: Option<u32>,
    ) -> Option<Vec<InscriptionInfo>> {
        match self.client.address_inscriptions(address, page).await {
            Ok(result) => result,
            Err(e) => {
                error!(operation = "address_inscriptions", address, error = %e, "Ordiscan request failed");
                None
            }
        }
    }

    /// List an address's rune balances, or `None` on any fault
    pub async fn address_rune_balances(&self, address: &str) -> Option<Vec<RuneBalance>> {
        match self.client.address_rune_balances(address).await {
            Ok(result) => result,
            Err(e) => {
                error!(operation = "address_rune_balances", address, error = %e, "Ordiscan request failed");
                None
            }
        }
    }

    /// The provider's health, with failed checks reported as down
    pub async fn health(&self) -> HealthStatus {
        match self.client.health_check().await {
            Ok(status) => status,
            Err(e) => HealthStatus::Down {
                reason: format!("Health check failed: {e}"),
            },
        }
    }

    /// The wrapped provider's name
    pub fn provider_name(&self) -> &'static str {
        self.client.name()
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Wire types for Ordiscan endpoints
//!
//! The single-inscription payload lives in `api_client::InscriptionInfo`
//! because provider clients share it; everything here is specific to the
//! pass-through surface. Unknown provider fields are preserved via
//! `additional_data` so proxied payloads survive untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single trait of an inscription, with collection-wide rarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InscriptionTrait {
    /// Trait name
    pub name: String,
    /// Trait value
    pub value: String,
    /// Share of the collection carrying this value, 0.0 to 1.0
    pub rarity: Option<f64>,
}

/// A rune as listed by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RuneEntry {
    /// Spaced rune name
    pub name: String,
    /// Display name with spacers applied
    pub formatted_name: Option<String>,
    /// Sequential rune number
    pub number: Option<u64>,
    /// Etching timestamp
    pub etched_at: Option<String>,
    /// Provider fields not modeled here
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub additional_data: HashMap<String, serde_json::Value>,
}

/// A BRC-20 token entry, used by both the list and the per-tick lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Brc20Token {
    /// Token ticker
    pub tick: String,
    /// Maximum supply
    pub max_supply: Option<f64>,
    /// Supply minted so far
    pub minted_supply: Option<f64>,
    /// Number of holding addresses
    pub holders: Option<u64>,
    /// Provider fields not modeled here
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub additional_data: HashMap<String, serde_json::Value>,
}

/// A curated inscription collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CollectionEntry {
    /// Collection display name
    pub name: String,
    /// URL-safe collection identifier
    pub slug: String,
    /// Collection description
    pub description: Option<String>,
    /// Number of inscriptions in the collection
    pub item_count: Option<u64>,
    /// Provider fields not modeled here
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub additional_data: HashMap<String, serde_json::Value>,
}

/// A rune balance held by an address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RuneBalance {
    /// Spaced rune name
    pub name: String,
    /// Balance in atomic units, as a decimal string
    pub balance: String,
    /// Provider fields not modeled here
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub additional_data: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unmodeled_rune_fields_are_preserved() {
        let entry: RuneEntry = serde_json::from_value(json!({
            "name": "UNCOMMONGOODS",
            "formatted_name": "UNCOMMON•GOODS",
            "number": 0,
            "etched_at": "2024-04-20T00:00:00Z",
            "symbol": "⧉",
            "divisibility": 0
        }))
        .unwrap();

        assert_eq!(entry.name, "UNCOMMONGOODS");
        assert_eq!(entry.additional_data["symbol"], json!("⧉"));

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["divisibility"], json!(0));
    }

    #[test]
    fn brc20_tokens_tolerate_sparse_payloads() {
        let token: Brc20Token = serde_json::from_value(json!({"tick": "ordi"})).unwrap();
        assert_eq!(token.tick, "ordi");
        assert!(token.max_supply.is_none());
        assert!(token.holders.is_none());
    }
}

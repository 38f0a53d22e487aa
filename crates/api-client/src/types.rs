// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Common data types for inscription payloads

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Prefix identifying renderable image content types.
const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";
/// Addresses longer than this are shortened for display.
const ADDRESS_DISPLAY_THRESHOLD: usize = 12;

/// Raw inscription payload as returned by a provider
///
/// Providers treat `metadata` as an opaque value; it may be a structured
/// object, a JSON-encoded string, a plain string, or absent. Fields this
/// crate does not model are preserved in `additional_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InscriptionInfo {
    /// Genesis identifier (`<txid>i<index>`)
    pub inscription_id: String,
    /// Sequential inscription number
    pub inscription_number: Option<u64>,
    /// URL serving the inscribed content
    pub content_url: Option<String>,
    /// MIME type of the inscribed content
    pub content_type: Option<String>,
    /// Current owner's Bitcoin address
    pub owner_address: Option<String>,
    /// Raw metadata in whatever shape the inscription carries
    pub metadata: Option<serde_json::Value>,
    /// Provider fields not modeled by this crate
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub additional_data: HashMap<String, serde_json::Value>,
}

impl InscriptionInfo {
    /// Create a minimal payload with just an identifier
    pub fn minimal(inscription_id: impl Into<String>) -> Self {
        Self {
            inscription_id: inscription_id.into(),
            inscription_number: None,
            content_url: None,
            content_type: None,
            owner_address: None,
            metadata: None,
            additional_data: HashMap::new(),
        }
    }

    /// Check if the inscribed content renders as an image
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with(IMAGE_CONTENT_TYPE_PREFIX))
    }

    /// Get a display name for the inscription (number, or shortened id)
    pub fn display_name(&self) -> String {
        match self.inscription_number {
            Some(number) => format!("Inscription #{number}"),
            None => format!("Inscription {}", shorten_address(&self.inscription_id)),
        }
    }

    /// Get the owner address shortened for display, if present
    pub fn short_owner(&self) -> Option<String> {
        self.owner_address.as_deref().map(shorten_address)
    }
}

/// Shorten an address-like string to `first6...last6` for display
///
/// Strings at or under the display threshold are returned unchanged. The
/// threshold and the slices count characters, not bytes: provider payloads
/// are untrusted and an owner address is not guaranteed to be ASCII.
pub fn shorten_address(address: &str) -> String {
    let char_count = address.chars().count();
    if char_count > ADDRESS_DISPLAY_THRESHOLD {
        let head: String = address.chars().take(6).collect();
        let tail: String = address.chars().skip(char_count - 6).collect();
        format!("{head}...{tail}")
    } else {
        address.to_string()
    }
}

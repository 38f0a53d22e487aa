// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for Ordiscan client integration tests

use serde_json::{Value, json};

/// A realistic single-inscription payload inside the provider envelope
pub fn inscription_envelope(number: u64) -> Value {
    json!({
        "data": {
            "inscription_id": format!("{}i0", "a".repeat(64)),
            "inscription_number": number,
            "content_url": format!("https://ordinals.com/content/{number}"),
            "content_type": "image/webp",
            "owner_address": "bc1pexampleexampleexampleexample",
            "metadata": {
                "name": "Bitcoin Drip Kimono",
                "description": "Hand-inscribed drip",
                "attributes": [{"trait_type": "Fabric", "value": "silk"}]
            },
            "timestamp": "2025-05-01T00:00:00Z"
        }
    })
}

/// A two-entry rune list inside the provider envelope
pub fn rune_list_envelope() -> Value {
    json!({
        "data": [
            {"name": "UNCOMMONGOODS", "formatted_name": "UNCOMMON•GOODS", "number": 0},
            {"name": "ZZZZZFEHUZZZZZ", "formatted_name": "Z•Z•Z•Z•Z•FEHU•Z•Z•Z•Z•Z", "number": 1}
        ]
    })
}

/// A BRC-20 token payload inside the provider envelope
pub fn brc20_envelope(tick: &str) -> Value {
    json!({
        "data": {
            "tick": tick,
            "max_supply": 21_000_000.0,
            "minted_supply": 21_000_000.0,
            "holders": 4321
        }
    })
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! The fixed set of tracked inscriptions
//!
//! The showcase displays exactly three inscriptions, hard-coded by number.
//! Each carries a static title used whenever live metadata is unavailable,
//! and a fallback explorer link for the no-data card.

use std::fmt;

use serde::Serialize;
use shared_types::InscriptionId;
use utoipa::ToSchema;

/// Identifies one of the tracked showcase items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeaturedKey {
    /// The Bitcoin Drip Kimono inscription
    Kimono,
    /// The BTC tracksuit inscription
    Tracksuit,
    /// The C.H.I.D.O. inscription
    Chido,
}

impl FeaturedKey {
    /// All tracked keys, in display order
    pub const ALL: [Self; 3] = [Self::Kimono, Self::Tracksuit, Self::Chido];

    /// The key's lowercase identifier, used in error messages and metrics
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kimono => "kimono",
            Self::Tracksuit => "tracksuit",
            Self::Chido => "chido",
        }
    }
}

impl fmt::Display for FeaturedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked inscription with its static display fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedItem {
    key: FeaturedKey,
    title: &'static str,
    inscription_number: u64,
}

impl FeaturedItem {
    /// The three tracked items, in display order
    pub fn all() -> [Self; 3] {
        FeaturedKey::ALL.map(Self::for_key)
    }

    /// The tracked item for a key
    pub fn for_key(key: FeaturedKey) -> Self {
        match key {
            FeaturedKey::Kimono => Self {
                key,
                title: "Bitcoin Drip Kimono",
                inscription_number: 96_591_617,
            },
            FeaturedKey::Tracksuit => Self {
                key,
                title: "BTC tracksuit",
                inscription_number: 96_591_705,
            },
            FeaturedKey::Chido => Self {
                key,
                title: "C.H.I.D.O.",
                inscription_number: 96_587_318,
            },
        }
    }

    /// Which tracked slot this item feeds
    pub fn key(&self) -> FeaturedKey {
        self.key
    }

    /// Static title shown whenever live metadata is unavailable
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// The identifier fetched from the provider
    pub fn inscription_id(&self) -> InscriptionId {
        InscriptionId::from_number(self.inscription_number)
    }

    /// Public explorer page for the no-data fallback card
    pub fn fallback_url(&self) -> String {
        self.inscription_id().explorer_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_items_in_display_order() {
        let items = FeaturedItem::all();
        assert_eq!(items[0].key(), FeaturedKey::Kimono);
        assert_eq!(items[1].key(), FeaturedKey::Tracksuit);
        assert_eq!(items[2].key(), FeaturedKey::Chido);
    }

    #[test]
    fn items_carry_their_hardcoded_identifiers() {
        let kimono = FeaturedItem::for_key(FeaturedKey::Kimono);
        assert_eq!(kimono.title(), "Bitcoin Drip Kimono");
        assert_eq!(kimono.inscription_id().as_str(), "96591617");
        assert_eq!(
            kimono.fallback_url(),
            "https://ordiscan.com/inscription/96591617"
        );

        let chido = FeaturedItem::for_key(FeaturedKey::Chido);
        assert_eq!(chido.title(), "C.H.I.D.O.");
        assert_eq!(chido.inscription_id().as_str(), "96587318");
    }

    #[test]
    fn keys_render_lowercase() {
        assert_eq!(FeaturedKey::Tracksuit.to_string(), "tracksuit");
    }
}

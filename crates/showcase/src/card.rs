// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Pure card selection
//!
//! Given a slot and the static item it belongs to, exactly one of four
//! presentations applies, in priority order: loading, error, populated,
//! fallback. Selection reads the slot's current fields and nothing else.

use serde::Serialize;
use shared_types::MetadataAttribute;
use utoipa::ToSchema;

use crate::items::FeaturedItem;
use crate::slot::FetchSlot;

/// Body text of the loading placeholder.
const LOADING_BODY: &str = "Loading data...";
/// Body text of the no-data fallback card.
const FALLBACK_BODY: &str = "No data available";

/// Media rendered inside a populated card
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardMedia {
    /// The content URL renders as an image
    Image {
        /// URL of the inscribed image
        url: String,
    },
    /// Non-image content shows its type as a badge
    Badge {
        /// MIME type of the inscribed content
        content_type: String,
    },
    /// Nothing renderable
    None,
}

/// Exactly one presentation per slot
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CardPresentation {
    /// Fetch still in flight
    Loading {
        /// Static item title
        title: String,
        /// Placeholder body text
        body: String,
    },
    /// Fetch ended in a failure message
    Error {
        /// Static item title
        title: String,
        /// The slot's failure message
        body: String,
    },
    /// Fetch produced a normalized inscription
    Populated {
        /// Normalized metadata name
        title: String,
        /// Normalized metadata description
        description: String,
        /// Image or content-type badge
        media: CardMedia,
        /// Sequential inscription number
        inscription_number: Option<u64>,
        /// Owner address shortened for display
        owner: Option<String>,
        /// Link-out to the inscribed content or the fallback page
        link: Option<String>,
        /// Normalized display attributes
        attributes: Vec<MetadataAttribute>,
    },
    /// Never fetched: static card with the precomputed explorer link
    Fallback {
        /// Static item title
        title: String,
        /// Static body text
        body: String,
        /// Precomputed explorer link, when the item has one
        link: Option<String>,
    },
}

impl CardPresentation {
    /// The card's link-out, if this presentation renders one
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Loading { .. } | Self::Error { .. } => None,
            Self::Populated { link, .. } | Self::Fallback { link, .. } => link.as_deref(),
        }
    }

    /// The card's title
    pub fn title(&self) -> &str {
        match self {
            Self::Loading { title, .. }
            | Self::Error { title, .. }
            | Self::Populated { title, .. }
            | Self::Fallback { title, .. } => title,
        }
    }

    /// One-word state label, used as a metrics dimension
    pub fn state(&self) -> &'static str {
        match self {
            Self::Loading { .. } => "loading",
            Self::Error { .. } => "error",
            Self::Populated { .. } => "populated",
            Self::Fallback { .. } => "fallback",
        }
    }
}

/// Select the presentation for a tracked item's slot
pub fn select_card(item: &FeaturedItem, slot: &FetchSlot) -> CardPresentation {
    select(item.title(), Some(item.fallback_url()), slot)
}

/// Select a presentation from a title, an optional fallback link, and a slot
pub fn select(title: &str, fallback_link: Option<String>, slot: &FetchSlot) -> CardPresentation {
    if slot.is_loading() {
        return CardPresentation::Loading {
            title: title.to_string(),
            body: LOADING_BODY.to_string(),
        };
    }

    if let Some(message) = slot.error() {
        return CardPresentation::Error {
            title: title.to_string(),
            body: message.to_string(),
        };
    }

    if let Some(data) = slot.data() {
        let media = match (&data.content_url, &data.content_type) {
            (Some(url), Some(_)) if data.is_image() => CardMedia::Image { url: url.clone() },
            (Some(_), Some(content_type)) => CardMedia::Badge {
                content_type: content_type.clone(),
            },
            _ => CardMedia::None,
        };

        return CardPresentation::Populated {
            title: data.metadata.name.clone(),
            description: data.metadata.description.clone(),
            media,
            inscription_number: data.inscription_number,
            owner: data.short_owner(),
            link: data.content_url.clone().or(fallback_link),
            attributes: data.metadata.attributes.clone(),
        };
    }

    CardPresentation::Fallback {
        title: title.to_string(),
        body: FALLBACK_BODY.to_string(),
        link: fallback_link,
    }
}

#[cfg(test)]
mod tests {
    use api_client::InscriptionInfo;
    use serde_json::json;

    use crate::items::FeaturedKey;

    use super::*;

    fn resolved_slot() -> FetchSlot {
        let mut raw = InscriptionInfo::minimal("abci0");
        raw.inscription_number = Some(96_591_617);
        raw.content_url = Some("https://ordinals.com/content/abci0".to_string());
        raw.content_type = Some("image/webp".to_string());
        raw.owner_address = Some("bc1pexampleexampleexampleexample".to_string());
        raw.metadata = Some(json!({
            "name": "Golden Kimono",
            "description": "Hand-inscribed drip",
            "attributes": [{"trait_type": "Fabric", "value": "silk"}]
        }));

        let mut slot = FetchSlot::new();
        slot.resolve(raw.into());
        slot
    }

    #[test]
    fn loading_wins_over_everything() {
        let slot = FetchSlot::new();
        let card = select("Bitcoin Drip Kimono", Some("https://x".to_string()), &slot);

        assert!(matches!(card, CardPresentation::Loading { .. }));
        assert_eq!(card.title(), "Bitcoin Drip Kimono");
        assert_eq!(card.link(), None);
    }

    #[test]
    fn error_slot_renders_its_message() {
        let mut slot = FetchSlot::new();
        slot.fail("Failed to fetch kimono data.");
        let card = select("Bitcoin Drip Kimono", Some("https://x".to_string()), &slot);

        match card {
            CardPresentation::Error { ref body, .. } => {
                assert_eq!(body, "Failed to fetch kimono data.");
            }
            other => panic!("Expected error card, got: {other:?}"),
        }
        assert_eq!(card.link(), None);
    }

    #[test]
    fn populated_card_derives_from_normalized_data() {
        let card = select("static title", None, &resolved_slot());

        match card {
            CardPresentation::Populated {
                title,
                description,
                media,
                inscription_number,
                owner,
                link,
                attributes,
            } => {
                assert_eq!(title, "Golden Kimono");
                assert_eq!(description, "Hand-inscribed drip");
                assert_eq!(
                    media,
                    CardMedia::Image {
                        url: "https://ordinals.com/content/abci0".to_string()
                    }
                );
                assert_eq!(inscription_number, Some(96_591_617));
                assert_eq!(owner, Some("bc1pex...xample".to_string()));
                assert_eq!(link, Some("https://ordinals.com/content/abci0".to_string()));
                assert_eq!(attributes.len(), 1);
            }
            other => panic!("Expected populated card, got: {other:?}"),
        }
    }

    #[test]
    fn non_image_content_shows_a_badge() {
        let mut raw = InscriptionInfo::minimal("abci0");
        raw.content_url = Some("https://ordinals.com/content/abci0".to_string());
        raw.content_type = Some("text/html".to_string());

        let mut slot = FetchSlot::new();
        slot.resolve(raw.into());
        let card = select("t", None, &slot);

        match card {
            CardPresentation::Populated { media, .. } => {
                assert_eq!(
                    media,
                    CardMedia::Badge {
                        content_type: "text/html".to_string()
                    }
                );
            }
            other => panic!("Expected populated card, got: {other:?}"),
        }
    }

    #[test]
    fn populated_card_without_content_url_uses_the_fallback_link() {
        let mut raw = InscriptionInfo::minimal("abci0");
        raw.metadata = Some(json!({"name": "X"}));

        let mut slot = FetchSlot::new();
        slot.resolve(raw.into());
        let card = select("t", Some("https://fallback".to_string()), &slot);

        assert_eq!(card.link(), Some("https://fallback"));
    }

    #[test]
    fn idle_slot_without_fallback_renders_no_link() {
        let card = select("t", None, &FetchSlot::idle());

        assert!(matches!(card, CardPresentation::Fallback { .. }));
        assert_eq!(card.link(), None);
    }

    #[test]
    fn idle_slot_with_fallback_renders_exactly_that_link() {
        let item = FeaturedItem::for_key(FeaturedKey::Tracksuit);
        let card = select_card(&item, &FetchSlot::idle());

        match card {
            CardPresentation::Fallback {
                ref title,
                ref body,
                ..
            } => {
                assert_eq!(title, "BTC tracksuit");
                assert_eq!(body, "No data available");
            }
            ref other => panic!("Expected fallback card, got: {other:?}"),
        }
        assert_eq!(card.link(), Some("https://ordiscan.com/inscription/96591705"));
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Per-item fetch state
//!
//! Every tracked inscription owns one [`FetchSlot`]. A slot is created
//! loading and transitions exactly once, to either data or an error; it
//! never re-enters loading and a second transition is ignored.

use std::collections::HashMap;

use api_client::{InscriptionInfo, shorten_address};
use serde::Serialize;
use shared_types::{MetadataSource, NormalizedMetadata};
use utoipa::ToSchema;

/// A raw inscription payload with its metadata normalized
///
/// This is the provider payload with the opaque `metadata` value replaced by
/// the canonical display record; every other field is carried over.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NormalizedInscription {
    /// Genesis identifier
    pub inscription_id: String,
    /// Sequential inscription number
    pub inscription_number: Option<u64>,
    /// URL serving the inscribed content
    pub content_url: Option<String>,
    /// MIME type of the inscribed content
    pub content_type: Option<String>,
    /// Current owner's Bitcoin address
    pub owner_address: Option<String>,
    /// Normalized display metadata, always fully populated
    pub metadata: NormalizedMetadata,
    /// Provider fields not modeled here, carried over untouched
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub additional_data: HashMap<String, serde_json::Value>,
}

impl NormalizedInscription {
    /// Whether the inscribed content renders as an image
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }

    /// The owner address shortened for display, if present
    pub fn short_owner(&self) -> Option<String> {
        self.owner_address.as_deref().map(shorten_address)
    }
}

impl From<InscriptionInfo> for NormalizedInscription {
    fn from(raw: InscriptionInfo) -> Self {
        Self {
            inscription_id: raw.inscription_id,
            inscription_number: raw.inscription_number,
            content_url: raw.content_url,
            content_type: raw.content_type,
            owner_address: raw.owner_address,
            metadata: MetadataSource::from_value(raw.metadata).normalize(),
            additional_data: raw.additional_data,
        }
    }
}

/// Fetch state for one tracked inscription
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSlot {
    loading: bool,
    data: Option<NormalizedInscription>,
    error: Option<String>,
}

impl Default for FetchSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchSlot {
    /// Create a slot in the loading state
    pub fn new() -> Self {
        Self {
            loading: true,
            data: None,
            error: None,
        }
    }

    /// Create a slot that was never fetched
    ///
    /// This is the pre-fetch default the fallback card renders from.
    pub fn idle() -> Self {
        Self {
            loading: false,
            data: None,
            error: None,
        }
    }

    /// Transition to the data terminal state
    ///
    /// Ignored if the slot already left loading.
    pub fn resolve(&mut self, data: NormalizedInscription) {
        if !self.loading {
            return;
        }
        self.loading = false;
        self.data = Some(data);
    }

    /// Transition to the error terminal state
    ///
    /// Ignored if the slot already left loading.
    pub fn fail(&mut self, message: impl Into<String>) {
        if !self.loading {
            return;
        }
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Whether the fetch is still in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The normalized payload, if the fetch succeeded
    pub fn data(&self) -> Option<&NormalizedInscription> {
        self.data.as_ref()
    }

    /// The failure message, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_payload() -> NormalizedInscription {
        let mut raw = InscriptionInfo::minimal("abci0");
        raw.inscription_number = Some(96_591_617);
        raw.content_type = Some("image/webp".to_string());
        raw.owner_address = Some("bc1pexampleexampleexampleexample".to_string());
        raw.metadata = Some(json!({"name": "Kimono", "description": "Drip"}));
        raw.into()
    }

    #[test]
    fn normalization_merges_into_the_raw_payload() {
        let normalized = sample_payload();

        assert_eq!(normalized.inscription_number, Some(96_591_617));
        assert_eq!(normalized.metadata.name, "Kimono");
        assert_eq!(normalized.metadata.description, "Drip");
        assert!(normalized.is_image());
        assert_eq!(normalized.short_owner(), Some("bc1pex...xample".to_string()));
    }

    #[test]
    fn unmodeled_provider_fields_survive_normalization() {
        let mut raw = InscriptionInfo::minimal("abci0");
        raw.metadata = Some(json!({"name": "Kimono"}));
        raw.additional_data
            .insert("genesis_fee".to_string(), json!(420));

        let normalized: NormalizedInscription = raw.into();
        assert_eq!(normalized.metadata.name, "Kimono");
        assert_eq!(normalized.additional_data["genesis_fee"], json!(420));

        // The serialized record is the raw payload plus normalized metadata
        let rendered = serde_json::to_value(&normalized).unwrap();
        assert_eq!(rendered["genesis_fee"], json!(420));
    }

    #[test]
    fn absent_metadata_still_yields_a_complete_record() {
        let normalized: NormalizedInscription = InscriptionInfo::minimal("abci0").into();
        assert_eq!(normalized.metadata.name, "Unnamed");
        assert_eq!(normalized.metadata.description, "No description");
    }

    #[test]
    fn slot_starts_loading_and_resolves_once() {
        let mut slot = FetchSlot::new();
        assert!(slot.is_loading());
        assert!(slot.data().is_none());
        assert!(slot.error().is_none());

        slot.resolve(sample_payload());
        assert!(!slot.is_loading());
        assert!(slot.data().is_some());
        assert!(slot.error().is_none());
    }

    #[test]
    fn slot_fails_once() {
        let mut slot = FetchSlot::new();
        slot.fail("Failed to fetch kimono data.");

        assert!(!slot.is_loading());
        assert!(slot.data().is_none());
        assert_eq!(slot.error(), Some("Failed to fetch kimono data."));
    }

    #[test]
    fn second_transition_is_ignored() {
        let mut slot = FetchSlot::new();
        slot.resolve(sample_payload());
        slot.fail("late failure");

        assert!(slot.data().is_some());
        assert!(slot.error().is_none());

        let mut slot = FetchSlot::new();
        slot.fail("first");
        slot.resolve(sample_payload());

        assert_eq!(slot.error(), Some("first"));
        assert!(slot.data().is_none());
    }

    #[test]
    fn idle_slot_has_no_terminal_state() {
        let slot = FetchSlot::idle();
        assert!(!slot.is_loading());
        assert!(slot.data().is_none());
        assert!(slot.error().is_none());
    }
}

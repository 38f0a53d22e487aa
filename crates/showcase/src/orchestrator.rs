// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Concurrent fetch pass over the tracked inscriptions
//!
//! [`load_showcase`] issues one provider fetch per tracked item, all at
//! once, and joins them. Each item owns a disjoint slot, so the fetches
//! share no mutable state: one item's outcome never blocks or reorders
//! another's. The pass runs exactly once per call; there is no polling,
//! no refresh, and no retry.

use api_client::InscriptionApi;
use tracing::error;

use crate::items::{FeaturedItem, FeaturedKey};
use crate::slot::FetchSlot;

/// The slots produced by one fetch pass, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    kimono: FetchSlot,
    tracksuit: FetchSlot,
    chido: FetchSlot,
}

impl Showcase {
    /// The slot owned by a tracked key
    pub fn slot(&self, key: FeaturedKey) -> &FetchSlot {
        match key {
            FeaturedKey::Kimono => &self.kimono,
            FeaturedKey::Tracksuit => &self.tracksuit,
            FeaturedKey::Chido => &self.chido,
        }
    }

    /// Iterate items and their slots in display order
    pub fn iter(&self) -> impl Iterator<Item = (FeaturedItem, &FetchSlot)> {
        FeaturedKey::ALL
            .into_iter()
            .map(|key| (FeaturedItem::for_key(key), self.slot(key)))
    }
}

/// Run one concurrent fetch pass over all tracked inscriptions
///
/// Every slot comes back in a terminal state: data on a successful fetch,
/// a key-specific message when the provider has nothing, and a generic
/// key-specific message on a fault. No fault is fatal; unaffected slots
/// proceed normally.
pub async fn load_showcase<A: InscriptionApi>(api: &A) -> Showcase {
    let [kimono_item, tracksuit_item, chido_item] = FeaturedItem::all();

    let (kimono, tracksuit, chido) = tokio::join!(
        fetch_item(api, kimono_item),
        fetch_item(api, tracksuit_item),
        fetch_item(api, chido_item),
    );

    Showcase {
        kimono,
        tracksuit,
        chido,
    }
}

/// Fetch one tracked inscription into its slot
async fn fetch_item<A: InscriptionApi>(api: &A, item: FeaturedItem) -> FetchSlot {
    let mut slot = FetchSlot::new();
    let key = item.key();

    match api.get_inscription(&item.inscription_id()).await {
        Ok(Some(raw)) => slot.resolve(raw.into()),
        Ok(None) => slot.fail(format!("Failed to fetch {key} data.")),
        Err(e) => {
            error!(item = %key, provider = api.name(), error = %e, "showcase fetch failed");
            slot.fail(format!("An error occurred while fetching {key} data."));
        }
    }

    slot
}

#[cfg(test)]
mod tests {
    use api_client::{ApiError, HealthStatus, InscriptionInfo};
    use serde_json::json;
    use shared_types::InscriptionId;

    use super::*;

    /// Stub provider: kimono succeeds, tracksuit is missing, chido faults.
    struct StubApi;

    impl InscriptionApi for StubApi {
        async fn health_check(&self) -> Result<HealthStatus, ApiError> {
            Ok(HealthStatus::Up)
        }

        async fn get_inscription(
            &self,
            id: &InscriptionId,
        ) -> Result<Option<InscriptionInfo>, ApiError> {
            match id.as_str() {
                "96591617" => {
                    let mut info = InscriptionInfo::minimal("abci0");
                    info.inscription_number = Some(96_591_617);
                    info.metadata = Some(json!({"name": "Kimono"}));
                    Ok(Some(info))
                }
                "96591705" => Ok(None),
                _ => Err(ApiError::Http {
                    message: "connection reset".to_string(),
                }),
            }
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    #[tokio::test]
    async fn mixed_outcomes_settle_independently() {
        let showcase = load_showcase(&StubApi).await;

        let kimono = showcase.slot(FeaturedKey::Kimono);
        assert!(!kimono.is_loading());
        assert_eq!(kimono.data().unwrap().metadata.name, "Kimono");
        assert!(kimono.error().is_none());

        let tracksuit = showcase.slot(FeaturedKey::Tracksuit);
        assert!(!tracksuit.is_loading());
        assert!(tracksuit.data().is_none());
        assert_eq!(tracksuit.error(), Some("Failed to fetch tracksuit data."));

        let chido = showcase.slot(FeaturedKey::Chido);
        assert!(!chido.is_loading());
        assert!(chido.data().is_none());
        assert_eq!(
            chido.error(),
            Some("An error occurred while fetching chido data.")
        );
    }

    #[tokio::test]
    async fn iteration_follows_display_order() {
        let showcase = load_showcase(&StubApi).await;
        let keys: Vec<_> = showcase.iter().map(|(item, _)| item.key()).collect();
        assert_eq!(
            keys,
            vec![FeaturedKey::Kimono, FeaturedKey::Tracksuit, FeaturedKey::Chido]
        );
    }

    /// Every provider fault collapses to the same coarse message; detail
    /// stays in the logs.
    struct AlwaysFaulting;

    impl InscriptionApi for AlwaysFaulting {
        async fn health_check(&self) -> Result<HealthStatus, ApiError> {
            Ok(HealthStatus::Up)
        }

        async fn get_inscription(
            &self,
            _id: &InscriptionId,
        ) -> Result<Option<InscriptionInfo>, ApiError> {
            Err(ApiError::Timeout { timeout_seconds: 1 })
        }

        fn name(&self) -> &'static str {
            "faulting"
        }
    }

    #[tokio::test]
    async fn faults_stay_within_their_slot() {
        let showcase = load_showcase(&AlwaysFaulting).await;

        for (item, slot) in showcase.iter() {
            assert!(!slot.is_loading());
            assert_eq!(
                slot.error(),
                Some(format!("An error occurred while fetching {} data.", item.key()).as_str())
            );
        }
    }
}

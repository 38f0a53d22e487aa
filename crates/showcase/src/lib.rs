// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Showcase domain logic for the featured inscriptions
//!
//! This crate owns everything between the provider client and the HTTP
//! surface: the three tracked inscriptions, the per-item fetch state, the
//! concurrent load pass, and the pure card-selection logic the view renders
//! from.
//!
//! # Architecture
//!
//! - [`items`]: the fixed set of tracked inscriptions and their static titles
//! - [`slot`]: per-item fetch state with a single loading-to-terminal transition
//! - [`orchestrator`]: one concurrent fetch pass over all tracked items
//! - [`card`]: pure selection of exactly one presentation per slot
//!
//! Each tracked item owns a disjoint slot, so the concurrent fetches share
//! no mutable state and complete independently. A failed fetch affects only
//! its own card.

pub mod card;
pub mod items;
pub mod orchestrator;
pub mod slot;

pub use card::{CardMedia, CardPresentation, select_card};
pub use items::{FeaturedItem, FeaturedKey};
pub use orchestrator::{Showcase, load_showcase};
pub use slot::{FetchSlot, NormalizedInscription};

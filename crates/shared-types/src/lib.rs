// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the ordinals showcase service
//!
//! This crate provides common types that are shared across multiple crates
//! in the showcase workspace, avoiding circular dependencies: the validated
//! inscription identifier and the total metadata normalizer.

pub mod inscription_id;
pub mod metadata;

pub use inscription_id::{InscriptionId, InscriptionIdParseError};
pub use metadata::{AttributeValue, MetadataAttribute, MetadataSource, NormalizedMetadata};

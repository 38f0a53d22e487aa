// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Inscription identifier type
//!
//! This module provides a validated, opaque identifier for ordinals
//! inscriptions. Providers accept either an inscription number (`96587318`)
//! or a genesis id (`<txid>i<index>`); both are carried verbatim.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// Longest identifier accepted: a genesis id is a 64-character transaction id,
/// an `i` separator, and an output index.
const MAX_IDENTIFIER_LENGTH: usize = 80;

/// Base URL of the public inscription explorer used for link-outs.
const EXPLORER_BASE_URL: &str = "https://ordiscan.com/inscription";

/// Opaque identifier for an ordinals inscription
///
/// The identifier is validated on construction (non-empty, ASCII
/// alphanumeric, bounded length) and otherwise passed through to the
/// provider untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, ToSchema)]
#[schema(value_type = String, example = "96587318")]
pub struct InscriptionId(Box<str>);

impl InscriptionId {
    /// Builds an identifier from an inscription number
    ///
    /// Numbers are always within the accepted alphabet, so this never fails.
    pub fn from_number(number: u64) -> Self {
        Self(number.to_string().into_boxed_str())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the public explorer page for this inscription
    pub fn explorer_url(&self) -> String {
        format!("{EXPLORER_BASE_URL}/{}", self.0)
    }
}

impl fmt::Display for InscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for InscriptionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for InscriptionId {
    type Err = InscriptionIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InscriptionIdParseError::Empty);
        }
        if s.len() > MAX_IDENTIFIER_LENGTH {
            return Err(InscriptionIdParseError::TooLong(s.len()));
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(InscriptionIdParseError::InvalidCharacter(c));
        }
        Ok(Self(Box::from(s)))
    }
}

impl Serialize for InscriptionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for InscriptionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct InscriptionIdVisitor;

        impl serde::de::Visitor<'_> for InscriptionIdVisitor {
            type Value = InscriptionId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "an inscription number or genesis id (ASCII alphanumeric, at most {MAX_IDENTIFIER_LENGTH} characters)"
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                InscriptionId::from_str(value).map_err(|_| {
                    E::invalid_value(
                        serde::de::Unexpected::Str(value),
                        &"a valid inscription identifier",
                    )
                })
            }
        }

        deserializer.deserialize_str(InscriptionIdVisitor)
    }
}

/// Error type for inscription identifier parsing
#[derive(Debug, thiserror::Error)]
pub enum InscriptionIdParseError {
    /// The identifier was empty
    #[error("inscription identifier must not be empty")]
    Empty,
    /// The identifier exceeded the maximum accepted length
    #[error("inscription identifier is {0} characters, longest accepted is {MAX_IDENTIFIER_LENGTH}")]
    TooLong(usize),
    /// The identifier contained a character outside the accepted alphabet
    #[error("inscription identifier contains invalid character {0:?}")]
    InvalidCharacter(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inscription_numbers() {
        let id = InscriptionId::from_str("96587318").unwrap();
        assert_eq!(id.as_str(), "96587318");
        assert_eq!(id.to_string(), "96587318");
    }

    #[test]
    fn builds_from_inscription_numbers() {
        let id = InscriptionId::from_number(96591705);
        assert_eq!(id.as_str(), "96591705");
    }

    #[test]
    fn parses_genesis_ids() {
        let genesis = format!("{}i0", "b".repeat(64));
        let id = InscriptionId::from_str(&genesis).unwrap();
        assert_eq!(id.as_str(), genesis);
    }

    #[test]
    fn rejects_empty_identifiers() {
        assert!(matches!(
            InscriptionId::from_str(""),
            Err(InscriptionIdParseError::Empty)
        ));
    }

    #[test]
    fn rejects_whitespace_and_separators() {
        assert!(matches!(
            InscriptionId::from_str("965 87318"),
            Err(InscriptionIdParseError::InvalidCharacter(' '))
        ));
        assert!(matches!(
            InscriptionId::from_str("../inscription"),
            Err(InscriptionIdParseError::InvalidCharacter('.'))
        ));
    }

    #[test]
    fn rejects_oversized_identifiers() {
        let oversized = "a".repeat(MAX_IDENTIFIER_LENGTH + 1);
        assert!(matches!(
            InscriptionId::from_str(&oversized),
            Err(InscriptionIdParseError::TooLong(81))
        ));
    }

    #[test]
    fn explorer_url_points_at_the_inscription_page() {
        let id = InscriptionId::from_str("96591617").unwrap();
        assert_eq!(
            id.explorer_url(),
            "https://ordiscan.com/inscription/96591617"
        );
    }

    #[test]
    fn serializes_as_a_plain_string() {
        let id = InscriptionId::from_str("96591705").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"96591705\"");

        let parsed: InscriptionId = serde_json::from_str("\"96591705\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn deserialization_rejects_invalid_identifiers() {
        let result: Result<InscriptionId, _> = serde_json::from_str("\"not an id\"");
        assert!(result.is_err());
    }
}

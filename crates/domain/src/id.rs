//! Opaque entity identifier supplied by sync callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Opaque key naming one entity within the participant's data set.
///
/// The token has no internal structure: the only invariant enforced is
/// presence — an empty token is rejected at construction. Everything else
/// is carried verbatim, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityIdentifier(String);

impl EntityIdentifier {
    /// Build an identifier from a caller-supplied token.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingIdentifier`] when the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ValidationError::MissingIdentifier);
        }
        Ok(Self(token))
    }

    /// Access the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, yielding the raw token.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntityIdentifier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

//! Opaque content payload for an entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Current-state payload for one entity.
///
/// The payload is treated purely as an opaque string: no structure (JSON,
/// XML, …) is assumed, nothing is trimmed or escaped, and the byte sequence
/// is preserved exactly as supplied. "No content" is expressed as
/// `Option::<Content>::None`, never as an empty payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content(String);

impl Content {
    /// Wrap a payload.
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    /// Access the payload as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the content, yielding the raw payload.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Content {
    fn from(payload: String) -> Self {
        Self(payload)
    }
}

impl From<&str> for Content {
    fn from(payload: &str) -> Self {
        Self(payload.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_preserve_payload_verbatim() {
        let content = Content::new("  {\"raw\": 1}\n");
        assert_eq!(content.as_str(), "  {\"raw\": 1}\n");
    }

    #[test]
    fn should_preserve_non_ascii_payload() {
        let content = Content::new("höhe: 42 µm → ✓");
        assert_eq!(content.as_str(), "höhe: 42 µm → ✓");
        assert_eq!(content.as_str().as_bytes(), "höhe: 42 µm → ✓".as_bytes());
    }

    #[test]
    fn should_allow_empty_payload() {
        let content = Content::new("");
        assert_eq!(content.as_str(), "");
        assert_eq!(content.into_string(), String::new());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// URL-safe identifier for a lesson within a track.
///
/// Slugs appear in routes and in progress storage keys, so they are expected
/// to be lowercase ASCII words joined by single hyphens. `Slug::parse`
/// enforces that shape; `From<&str>` does not, so authored content can be
/// written as plain literals and checked later by `validate_course`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Parse a slug, rejecting anything that is not URL-safe.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if the value is empty or contains characters
    /// outside `[a-z0-9-]`, or has leading, trailing, or doubled hyphens.
    pub fn parse(value: &str) -> Result<Self, ParseIdError> {
        if is_url_safe(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(ParseIdError {
                kind: "Slug".to_string(),
            })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the slug matches the URL-safe shape.
    #[must_use]
    pub fn is_url_safe(&self) -> bool {
        is_url_safe(&self.0)
    }
}

/// Identifier of a subsection or practice item, unique within its lesson.
///
/// Doubles as the in-page anchor and as the checklist key, so renaming an
/// id orphans any progress stored under the old name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_url_safe(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

impl From<&str> for Slug {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Slug {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slug({:?})", self.0)
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({:?})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for Slug {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slug::parse(s)
    }
}

impl FromStr for ItemId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseIdError {
                kind: "ItemId".to_string(),
            });
        }
        Ok(ItemId(s.to_owned()))
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_display() {
        let slug = Slug::from("intro-setup");
        assert_eq!(slug.to_string(), "intro-setup");
    }

    #[test]
    fn test_slug_from_str() {
        let slug: Slug = "variables-and-types".parse().unwrap();
        assert_eq!(slug, "variables-and-types");
    }

    #[test]
    fn test_slug_rejects_unsafe_values() {
        for raw in ["", "Intro", "intro setup", "a:b", "a/b", "-lead", "trail-", "a--b"] {
            assert!(raw.parse::<Slug>().is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_unchecked_slug_reports_safety() {
        assert!(Slug::from("section-12").is_url_safe());
        assert!(!Slug::from("Section 12").is_url_safe());
    }

    #[test]
    fn test_item_id_from_str_invalid() {
        assert!("   ".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_item_id_roundtrip() {
        let original = ItemId::from("s1-check-python");
        let serialized = original.to_string();
        let deserialized: ItemId = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }
}

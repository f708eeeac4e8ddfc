use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::Slug;

/// Namespace prefix shared by every progress key the app writes.
pub const DEFAULT_NAMESPACE: &str = "pyd";

/// An independent syllabus with its own slugs and progress namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Python,
    Pandas,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Python, Track::Pandas];

    /// Stable key used in storage keys and CLI input.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Track::Python => "python",
            Track::Pandas => "pandas",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Track::Python => "Python for Beginners",
            Track::Pandas => "Data Analysis with Pandas",
        }
    }

    /// Path of the syllabus page; lesson paths hang off it.
    #[must_use]
    pub fn route_base(self) -> &'static str {
        match self {
            Track::Python => "/python",
            Track::Pandas => "/pandas",
        }
    }

    #[must_use]
    pub fn lesson_path(self, slug: &Slug) -> String {
        format!("{}/{}", self.route_base(), slug)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown track: {raw}")]
pub struct ParseTrackError {
    raw: String,
}

impl FromStr for Track {
    type Err = ParseTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" => Ok(Track::Python),
            "pandas" => Ok(Track::Pandas),
            _ => Err(ParseTrackError { raw: s.to_owned() }),
        }
    }
}

/// Which checklist of a lesson a key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistKind {
    /// Subsection read-through checklist.
    Progress,
    /// Practice panel checklist.
    Practice,
}

impl ChecklistKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChecklistKind::Progress => "progress",
            ChecklistKind::Practice => "practice",
        }
    }
}

/// Storage key for one lesson checklist: `{namespace}:{track}:{kind}:{slug}`.
///
/// Track keys and kinds are fixed words without `:`, so two keys collide
/// only if their slugs do. URL-safe slugs never contain `:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProgressKey {
    namespace: String,
    track: Track,
    kind: ChecklistKind,
    slug: Slug,
}

impl ProgressKey {
    #[must_use]
    pub fn new(track: Track, kind: ChecklistKind, slug: Slug) -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            track,
            kind,
            slug,
        }
    }

    #[must_use]
    pub fn progress(track: Track, slug: Slug) -> Self {
        Self::new(track, ChecklistKind::Progress, slug)
    }

    #[must_use]
    pub fn practice(track: Track, slug: Slug) -> Self {
        Self::new(track, ChecklistKind::Practice, slug)
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn track(&self) -> Track {
        self.track
    }

    #[must_use]
    pub fn kind(&self) -> ChecklistKind {
        self.kind
    }

    #[must_use]
    pub fn slug(&self) -> &Slug {
        &self.slug
    }
}

impl fmt::Display for ProgressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.namespace,
            self.track.key(),
            self.kind.as_str(),
            self.slug
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn key_shape() {
        let key = ProgressKey::progress(Track::Pandas, Slug::from("pandas-intro-setup"));
        assert_eq!(key.to_string(), "pyd:pandas:progress:pandas-intro-setup");

        let key = ProgressKey::practice(Track::Python, Slug::from("intro-setup"))
            .with_namespace("test");
        assert_eq!(key.to_string(), "test:python:practice:intro-setup");
    }

    #[test]
    fn keys_never_collide_across_tracks_kinds_or_lessons() {
        let mut seen = HashSet::new();
        for track in Track::ALL {
            for kind in [ChecklistKind::Progress, ChecklistKind::Practice] {
                for slug in ["intro-setup", "functions"] {
                    let key = ProgressKey::new(track, kind, Slug::from(slug)).to_string();
                    assert!(seen.insert(key.clone()), "duplicate key {key}");
                }
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn track_parses_case_insensitively() {
        assert_eq!(" Pandas ".parse::<Track>().unwrap(), Track::Pandas);
        assert_eq!("python".parse::<Track>().unwrap(), Track::Python);
        assert!("rust".parse::<Track>().is_err());
    }

    #[test]
    fn lesson_paths_hang_off_the_route_base() {
        let path = Track::Python.lesson_path(&Slug::from("functions"));
        assert_eq!(path, "/python/functions");
    }
}

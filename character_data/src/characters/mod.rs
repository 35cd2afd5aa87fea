//! Character identities and display metadata.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for characters.
///
/// Ids are content slugs (e.g. `"aurora"`) coming straight from the authored
/// JSON files, so this wraps a string rather than a generated identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    /// Create a character ID from a content slug.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CharacterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The display metadata the graph needs for a single character.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSummary {
    pub id: CharacterId,
    pub display_name: String,
    /// Accent color as a CSS-style string (e.g. `"#7c9cff"`).
    pub color: String,
}

impl CharacterSummary {
    /// Create a new summary.
    pub fn new(
        id: impl Into<CharacterId>,
        display_name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            color: color.into(),
        }
    }
}

/// In-memory lookup of character display metadata, keyed by id.
///
/// A missing entry is a normal condition, not an error: the graph builder
/// substitutes placeholder metadata for ids it cannot resolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterDirectory {
    by_id: HashMap<CharacterId, CharacterSummary>,
}

impl CharacterDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a character summary.
    pub fn insert(&mut self, summary: CharacterSummary) {
        self.by_id.insert(summary.id.clone(), summary);
    }

    /// Look up the summary for a character id.
    pub fn get(&self, id: &CharacterId) -> Option<&CharacterSummary> {
        self.by_id.get(id)
    }

    /// Number of characters in the directory.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Iterate over all summaries.
    pub fn iter(&self) -> impl Iterator<Item = &CharacterSummary> {
        self.by_id.values()
    }
}

impl FromIterator<CharacterSummary> for CharacterDirectory {
    fn from_iter<I: IntoIterator<Item = CharacterSummary>>(iter: I) -> Self {
        let mut directory = Self::new();
        for summary in iter {
            directory.insert(summary);
        }
        directory
    }
}

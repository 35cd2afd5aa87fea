//! Relationship data model - declared relationships between characters.
//!
//! Each character that declares relationships has one record
//! ([`CharacterRelationshipData`]); absence of a record means "no
//! relationships declared". Records arrive as raw JSON and must pass the
//! all-or-nothing validator in [`record`] before becoming typed
//! [`Relationship`] values.

mod record;

pub use record::*;

use serde::{Deserialize, Serialize};

use crate::characters::CharacterId;

/// Categories of relationships between characters.
///
/// The exact set is a presentation concern; unrecognized category strings
/// are preserved verbatim in [`RelationshipType::Other`] so records written
/// with a newer vocabulary still validate and round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipType {
    Creator,
    Family,
    Friend,
    Ally,
    Rival,
    Enemy,
    Mentor,
    Romantic,
    /// Unrecognized category, kept as written.
    Other(String),
}

impl RelationshipType {
    /// Canonical string form, as written in the content files.
    pub fn as_str(&self) -> &str {
        match self {
            RelationshipType::Creator => "creator",
            RelationshipType::Family => "family",
            RelationshipType::Friend => "friend",
            RelationshipType::Ally => "ally",
            RelationshipType::Rival => "rival",
            RelationshipType::Enemy => "enemy",
            RelationshipType::Mentor => "mentor",
            RelationshipType::Romantic => "romantic",
            RelationshipType::Other(raw) => raw,
        }
    }
}

impl From<String> for RelationshipType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "creator" => RelationshipType::Creator,
            "family" => RelationshipType::Family,
            "friend" => RelationshipType::Friend,
            "ally" => RelationshipType::Ally,
            "rival" => RelationshipType::Rival,
            "enemy" => RelationshipType::Enemy,
            "mentor" => RelationshipType::Mentor,
            "romantic" => RelationshipType::Romantic,
            _ => RelationshipType::Other(raw),
        }
    }
}

impl From<RelationshipType> for String {
    fn from(kind: RelationshipType) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directed relationship from a focal character to another character.
///
/// Immutable once validated; `label` is the short caption drawn on the edge
/// and `description` the longer hover/detail text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub target_id: CharacterId,
    #[serde(rename = "type")]
    pub kind: RelationshipType,
    pub label: String,
    pub description: String,
}

impl Relationship {
    /// Create a new relationship.
    pub fn new(
        target_id: impl Into<CharacterId>,
        kind: RelationshipType,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            target_id: target_id.into(),
            kind,
            label: label.into(),
            description: description.into(),
        }
    }
}

/// The raw per-character record schema: one file per character that has
/// declared relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRelationshipData {
    pub character_id: CharacterId,
    pub relationships: Vec<Relationship>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_type_round_trip() {
        for raw in ["creator", "family", "rival", "ally"] {
            let kind = RelationshipType::from(raw.to_string());
            assert!(!matches!(kind, RelationshipType::Other(_)));
            assert_eq!(kind.as_str(), raw);
        }
    }

    #[test]
    fn test_unknown_relationship_type_preserved() {
        let kind = RelationshipType::from("sworn-nemesis".to_string());
        assert_eq!(kind, RelationshipType::Other("sworn-nemesis".to_string()));
        assert_eq!(String::from(kind), "sworn-nemesis");
    }

    #[test]
    fn test_relationship_serde_field_names() {
        let relationship = Relationship::new(
            "silas",
            RelationshipType::Rival,
            "old rival",
            "They trained together before the schism.",
        );

        let json = serde_json::to_value(&relationship).unwrap();
        assert_eq!(json["targetId"], "silas");
        assert_eq!(json["type"], "rival");
        assert_eq!(json["label"], "old rival");
    }
}

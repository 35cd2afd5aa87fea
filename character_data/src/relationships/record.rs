//! Relationship record validation - the gate between raw JSON and the graph.
//!
//! Validation is all-or-nothing: a record either matches the schema exactly
//! or the whole file is rejected. Keeping the valid items from a
//! partially-malformed array would silently render a graph with missing
//! edges, which looks correct but is not.

use serde_json::Value;
use tracing::warn;

use super::{CharacterRelationshipData, Relationship, RelationshipType};
use crate::characters::CharacterId;

/// Shape violations that reject a relationship record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("record root is not an object")]
    NotAnObject,

    #[error("field `{0}` is missing or not a string")]
    BadStringField(&'static str),

    #[error("field `relationships` is missing or not an array")]
    BadRelationshipsField,

    #[error("relationship #{index} is not an object")]
    EntryNotAnObject { index: usize },

    #[error("relationship #{index}: field `{field}` is missing or not a string")]
    EntryBadStringField { index: usize, field: &'static str },
}

/// Validate a raw relationship record against the file schema.
///
/// Succeeds only if the root is an object with a string `characterId` and an
/// array `relationships` whose every element is an object with string
/// `targetId`, `type`, `label`, and `description` fields.
pub fn validate_record(raw: &Value) -> Result<CharacterRelationshipData, RecordError> {
    let root = raw.as_object().ok_or(RecordError::NotAnObject)?;

    let character_id = root
        .get("characterId")
        .and_then(Value::as_str)
        .ok_or(RecordError::BadStringField("characterId"))?;

    let entries = root
        .get("relationships")
        .and_then(Value::as_array)
        .ok_or(RecordError::BadRelationshipsField)?;

    let mut relationships = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let fields = entry
            .as_object()
            .ok_or(RecordError::EntryNotAnObject { index })?;

        let string_field = |field: &'static str| {
            fields
                .get(field)
                .and_then(Value::as_str)
                .ok_or(RecordError::EntryBadStringField { index, field })
        };

        relationships.push(Relationship {
            target_id: CharacterId::from(string_field("targetId")?),
            kind: RelationshipType::from(string_field("type")?.to_string()),
            label: string_field("label")?.to_string(),
            description: string_field("description")?.to_string(),
        });
    }

    Ok(CharacterRelationshipData {
        character_id: CharacterId::from(character_id),
        relationships,
    })
}

/// Parse the relationships out of a raw record, failing closed.
///
/// Returns the full relationship list for a well-formed record. Any shape
/// violation rejects the whole record: the result is empty and a single
/// warning identifies the character and the cause. An absent record should
/// never reach this function - "no relationships declared" is a silent,
/// normal case handled by the caller.
pub fn parse_relationships(raw: &Value, character_id: &str) -> Vec<Relationship> {
    match validate_record(raw) {
        Ok(record) => record.relationships,
        Err(err) => {
            warn!(character_id, %err, "relationship record malformed, ignoring file");
            Vec::new()
        }
    }
}

//! Node and edge definitions for the relationship graph.

use character_data::{CharacterId, RelationshipType};
use serde::{Deserialize, Serialize};

/// Neutral color used for peripheral characters with no directory entry.
pub const PLACEHOLDER_COLOR: &str = "#9e9e9e";

/// A 2-D canvas position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node in the relationship graph.
///
/// `position` is `{0, 0}` until the layout engine has run; node identity is
/// derived from the underlying character id, so two relationships to the
/// same character share one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub character_id: CharacterId,
    pub display_name: String,
    pub color: String,
    pub is_center: bool,
    pub position: Position,
}

impl GraphNode {
    /// The node id for a character.
    pub fn node_id(character_id: &CharacterId) -> String {
        format!("node-{character_id}")
    }
}

/// A directed edge from the center node to a peripheral node.
///
/// Carries the relationship's presentation fields so the renderer never has
/// to reach back into the raw records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: RelationshipType,
    pub description: String,
}

impl GraphEdge {
    /// The edge id for a focal/target character pair.
    pub fn edge_id(focal: &CharacterId, target: &CharacterId) -> String {
        format!("edge-{focal}-{target}")
    }
}

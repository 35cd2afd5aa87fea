//! Star-graph construction from a focal character and its relationships.

use std::collections::{HashMap, HashSet};

use character_data::{CharacterDirectory, CharacterId, CharacterSummary, Relationship};

use super::{GraphEdge, GraphNode, Position, PLACEHOLDER_COLOR};

/// The unpositioned output of a graph build.
///
/// Node order is insertion order: center first, then peripheral nodes in
/// relationship declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Build the star graph around a focal character.
///
/// A focal character with zero relationships produces an empty graph - no
/// center node, nothing to lay out. Otherwise the result holds one center
/// node, one peripheral node per distinct target, and one edge per
/// relationship (multiple relationships to the same character share a node
/// but keep their own edges). Targets missing from the directory get a
/// placeholder display name (the raw id) and a neutral color; the graph
/// never drops a node for missing metadata.
pub fn build_relationship_graph(
    focal: &CharacterSummary,
    relationships: &[Relationship],
    directory: &CharacterDirectory,
) -> RelationshipGraph {
    if relationships.is_empty() {
        return RelationshipGraph::default();
    }

    let mut nodes = Vec::with_capacity(relationships.len() + 1);
    let mut edges = Vec::with_capacity(relationships.len());

    let center_id = GraphNode::node_id(&focal.id);
    nodes.push(GraphNode {
        id: center_id.clone(),
        character_id: focal.id.clone(),
        display_name: focal.display_name.clone(),
        color: focal.color.clone(),
        is_center: true,
        position: Position::default(),
    });

    // Seeded with the focal id so a self-referencing relationship cannot
    // mint a second node with the center's identity.
    let mut seen: HashSet<CharacterId> = HashSet::from([focal.id.clone()]);
    let mut edge_counts: HashMap<String, usize> = HashMap::new();

    for relationship in relationships {
        let target = &relationship.target_id;

        if seen.insert(target.clone()) {
            let node = match directory.get(target) {
                Some(summary) => GraphNode {
                    id: GraphNode::node_id(target),
                    character_id: target.clone(),
                    display_name: summary.display_name.clone(),
                    color: summary.color.clone(),
                    is_center: false,
                    position: Position::default(),
                },
                None => GraphNode {
                    id: GraphNode::node_id(target),
                    character_id: target.clone(),
                    display_name: target.as_str().to_string(),
                    color: PLACEHOLDER_COLOR.to_string(),
                    is_center: false,
                    position: Position::default(),
                },
            };
            nodes.push(node);
        }

        // Repeated relationships to one target keep one edge each; only the
        // id needs disambiguating.
        let base_id = GraphEdge::edge_id(&focal.id, target);
        let occurrence = edge_counts.entry(base_id.clone()).or_insert(0);
        *occurrence += 1;
        let id = if *occurrence == 1 {
            base_id
        } else {
            format!("{base_id}-{occurrence}")
        };

        edges.push(GraphEdge {
            id,
            source_id: center_id.clone(),
            target_id: GraphNode::node_id(target),
            label: relationship.label.clone(),
            kind: relationship.kind.clone(),
            description: relationship.description.clone(),
        });
    }

    RelationshipGraph { nodes, edges }
}

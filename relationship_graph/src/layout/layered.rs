//! Built-in layered layout provider.
//!
//! A deterministic Sugiyama-style pass, sized for the small star graphs this
//! system produces but correct for any acyclic input:
//! 1. Layer assignment: longest path from the sources, via Kahn's algorithm
//! 2. Ordering: input order within each layer (no crossing minimization
//!    needed for a star)
//! 3. Coordinates: each layer's row is centered on the cross axis, layers
//!    advance along the main axis by row extent plus spacing

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;

use crate::graph_model::Position;

use super::{EdgeRef, LayerDirection, LayeredLayoutProvider, LayeredOptions, LayoutError, NodeExtent};

/// Longest-path layered layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestPathLayout;

impl LongestPathLayout {
    fn assign_layers(
        nodes: &[NodeExtent],
        edges: &[EdgeRef],
    ) -> Result<Vec<usize>, LayoutError> {
        let index: HashMap<&str, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.as_str(), i))
            .collect();

        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut in_degree: Vec<usize> = vec![0; nodes.len()];
        for edge in edges {
            let source = *index
                .get(edge.source.as_str())
                .ok_or_else(|| LayoutError::UnknownNode(edge.source.clone()))?;
            let target = *index
                .get(edge.target.as_str())
                .ok_or_else(|| LayoutError::UnknownNode(edge.target.clone()))?;
            outgoing[source].push(target);
            in_degree[target] += 1;
        }

        let mut layers = vec![0usize; nodes.len()];
        let mut queue: VecDeque<usize> = (0..nodes.len()).filter(|&i| in_degree[i] == 0).collect();
        let mut processed = 0usize;
        while let Some(current) = queue.pop_front() {
            processed += 1;
            for &next in &outgoing[current] {
                layers[next] = layers[next].max(layers[current] + 1);
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    queue.push_back(next);
                }
            }
        }
        if processed < nodes.len() {
            return Err(LayoutError::CyclicGraph);
        }

        Ok(layers)
    }
}

#[async_trait]
impl LayeredLayoutProvider for LongestPathLayout {
    async fn compute_positions(
        &self,
        nodes: &[NodeExtent],
        edges: &[EdgeRef],
        options: &LayeredOptions,
    ) -> Result<HashMap<String, Position>, LayoutError> {
        if nodes.is_empty() {
            return Ok(HashMap::new());
        }

        let layers = Self::assign_layers(nodes, edges)?;
        let layer_count = layers.iter().max().copied().unwrap_or(0) + 1;

        // Bucket node indices per layer; iteration in input order keeps the
        // within-layer ordering deterministic.
        let mut rows: Vec<Vec<usize>> = vec![Vec::new(); layer_count];
        for (i, &layer) in layers.iter().enumerate() {
            rows[layer].push(i);
        }

        // Main axis advances layer by layer, cross axis centers each row on
        // zero. For TopDown the main axis is y; for LeftRight it is x.
        let main_extent = |node: &NodeExtent| match options.direction {
            LayerDirection::TopDown => node.size.height,
            LayerDirection::LeftRight => node.size.width,
        };
        let cross_extent = |node: &NodeExtent| match options.direction {
            LayerDirection::TopDown => node.size.width,
            LayerDirection::LeftRight => node.size.height,
        };

        let mut positions = HashMap::with_capacity(nodes.len());
        let mut main_cursor = 0.0f64;
        for row in &rows {
            let row_depth = row
                .iter()
                .map(|&i| main_extent(&nodes[i]))
                .fold(0.0f64, f64::max);
            let row_span: f64 = row.iter().map(|&i| cross_extent(&nodes[i])).sum::<f64>()
                + options.node_spacing * (row.len().saturating_sub(1)) as f64;

            let main = main_cursor + row_depth / 2.0;
            let mut cross_cursor = -row_span / 2.0;
            for &i in row {
                let node = &nodes[i];
                let cross = cross_cursor + cross_extent(node) / 2.0;
                cross_cursor += cross_extent(node) + options.node_spacing;

                let position = match options.direction {
                    LayerDirection::TopDown => Position::new(cross, main),
                    LayerDirection::LeftRight => Position::new(main, cross),
                };
                positions.insert(node.id.clone(), position);
            }

            main_cursor += row_depth + options.layer_spacing;
        }

        Ok(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::NodeSize;

    fn extent(id: &str, width: f64, height: f64) -> NodeExtent {
        NodeExtent {
            id: id.to_string(),
            size: NodeSize::new(width, height),
        }
    }

    fn edge(source: &str, target: &str) -> EdgeRef {
        EdgeRef {
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    fn options() -> LayeredOptions {
        LayeredOptions {
            direction: LayerDirection::TopDown,
            layer_spacing: 120.0,
            node_spacing: 40.0,
        }
    }

    #[tokio::test]
    async fn test_star_layering() {
        let nodes = vec![
            extent("node-aurora", 180.0, 70.0),
            extent("node-silas", 120.0, 50.0),
            extent("node-maren", 120.0, 50.0),
            extent("node-brix", 120.0, 50.0),
        ];
        let edges = vec![
            edge("node-aurora", "node-silas"),
            edge("node-aurora", "node-maren"),
            edge("node-aurora", "node-brix"),
        ];

        let positions = LongestPathLayout
            .compute_positions(&nodes, &edges, &options())
            .await
            .unwrap();

        // Center row: 180 wide, centered on zero; box center at y = 35.
        assert_eq!(positions["node-aurora"], Position::new(0.0, 35.0));
        // Peripheral row spans 3 * 120 + 2 * 40 = 440, starting at y = 190.
        assert_eq!(positions["node-silas"], Position::new(-160.0, 215.0));
        assert_eq!(positions["node-maren"], Position::new(0.0, 215.0));
        assert_eq!(positions["node-brix"], Position::new(160.0, 215.0));
    }

    #[tokio::test]
    async fn test_chain_uses_longest_path() {
        let nodes = vec![
            extent("a", 100.0, 50.0),
            extent("b", 100.0, 50.0),
            extent("c", 100.0, 50.0),
        ];
        // a -> b -> c plus the shortcut a -> c: c must land on layer 2.
        let edges = vec![edge("a", "b"), edge("b", "c"), edge("a", "c")];

        let positions = LongestPathLayout
            .compute_positions(&nodes, &edges, &options())
            .await
            .unwrap();

        assert_eq!(positions["a"].y, 25.0);
        assert_eq!(positions["b"].y, 195.0);
        assert_eq!(positions["c"].y, 365.0);
    }

    #[tokio::test]
    async fn test_left_right_direction_swaps_axes() {
        let nodes = vec![extent("a", 100.0, 50.0), extent("b", 100.0, 50.0)];
        let edges = vec![edge("a", "b")];
        let mut options = options();
        options.direction = LayerDirection::LeftRight;

        let positions = LongestPathLayout
            .compute_positions(&nodes, &edges, &options)
            .await
            .unwrap();

        assert_eq!(positions["a"], Position::new(50.0, 0.0));
        assert_eq!(positions["b"], Position::new(270.0, 0.0));
    }

    #[tokio::test]
    async fn test_unknown_node_rejected() {
        let nodes = vec![extent("a", 100.0, 50.0)];
        let edges = vec![edge("a", "ghost")];

        let err = LongestPathLayout
            .compute_positions(&nodes, &edges, &options())
            .await
            .unwrap_err();
        assert_eq!(err, LayoutError::UnknownNode("ghost".to_string()));
    }

    #[tokio::test]
    async fn test_cycle_rejected() {
        let nodes = vec![extent("a", 100.0, 50.0), extent("b", 100.0, 50.0)];
        let edges = vec![edge("a", "b"), edge("b", "a")];

        let err = LongestPathLayout
            .compute_positions(&nodes, &edges, &options())
            .await
            .unwrap_err();
        assert_eq!(err, LayoutError::CyclicGraph);
    }

    #[tokio::test]
    async fn test_self_edge_is_a_cycle() {
        let nodes = vec![extent("a", 100.0, 50.0)];
        let edges = vec![edge("a", "a")];

        let err = LongestPathLayout
            .compute_positions(&nodes, &edges, &options())
            .await
            .unwrap_err();
        assert_eq!(err, LayoutError::CyclicGraph);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let positions = LongestPathLayout
            .compute_positions(&[], &[], &options())
            .await
            .unwrap();
        assert!(positions.is_empty());
    }
}
